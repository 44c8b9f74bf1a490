//! Host-independent theme and placement logic for the FRUI component library.
//!
//! The crate owns the pieces of FRUI that are pure computation: the floating
//! element geometry resolver shared by tooltips and dropdowns, the ordered
//! class/style accumulator, the theme-prop "tool" family that turns flags into
//! `frui-*` class names, the controlled/uncontrolled value model, and the
//! numeric input formatter. Nothing here touches the DOM; the `frui` crate
//! measures elements and renders markup on top of these contracts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod classes;
pub mod config;
pub mod controlled;
pub mod geometry;
pub mod number;
pub mod overlay;
pub mod props;
pub mod tools;

pub use classes::ClassStyle;
pub use config::{ConfigError, NumberDefaults, ThemeConfig};
pub use controlled::{resolve_controlled, Controlled};
pub use geometry::{
    resolve_position, resolve_position_with, Offset, ParseSideError, Placement, PositionMode,
    Rect, Side, SideFlags, DEFAULT_CLEARANCE,
};
pub use number::NumberFormat;
pub use overlay::float_layout;
pub use props::{Attributes, ThemeProps};
pub use tools::{
    AlignTool, BorderTool, ColorTarget, ColorTool, DisplayTool, FillTool, RadiusTool, SizeTool,
    Tool,
};

/// Convenience imports for component crates composing theme tools.
pub mod prelude {
    pub use crate::{
        float_layout, resolve_controlled, resolve_position, AlignTool, Attributes, BorderTool,
        ClassStyle, ColorTarget, ColorTool, Controlled, DisplayTool, FillTool, NumberFormat,
        Offset, Placement, PositionMode, RadiusTool, Rect, Side, SideFlags, SizeTool,
        ThemeConfig, ThemeProps, Tool,
    };
}
