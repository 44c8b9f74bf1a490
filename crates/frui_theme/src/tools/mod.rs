//! Theme-prop tools: one stateless transformer per visual concern.
//!
//! Every tool is built from a [`ThemeProps`](crate::ThemeProps) bag, reads only
//! the keys of its concern and appends at most one `frui-<concern>-<variant>`
//! class (or a default inline style) to a [`ClassStyle`]. Applying the same
//! tool twice appends the same class twice.

use crate::classes::ClassStyle;

mod align;
mod border;
mod color;
mod display;
mod fill;
mod radius;
mod size;

pub use align::{AlignTool, TextAlign};
pub use border::{BorderStyle, BorderTool};
pub use color::{ColorChoice, ColorTarget, ColorTool, SemanticColor};
pub use display::{Display, DisplayTool};
pub use fill::{FillMode, FillTool};
pub use radius::{Radius, RadiusTool};
pub use size::{Size, SizeChoice, SizeTool};

/// A single visual concern that contributes classes and styles.
pub trait Tool {
    /// Adds this concern's classes/styles and returns the accumulator.
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle;
}

/// First value whose flag is set, in declaration order.
pub(crate) fn first_set<T: Copy>(choices: &[(bool, T)]) -> Option<T> {
    choices
        .iter()
        .find(|(set, _)| *set)
        .map(|(_, value)| *value)
}
