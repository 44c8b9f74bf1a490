//! Themeable Leptos components for the FRUI library.
//!
//! Components build their class lists through the `frui_theme` tools and
//! place overlays with its geometry resolver. Every generated class follows the
//! stable `frui-<component>[-<variant>]` contract so applications can theme the
//! library globally from CSS. Compound components (tabs, dropdowns, dialogs)
//! share state through an explicit [`ControlledState`] handle passed as a prop.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod state;

pub use components::{
    Badge, Button, Card, CardBody, CardHeader, Dialog, Dropdown, DropdownItem, NumberField,
    Rating, TabButton, TabList, TabPanel, Table, TableCell, TableHead, TableRow, Tabs, Tooltip,
};
pub use frui_theme;
pub use state::ControlledState;

/// Convenience imports for applications composing FRUI components.
pub mod prelude {
    pub use crate::{
        Badge, Button, Card, CardBody, CardHeader, ControlledState, Dialog, Dropdown,
        DropdownItem, NumberField, Rating, TabButton, TabList, TabPanel, Table, TableCell,
        TableHead, TableRow, Tabs, Tooltip,
    };
    pub use frui_theme::prelude::*;
}
