//! Themed overlay, navigation, data-display, and field components.

use frui_theme::prelude::*;
use leptos::html::ElementDescriptor;
use leptos::*;

use crate::ControlledState;

mod button;
mod card;
mod dialog;
mod dropdown;
mod number_field;
mod rating;
mod table;
mod tabs;
mod tooltip;

pub use button::{Badge, Button};
pub use card::{Card, CardBody, CardHeader};
pub use dialog::Dialog;
pub use dropdown::{Dropdown, DropdownItem};
pub use number_field::NumberField;
pub use rating::Rating;
pub use table::{Table, TableCell, TableHead, TableRow};
pub use tabs::{TabButton, TabList, TabPanel, Tabs};
pub use tooltip::Tooltip;

pub(crate) fn merge_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn open_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Runs the full tool chain over `theme` for a component rooted at `base`.
///
/// Order matters: the text color lands before fill so that `fill` can replace
/// it with `frui-tx-white`.
pub(crate) fn theme_classes(
    base: &str,
    theme: &ThemeProps,
    layout_class: Option<&'static str>,
) -> ClassStyle {
    let mut acc = theme.accumulator(base);
    if let Some(layout_class) = layout_class {
        acc.push_all(layout_class);
    }
    acc.apply(&DisplayTool::new(theme))
        .apply(&SizeTool::new(theme))
        .apply(&RadiusTool::new(theme))
        .apply(&BorderTool::new(theme))
        .apply(&AlignTool::new(theme))
        .apply(&ColorTool::text(theme))
        .apply(&FillTool::new(theme));
    acc
}

pub(crate) fn rect_of(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.left(), rect.width(), rect.height())
}

pub(crate) fn forward_attributes<El>(element: HtmlElement<El>, attributes: &Attributes) -> HtmlElement<El>
where
    El: ElementDescriptor + 'static,
{
    attributes.iter().fold(element, |element, (name, value)| {
        element.attr(name.to_string(), value.to_string())
    })
}

/// Falls back to the default configuration when `config` is inconsistent.
pub(crate) fn checked_config(config: ThemeConfig) -> ThemeConfig {
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            logging::warn!("ignoring invalid theme config: {err}");
            ThemeConfig::default()
        }
    }
}

/// Open state for an overlay: the caller's handle or a fresh uncontrolled one.
pub(crate) fn open_state(state: Option<ControlledState<bool>>) -> ControlledState<bool> {
    state.unwrap_or_else(|| ControlledState::new(false))
}
