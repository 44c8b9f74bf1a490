//! Class and style output for floating elements.

use crate::classes::ClassStyle;
use crate::geometry::{resolve_position_with, Placement, PositionMode, Rect, SideFlags};

/// Builds the class list and `left`/`top` styles for a floating element.
///
/// Classes are `base`, `base-<placement>` and, when an arrow is drawn,
/// `base-arrow` plus `base-arrow-<direction>`.
pub fn float_layout(
    base: &str,
    anchor: &Rect,
    floating: &Rect,
    side: SideFlags,
    mode: PositionMode,
    clearance: f64,
) -> ClassStyle {
    let placement = Placement::from_flags(side);
    let offset = resolve_position_with(anchor, floating, side, mode, clearance);

    let mut acc = ClassStyle::with_class(base);
    acc.push(format!("{base}-{}", placement.token()));
    if let Some(direction) = offset.direction {
        acc.push(format!("{base}-arrow"));
        acc.push(format!("{base}-arrow-{}", direction.token()));
    }
    acc.set_style("left", px(offset.x));
    acc.set_style("top", px(offset.y));
    acc
}

fn px(value: f64) -> String {
    // Avoid rendering `-0px` for the zero offset.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::{Side, DEFAULT_CLEARANCE};

    #[test]
    fn tooltip_bottom_left_renders_offset_and_top_arrow() {
        let layout = float_layout(
            "frui-tooltip",
            &Rect::sized(100.0, 20.0),
            &Rect::sized(50.0, 10.0),
            SideFlags::only(Side::Bottom).with(Side::Left),
            PositionMode::Absolute,
            DEFAULT_CLEARANCE,
        );

        assert_eq!(layout.style("left"), Some("0px"));
        assert_eq!(layout.style("top"), Some("25px"));
        assert!(layout.contains("frui-tooltip-arrow-top"));
        assert_eq!(
            layout.class_name(),
            "frui-tooltip frui-tooltip-bottom-left frui-tooltip-arrow frui-tooltip-arrow-top"
        );
    }

    #[test]
    fn relative_dropdown_has_no_arrow_classes() {
        let layout = float_layout(
            "frui-dropdown-menu",
            &Rect::sized(120.0, 30.0),
            &Rect::sized(80.0, 200.0),
            Side::Bottom.into(),
            PositionMode::Relative,
            DEFAULT_CLEARANCE,
        );

        assert_eq!(
            layout.class_name(),
            "frui-dropdown-menu frui-dropdown-menu-bottom"
        );
        assert_eq!(layout.style_attr(), "left: 20px; top: 30px;");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(-2.5), "-2.5px");
    }
}
