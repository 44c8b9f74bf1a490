use crate::classes::ClassStyle;
use crate::geometry::Side;
use crate::props::ThemeProps;

use super::{first_set, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Border line styles.
pub enum BorderStyle {
    /// Solid line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
}

impl BorderStyle {
    /// Every style with an all-sides class.
    pub const ALL: [BorderStyle; 3] = [Self::Solid, Self::Dashed, Self::Dotted];

    /// Class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }

    /// All-sides class (`frui-bds-solid`).
    pub fn class(self) -> String {
        format!("frui-bds-{}", self.token())
    }

    /// Single-side class (`frui-bds-top-solid`).
    pub fn side_class(self, side: Side) -> String {
        format!("frui-bds-{}-{}", side.token(), self.token())
    }
}

/// Single-side width class (`frui-bdw-left-1`).
pub(crate) fn width_class(side: Side, width: u8) -> String {
    format!("frui-bdw-{}-{width}", side.token())
}

/// Whether `side` already has a border style from styles or classes.
///
/// Checks a fixed list: the `border`, `border-style`, `border-<side>` and
/// `border-<side>-style` properties, any `frui-bds-<side>-*` class and the
/// all-sides `frui-bds-<style>` classes.
pub(crate) fn has_border_style(acc: &ClassStyle, side: Side) -> bool {
    let side = side.token();
    let styled = ["border".to_string(), "border-style".to_string()]
        .into_iter()
        .chain([format!("border-{side}"), format!("border-{side}-style")])
        .any(|property| acc.has_style(&property));
    styled
        || acc.has_prefix(&format!("frui-bds-{side}-"))
        || BorderStyle::ALL
            .iter()
            .any(|style| acc.contains(&style.class()))
}

/// Whether `side` already has a border width from styles or classes.
///
/// Checks a fixed list: the `border`, `border-width`, `border-<side>` and
/// `border-<side>-width` properties, any `frui-bdw-<side>-*` class and the
/// all-sides `frui-bdw-<n>` classes.
pub(crate) fn has_border_width(acc: &ClassStyle, side: Side) -> bool {
    let side = side.token();
    let styled = ["border".to_string(), "border-width".to_string()]
        .into_iter()
        .chain([format!("border-{side}"), format!("border-{side}-width")])
        .any(|property| acc.has_style(&property));
    styled
        || acc.has_prefix(&format!("frui-bdw-{side}-"))
        || acc.classes().iter().any(|class| {
            class
                .strip_prefix("frui-bdw-")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|first| first.is_ascii_digit())
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Border style concern (`frui-bds-*`); `solid > dashed > dotted`.
pub struct BorderTool {
    style: Option<BorderStyle>,
}

impl BorderTool {
    /// Reads the border style keys of `props`.
    pub fn new(props: &ThemeProps) -> Self {
        Self {
            style: first_set(&[
                (props.solid, BorderStyle::Solid),
                (props.dashed, BorderStyle::Dashed),
                (props.dotted, BorderStyle::Dotted),
            ]),
        }
    }
}

impl Tool for BorderTool {
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle {
        if let Some(style) = self.style {
            if !acc.has_style("border-style") {
                acc.push(style.class());
            }
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn solid_beats_dashed_and_dotted() {
        let mut acc = ClassStyle::new();
        BorderTool::new(&ThemeProps::new().flags("dotted dashed solid")).apply(&mut acc);
        assert_eq!(acc.class_name(), "frui-bds-solid");
    }

    #[test]
    fn explicit_border_style_suppresses_the_class() {
        let props = ThemeProps::new().flag("dashed").style("border-style", "groove");
        let mut acc = props.accumulator("frui-card");
        BorderTool::new(&props).apply(&mut acc);
        assert_eq!(acc.class_name(), "frui-card");
        assert_eq!(acc.style("border-style"), Some("groove"));
    }

    #[test]
    fn detection_covers_shorthands_side_properties_and_classes() {
        let acc = ClassStyle::new().with_styles([("border-left-style", "dashed")]);
        assert!(has_border_style(&acc, Side::Left));
        assert!(!has_border_style(&acc, Side::Right));

        let acc = ClassStyle::new().with_styles([("border", "1px solid red")]);
        assert!(Side::ALL.iter().all(|side| has_border_style(&acc, *side)));
        assert!(Side::ALL.iter().all(|side| has_border_width(&acc, *side)));

        let acc = ClassStyle::with_class("frui-bdw-2");
        assert!(has_border_width(&acc, Side::Bottom));
        assert!(!has_border_style(&acc, Side::Bottom));

        let acc = ClassStyle::with_class("frui-bdw-top-3");
        assert!(has_border_width(&acc, Side::Top));
        assert!(!has_border_width(&acc, Side::Left));
    }
}
