use crate::classes::ClassStyle;
use crate::props::ThemeProps;

use super::{first_set, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named palette colors with a fixed class per target.
pub enum SemanticColor {
    /// Informational.
    Info,
    /// Warning.
    Warning,
    /// Success.
    Success,
    /// Error.
    Error,
    /// Muted.
    Muted,
    /// Primary brand color.
    Primary,
    /// Secondary brand color.
    Secondary,
    /// Tertiary brand color.
    Tertiary,
    /// Black.
    Black,
    /// White.
    White,
}

impl SemanticColor {
    /// Every semantic color, in resolution priority order.
    pub const ALL: [SemanticColor; 10] = [
        Self::Info,
        Self::Warning,
        Self::Success,
        Self::Error,
        Self::Muted,
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Black,
        Self::White,
    ];

    /// Class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
            Self::Muted => "muted",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Highest-priority semantic color set in `props`.
    pub fn from_props(props: &ThemeProps) -> Option<Self> {
        first_set(&[
            (props.info, Self::Info),
            (props.warning, Self::Warning),
            (props.success, Self::Success),
            (props.error, Self::Error),
            (props.muted, Self::Muted),
            (props.primary, Self::Primary),
            (props.secondary, Self::Secondary),
            (props.tertiary, Self::Tertiary),
            (props.black, Self::Black),
            (props.white, Self::White),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// What a color is painted onto.
pub enum ColorTarget {
    /// Text color (`frui-tx-*`, `color`).
    #[default]
    Text,
    /// Background color (`frui-bg-*`, `background-color`).
    Background,
    /// Border color (`frui-bd-*`, `border-color`).
    Border,
}

impl ColorTarget {
    /// Class prefix for this target, including the trailing dash.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Text => "frui-tx-",
            Self::Background => "frui-bg-",
            Self::Border => "frui-bd-",
        }
    }

    /// CSS property set for custom colors.
    pub fn property(self) -> &'static str {
        match self {
            Self::Text => "color",
            Self::Background => "background-color",
            Self::Border => "border-color",
        }
    }

    /// Class name for a semantic color on this target.
    pub fn class(self, color: SemanticColor) -> String {
        format!("{}{}", self.prefix(), color.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A resolved color: semantic names win over custom strings.
pub enum ColorChoice {
    /// Palette color applied as a class.
    Named(SemanticColor),
    /// Arbitrary CSS color applied as an inline style.
    Custom(String),
}

impl ColorChoice {
    /// Resolves the color concern of `props`, if any.
    pub fn from_props(props: &ThemeProps) -> Option<Self> {
        SemanticColor::from_props(props)
            .map(Self::Named)
            .or_else(|| props.color.clone().map(Self::Custom))
    }

    /// Paints this color onto `target`.
    ///
    /// Custom colors never replace a style the caller already set.
    pub fn paint(&self, target: ColorTarget, acc: &mut ClassStyle) {
        match self {
            Self::Named(color) => {
                acc.push(target.class(*color));
            }
            Self::Custom(value) => {
                acc.set_style_default(target.property(), value.clone());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Color concern parameterized by target (`txc`, `bgc`, `bdc`).
pub struct ColorTool {
    target: ColorTarget,
    choice: Option<ColorChoice>,
}

impl ColorTool {
    /// Reads the color keys of `props` for the given target.
    pub fn new(props: &ThemeProps, target: ColorTarget) -> Self {
        Self {
            target,
            choice: ColorChoice::from_props(props),
        }
    }

    /// Text color tool.
    pub fn text(props: &ThemeProps) -> Self {
        Self::new(props, ColorTarget::Text)
    }

    /// Background color tool.
    pub fn background(props: &ThemeProps) -> Self {
        Self::new(props, ColorTarget::Background)
    }

    /// Border color tool.
    pub fn border(props: &ThemeProps) -> Self {
        Self::new(props, ColorTarget::Border)
    }

    /// The resolved color, if any.
    pub fn choice(&self) -> Option<&ColorChoice> {
        self.choice.as_ref()
    }
}

impl Tool for ColorTool {
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle {
        if let Some(choice) = &self.choice {
            choice.paint(self.target, acc);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn semantic_color_wins_over_custom_string() {
        let props = ThemeProps::new().flags("muted info").color("#abcdef");
        let mut acc = ClassStyle::new();
        ColorTool::text(&props).apply(&mut acc);

        assert_eq!(acc.class_name(), "frui-tx-info");
        assert_eq!(acc.style("color"), None);
    }

    #[test]
    fn custom_color_becomes_target_style() {
        let props = ThemeProps::new().color("rebeccapurple");
        let mut acc = ClassStyle::new();
        acc.apply(&ColorTool::background(&props))
            .apply(&ColorTool::border(&props));

        assert!(acc.classes().is_empty());
        assert_eq!(
            acc.style_attr(),
            "background-color: rebeccapurple; border-color: rebeccapurple;"
        );
    }

    #[test]
    fn caller_color_style_survives() {
        let props = ThemeProps::new().color("red").style("color", "blue");
        let mut acc = props.accumulator("frui-text");
        ColorTool::text(&props).apply(&mut acc);
        assert_eq!(acc.style("color"), Some("blue"));
    }

    #[test]
    fn reapplying_adds_the_same_class_again() {
        let props = ThemeProps::new().flag("error");
        let tool = ColorTool::border(&props);
        let mut acc = ClassStyle::new();
        acc.apply(&tool).apply(&tool);
        assert_eq!(acc.class_name(), "frui-bd-error frui-bd-error");
    }

    #[test]
    fn no_color_adds_nothing() {
        let mut acc = ClassStyle::new();
        ColorTool::text(&ThemeProps::new().flags("rounded lg")).apply(&mut acc);
        assert_eq!(acc, ClassStyle::new());
    }
}
