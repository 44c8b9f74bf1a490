use crate::classes::ClassStyle;
use crate::props::ThemeProps;

use super::{first_set, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Size scale tokens.
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
    /// 2x extra large.
    Xl2,
    /// 3x extra large.
    Xl3,
    /// 4x extra large.
    Xl4,
    /// 5x extra large.
    Xl5,
}

impl Size {
    /// Class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "xl2",
            Self::Xl3 => "xl3",
            Self::Xl4 => "xl4",
            Self::Xl5 => "xl5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Resolved size: a scale token or a custom pixel size.
pub enum SizeChoice {
    /// Scale token applied as a class.
    Scale(Size),
    /// Custom `font-size` in pixels.
    Pixels(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Size concern (`frui-size-*`).
pub struct SizeTool {
    choice: Option<SizeChoice>,
}

impl SizeTool {
    /// Reads the size keys of `props`.
    pub fn new(props: &ThemeProps) -> Self {
        let scale = first_set(&[
            (props.xs, Size::Xs),
            (props.sm, Size::Sm),
            (props.md, Size::Md),
            (props.lg, Size::Lg),
            (props.xl, Size::Xl),
            (props.xl2, Size::Xl2),
            (props.xl3, Size::Xl3),
            (props.xl4, Size::Xl4),
            (props.xl5, Size::Xl5),
        ]);
        let choice = scale
            .map(SizeChoice::Scale)
            .or_else(|| props.size.map(SizeChoice::Pixels));
        Self { choice }
    }

    /// The resolved size, if any.
    pub fn choice(&self) -> Option<SizeChoice> {
        self.choice
    }
}

impl Tool for SizeTool {
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle {
        match self.choice {
            Some(SizeChoice::Scale(size)) => {
                acc.push(format!("frui-size-{}", size.token()));
            }
            Some(SizeChoice::Pixels(px)) => {
                acc.set_style_default("font-size", format!("{px}px"));
            }
            None => {}
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn smallest_declared_flag_wins() {
        let mut acc = ClassStyle::new();
        SizeTool::new(&ThemeProps::new().flags("xl3 lg sm")).apply(&mut acc);
        assert_eq!(acc.classes(), ["frui-size-sm".to_string()]);
    }

    #[test]
    fn custom_pixels_only_apply_without_a_flag() {
        let mut acc = ClassStyle::new();
        SizeTool::new(&ThemeProps::new().size(13.0)).apply(&mut acc);
        assert_eq!(acc.style("font-size"), Some("13px"));

        let mut acc = ClassStyle::new();
        SizeTool::new(&ThemeProps::new().size(13.0).flag("xl")).apply(&mut acc);
        assert_eq!(acc.class_name(), "frui-size-xl");
        assert_eq!(acc.style("font-size"), None);
    }

    #[test]
    fn explicit_font_size_survives() {
        let props = ThemeProps::new().size(20.0).style("font-size", "1rem");
        let mut acc = props.accumulator("frui-text");
        SizeTool::new(&props).apply(&mut acc);
        assert_eq!(acc.style("font-size"), Some("1rem"));
    }
}
