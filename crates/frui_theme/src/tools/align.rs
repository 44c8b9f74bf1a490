use crate::classes::ClassStyle;
use crate::props::ThemeProps;

use super::{first_set, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Text alignment variants.
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
    /// Justified.
    Justify,
}

impl TextAlign {
    /// Class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text alignment concern (`frui-align-*`).
pub struct AlignTool {
    align: Option<TextAlign>,
}

impl AlignTool {
    /// Reads the alignment keys of `props`.
    pub fn new(props: &ThemeProps) -> Self {
        Self {
            align: first_set(&[
                (props.left, TextAlign::Left),
                (props.center, TextAlign::Center),
                (props.right, TextAlign::Right),
                (props.justify, TextAlign::Justify),
            ]),
        }
    }
}

impl Tool for AlignTool {
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle {
        if let Some(align) = self.align {
            acc.push(format!("frui-align-{}", align.token()));
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_beats_center_and_right() {
        let mut acc = ClassStyle::new();
        AlignTool::new(&ThemeProps::new().flags("right center left")).apply(&mut acc);
        assert_eq!(acc.class_name(), "frui-align-left");
    }
}
