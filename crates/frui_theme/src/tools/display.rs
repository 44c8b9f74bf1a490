use crate::classes::ClassStyle;
use crate::props::ThemeProps;

use super::{first_set, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// CSS display variants.
pub enum Display {
    /// `display: none`.
    None,
    /// `display: block`.
    Block,
    /// `display: flex`.
    Flex,
    /// `display: inline-flex`.
    InlineFlex,
    /// `display: inline-block`.
    InlineBlock,
    /// `display: inline`.
    Inline,
}

impl Display {
    /// Class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
            Self::InlineFlex => "inline-flex",
            Self::InlineBlock => "inline-block",
            Self::Inline => "inline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display concern (`frui-display-*`). `hidden` beats every other flag.
pub struct DisplayTool {
    display: Option<Display>,
}

impl DisplayTool {
    /// Reads the display keys of `props`.
    pub fn new(props: &ThemeProps) -> Self {
        Self {
            display: first_set(&[
                (props.hidden, Display::None),
                (props.block, Display::Block),
                (props.flex, Display::Flex),
                (props.inline_flex, Display::InlineFlex),
                (props.inline_block, Display::InlineBlock),
                (props.inline, Display::Inline),
            ]),
        }
    }
}

impl Tool for DisplayTool {
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle {
        if let Some(display) = self.display {
            acc.push(format!("frui-display-{}", display.token()));
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hidden_wins_and_only_one_class_is_emitted() {
        let mut acc = ClassStyle::new();
        DisplayTool::new(&ThemeProps::new().flags("inline flex hidden")).apply(&mut acc);
        assert_eq!(acc.class_name(), "frui-display-none");
    }

    #[test]
    fn inline_block_beats_inline() {
        let mut acc = ClassStyle::new();
        DisplayTool::new(&ThemeProps::new().flags("inline inline-block")).apply(&mut acc);
        assert_eq!(acc.class_name(), "frui-display-inline-block");
    }

    #[test]
    fn display_tool_ignores_other_concerns() {
        let mut acc = ClassStyle::new();
        DisplayTool::new(&ThemeProps::new().flags("info rounded xl fill")).apply(&mut acc);
        assert!(acc.classes().is_empty());
    }
}
