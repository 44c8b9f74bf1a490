use crate::classes::ClassStyle;
use crate::geometry::Side;
use crate::props::ThemeProps;

use super::border::{has_border_style, has_border_width, width_class, BorderStyle};
use super::color::{ColorChoice, ColorTarget, SemanticColor};
use super::{first_set, Tool};

const DEFAULT_BORDER_WIDTH: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How a component's color is painted.
pub enum FillMode {
    /// Color as background with white text.
    Fill,
    /// Color as border and text, with a guaranteed visible border.
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fill/outline concern; `fill > outline`.
pub struct FillTool {
    mode: Option<FillMode>,
    color: Option<ColorChoice>,
}

impl FillTool {
    /// Reads the fill keys and the color concern of `props`.
    pub fn new(props: &ThemeProps) -> Self {
        Self {
            mode: first_set(&[
                (props.fill, FillMode::Fill),
                (props.outline, FillMode::Outline),
            ]),
            color: ColorChoice::from_props(props),
        }
    }

    /// The selected mode, if any.
    pub fn mode(&self) -> Option<FillMode> {
        self.mode
    }

    fn apply_fill(&self, acc: &mut ClassStyle) {
        let semantic_text: Vec<String> = SemanticColor::ALL
            .iter()
            .map(|color| ColorTarget::Text.class(*color))
            .collect();
        acc.remove_where(|class| semantic_text.iter().any(|text| text == class));
        acc.push(ColorTarget::Text.class(SemanticColor::White));

        // A text color equal to the fill color would be invisible.
        if let Some(ColorChoice::Custom(value)) = &self.color {
            if acc.style(ColorTarget::Text.property()) == Some(value.as_str()) {
                acc.remove_style(ColorTarget::Text.property());
            }
        }

        if let Some(color) = &self.color {
            color.paint(ColorTarget::Background, acc);
        }
    }

    fn apply_outline(&self, acc: &mut ClassStyle) {
        for side in Side::ALL {
            if !has_border_style(acc, side) {
                acc.push(BorderStyle::Solid.side_class(side));
            }
            if !has_border_width(acc, side) {
                acc.push(width_class(side, DEFAULT_BORDER_WIDTH));
            }
        }

        if let Some(color) = &self.color {
            color.paint(ColorTarget::Border, acc);
            color.paint(ColorTarget::Text, acc);
        }
    }
}

impl Tool for FillTool {
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle {
        match self.mode {
            Some(FillMode::Fill) => self.apply_fill(acc),
            Some(FillMode::Outline) => self.apply_outline(acc),
            None => {}
        }
        acc
    }
}
