//! Typed theme props and the opaque attribute pass-through bag.

use crate::classes::ClassStyle;

#[derive(Debug, Clone, Default, PartialEq)]
/// Flat visual configuration of a component, rebuilt on every render.
///
/// Each tool reads only the fields of its own concern. Flags of one concern
/// may be set together; the tool picks a single winner by fixed priority.
pub struct ThemeProps {
    /// Semantic `info` color.
    pub info: bool,
    /// Semantic `warning` color.
    pub warning: bool,
    /// Semantic `success` color.
    pub success: bool,
    /// Semantic `error` color.
    pub error: bool,
    /// Semantic `muted` color.
    pub muted: bool,
    /// Semantic `primary` color.
    pub primary: bool,
    /// Semantic `secondary` color.
    pub secondary: bool,
    /// Semantic `tertiary` color.
    pub tertiary: bool,
    /// Semantic `black` color.
    pub black: bool,
    /// Semantic `white` color.
    pub white: bool,
    /// Arbitrary CSS color used when no semantic color is set.
    pub color: Option<String>,

    /// Extra small size.
    pub xs: bool,
    /// Small size.
    pub sm: bool,
    /// Medium size.
    pub md: bool,
    /// Large size.
    pub lg: bool,
    /// Extra large size.
    pub xl: bool,
    /// 2x extra large size.
    pub xl2: bool,
    /// 3x extra large size.
    pub xl3: bool,
    /// 4x extra large size.
    pub xl4: bool,
    /// 5x extra large size.
    pub xl5: bool,
    /// Custom font size in pixels, used when no size flag is set.
    pub size: Option<f64>,

    /// Slightly curved corners.
    pub curved: bool,
    /// Rounded corners.
    pub rounded: bool,
    /// Fully rounded (pill) corners.
    pub pill: bool,

    /// Solid border style.
    pub solid: bool,
    /// Dashed border style.
    pub dashed: bool,
    /// Dotted border style.
    pub dotted: bool,

    /// Hidden (`display: none`).
    pub hidden: bool,
    /// Block display.
    pub block: bool,
    /// Flex display.
    pub flex: bool,
    /// Inline flex display.
    pub inline_flex: bool,
    /// Inline block display.
    pub inline_block: bool,
    /// Inline display.
    pub inline: bool,

    /// Left text alignment.
    pub left: bool,
    /// Centered text alignment.
    pub center: bool,
    /// Right text alignment.
    pub right: bool,
    /// Justified text alignment.
    pub justify: bool,

    /// Solid fill: color as background, white text.
    pub fill: bool,
    /// Outline: color as border and text, visible border guaranteed.
    pub outline: bool,

    /// Caller-supplied inline styles; these win over every tool default.
    pub style: Vec<(String, String)>,
}

impl ThemeProps {
    /// Empty prop bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a flag by its prop name (`"rounded"`, `"inline-block"`, `"xl2"`, ...).
    ///
    /// Unknown names are ignored.
    pub fn flag(mut self, name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        let slot = match normalized.as_str() {
            "info" => &mut self.info,
            "warning" => &mut self.warning,
            "success" => &mut self.success,
            "error" => &mut self.error,
            "muted" => &mut self.muted,
            "primary" => &mut self.primary,
            "secondary" => &mut self.secondary,
            "tertiary" => &mut self.tertiary,
            "black" => &mut self.black,
            "white" => &mut self.white,
            "xs" => &mut self.xs,
            "sm" => &mut self.sm,
            "md" => &mut self.md,
            "lg" => &mut self.lg,
            "xl" => &mut self.xl,
            "xl2" => &mut self.xl2,
            "xl3" => &mut self.xl3,
            "xl4" => &mut self.xl4,
            "xl5" => &mut self.xl5,
            "curved" => &mut self.curved,
            "rounded" => &mut self.rounded,
            "pill" => &mut self.pill,
            "solid" => &mut self.solid,
            "dashed" => &mut self.dashed,
            "dotted" => &mut self.dotted,
            "hidden" => &mut self.hidden,
            "block" => &mut self.block,
            "flex" => &mut self.flex,
            "inline_flex" => &mut self.inline_flex,
            "inline_block" => &mut self.inline_block,
            "inline" => &mut self.inline,
            "left" => &mut self.left,
            "center" => &mut self.center,
            "right" => &mut self.right,
            "justify" => &mut self.justify,
            "fill" => &mut self.fill,
            "outline" => &mut self.outline,
            _ => return self,
        };
        *slot = true;
        self
    }

    /// Sets every flag named in a whitespace-separated list.
    pub fn flags(self, names: &str) -> Self {
        names.split_whitespace().fold(self, Self::flag)
    }

    /// Sets the custom color string.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.color = (!color.trim().is_empty()).then_some(color);
        self
    }

    /// Sets the custom pixel size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size.is_finite().then_some(size);
        self
    }

    /// Adds a caller inline style.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// Adds every declaration of a `prop: value; ...` style attribute string.
    ///
    /// Malformed declarations are skipped.
    pub fn inline_style(mut self, raw: &str) -> Self {
        for declaration in raw.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                let property = property.trim();
                let value = value.trim();
                if !property.is_empty() && !value.is_empty() {
                    self.style
                        .push((property.to_ascii_lowercase(), value.to_string()));
                }
            }
        }
        self
    }

    /// Starts an accumulator holding `base` and the caller's inline styles.
    pub fn accumulator(&self, base: &str) -> ClassStyle {
        ClassStyle::with_class(base).with_styles(self.style.iter().cloned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Opaque attributes forwarded verbatim to the rendered element.
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    /// Builder form of [`Attributes::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Attribute value, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
