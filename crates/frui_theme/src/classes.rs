//! Ordered class/style accumulator threaded through theme tools.

use crate::tools::Tool;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Class list and inline style map built up during one render pass.
///
/// Classes keep insertion order and may repeat; deduplication is left to the
/// renderer. Styles keep insertion order too, one value per property.
pub struct ClassStyle {
    classes: Vec<String>,
    styles: Vec<(String, String)>,
}

impl ClassStyle {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator seeded with a base class.
    pub fn with_class(class: impl Into<String>) -> Self {
        let mut acc = Self::new();
        acc.push(class);
        acc
    }

    /// Seeds caller-supplied inline styles. These always win over tool defaults.
    pub fn with_styles<K, V>(mut self, styles: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (property, value) in styles {
            self.set_style(property, value);
        }
        self
    }

    /// Appends a class token.
    pub fn push(&mut self, class: impl Into<String>) -> &mut Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Appends every whitespace-separated token from `classes`.
    pub fn push_all(&mut self, classes: &str) -> &mut Self {
        for class in classes.split_whitespace() {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Whether `class` is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Whether any class starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.classes.iter().any(|existing| existing.starts_with(prefix))
    }

    /// Removes every class matching `predicate`, returning how many were removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&str) -> bool) -> usize {
        let before = self.classes.len();
        self.classes.retain(|class| !predicate(class));
        before - self.classes.len()
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Value of an inline style property, if set.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(existing, _)| existing == property)
            .map(|(_, value)| value.as_str())
    }

    /// Whether an inline style property is set to a non-empty value.
    pub fn has_style(&self, property: &str) -> bool {
        self.style(property).is_some_and(|value| !value.trim().is_empty())
    }

    /// Sets (or replaces) an inline style property.
    ///
    /// Reserved for caller-supplied styles and layout output; tools go through
    /// [`ClassStyle::set_style_default`].
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let property = property.into();
        let value = value.into();
        match self.styles.iter_mut().find(|(existing, _)| *existing == property) {
            Some(slot) => slot.1 = value,
            None => self.styles.push((property, value)),
        }
        self
    }

    /// Sets an inline style only if the property is not already present.
    ///
    /// Returns `true` when the value was written.
    pub fn set_style_default(&mut self, property: &str, value: impl Into<String>) -> bool {
        if self.has_style(property) {
            return false;
        }
        self.set_style(property, value);
        true
    }

    /// Drops an inline style property, returning its value.
    pub fn remove_style(&mut self, property: &str) -> Option<String> {
        let index = self.styles.iter().position(|(existing, _)| existing == property)?;
        Some(self.styles.remove(index).1)
    }

    /// Inline styles in insertion order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Appends `other`'s classes and fills in styles not already set here.
    pub fn merge(&mut self, other: &ClassStyle) -> &mut Self {
        self.classes.extend(other.classes.iter().cloned());
        for (property, value) in &other.styles {
            self.set_style_default(property, value.clone());
        }
        self
    }

    /// Applies a tool and returns the accumulator for chaining.
    pub fn apply(&mut self, tool: &impl Tool) -> &mut Self {
        tool.apply(self)
    }

    /// Space-joined class attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Inline `style` attribute value (`prop: value;` pairs).
    pub fn style_attr(&self) -> String {
        self.styles
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classes_keep_order_and_duplicates() {
        let mut acc = ClassStyle::with_class("frui-card");
        acc.push("frui-radius-rounded").push("frui-card").push("");
        acc.push_all("  app-card   wide ");

        assert_eq!(
            acc.class_name(),
            "frui-card frui-radius-rounded frui-card app-card wide"
        );
    }

    #[test]
    fn style_defaults_never_replace_existing_values() {
        let mut acc = ClassStyle::new().with_styles([("color", "#123456")]);

        assert!(!acc.set_style_default("color", "red"));
        assert!(acc.set_style_default("font-size", "12px"));
        assert_eq!(acc.style("color"), Some("#123456"));
        assert_eq!(acc.style_attr(), "color: #123456; font-size: 12px;");
    }

    #[test]
    fn empty_style_values_count_as_absent() {
        let mut acc = ClassStyle::new().with_styles([("border-width", " ")]);
        assert!(!acc.has_style("border-width"));
        assert!(acc.set_style_default("border-width", "2px"));
        assert_eq!(acc.style("border-width"), Some("2px"));
    }

    #[test]
    fn merge_keeps_existing_styles() {
        let mut themed = ClassStyle::with_class("frui-tx-white").with_styles([("top", "4px")]);
        let mut layout = ClassStyle::with_class("frui-tooltip");
        layout.set_style("left", "0px").set_style("top", "25px");

        themed.merge(&layout);
        assert_eq!(themed.class_name(), "frui-tx-white frui-tooltip");
        assert_eq!(themed.style_attr(), "top: 4px; left: 0px;");
    }

    #[test]
    fn remove_where_reports_removed_count() {
        let mut acc = ClassStyle::new();
        acc.push("frui-tx-info").push("frui-tx-error").push("frui-bg-info");

        assert_eq!(acc.remove_where(|class| class.starts_with("frui-tx-")), 2);
        assert_eq!(acc.classes(), ["frui-bg-info".to_string()]);
        assert!(acc.has_prefix("frui-bg-"));
        assert!(!acc.contains("frui-tx-info"));
    }

    #[test]
    fn remove_style_drops_only_the_named_property() {
        let mut acc = ClassStyle::new().with_styles([("color", "red"), ("top", "1px")]);

        assert_eq!(acc.remove_style("color"), Some("red".to_string()));
        assert_eq!(acc.remove_style("color"), None);
        assert_eq!(acc.style_attr(), "top: 1px;");
    }
}
