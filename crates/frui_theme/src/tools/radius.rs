use crate::classes::ClassStyle;
use crate::props::ThemeProps;

use super::{first_set, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Corner radius variants.
pub enum Radius {
    /// Slight curve.
    Curved,
    /// Rounded.
    Rounded,
    /// Pill.
    Pill,
}

impl Radius {
    /// Class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Curved => "curved",
            Self::Rounded => "rounded",
            Self::Pill => "pill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Border radius concern (`frui-radius-*`); `curved > rounded > pill`.
pub struct RadiusTool {
    radius: Option<Radius>,
}

impl RadiusTool {
    /// Reads the radius keys of `props`.
    pub fn new(props: &ThemeProps) -> Self {
        Self {
            radius: first_set(&[
                (props.curved, Radius::Curved),
                (props.rounded, Radius::Rounded),
                (props.pill, Radius::Pill),
            ]),
        }
    }
}

impl Tool for RadiusTool {
    fn apply<'a>(&self, acc: &'a mut ClassStyle) -> &'a mut ClassStyle {
        if let Some(radius) = self.radius {
            acc.push(format!("frui-radius-{}", radius.token()));
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn classes(flags: &str) -> Vec<String> {
        let mut acc = ClassStyle::new();
        RadiusTool::new(&ThemeProps::new().flags(flags)).apply(&mut acc);
        acc.classes().to_vec()
    }

    #[test]
    fn exactly_one_radius_class_by_priority() {
        assert_eq!(classes("pill rounded curved"), vec!["frui-radius-curved"]);
        assert_eq!(classes("pill rounded"), vec!["frui-radius-rounded"]);
        assert_eq!(classes("pill"), vec!["frui-radius-pill"]);
        assert!(classes("").is_empty());
    }
}
