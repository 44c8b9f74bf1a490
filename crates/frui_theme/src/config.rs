//! Library-wide defaults that components read when a prop is not given.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Side, DEFAULT_CLEARANCE};
use crate::number::NumberFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Component defaults, loadable from JSON.
pub struct ThemeConfig {
    /// Gap between an anchor and an arrowed overlay, in pixels.
    pub clearance: f64,
    /// Side used by overlays when the caller sets no side flag.
    pub default_side: Side,
    /// Hover delay before a tooltip opens.
    pub tooltip_delay_ms: u32,
    /// Number field separators.
    pub number: NumberDefaults,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            clearance: DEFAULT_CLEARANCE,
            default_side: Side::Top,
            tooltip_delay_ms: 0,
            number: NumberDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Separator defaults for number fields.
pub struct NumberDefaults {
    /// Thousands separator (`None` disables grouping).
    pub separator: Option<char>,
    /// Decimal mark.
    pub decimal: char,
}

impl Default for NumberDefaults {
    fn default() -> Self {
        Self {
            separator: Some(','),
            decimal: '.',
        }
    }
}

impl NumberDefaults {
    /// A [`NumberFormat`] using these separators and no bounds.
    pub fn format(&self) -> NumberFormat {
        NumberFormat {
            separator: self.separator,
            decimal: self.decimal,
            ..NumberFormat::default()
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while loading a [`ThemeConfig`].
pub enum ConfigError {
    /// The payload is not valid JSON for the config shape.
    #[error("invalid theme config: {0}")]
    Json(#[from] serde_json::Error),
    /// Clearance must be a finite, non-negative number of pixels.
    #[error("clearance must be finite and non-negative, got {0}")]
    Clearance(f64),
    /// Separator and decimal mark must differ.
    #[error("number separator and decimal mark are both `{0}`")]
    AmbiguousNumberMarks(char),
}

impl ThemeConfig {
    /// Parses and validates a JSON config; missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, a negative or non-finite
    /// clearance, or identical number separator and decimal marks.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// See [`ThemeConfig::from_json`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.clearance.is_finite() || self.clearance < 0.0 {
            return Err(ConfigError::Clearance(self.clearance));
        }
        if self.number.separator == Some(self.number.decimal) {
            return Err(ConfigError::AmbiguousNumberMarks(self.number.decimal));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(ThemeConfig::from_json("{}").expect("config"), ThemeConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_given_keys() {
        let config = ThemeConfig::from_json(
            r#"{ "clearance": 8, "default_side": "bottom", "number": { "separator": ".", "decimal": "," } }"#,
        )
        .expect("config");

        assert_eq!(config.clearance, 8.0);
        assert_eq!(config.default_side, Side::Bottom);
        assert_eq!(config.tooltip_delay_ms, 0);
        assert_eq!(config.number.format().format("1234,5"), "1.234,5");
    }

    #[test]
    fn negative_clearance_is_rejected() {
        let err = ThemeConfig::from_json(r#"{ "clearance": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Clearance(value) if value == -1.0));
    }

    #[test]
    fn clashing_number_marks_are_rejected() {
        let err = ThemeConfig::from_json(r#"{ "number": { "separator": "." } }"#).unwrap_err();
        assert_eq!(err.to_string(), "number separator and decimal mark are both `.`");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ThemeConfig::from_json("{ clearance: }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
