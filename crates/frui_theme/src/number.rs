//! Numeric input formatting: thousand separators, decimal places and bounds.
//!
//! Input is never rejected. Each keystroke is sanitized character by
//! character; bounds are enforced when the field commits (blur or step).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Formatting rules for a number field.
pub struct NumberFormat {
    /// Thousands separator; `None` disables grouping.
    pub separator: Option<char>,
    /// Decimal mark used for input and display.
    pub decimal: char,
    /// Maximum fractional digits; `None` leaves them unbounded.
    pub decimals: Option<usize>,
    /// Lower bound applied on commit.
    pub min: Option<f64>,
    /// Upper bound applied on commit.
    pub max: Option<f64>,
    /// Disallow negative numbers.
    pub absolute: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            separator: Some(','),
            decimal: '.',
            decimals: None,
            min: None,
            max: None,
            absolute: false,
        }
    }
}

impl NumberFormat {
    /// Reduces raw input to canonical form: optional `-`, digits, optional
    /// `.` and fractional digits.
    pub fn sanitize(&self, raw: &str) -> String {
        self.canonical(raw, self.decimal)
    }

    /// Sanitizes and renders with grouping and the configured decimal mark.
    ///
    /// Partial input such as `-` or `12.` is preserved so typing can continue.
    pub fn format(&self, raw: &str) -> String {
        self.display(&self.sanitize(raw))
    }

    /// Parses input to a number, if it contains one.
    pub fn parse(&self, raw: &str) -> Option<f64> {
        self.sanitize(raw)
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Applies bounds and renders the committed value.
    ///
    /// Input without a number becomes an empty string.
    pub fn clamp(&self, raw: &str) -> String {
        match self.parse(raw) {
            Some(value) => self.format_value(value),
            None => String::new(),
        }
    }

    /// Adds `delta` to the current value (empty counts as zero) and commits.
    pub fn step(&self, raw: &str, delta: f64) -> String {
        let current = self.parse(raw).unwrap_or(0.0);
        self.format_value(current + delta)
    }

    /// Clamps a value to the bounds and renders it.
    pub fn format_value(&self, value: f64) -> String {
        let value = self.bound(value);
        let canonical = match self.decimals {
            Some(places) => format!("{value:.places$}"),
            None => format!("{value}"),
        };
        self.display(&self.canonical(&canonical, '.'))
    }

    fn bound(&self, value: f64) -> f64 {
        let mut value = if self.absolute { value.abs() } else { value };
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        if value == 0.0 {
            0.0
        } else {
            value
        }
    }

    fn canonical(&self, raw: &str, decimal_mark: char) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut seen_decimal = false;
        let mut fraction_digits = 0usize;
        let allow_decimal = self.decimals != Some(0);

        for ch in raw.chars() {
            if ch.is_ascii_digit() {
                if seen_decimal {
                    if self.decimals.is_some_and(|places| fraction_digits >= places) {
                        continue;
                    }
                    fraction_digits += 1;
                }
                out.push(ch);
            } else if ch == decimal_mark && !seen_decimal {
                seen_decimal = true;
                if allow_decimal {
                    out.push('.');
                }
            } else if ch == '-' && out.is_empty() && !seen_decimal && !self.absolute {
                out.push('-');
            }
        }
        out
    }

    fn display(&self, canonical: &str) -> String {
        let (sign, unsigned) = match canonical.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", canonical),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::from(sign);
        out.push_str(&self.group(integer));
        if let Some(fraction) = fraction {
            out.push(self.decimal);
            out.push_str(fraction);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let Some(separator) = self.separator else {
            return digits.to_string();
        };
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (len - index) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }
        out
    }
}
