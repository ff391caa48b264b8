//! Parse-or-fail numeric input.

use serde::{Serialize, Serializer};
use std::fmt;

/// A decimal parsed from form text.
///
/// Parsing never blocks a submission: text that is not a finite decimal
/// becomes [`NumberInput::Invalid`] and is still sent to the backend, which
/// owns validation. On the wire `Invalid` is JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    /// A finite decimal value.
    Valid(f64),
    /// Text that did not parse to a finite decimal.
    Invalid,
}

impl NumberInput {
    /// Parses form text, trimming surrounding whitespace.
    ///
    /// Only the leading decimal is read, so `"12kg"` parses as 12. Text with
    /// no leading digits is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use trapline_core::NumberInput;
    ///
    /// assert_eq!(NumberInput::parse(" 12.5 "), NumberInput::Valid(12.5));
    /// assert_eq!(NumberInput::parse("12kg"), NumberInput::Valid(12.0));
    /// assert_eq!(NumberInput::parse("twelve"), NumberInput::Invalid);
    /// ```
    pub fn parse(text: &str) -> Self {
        match leading_decimal(text.trim()).parse::<f64>() {
            Ok(value) if value.is_finite() => NumberInput::Valid(value),
            _ => NumberInput::Invalid,
        }
    }

    /// Returns the value when valid.
    pub fn value(&self) -> Option<f64> {
        match self {
            NumberInput::Valid(value) => Some(*value),
            NumberInput::Invalid => None,
        }
    }

    /// Returns `true` if the text parsed to a finite decimal.
    pub fn is_valid(&self) -> bool {
        matches!(self, NumberInput::Valid(_))
    }
}

/// The longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`.
///
/// Empty when the mantissa has no digit.
fn leading_decimal(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    &text[..end]
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            NumberInput::Valid(value)
        } else {
            NumberInput::Invalid
        }
    }
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberInput::Valid(value) => write!(f, "{value}"),
            NumberInput::Invalid => f.write_str("NaN"),
        }
    }
}

impl Serialize for NumberInput {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NumberInput::Valid(value) => serializer.serialize_f64(*value),
            NumberInput::Invalid => serializer.serialize_none(),
        }
    }
}
