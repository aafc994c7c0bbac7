//! Display formatting for prices and other results.

use serde::{Deserialize, Serialize};

/// How numbers are rendered for display.
///
/// # Examples
///
/// ```rust
/// use gemcalc::DisplayFormat;
///
/// let format = DisplayFormat::default();
/// assert_eq!(format.currency(1234567.4), "1,234,567円");
/// assert_eq!(format.decimal(1234.5678, 2), "1,234.57");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Appended to every currency amount.
    pub currency_suffix: String,

    /// Placed between groups of three integer digits.
    pub grouping_separator: char,

    pub decimal_separator: char,

    /// Fraction digits used by [`DisplayFormat::number`].
    pub decimals: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency_suffix: "円".to_string(),
            grouping_separator: ',',
            decimal_separator: '.',
            decimals: 2,
        }
    }
}

impl DisplayFormat {
    /// A currency amount, rounded to whole units, grouped, with the suffix.
    pub fn currency(&self, amount: f64) -> String {
        format!("{}{}", self.decimal(amount, 0), self.currency_suffix)
    }

    /// A number with the configured count of fraction digits.
    pub fn number(&self, value: f64) -> String {
        self.decimal(value, self.decimals)
    }

    /// A number with `digits` fraction digits and grouped integer part.
    pub fn decimal(&self, value: f64, digits: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let plain = format!("{:.*}", digits, value.abs());
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (plain.as_str(), None),
        };

        let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
        // No sign when the value rounds to zero.
        if value < 0.0 && plain.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.grouping_separator));
        if let Some(frac_part) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", ','), "123,456");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_currency() {
        let format = DisplayFormat::default();
        assert_eq!(format.currency(0.0), "0円");
        assert_eq!(format.currency(15000.0), "15,000円");
        assert_eq!(format.currency(-4500.0), "-4,500円");
    }

    #[test]
    fn test_european_separators() {
        let format = DisplayFormat {
            currency_suffix: " €".to_string(),
            grouping_separator: '.',
            decimal_separator: ',',
            decimals: 1,
        };
        assert_eq!(format.number(12345.67), "12.345,7");
        assert_eq!(format.currency(12345.67), "12.346 €");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        let format = DisplayFormat::default();
        assert_eq!(format.decimal(-0.001, 2), "0.00");
    }

    #[test]
    fn test_non_finite() {
        let format = DisplayFormat::default();
        assert_eq!(format.number(f64::NAN), "NaN");
    }
}
