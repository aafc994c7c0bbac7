//! Permissive numeric input parsing.
//!
//! Form inputs arrive as free text such as `" 15,000 "` or `"1_000"`.
//! Parsing strips grouping characters and whitespace and falls back to a
//! caller-supplied default when the text is not a finite number, so the
//! calculator always receives a usable value.

/// Characters ignored anywhere in numeric input.
const IGNORED: &[char] = &[',', '_', ' ', '\u{a0}', '\u{202f}', '\''];

/// Parse `text` as a number, returning `default` when it cannot be parsed.
///
/// Empty text, non-numeric text, `inf` and `NaN` all fall back to `default`.
///
/// # Examples
///
/// ```rust
/// use gemcalc::input::parse_number;
///
/// assert_eq!(parse_number(" 15,000 ", 0.0), 15000.0);
/// assert_eq!(parse_number("1_234.5", 0.0), 1234.5);
/// assert_eq!(parse_number("lots", 300.0), 300.0);
/// assert_eq!(parse_number("", 7.0), 7.0);
/// ```
pub fn parse_number(text: &str, default: f64) -> f64 {
    let cleaned: String = text.trim().chars().filter(|c| !IGNORED.contains(c)).collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !text.trim().is_empty() {
                tracing::debug!(input = text, default, "unparsable number, using default");
            }
            default
        }
    }
}

/// Parse a percentage such as `"1.5"` or `"1.5%"` into a fraction (`0.015`).
///
/// `default` is a fraction too and is returned unchanged on bad input.
///
/// # Examples
///
/// ```rust
/// use gemcalc::input::parse_percent;
///
/// assert!((parse_percent("0.7%", 0.01) - 0.007).abs() < 1e-12);
/// assert_eq!(parse_percent("?", 0.01), 0.01);
/// ```
pub fn parse_percent(text: &str, default: f64) -> f64 {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let percent = parse_number(trimmed, f64::NAN);
    if percent.is_nan() {
        default
    } else {
        percent / 100.0
    }
}
