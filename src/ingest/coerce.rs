//! Best-effort coercion of text cells to numbers.
//!
//! The tolerance policy is asymmetric on purpose: category fields fall back
//! to zero (`to_number_or_zero`), while time-series rates are dropped when
//! coercion fails — zero-filling a rate would fabricate a data point.

/// Coerces a text cell to a number, yielding NaN when it cannot.
///
/// Percent signs and thousands commas are stripped and the remainder is
/// trimmed; an empty remainder is NaN. Parsing is permissive: the longest
/// leading numeric prefix wins, so `"3.2 (est)"` coerces to `3.2`.
pub fn to_number(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|&c| c != '%' && c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return f64::NAN;
    }
    parse_float_prefix(cleaned)
}

/// [`to_number`] over an optional cell; an absent cell is NaN.
pub fn to_number_opt(raw: Option<&str>) -> f64 {
    raw.map_or(f64::NAN, to_number)
}

/// Zero-fallback variant used for category weights and rates.
pub fn to_number_or_zero(raw: &str) -> f64 {
    let value = to_number(raw);
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Parses the longest leading float prefix of `text`, NaN if there is none.
fn parse_float_prefix(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        let mut frac_digits = 0;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            frac_digits += 1;
        }
        if mantissa_digits > 0 || frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }
    // optional exponent, only if at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}
