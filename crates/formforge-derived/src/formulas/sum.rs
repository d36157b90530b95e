use formforge_core::models::FieldValues;

use super::source_text;

/// Numeric total of `sources`, formatted for display.
pub fn calculate(sources: &[String], values: &FieldValues) -> String {
    let total: f64 = sources
        .iter()
        .map(|id| parse_leading_float(&source_text(values, id)).unwrap_or(0.0))
        .sum();
    format_number(total)
}

/// Parse the longest decimal prefix of `raw`, after leading whitespace.
///
/// `"12abc"` reads as 12, `".5"` as 0.5; text with no leading number and
/// non-finite results give `None`.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Shortest round-trip form, as a browser prints numbers: `2`, `2.5`,
/// `0.30000000000000004`, and exponent form (`1e+21`, `1e-7`) outside
/// `1e-6 <= |n| < 1e21`. A total that overflows prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 || !n.is_finite() {
        // Also normalises -0.
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let exponent_form = format!("{n:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponent_form,
    }
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}
