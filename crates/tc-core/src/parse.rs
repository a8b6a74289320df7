//! Lenient coercion of user-typed numbers.
//!
//! Malformed input never fails: it becomes `0`. Matrix cells and dimensions
//! typed into a front end go through these before reaching the matrix store.

use crate::Real;

/// Parse a cell value the way a browser `parseFloat` reads a number field.
///
/// Leading whitespace is skipped and the longest numeric prefix is used
/// (`"1.5x"` reads as `1.5`). No numeric prefix, or a non-finite result,
/// yields `0`.
pub fn parse_lenient(raw: &str) -> Real {
    let s = raw.trim_start();
    let end = float_prefix_len(s);
    s[..end]
        .parse::<Real>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a matrix dimension the way `parseInt(..) || 0` would, clamped at 0.
///
/// Negative, empty, non-numeric and overflowing input all yield `0`.
pub fn parse_dimension(raw: &str) -> usize {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            i = 1;
            true
        }
        Some(b'+') => {
            i = 1;
            false
        }
        _ => false,
    };
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if negative || i == digits_start {
        return 0;
    }
    s[digits_start..i].parse::<usize>().unwrap_or(0)
}

/// Length of the longest prefix of `s` matching `[+-]? digits [. digits] [e [+-] digits]`.
fn float_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }
    // Exponent only counts when followed by at least one digit.
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
