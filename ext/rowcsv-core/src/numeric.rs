//! Parsing of field text and the canonical double form written to CSV lines

use std::fmt::{self, Write};

/// Spelling of not-a-number, both when read and when written
pub const NAN_TEXT: &str = "NaN";
/// Spelling of infinity, both when read and when written
pub const INFINITY_TEXT: &str = "Infinity";

/// Parse a field's text form as a double
///
/// Leading and trailing whitespace and control characters (anything up to
/// U+0020) are ignored. Everything else must be an optionally signed
/// decimal literal (digits, optional fraction, optional exponent) or one of
/// the special values `NaN` and `Infinity`, spelled exactly that way.
pub fn parse_field(text: &str) -> Option<f64> {
    let text = text.trim_matches(|c: char| c <= ' ');
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);

    if unsigned == NAN_TEXT {
        return Some(f64::NAN);
    }
    if unsigned == INFINITY_TEXT {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Keeps `inf`, `nan` and friends away from the std grammar
    if unsigned
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return None;
    }

    text.parse::<f64>().ok()
}

/// Append the canonical form of `value` to `out`
///
/// The canonical form is the shortest text that parses back to the same
/// double. Finite values always carry a `.` or an exponent; the special
/// values are written `NaN`, `Infinity` and `-Infinity`.
pub fn write_canonical(out: &mut String, value: f64) {
    if value.is_infinite() {
        write_infinity(out, value.is_sign_negative());
        return;
    }
    // Writing into a String cannot fail
    let _ = write!(out, "{:?}", value);
}

/// Canonical form of `value` as an owned string
pub fn canonical(value: f64) -> String {
    let mut out = String::new();
    write_canonical(&mut out, value);
    out
}

/// Natural text of a float: its `Display` form, with infinities spelled out
pub(crate) fn float_text<F>(value: F) -> String
where
    F: Into<f64> + fmt::Display + Copy,
{
    let wide: f64 = value.into();
    if wide.is_infinite() {
        let mut out = String::new();
        write_infinity(&mut out, wide.is_sign_negative());
        out
    } else {
        value.to_string()
    }
}

fn write_infinity(out: &mut String, negative: bool) {
    if negative {
        out.push('-');
    }
    out.push_str(INFINITY_TEXT);
}
