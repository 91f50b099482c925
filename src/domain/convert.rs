//! Canonical string conversion
//!
//! Every value crosses the command line, ini files and the descriptor in one
//! textual form. Formatting is lossless for the supported types. Parsing is
//! best-effort: a malformed number degrades to its leading numeric prefix,
//! or to zero when there is none. Integers saturate at the `i32` range.
//!
//! Vectors are comma-joined. On input a single trailing empty item is
//! dropped, so `"1,2,3,"` reads as `[1, 2, 3]`.

use std::str::FromStr;

/// A value with a canonical textual form
pub trait Canonical: Sized {
    fn to_canonical(&self) -> String;
    fn from_canonical(s: &str) -> Self;
}

fn sign_len(s: &[u8]) -> usize {
    usize::from(matches!(s.first(), Some(b'+' | b'-')))
}

fn digits_end(s: &[u8], from: usize) -> usize {
    from + s[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses the leading `[+-]digits` of `s`, saturating at the `i32` range
fn leading_integer(s: &str) -> i32 {
    let bytes = s.trim_start().as_bytes();
    let start = sign_len(bytes);
    let magnitude = bytes[start..digits_end(bytes, start)]
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    let value = if bytes.first() == Some(&b'-') {
        -magnitude
    } else {
        magnitude
    };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parses the leading `[+-]digits[.digits][e[+-]digits]` of `s`
///
/// At least one mantissa digit is required, so words such as `inf` or
/// `nan` read as zero.
fn leading_float<T: FromStr + Default>(s: &str) -> T {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let int_start = sign_len(bytes);
    let mut end = digits_end(bytes, int_start);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_end(bytes, end + 1);
        digits += frac_end - end - 1;
        end = frac_end;
    }
    if digits == 0 {
        return T::default();
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1 + sign_len(&bytes[end + 1..]);
        let exp_end = digits_end(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or_default()
}

impl Canonical for bool {
    fn to_canonical(&self) -> String {
        let word = if *self { "true" } else { "false" };
        word.to_string()
    }

    fn from_canonical(s: &str) -> Self {
        match s {
            "true" | "yes" => true,
            "false" | "no" => false,
            other => leading_integer(other) > 0,
        }
    }
}

impl Canonical for i32 {
    fn to_canonical(&self) -> String {
        self.to_string()
    }

    fn from_canonical(s: &str) -> Self {
        leading_integer(s)
    }
}

impl Canonical for f32 {
    fn to_canonical(&self) -> String {
        self.to_string()
    }

    fn from_canonical(s: &str) -> Self {
        leading_float(s)
    }
}

impl Canonical for f64 {
    fn to_canonical(&self) -> String {
        self.to_string()
    }

    fn from_canonical(s: &str) -> Self {
        leading_float(s)
    }
}

impl Canonical for String {
    fn to_canonical(&self) -> String {
        self.clone()
    }

    fn from_canonical(s: &str) -> Self {
        s.to_string()
    }
}

impl<T: Canonical> Canonical for Vec<T> {
    fn to_canonical(&self) -> String {
        self.iter()
            .map(Canonical::to_canonical)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn from_canonical(s: &str) -> Self {
        let mut items: Vec<&str> = s.split(',').collect();
        if items.last() == Some(&"") {
            items.pop();
        }
        items.into_iter().map(T::from_canonical).collect()
    }
}
