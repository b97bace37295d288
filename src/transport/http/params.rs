//! Lenient numeric parsing for query strings and path segments.
//!
//! Malformed input never fails the request; it falls back to a default. The
//! result records whether (and why) the default was used.

/// Why a default value was used instead of caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The caller did not send the parameter.
    Missing,
    /// The caller sent something that does not start with an integer.
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub fallback: Option<Fallback>,
}

impl<T> Parsed<T> {
    pub fn was_defaulted(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Parses the leading base-10 integer of `raw` (`"12abc"` is 12, `"1.9"` is 1),
/// using `default` when `raw` is absent or has no leading integer.
pub fn parse_with_fallback(raw: Option<&str>, default: i64) -> Parsed<i64> {
    let Some(raw) = raw else {
        return Parsed {
            value: default,
            fallback: Some(Fallback::Missing),
        };
    };

    match leading_integer(raw) {
        Some(value) => Parsed {
            value,
            fallback: None,
        },
        None => Parsed {
            value: default,
            fallback: Some(Fallback::Malformed),
        },
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    format!("{sign}{}", &rest[..digits_len]).parse::<i64>().ok()
}
