//! Digit extraction: Unicode decimal digits in order, everything else skipped.
//!
//! A digit is any character of general category `Nd`, the same class the
//! sanitizer's `\D` complements. Each maps to its numeric value in `0..=9`.

use std::iter::FusedIterator;
use std::str::Chars;

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_DIGIT: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"^\d$"));

/// Lazy iterator over the digit values of a string.
///
/// Cloning yields an independent iterator from the same position, so a
/// fresh call to [`digits`] or a clone taken up front restarts the scan.
#[derive(Debug, Clone)]
pub struct Digits<'a> {
    chars: Chars<'a>,
}

impl Iterator for Digits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.chars.find_map(digit_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.chars.size_hint().1)
    }
}

impl FusedIterator for Digits<'_> {}

/// Digit values of `s`, left to right.
pub fn digits(s: &str) -> Digits<'_> {
    Digits { chars: s.chars() }
}

/// Number of digit characters in `s`.
pub fn digit_count(s: &str) -> usize {
    s.chars().filter(|&c| is_digit(c)).count()
}

/// Digit values of `s`, materialised.
pub fn collect_digits(s: &str) -> Vec<u8> {
    digits(s).collect()
}

/// Whether `c` is a decimal digit (`\p{Nd}`).
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    // Nd is a subset of the numeric categories.
    if !c.is_numeric() {
        return false;
    }
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT
        .as_ref()
        .map_or(false, |re| re.is_match(c.encode_utf8(&mut buf)))
}

/// Numeric value of a decimal digit, `None` for anything else.
pub fn digit_value(c: char) -> Option<u8> {
    if c.is_ascii_digit() {
        return Some(c as u8 - b'0');
    }
    if !is_digit(c) {
        return None;
    }
    // Nd code points come in contiguous runs of ten starting at zero, so the
    // offset from the start of the surrounding run of digits, mod 10, is the value.
    let code = u32::from(c);
    let mut start = code;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some(((code - start) % 10) as u8)
}
