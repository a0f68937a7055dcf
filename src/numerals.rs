//! Devanagari numeral localization.
//!
//! Transliteration is digit-by-digit: the forward direction is total (any
//! character that is not an ASCII digit passes through unchanged), while
//! parsing is strict and fails on anything that is not a Devanagari digit
//! rather than silently coercing.

use crate::ParseError;
use crate::consts::DEVANAGARI_DIGITS;

/// Replaces every ASCII digit in `input` with its Devanagari glyph.
/// All other characters pass through unchanged.
pub fn to_devanagari(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => DEVANAGARI_DIGITS[digit as usize],
            None => c,
        })
        .collect()
}

/// Formats a non-negative integer in Devanagari digits.
pub fn format_devanagari(value: u64) -> String {
    to_devanagari(&value.to_string())
}

/// Parses a string of Devanagari digits as a non-negative integer.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for an empty string,
/// `ParseError::InvalidNumeral` for any character that is not a Devanagari
/// digit (ASCII digits included), and `ParseError::NumeralOverflow` when
/// the value exceeds `u64`.
pub fn parse_devanagari(input: &str) -> Result<u64, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let mut value: u64 = 0;
    for c in input.chars() {
        let digit = DEVANAGARI_DIGITS
            .iter()
            .position(|&glyph| glyph == c)
            .ok_or(ParseError::InvalidNumeral(c))?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or_else(|| ParseError::NumeralOverflow(input.to_owned()))?;
    }
    Ok(value)
}
