//! Text -> user type parsing.
//!
//! Input is matched, in order, against declared constant identifiers, display
//! names, and finally raw integer syntax. Raw values are never checked
//! against the constant table.

use crate::{constant, error::ParseUserTypeError, traits::UserType};
use num_traits::{Num, PrimInt};
use tracing::{debug, trace};

/// Parse `input` as an instance of `T`.
pub fn parse<T: UserType>(input: &str) -> Result<T, ParseUserTypeError> {
    let text = input.trim();
    if text.is_empty() {
        debug!(type_name = T::TYPE_NAME, "rejected empty user type input");

        return Err(ParseUserTypeError::empty(T::TYPE_NAME));
    }

    if let Some(constant) = constant::find_by_name(T::CONSTANTS, text) {
        return Ok(T::from_value(constant.value));
    }

    if let Some(value) = T::DISPLAY_NAMES.value_of(text) {
        return Ok(T::from_value(value));
    }

    trace!(
        type_name = T::TYPE_NAME,
        input = text,
        "no constant or display name matched, parsing raw value"
    );

    parse_raw::<T::Value>(text).map(T::from_value).ok_or_else(|| {
        debug!(
            type_name = T::TYPE_NAME,
            input = text,
            "rejected unrecognized user type input"
        );

        ParseUserTypeError::unrecognized(T::TYPE_NAME, text)
    })
}

/// Parse integer syntax: optional sign, then decimal or a `0x`, `0o`, `0b`
/// prefixed literal. Underscore separators are not accepted.
#[must_use]
pub fn parse_raw<V: PrimInt>(text: &str) -> Option<V> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    if negative {
        <V as Num>::from_str_radix(&format!("-{digits}"), radix).ok()
    } else {
        <V as Num>::from_str_radix(digits, radix).ok()
    }
}

fn split_radix(text: &str) -> (u32, &str) {
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return (radix, digits);
        }
    }

    (10, text)
}

///
/// TESTS
///
