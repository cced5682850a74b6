//! Formatting shared by every declared user type.

use crate::traits::UserType;
use std::fmt;

/// `Type::CONSTANT` for declared values, `Type(raw)` otherwise.
pub fn debug<T: UserType>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.constant() {
        Some(constant) => write!(f, "{}::{}", T::TYPE_NAME, constant.name),
        None => f.debug_tuple(T::TYPE_NAME).field(value.get()).finish(),
    }
}

/// Display name of the value, padded like any other string.
pub fn display<T: UserType>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(value.name())
}
