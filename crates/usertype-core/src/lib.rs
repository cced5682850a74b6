//! Core of usertype: the `UserType` contract, constant and display-name
//! tables, parsing and formatting shared by every declared type, and the
//! `user_type!` declaration macro.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

pub mod constant;
pub mod error;
pub mod fmt;
pub mod names;
pub mod parse;
pub mod traits;

pub use constant::Constant;
pub use error::ParseUserTypeError;
pub use names::{DisplayNames, UNKNOWN_NAME};
pub use traits::UserType;
