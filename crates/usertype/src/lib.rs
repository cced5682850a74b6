//! Smart enumerations: types that carry a closed set of named constants but
//! hold any value of their underlying integer.
//!
//! ```
//! use usertype::{prelude::*, user_type};
//!
//! user_type! {
//!     pub struct CompassDirection: i16 {
//!         const NORTH = 0;
//!         const SOUTH = 180;
//!         const EAST = 90;
//!         const WEST = 270;
//!     }
//!     names {
//!         NORTH => "North",
//!         SOUTH => "South",
//!         EAST => "East",
//!         WEST => "West",
//!     }
//! }
//!
//! let mut direction = CompassDirection::NORTH;
//! assert_eq!(direction.to_string(), "North");
//!
//! direction = CompassDirection::from_value(3);
//! direction.increment();
//! direction -= 20;
//! assert_eq!(i16::from(direction), -16);
//! assert_eq!(direction.name(), "?");
//! ```
//!
//! Raw values never convert on their own:
//!
//! ```compile_fail
//! usertype::user_type! {
//!     struct Level: u8 { const LOW = 1; }
//! }
//!
//! let level: Level = 1u8.into();
//! ```
//!
//! ```compile_fail
//! usertype::user_type! {
//!     struct Level: u8 { const LOW = 1; }
//! }
//!
//! let level: Level = 1;
//! ```
//!
//! and two declarations over the same scalar are distinct types:
//!
//! ```compile_fail
//! usertype::user_type! {
//!     struct Level: u8 { const LOW = 1; }
//! }
//! usertype::user_type! {
//!     struct Grade: u8 { const LOW = 1; }
//! }
//!
//! let level: Level = Grade::LOW;
//! ```
//!
//! ## Crate layout
//! - `core`: the `UserType` contract, constant/display-name tables, parsing
//!   and formatting helpers used by the generated code.

pub use usertype_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use usertype_core::user_type;

pub use usertype_core::{Constant, DisplayNames, ParseUserTypeError, UNKNOWN_NAME, UserType};

///
/// Prelude
/// using _ brings the trait into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{UNKNOWN_NAME, UserType as _};
}
