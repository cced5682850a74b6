use thiserror::Error as ThisError;

///
/// ParseUserTypeError
///
/// Returned when text names neither a declared constant, a display name,
/// nor a raw value of the underlying scalar.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseUserTypeError {
    #[error("cannot parse an empty string as {type_name}")]
    Empty { type_name: &'static str },

    #[error("'{input}' is not a constant, display name, or raw value of {type_name}")]
    Unrecognized {
        type_name: &'static str,
        input: String,
    },
}

impl ParseUserTypeError {
    pub(crate) const fn empty(type_name: &'static str) -> Self {
        Self::Empty { type_name }
    }

    pub(crate) fn unrecognized(type_name: &'static str, input: impl Into<String>) -> Self {
        Self::Unrecognized {
            type_name,
            input: input.into(),
        }
    }

    /// Name of the user type the input was parsed for.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Empty { type_name } | Self::Unrecognized { type_name, .. } => *type_name,
        }
    }
}
