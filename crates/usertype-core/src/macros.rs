/// Declare a user type: a newtype over a primitive integer with a fixed set
/// of named constants and an optional display-name table.
///
/// ```ignore
/// user_type! {
///     /// Heading in degrees.
///     pub struct CompassDirection: i16 {
///         const NORTH = 0;
///         const SOUTH = 180;
///         const EAST = 90;
///         const WEST = 270;
///     }
///     names {
///         NORTH => "North",
///         SOUTH => "South",
///         EAST => "East",
///         WEST => "West",
///     }
/// }
///
/// let mut heading = CompassDirection::EAST;
/// heading += 90;
/// assert_eq!(heading, CompassDirection::SOUTH);
/// assert_eq!(CompassDirection::from_value(45).to_string(), "?");
/// ```
///
/// The type has no `From<raw>` impl: raw values only become instances
/// through `from_value`. Omitting `names` renders every value as
/// [`UNKNOWN_NAME`](crate::UNKNOWN_NAME).
#[macro_export]
macro_rules! user_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $value:ty {
            $(
                $(#[$const_meta:meta])*
                const $constant:ident = $raw:expr;
            )*
        }
        $(
            names {
                $( $named:ident => $display:expr ),* $(,)?
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[repr(transparent)]
        $vis struct $name($value);

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $constant: Self = Self($raw);
            )*

            #[doc(hidden)]
            const __DISPLAY_NAMES: &'static [($value, &'static str)] = &[
                $($( (Self::$named.0, $display), )*)?
            ];

            /// Wrap any raw value, declared or not.
            #[must_use]
            pub const fn from_value(value: $value) -> Self {
                Self(value)
            }

            #[must_use]
            pub const fn value(self) -> $value {
                self.0
            }

            #[must_use]
            pub const fn get(&self) -> &$value {
                &self.0
            }

            pub const fn get_mut(&mut self) -> &mut $value {
                &mut self.0
            }
        }

        impl $crate::UserType for $name {
            type Value = $value;

            const TYPE_NAME: &'static str = ::core::stringify!($name);
            const CONSTANTS: &'static [$crate::Constant<$value>] = &[
                $( $crate::Constant::new(::core::stringify!($constant), Self::$constant.0), )*
            ];
            const DISPLAY_NAMES: $crate::DisplayNames<$value> =
                $crate::DisplayNames::new(Self::__DISPLAY_NAMES);

            fn from_value(value: $value) -> Self {
                Self(value)
            }

            fn get(&self) -> &$value {
                &self.0
            }

            fn get_mut(&mut self) -> &mut $value {
                &mut self.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::fmt::debug(self, f)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::fmt::display(self, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseUserTypeError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::parse::parse::<Self>(s)
            }
        }

        impl ::core::convert::From<$name> for $value {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        $crate::__user_type_ops!($name, $value);
    };
}

// Operator registry: (binary op, fn, compound-assign op, fn).
// Each entry is implemented for both a raw and a `Self` right-hand side.
#[doc(hidden)]
#[macro_export]
macro_rules! __user_type_ops {
    (@ops $name:ident, $value:ty; $( ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) ),* $(,)?) => {
        $(
            impl ::core::ops::$op<$value> for $name {
                type Output = Self;

                fn $op_fn(self, rhs: $value) -> Self {
                    Self(::core::ops::$op::$op_fn(self.0, rhs))
                }
            }

            impl ::core::ops::$op for $name {
                type Output = Self;

                fn $op_fn(self, rhs: Self) -> Self {
                    Self(::core::ops::$op::$op_fn(self.0, rhs.0))
                }
            }

            impl ::core::ops::$assign<$value> for $name {
                fn $assign_fn(&mut self, rhs: $value) {
                    ::core::ops::$assign::$assign_fn(&mut self.0, rhs);
                }
            }

            impl ::core::ops::$assign for $name {
                fn $assign_fn(&mut self, rhs: Self) {
                    ::core::ops::$assign::$assign_fn(&mut self.0, rhs.0);
                }
            }
        )*
    };
    ($name:ident, $value:ty) => {
        $crate::__user_type_ops! {
            @ops $name, $value;
            (Add, add, AddAssign, add_assign),
            (Sub, sub, SubAssign, sub_assign),
            (Mul, mul, MulAssign, mul_assign),
            (Div, div, DivAssign, div_assign),
            (Rem, rem, RemAssign, rem_assign),
            (BitAnd, bitand, BitAndAssign, bitand_assign),
            (BitOr, bitor, BitOrAssign, bitor_assign),
            (BitXor, bitxor, BitXorAssign, bitxor_assign),
            (Shl, shl, ShlAssign, shl_assign),
            (Shr, shr, ShrAssign, shr_assign),
        }
    };
}

///
/// TESTS
///
