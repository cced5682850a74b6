use crate::{
    constant::{self, Constant},
    names::DisplayNames,
};
use num_traits::{One, PrimInt};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

///
/// UserType
///
/// A value type carrying a fixed table of named constants without being
/// restricted to them. Any raw value of `Value` is a valid instance.
///
/// Types declared with [`user_type!`](crate::user_type) implement this
/// automatically; hand-written newtypes only need the three accessors.
/// Equality, ordering and hashing must agree with those of the raw value.
///

pub trait UserType: Copy + Default + Eq + Hash + Ord + 'static {
    /// Underlying scalar.
    type Value: PrimInt + Debug + Display + Hash + 'static;

    const TYPE_NAME: &'static str;

    /// Declared constants, in declaration order.
    const CONSTANTS: &'static [Constant<Self::Value>];

    const DISPLAY_NAMES: DisplayNames<Self::Value> = DisplayNames::EMPTY;

    /// Wrap any raw value, declared or not.
    fn from_value(value: Self::Value) -> Self;

    fn get(&self) -> &Self::Value;

    fn get_mut(&mut self) -> &mut Self::Value;

    // ---- Provided ----

    #[must_use]
    fn value(&self) -> Self::Value {
        *self.get()
    }

    fn set_value(&mut self, value: Self::Value) {
        *self.get_mut() = value;
    }

    /// Display name of the current value, or [`UNKNOWN_NAME`](crate::UNKNOWN_NAME).
    #[must_use]
    fn name(&self) -> &'static str {
        Self::DISPLAY_NAMES.render(self.get())
    }

    /// First declared constant equal to the current value.
    #[must_use]
    fn constant(&self) -> Option<&'static Constant<Self::Value>> {
        constant::find_by_value(Self::CONSTANTS, self.get())
    }

    #[must_use]
    fn is_declared(&self) -> bool {
        self.constant().is_some()
    }

    /// Every declared constant as an instance, in declaration order.
    fn constants() -> impl Iterator<Item = Self> {
        Self::CONSTANTS.iter().map(|c| Self::from_value(c.value))
    }

    /// Pre-increment. Overflow behaves as `Value + 1` does.
    fn increment(&mut self) -> &mut Self {
        let next = self.value() + <Self::Value as One>::one();
        self.set_value(next);
        self
    }

    /// Pre-decrement. Overflow behaves as `Value - 1` does.
    fn decrement(&mut self) -> &mut Self {
        let next = self.value() - <Self::Value as One>::one();
        self.set_value(next);
        self
    }

    /// Post-increment: advances `self` and returns the prior value.
    fn post_increment(&mut self) -> Self {
        let prior = *self;
        self.increment();
        prior
    }

    /// Post-decrement: retreats `self` and returns the prior value.
    fn post_decrement(&mut self) -> Self {
        let prior = *self;
        self.decrement();
        prior
    }
}

///
/// TESTS
///
