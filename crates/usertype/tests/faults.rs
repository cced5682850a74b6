//! Arithmetic faults surface exactly as they do for the raw scalar.

use usertype::{UserType, user_type};

user_type! {
    pub struct Level: u8 {
        const FLOOR = 0;
        const CEILING = 255;
    }
}

#[test]
#[should_panic(expected = "divide by zero")]
fn division_by_zero_panics_like_the_scalar() {
    let mut level = Level::CEILING;
    level /= 0;
}

#[test]
#[should_panic(expected = "remainder with a divisor of zero")]
fn remainder_by_zero_instance_panics_like_the_scalar() {
    let mut level = Level::CEILING;
    level %= Level::FLOOR;
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "overflow")]
fn increment_past_max_panics_with_overflow_checks() {
    let mut level = Level::CEILING;
    level.increment();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "overflow")]
fn subtract_below_zero_panics_with_overflow_checks() {
    let mut level = Level::FLOOR;
    level -= 1;
}

#[test]
#[cfg(not(debug_assertions))]
fn increment_past_max_wraps_without_overflow_checks() {
    let mut level = Level::CEILING;
    level.increment();

    assert_eq!(level, Level::FLOOR);
}

#[test]
fn explicit_wrapping_goes_through_the_raw_value() {
    let mut level = Level::CEILING;
    *level.get_mut() = level.value().wrapping_add(1);

    assert_eq!(level, Level::FLOOR);
}

#[test]
fn out_of_set_values_are_never_rejected() {
    let mut level = Level::from_value(17);
    level *= 3;
    level.decrement();

    assert_eq!(level.value(), 50);
    assert!(!level.is_declared());
}
