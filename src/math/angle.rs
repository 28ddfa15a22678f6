//! Angle conversion and the single-step wraparound rule used by every
//! angle setter in the crate.

use std::f64::consts::{PI, TAU};

/// One full turn in degrees.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Converts radians to degrees as `180 * rad / pi`.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    180.0 * (radians / PI)
}

/// Converts degrees to radians as `pi * deg / 180`.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    PI * (degrees / 180.0)
}

/// Brings `value` back into `[0, period]` with at most one correction.
///
/// A negative value gains one period and a value above `period` loses one,
/// but only when that single step lands in range. Values more than one
/// period outside the range are returned unchanged, and so is NaN.
#[must_use]
pub fn wrap_once(value: f64, period: f64) -> f64 {
    if value < 0.0 && value >= -period {
        value + period
    } else if value > period && value <= 2.0 * period {
        value - period
    } else {
        value
    }
}

/// [`wrap_once`] with a period of `2 * pi`.
#[must_use]
pub fn wrap_radians(value: f64) -> f64 {
    wrap_once(value, TAU)
}

/// [`wrap_once`] with a period of 360 degrees.
#[must_use]
pub fn wrap_degrees(value: f64) -> f64 {
    wrap_once(value, FULL_TURN_DEGREES)
}
