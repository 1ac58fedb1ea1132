//! Angle and tolerance helpers.
//!
//! All angles in ShapeKit are radians, positive clockwise in the Y-down page
//! coordinate system.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Default tolerance used when comparing coordinates and angles.
pub const PRECISION: f64 = 1e-6;

/// Returns true when `a` and `b` differ by at most [`PRECISION`].
pub fn approximately(a: f64, b: f64) -> bool {
    approximately_within(a, b, PRECISION)
}

/// Returns true when `a` and `b` differ by at most `tolerance`.
pub fn approximately_within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Wraps an angle into `[0, 2π)`.
pub fn canonical_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Returns true when `angle` is within `tolerance` of an integer multiple of `period`.
pub fn is_multiple_of(angle: f64, period: f64, tolerance: f64) -> bool {
    let rem = angle.rem_euclid(period);
    rem <= tolerance || period - rem <= tolerance
}

/// Two rotations are compatible when they differ by a multiple of 90°.
///
/// A shape whose page rotation is compatible with a scale axis can be scaled
/// along that axis without shearing.
pub fn angles_compatible(a: f64, b: f64) -> bool {
    angles_compatible_within(a, b, PRECISION)
}

/// [`angles_compatible`] with an explicit tolerance.
pub fn angles_compatible_within(a: f64, b: f64, tolerance: f64) -> bool {
    a == b || is_multiple_of(a - b, FRAC_PI_2, tolerance)
}

/// Two rotations have parallel local axes when they differ by a multiple of 180°.
///
/// Compatible rotations that are not parallel are a quarter turn apart, so a
/// shape's width runs along the scale axis' Y direction.
pub fn axes_parallel_within(a: f64, b: f64, tolerance: f64) -> bool {
    is_multiple_of(a - b, PI, tolerance)
}
