//! Scalar math utilities shared by the vector types
//!
//! This module provides angle conversions, ordering helpers, and uniform
//! random draws. The random helpers take the generator explicitly; the
//! library holds no global state.

use std::f32::consts::PI;

use rand::Rng;

/// Clamps a value to the inclusive range `[lo, hi]`
///
/// Values equal to a bound map to that bound.
///
/// # Examples
/// ```
/// use photon_math::math_utils::clamp;
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x <= lo {
        lo
    } else if x >= hi {
        hi
    } else {
        x
    }
}

/// Converts an angle in degrees to radians
#[inline]
pub fn deg_to_rad(d: f32) -> f32 {
    d * PI / 180.0
}

/// Converts an angle in radians to degrees
#[inline]
pub fn rad_to_deg(r: f32) -> f32 {
    r * 180.0 / PI
}

/// Returns the smaller of two values
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of two values
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the smallest of three values
///
/// # Examples
/// ```
/// use photon_math::math_utils::min3;
/// assert_eq!(min3(3, 1, 2), 1);
/// ```
#[inline]
pub fn min3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    min(a, min(b, c))
}

/// Returns the largest of three values
///
/// # Examples
/// ```
/// use photon_math::math_utils::max3;
/// assert_eq!(max3(3, 1, 2), 3);
/// ```
#[inline]
pub fn max3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    max(a, max(b, c))
}

/// Returns a float drawn uniformly from `[0, sup)`
#[inline]
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, sup: f32) -> f32 {
    rng.random::<f32>() * sup
}

/// Returns an integer drawn from `[0, sup)`
///
/// The underlying float draw is truncated toward zero, not rounded, so the
/// result never reaches `sup`.
#[inline]
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, sup: i32) -> i32 {
    random_float(rng, sup as f32) as i32
}
