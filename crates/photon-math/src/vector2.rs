//! 2D vector primitive
//!
//! This module provides [`Vector2f`], a single-precision 2D value type with
//! the usual arithmetic and geometric queries plus two composite
//! algorithms: line-line intersection and projection of a point onto a
//! line. Angles are exchanged in degrees throughout.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::math_utils::{deg_to_rad, rad_to_deg};

/// A 2D vector with f32 components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    /// Creates a new 2D float vector
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector from polar coordinates, with `theta` in degrees
    #[inline]
    pub fn polar(r: f32, theta: f32) -> Self {
        let t = deg_to_rad(theta);
        Self::new(r * t.cos(), r * t.sin())
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product, the z component of the 3D cross
    /// product of the two vectors extended into the xy plane
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Computes the squared length of the vector
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Computes the length of the vector
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the angle from the positive x axis in degrees, in
    /// `(-180, 180]`
    #[inline]
    pub fn angle(self) -> f32 {
        rad_to_deg(self.y.atan2(self.x))
    }

    /// Computes the squared distance to another vector
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Computes the distance to another vector
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Returns a unit vector in the same direction
    ///
    /// The zero vector is returned unchanged instead of dividing by zero.
    #[inline]
    pub fn normalized(self) -> Self {
        if self.length_squared() == 0.0 {
            self
        } else {
            self / self.length()
        }
    }

    /// Projects this vector onto the direction of `v`
    ///
    /// A zero `v` degenerates to the zero vector through the `normalized`
    /// zero policy.
    #[inline]
    pub fn project(self, v: Self) -> Self {
        v.normalized() * self.dot(v.normalized())
    }

    /// Projects this point onto the line through `u` and `v`
    ///
    /// Returns the nearest point on the infinite line, not clamped to the
    /// segment between `u` and `v`.
    #[inline]
    pub fn project_onto_line(self, u: Self, v: Self) -> Self {
        u + (self - u).project(v - u)
    }

    /// Returns the point of intersection of the line through `x1` and `x2`
    /// with the line through `x3` and `x4`.
    ///
    /// See <https://mathworld.wolfram.com/Line-LineIntersection.html>; the
    /// 2D cross product stands in for the determinants. Parallel lines make
    /// the denominator zero and the result non-finite.
    pub fn intersect(x1: Self, x2: Self, x3: Self, x4: Self) -> Self {
        let a = x2 - x1;
        let b = x4 - x3;
        let c = x3 - x1;

        let den = a.cross(b);
        x1 + a * c.cross(b) * a.cross(b) / (den * den)
    }
}

impl Add for Vector2f {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector2f {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vector2f {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vector2f {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Mul<Vector2f> for f32 {
    type Output = Vector2f;
    #[inline]
    fn mul(self, v: Vector2f) -> Vector2f {
        v * self
    }
}

impl Div<f32> for Vector2f {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl AddAssign for Vector2f {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2f {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f32> for Vector2f {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f32> for Vector2f {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl AbsDiffEq for Vector2f {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.x, &other.x, epsilon)
            && f32::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vector2f {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f32::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}
