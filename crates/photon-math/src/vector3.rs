//! 3D vector primitive
//!
//! [`Vector3f`] mirrors [`Vector2f`](crate::Vector2f) with a third axis and
//! adds the 3D cross product, XY-plane projection, and spherical-coordinate
//! construction and decomposition. Azimuth (`phi`) and elevation (`theta`)
//! are exchanged in degrees.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::math_utils::{deg_to_rad, rad_to_deg};

/// A 3D vector with f32 components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    /// Creates a new 3D float vector
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from spherical coordinates
    ///
    /// `phi` is the azimuth in the xy plane and `theta` the elevation from
    /// it, both in degrees. At the poles (`theta == ±90`) the azimuth is
    /// ambiguous and no special handling applies.
    #[inline]
    pub fn spherical(r: f32, phi: f32, theta: f32) -> Self {
        let p = deg_to_rad(phi);
        let t = deg_to_rad(theta);
        Self::new(r * p.cos() * t.cos(), r * p.sin() * t.cos(), r * t.sin())
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of two vectors
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Computes the squared length of the vector
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the length of the vector
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// The zero vector is returned unchanged instead of dividing by zero.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self / len
        }
    }

    /// Returns the projection onto the xy plane, dropping z to zero
    #[inline]
    pub fn project_xy(self) -> Self {
        Self::new(self.x, self.y, 0.0)
    }

    /// Returns the azimuthal angle in degrees, in `(-180, 180]`
    #[inline]
    pub fn phi(self) -> f32 {
        rad_to_deg(self.y.atan2(self.x))
    }

    /// Returns the elevation angle from the xy plane in degrees, in
    /// `[-90, 90]`
    #[inline]
    pub fn theta(self) -> f32 {
        rad_to_deg(self.z.atan2(self.project_xy().length()))
    }
}

impl Add for Vector3f {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector3f {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vector3f {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f32> for Vector3f {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector3f> for f32 {
    type Output = Vector3f;
    #[inline]
    fn mul(self, v: Vector3f) -> Vector3f {
        v * self
    }
}

impl Div<f32> for Vector3f {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl AddAssign for Vector3f {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Vector3f {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl MulAssign<f32> for Vector3f {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl DivAssign<f32> for Vector3f {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl AbsDiffEq for Vector3f {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.x, &other.x, epsilon)
            && f32::abs_diff_eq(&self.y, &other.y, epsilon)
            && f32::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl RelativeEq for Vector3f {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f32::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f32::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_creation() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector3f::default(), Vector3f::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_operations() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3f::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3f::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vector3f::new(-1.0, -2.0, -3.0));

        assert_eq!(a * 2.0, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3f::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_assign_operations() {
        let mut v = Vector3f::new(1.0, 2.0, 3.0);
        v += Vector3f::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3f::new(2.0, 3.0, 4.0));

        v -= Vector3f::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vector3f::new(0.0, 1.0, 2.0));

        v *= 3.0;
        assert_eq!(v, Vector3f::new(0.0, 3.0, 6.0));

        v /= 3.0;
        assert_eq!(v, Vector3f::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_dot_cross() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);

        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Vector3f::new(-3.0, 6.0, -3.0));

        // The cross product is orthogonal to both inputs.
        let c = a.cross(b);
        assert_eq!(c.dot(a), 0.0);
        assert_eq!(c.dot(b), 0.0);

        let x = Vector3f::new(1.0, 0.0, 0.0);
        let y = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_length() {
        let v = Vector3f::new(1.0, 2.0, 2.0);
        assert_eq!(v.length(), 3.0);
        assert_eq!(v.length_squared(), 9.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vector3f::new(1.0, 2.0, 2.0);
        let n = v.normalized();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            n,
            Vector3f::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0),
            epsilon = 1e-6
        );

        assert_eq!(Vector3f::default().normalized(), Vector3f::default());
    }

    #[test]
    fn test_project_xy() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v.project_xy(), Vector3f::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_phi_theta() {
        let v = Vector3f::new(1.0, 0.0, 0.0);
        assert_eq!(v.phi(), 0.0);
        assert_eq!(v.theta(), 0.0);

        let v = Vector3f::new(0.0, 1.0, 0.0);
        assert_relative_eq!(v.phi(), 90.0, epsilon = 1e-4);
        assert_eq!(v.theta(), 0.0);

        // Straight up: elevation 90, azimuth collapses to 0.
        let v = Vector3f::new(0.0, 0.0, 1.0);
        assert_relative_eq!(v.theta(), 90.0, epsilon = 1e-4);
        assert_eq!(v.phi(), 0.0);

        let v = Vector3f::new(0.0, 0.0, -1.0);
        assert_relative_eq!(v.theta(), -90.0, epsilon = 1e-4);

        let v = Vector3f::new(1.0, 0.0, 1.0);
        assert_relative_eq!(v.theta(), 45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_spherical() {
        assert_abs_diff_eq!(
            Vector3f::spherical(1.0, 0.0, 0.0),
            Vector3f::new(1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Vector3f::spherical(2.0, 90.0, 0.0),
            Vector3f::new(0.0, 2.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Vector3f::spherical(1.0, 0.0, 90.0),
            Vector3f::new(0.0, 0.0, 1.0),
            epsilon = 1e-6
        );
    }

    proptest! {
        #[test]
        fn normalized_has_unit_length(x in -1e3f32..1e3, y in -1e3f32..1e3, z in -1e3f32..1e3) {
            let v = Vector3f::new(x, y, z);
            prop_assume!(v.length() > 1e-3);
            prop_assert!((v.normalized().length() - 1.0).abs() < 1e-3);
        }

        #[test]
        fn vector_plus_negation_is_zero(x in -1e6f32..1e6, y in -1e6f32..1e6, z in -1e6f32..1e6) {
            let v = Vector3f::new(x, y, z);
            prop_assert_eq!(v + (-v), Vector3f::default());
        }

        #[test]
        fn dot_is_symmetric(ax in -1e3f32..1e3, ay in -1e3f32..1e3, az in -1e3f32..1e3,
                            bx in -1e3f32..1e3, by in -1e3f32..1e3, bz in -1e3f32..1e3) {
            let a = Vector3f::new(ax, ay, az);
            let b = Vector3f::new(bx, by, bz);
            prop_assert_eq!(a.dot(b), b.dot(a));
        }

        #[test]
        fn cross_is_antisymmetric(ax in -1e3f32..1e3, ay in -1e3f32..1e3, az in -1e3f32..1e3,
                                  bx in -1e3f32..1e3, by in -1e3f32..1e3, bz in -1e3f32..1e3) {
            let a = Vector3f::new(ax, ay, az);
            let b = Vector3f::new(bx, by, bz);
            prop_assert_eq!(a.cross(b), -b.cross(a));
        }

        #[test]
        fn spherical_round_trips(r in 0.1f32..1e3, phi in -179.0f32..179.0, theta in -89.0f32..89.0) {
            let v = Vector3f::spherical(r, phi, theta);
            prop_assert!((v.length() - r).abs() <= r * 1e-4);
            let dphi = (v.phi() - phi + 540.0).rem_euclid(360.0) - 180.0;
            prop_assert!(dphi.abs() < 0.05);
            prop_assert!((v.theta() - theta).abs() < 0.05);
        }
    }
}
