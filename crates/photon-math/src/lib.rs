//! Photon Math Library
//!
//! Value-type 2D/3D vectors with arithmetic, geometric queries, line-line
//! intersection, projection onto lines, and spherical-coordinate
//! conversions, plus the scalar helpers shared by the rest of the engine.
//!
//! All vector types are single-precision `Copy` values. Degenerate geometry
//! (zero-length vectors, parallel lines) is never reported as an error:
//! normalization of the zero vector yields the zero vector, and intersecting
//! parallel lines yields a non-finite point, matching IEEE float semantics.

pub mod math_utils;
pub mod vector2;
pub mod vector3;

pub use vector2::Vector2f;
pub use vector3::Vector3f;
