//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Matrix3, Vector3};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Three-dimensional real vector. Cartesian points are stored as
/// `(easting, northing, upward)` in the `x`, `y`, `z` slots.
pub type R3 = Vector3<Scalar>;
/// Convenient alias for three-by-three real matrices.
pub type R3x3 = Matrix3<Scalar>;

/// Returns `true` when every component of `v` is finite.
#[inline]
#[must_use]
pub fn is_finite(v: &R3) -> bool {
    v.iter().all(|c| c.is_finite())
}
