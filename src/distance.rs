//! Distance between two points in Cartesian or spherical coordinates.

use crate::coordinates::{SphericalPoint, SphericalTrig};
use crate::math::{R3, Scalar};

/// Result of [`distance_spherical_core`].
///
/// The two cosines are by-products of the distance and are returned so callers
/// that also need them (multipole expansions, tesseroid kernels) can skip the
/// trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalDistance {
    /// Euclidean distance in meters.
    pub distance: Scalar,
    /// Cosine of the angle ψ between the two position vectors.
    pub cos_psi: Scalar,
    /// Cosine of the longitude difference `λq − λp`.
    pub cos_lambda: Scalar,
}

/// Euclidean distance between two points in Cartesian coordinates.
///
/// Both points must use the same linear unit.
#[inline]
#[must_use]
pub fn distance_cartesian(p: R3, q: R3) -> Scalar {
    (p - q).norm()
}

/// Euclidean distance between two points in spherical coordinates.
///
/// Longitudes and latitudes in degrees, radii in meters.
#[inline]
#[must_use]
pub fn distance_spherical(p: SphericalPoint, q: SphericalPoint) -> Scalar {
    distance_spherical_core(&p.precompute(), &q.precompute()).distance
}

/// Spherical distance from precomputed trigonometric quantities.
///
/// ```text
/// cos ψ = sin φp sin φq + cos φp cos φq cos(λq − λp)
/// d     = sqrt((rp − rq)² + 2 rp rq (1 − cos ψ))
/// ```
///
/// The radicand is clamped at zero: for coincident points rounding in `cos ψ`
/// can push it slightly negative.
#[inline]
#[must_use]
pub fn distance_spherical_core(p: &SphericalTrig, q: &SphericalTrig) -> SphericalDistance {
    let cos_lambda = (q.longitude - p.longitude).cos();
    let cos_psi =
        q.sin_latitude * p.sin_latitude + q.cos_latitude * p.cos_latitude * cos_lambda;
    let radial = p.radius - q.radius;
    let squared = radial * radial + 2.0 * p.radius * q.radius * (1.0 - cos_psi);
    SphericalDistance {
        distance: squared.max(0.0).sqrt(),
        cos_psi,
        cos_lambda,
    }
}
