//! Second derivatives of the prism potential at a single vertex.
//!
//! For an observation point `p` and a vertex `q` of the prism, the shifted
//! coordinates are `x = qₑ − pₑ`, `y = qₙ − pₙ`, `z = qᵤ − pᵤ` and
//! `r = sqrt(x² + y² + z²)`. The antiderivative `F` of `1/r` over the prism
//! volume has second derivatives (Nagy et al., 2000):
//!
//! ```text
//! u_ee = −atan(y z / (x r))     u_en = ln(z + r)
//! u_nn = −atan(x z / (y r))     u_eu = ln(y + r)
//! u_uu = −atan(x y / (z r))     u_nu = ln(x + r)
//! ```
//!
//! Summing these over the eight vertices with alternating signs gives the
//! entries of the tensor `U` such that `B = μ₀/4π U M`.
//!
//! The functions below are total: they return the limit that keeps the
//! vertex sum correct whenever a shifted coordinate vanishes, which happens
//! when the observation point is aligned with a face, an edge or a vertex.
//!
//! ## References
//!
//! - Nagy, D., Papp, G., & Benedek, J. (2000). The gravitational potential and
//!   its derivatives for the prism. Journal of Geodesy, 74(7), 552–560.
//! - Fukushima, T. (2020). Speed and accuracy improvements in standard
//!   algorithm for prismatic gravitational field. Geophysical Journal
//!   International, 222(3), 1898–1908.

use std::f64::consts::FRAC_PI_2;

use crate::coordinates::Axis;
use crate::math::{R3x3, Scalar};

/// Second derivative of the prism potential along easting twice.
#[inline]
#[must_use]
pub fn kernel_ee(easting: Scalar, northing: Scalar, upward: Scalar, radius: Scalar) -> Scalar {
    kernel_diagonal(easting, northing, upward, radius)
}

/// Second derivative of the prism potential along northing twice.
#[inline]
#[must_use]
pub fn kernel_nn(easting: Scalar, northing: Scalar, upward: Scalar, radius: Scalar) -> Scalar {
    kernel_diagonal(northing, upward, easting, radius)
}

/// Second derivative of the prism potential along upward twice.
#[inline]
#[must_use]
pub fn kernel_uu(easting: Scalar, northing: Scalar, upward: Scalar, radius: Scalar) -> Scalar {
    kernel_diagonal(upward, easting, northing, radius)
}

/// Mixed second derivative of the prism potential along easting and northing.
#[inline]
#[must_use]
pub fn kernel_en(easting: Scalar, northing: Scalar, upward: Scalar, radius: Scalar) -> Scalar {
    kernel_mixed(easting, northing, upward, radius)
}

/// Mixed second derivative of the prism potential along easting and upward.
#[inline]
#[must_use]
pub fn kernel_eu(easting: Scalar, northing: Scalar, upward: Scalar, radius: Scalar) -> Scalar {
    kernel_mixed(easting, upward, northing, radius)
}

/// Mixed second derivative of the prism potential along northing and upward.
#[inline]
#[must_use]
pub fn kernel_nu(easting: Scalar, northing: Scalar, upward: Scalar, radius: Scalar) -> Scalar {
    kernel_mixed(northing, upward, easting, radius)
}

/// `−atan(x_j x_k / (x_i r))` for the derivative along `x_i` twice.
#[inline]
fn kernel_diagonal(x_i: Scalar, x_j: Scalar, x_k: Scalar, radius: Scalar) -> Scalar {
    -principal_atan(x_j * x_k, x_i * radius)
}

/// `ln(x_k + r)` for the mixed derivative along `x_i` and `x_j`.
#[inline]
fn kernel_mixed(x_i: Scalar, x_j: Scalar, x_k: Scalar, radius: Scalar) -> Scalar {
    if x_k >= 0.0 {
        let argument = x_k + radius;
        // Only zero on the vertex itself, where the limit of the vertex sum is 0.
        if argument == 0.0 {
            return 0.0;
        }
        return argument.ln();
    }
    // x_k + r cancels badly for negative x_k; use (x_i² + x_j²) / (r − x_k).
    let lateral = x_i * x_i + x_j * x_j;
    if lateral == 0.0 {
        // On the line of an edge, beyond the prism. ln(x_i² + x_j²) is shared
        // by both vertices of that edge and cancels in the sum.
        return -(radius - x_k).ln();
    }
    (lateral / (radius - x_k)).ln()
}

/// Arctangent of `y / x` in `(−π/2, π/2]`, extended to `x = 0`.
///
/// `atan2` would add ±π when `x < 0` and break the vertex sum for points
/// beside the prism.
#[inline]
fn principal_atan(y: Scalar, x: Scalar) -> Scalar {
    if x != 0.0 {
        return (y / x).atan();
    }
    if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

/// The six independent entries of the symmetric kernel tensor at one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelTensor {
    /// Easting–easting entry.
    pub ee: Scalar,
    /// Northing–northing entry.
    pub nn: Scalar,
    /// Upward–upward entry.
    pub uu: Scalar,
    /// Easting–northing entry.
    pub en: Scalar,
    /// Easting–upward entry.
    pub eu: Scalar,
    /// Northing–upward entry.
    pub nu: Scalar,
}

impl KernelTensor {
    /// Evaluates all six kernels at one vertex.
    #[inline]
    #[must_use]
    pub fn evaluate(easting: Scalar, northing: Scalar, upward: Scalar, radius: Scalar) -> Self {
        Self {
            ee: kernel_ee(easting, northing, upward, radius),
            nn: kernel_nn(easting, northing, upward, radius),
            uu: kernel_uu(easting, northing, upward, radius),
            en: kernel_en(easting, northing, upward, radius),
            eu: kernel_eu(easting, northing, upward, radius),
            nu: kernel_nu(easting, northing, upward, radius),
        }
    }

    /// Row of the tensor belonging to `axis`, ordered easting, northing, upward.
    #[inline]
    #[must_use]
    pub const fn row(&self, axis: Axis) -> [Scalar; 3] {
        match axis {
            Axis::Easting => [self.ee, self.en, self.eu],
            Axis::Northing => [self.en, self.nn, self.nu],
            Axis::Upward => [self.eu, self.nu, self.uu],
        }
    }

    /// Sum of the diagonal entries.
    #[must_use]
    pub fn trace(&self) -> Scalar {
        self.ee + self.nn + self.uu
    }

    /// Full symmetric matrix.
    #[must_use]
    pub fn to_matrix(&self) -> R3x3 {
        R3x3::new(
            self.ee, self.en, self.eu, //
            self.en, self.nn, self.nu, //
            self.eu, self.nu, self.uu,
        )
    }
}

/// Evaluates only the row of the kernel tensor belonging to `axis`.
///
/// Returns the same values as `KernelTensor::evaluate(..).row(axis)` while
/// skipping the three kernels the row does not use.
#[inline]
#[must_use]
pub fn kernel_row(
    axis: Axis,
    easting: Scalar,
    northing: Scalar,
    upward: Scalar,
    radius: Scalar,
) -> [Scalar; 3] {
    match axis {
        Axis::Easting => [
            kernel_ee(easting, northing, upward, radius),
            kernel_en(easting, northing, upward, radius),
            kernel_eu(easting, northing, upward, radius),
        ],
        Axis::Northing => [
            kernel_en(easting, northing, upward, radius),
            kernel_nn(easting, northing, upward, radius),
            kernel_nu(easting, northing, upward, radius),
        ],
        Axis::Upward => [
            kernel_eu(easting, northing, upward, radius),
            kernel_nu(easting, northing, upward, radius),
            kernel_uu(easting, northing, upward, radius),
        ],
    }
}
