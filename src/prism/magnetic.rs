//! Magnetic field of a uniformly magnetized rectangular prism.
//!
//! For an observation point `p` and a prism `R` with magnetization `M`,
//!
//! ```text
//! B(p) = −μ₀/4π ∇ₚ ∫_R M · ∇_q (1 / ‖p − q‖) dv = μ₀/4π U M
//! ```
//!
//! where `U` holds the second derivatives of `∫_R 1/‖p − q‖ dv`. Each entry of
//! `U` is the kernel from [`super::kernels`] evaluated at the eight vertices
//! with sign `(−1)^(i+j+k)` (Blakely, 1995; Oliveira et al., 2015).
//!
//! The combined and single-component evaluators share the same vertex walk and
//! the tensor-row projection, so `magnetic_field(..)[c]` and
//! `magnetic_component(.., c)` are bitwise identical.

use crate::constants::MU0_OVER_4PI;
use crate::coordinates::Axis;
use crate::math::{R3, Scalar};

use super::kernels::{kernel_row, KernelTensor};
use super::Prism;

/// Observation point shifted to one vertex of the prism.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    easting: Scalar,
    northing: Scalar,
    upward: Scalar,
    radius: Scalar,
    sign: Scalar,
}

/// Visits the eight vertices of `prism` relative to `point`.
///
/// Index 0 on each axis picks the east, north or top face and index 1 the
/// west, south or bottom face, so the `(−1)^(i+j+k)` sign evaluates the
/// antiderivative as `F(upper) − F(lower)` along every axis.
#[inline]
fn fold_vertices<T>(
    point: R3,
    prism: &Prism,
    init: T,
    mut visit: impl FnMut(T, &Vertex) -> T,
) -> T {
    let eastings = [prism.east, prism.west];
    let northings = [prism.north, prism.south];
    let upwards = [prism.top, prism.bottom];
    let mut acc = init;
    for (i, easting) in eastings.into_iter().enumerate() {
        let shift_east = easting - point.x;
        let shift_east_sq = shift_east * shift_east;
        for (j, northing) in northings.into_iter().enumerate() {
            let shift_north = northing - point.y;
            let shift_north_sq = shift_north * shift_north;
            for (k, upward) in upwards.into_iter().enumerate() {
                let shift_up = upward - point.z;
                let vertex = Vertex {
                    easting: shift_east,
                    northing: shift_north,
                    upward: shift_up,
                    radius: (shift_east_sq + shift_north_sq + shift_up * shift_up).sqrt(),
                    sign: if (i + j + k) % 2 == 0 { 1.0 } else { -1.0 },
                };
                acc = visit(acc, &vertex);
            }
        }
    }
    acc
}

/// Dot product of a kernel tensor row with the magnetization.
#[inline]
fn project(row: [Scalar; 3], magnetization: &R3) -> Scalar {
    magnetization.x * row[0] + magnetization.y * row[1] + magnetization.z * row[2]
}

/// Magnetic field of a prism on a single observation point.
///
/// Use this when all three components are needed: every vertex evaluates the
/// radius and the six kernels once for the three components.
///
/// # Arguments
///
/// * `point`:         (m) observation point `(easting, northing, upward)`
/// * `prism`:         (m) prism boundaries
/// * `magnetization`: (A/m) magnetization vector `(east, north, up)`
///
/// Returns `(b_e, b_n, b_u)` in tesla. The result is not finite when `point`
/// lies on an edge or a vertex of the prism.
#[inline]
#[must_use]
pub fn magnetic_field(point: R3, prism: &Prism, magnetization: R3) -> R3 {
    let [b_e, b_n, b_u] = fold_vertices(point, prism, [0.0; 3], |mut b, v| {
        let tensor = KernelTensor::evaluate(v.easting, v.northing, v.upward, v.radius);
        for axis in Axis::ALL {
            b[axis.index()] += v.sign * project(tensor.row(axis), &magnetization);
        }
        b
    });
    R3::new(MU0_OVER_4PI * b_e, MU0_OVER_4PI * b_n, MU0_OVER_4PI * b_u)
}

/// Single component of the magnetic field of a prism, in tesla.
///
/// Only the three kernels of the tensor row for `axis` are evaluated per
/// vertex.
#[inline]
#[must_use]
pub fn magnetic_component(point: R3, prism: &Prism, magnetization: R3, axis: Axis) -> Scalar {
    let b = fold_vertices(point, prism, 0.0, |b, v| {
        let row = kernel_row(axis, v.easting, v.northing, v.upward, v.radius);
        b + v.sign * project(row, &magnetization)
    });
    MU0_OVER_4PI * b
}

/// Easting component of the magnetic field of a prism, in tesla.
///
/// `B_e = μ₀/4π (M_e u_ee + M_n u_en + M_u u_eu)`
#[inline]
#[must_use]
pub fn magnetic_e(point: R3, prism: &Prism, magnetization: R3) -> Scalar {
    magnetic_component(point, prism, magnetization, Axis::Easting)
}

/// Northing component of the magnetic field of a prism, in tesla.
///
/// `B_n = μ₀/4π (M_e u_en + M_n u_nn + M_u u_nu)`
#[inline]
#[must_use]
pub fn magnetic_n(point: R3, prism: &Prism, magnetization: R3) -> Scalar {
    magnetic_component(point, prism, magnetization, Axis::Northing)
}

/// Upward component of the magnetic field of a prism, in tesla.
///
/// `B_u = μ₀/4π (M_e u_eu + M_n u_nu + M_u u_uu)`
#[inline]
#[must_use]
pub fn magnetic_u(point: R3, prism: &Prism, magnetization: R3) -> Scalar {
    magnetic_component(point, prism, magnetization, Axis::Upward)
}

/// Prism together with its uniform magnetization in A/m.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetizedPrism {
    /// Geometry in meters.
    pub prism: Prism,
    /// Magnetization vector in A/m.
    pub magnetization: R3,
}

impl MagnetizedPrism {
    /// Pairs a prism with its magnetization.
    #[must_use]
    pub const fn new(prism: Prism, magnetization: R3) -> Self {
        Self {
            prism,
            magnetization,
        }
    }

    /// Moment of the dipole equivalent to this prism in the far field, in A·m².
    #[must_use]
    pub fn dipole_moment(&self) -> R3 {
        self.magnetization * self.prism.volume()
    }

    /// Magnetic field of this prism at `point`, in tesla.
    #[inline]
    #[must_use]
    pub fn magnetic_field(&self, point: R3) -> R3 {
        magnetic_field(point, &self.prism, self.magnetization)
    }
}
