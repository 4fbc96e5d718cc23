//! Magnetic field of a point dipole.
//!
//! ```text
//! B(p) = μ₀/4π [ 3 (m · r) r / ‖r‖⁵ − m / ‖r‖³ ],   r = p − q
//! ```
//!
//! Every function recomputes `r`, `‖r‖` and `m · r` so a caller after a
//! single component pays for nothing else. The field is singular when the
//! observation point coincides with the dipole; that case is not detected
//! here (see [`crate::checked::dipole_magnetic_field`]).

use crate::constants::MU0_OVER_4PI;
use crate::coordinates::Axis;
use crate::math::{R3, Scalar};

/// Point dipole with a magnetic moment in A·m².
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dipole {
    /// Location of the dipole in meters.
    pub position: R3,
    /// Magnetic moment vector in A·m².
    pub moment: R3,
}

impl Dipole {
    /// Creates a dipole at `position` with the given `moment`.
    #[must_use]
    pub const fn new(position: R3, moment: R3) -> Self {
        Self { position, moment }
    }

    /// Magnetic field of this dipole at `point`, in tesla.
    #[inline]
    #[must_use]
    pub fn magnetic_field(&self, point: R3) -> R3 {
        magnetic_field(point, self.position, self.moment)
    }
}

/// `3 (m · r) r_c / d⁵ − m_c / d³` for one component `c`.
#[inline]
fn component_term(r_c: Scalar, moment_c: Scalar, dot: Scalar, distance: Scalar) -> Scalar {
    let distance_3 = distance * distance * distance;
    let distance_5 = distance_3 * distance * distance;
    3.0 * dot * r_c / distance_5 - moment_c / distance_3
}

/// Magnetic field of a dipole on a single observation point.
///
/// # Arguments
///
/// * `point`:  (m) observation point `(easting, northing, upward)`
/// * `dipole`: (m) location of the dipole
/// * `moment`: (A·m²) magnetic moment `(east, north, up)`
///
/// Returns `(b_e, b_n, b_u)` in tesla.
#[inline]
#[must_use]
pub fn magnetic_field(point: R3, dipole: R3, moment: R3) -> R3 {
    let r = point - dipole;
    let distance = r.norm();
    let dot = moment.dot(&r);
    R3::new(
        MU0_OVER_4PI * component_term(r.x, moment.x, dot, distance),
        MU0_OVER_4PI * component_term(r.y, moment.y, dot, distance),
        MU0_OVER_4PI * component_term(r.z, moment.z, dot, distance),
    )
}

/// Single component of the magnetic field of a dipole, in tesla.
#[inline]
#[must_use]
pub fn magnetic_component(point: R3, dipole: R3, moment: R3, axis: Axis) -> Scalar {
    let r = point - dipole;
    let distance = r.norm();
    let dot = moment.dot(&r);
    let c = axis.index();
    MU0_OVER_4PI * component_term(r[c], moment[c], dot, distance)
}

/// Easting component of the magnetic field of a dipole, in tesla.
#[inline]
#[must_use]
pub fn magnetic_e(point: R3, dipole: R3, moment: R3) -> Scalar {
    magnetic_component(point, dipole, moment, Axis::Easting)
}

/// Northing component of the magnetic field of a dipole, in tesla.
#[inline]
#[must_use]
pub fn magnetic_n(point: R3, dipole: R3, moment: R3) -> Scalar {
    magnetic_component(point, dipole, moment, Axis::Northing)
}

/// Upward component of the magnetic field of a dipole, in tesla.
#[inline]
#[must_use]
pub fn magnetic_u(point: R3, dipole: R3, moment: R3) -> Scalar {
    magnetic_component(point, dipole, moment, Axis::Upward)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn random_vector(rng: &mut StdRng, scale: Scalar) -> R3 {
        R3::new(
            rng.gen_range(-scale..scale),
            rng.gen_range(-scale..scale),
            rng.gen_range(-scale..scale),
        )
    }

    #[test]
    fn axial_and_equatorial_fields() {
        let moment = R3::new(0.0, 0.0, 2.0);
        let above = magnetic_field(R3::new(0.0, 0.0, 3.0), R3::zeros(), moment);
        assert_relative_eq!(above.z, MU0_OVER_4PI * 2.0 * 2.0 / 27.0, max_relative = 1.0e-12);
        assert_eq!(above.x, 0.0);
        let beside = magnetic_field(R3::new(3.0, 0.0, 0.0), R3::zeros(), moment);
        assert_relative_eq!(beside.z, -MU0_OVER_4PI * 2.0 / 27.0, max_relative = 1.0e-12);
    }

    #[test]
    fn combined_matches_single_components_bitwise() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..25 {
            let point = random_vector(&mut rng, 100.0);
            let dipole = random_vector(&mut rng, 100.0);
            let moment = random_vector(&mut rng, 1.0e3);
            let b = magnetic_field(point, dipole, moment);
            assert_eq!(b.x, magnetic_e(point, dipole, moment));
            assert_eq!(b.y, magnetic_n(point, dipole, moment));
            assert_eq!(b.z, magnetic_u(point, dipole, moment));
        }
    }

    #[test]
    fn field_is_linear_in_moment() {
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..20 {
            let point = random_vector(&mut rng, 100.0);
            let dipole = random_vector(&mut rng, 100.0);
            let moment = random_vector(&mut rng, 1.0e3);
            // Powers of two keep the scaling exact in floating point.
            for scale in [2.0, -0.5, 8.0] {
                let b = magnetic_field(point, dipole, moment);
                let scaled = magnetic_field(point, dipole, moment * scale);
                assert_eq!(scaled, b * scale);
            }
            let scale = rng.gen_range(-10.0..10.0);
            let b = magnetic_field(point, dipole, moment);
            let scaled = magnetic_field(point, dipole, moment * scale);
            assert_relative_eq!(scaled, b * scale, max_relative = 1.0e-12, epsilon = 1.0e-25);
        }
    }

    #[test]
    fn coincident_points_are_not_finite() {
        let p = R3::new(1.0, 2.0, 3.0);
        let b = magnetic_field(p, p, R3::new(1.0, 0.0, 0.0));
        assert!(b.iter().any(|c| !c.is_finite()));
    }

    #[test]
    fn method_matches_free_function() {
        let dipole = Dipole::new(R3::new(1.0, -1.0, -5.0), R3::new(3.0, 0.0, -1.0));
        let point = R3::new(0.0, 2.0, 1.0);
        assert_eq!(
            dipole.magnetic_field(point),
            magnetic_field(point, dipole.position, dipole.moment)
        );
    }
}
