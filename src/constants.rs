//! Physical constants shared by the field evaluators.
//!
//! ## Accuracy
//!
//! μ₀ is a measured constant since the 2019 SI revision. The value below is the
//! CODATA 2018 recommendation with 12 significant figures, which is far below
//! the uncertainty of any geophysical survey.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Mohr, P. J., Newell, D. B., Taylor, B. N., & Tiesinga, E. (2019). CODATA Recommended Values of the Fundamental Physical Constants: 2018.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum magnetic permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
/// Note: CODATA 2022 value is 1.25663706127 × 10⁻⁶ H/m with relative uncertainty ~10⁻¹⁰.
pub const VACUUM_PERMEABILITY: Scalar = 1.256_637_062_12e-6;

/// Scale factor μ₀/4π applied to every magnetic field kernel, in H/m.
pub const MU0_OVER_4PI: Scalar = VACUUM_PERMEABILITY / (4.0 * PI);

/// Number of nanotesla in one tesla. Survey data is usually reported in nT.
pub const TESLA_TO_NANOTESLA: Scalar = 1.0e9;

/// Converts a field value from tesla to nanotesla.
#[inline]
#[must_use]
pub fn to_nanotesla(tesla: Scalar) -> Scalar {
    tesla * TESLA_TO_NANOTESLA
}
