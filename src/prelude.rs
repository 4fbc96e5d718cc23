//! Convenience re-exports for forward-modelling code.

pub use crate::constants::{to_nanotesla, MU0_OVER_4PI, VACUUM_PERMEABILITY};
pub use crate::coordinates::{Axis, SphericalPoint, SphericalTrig};
pub use crate::dipole::Dipole;
pub use crate::distance::{
    distance_cartesian, distance_spherical, distance_spherical_core, SphericalDistance,
};
pub use crate::errors::GeoFieldError;
pub use crate::fields::MagneticField;
pub use crate::forward::{
    checked_field_at, collect_field_on_points, field_at, field_descriptor_at, field_on_points,
    total_field_anomaly, FieldSource, ForwardConfig, Validation,
};
pub use crate::math::{R3, R3x3, Scalar};
pub use crate::prism::{KernelTensor, MagnetizedPrism, Prism};
