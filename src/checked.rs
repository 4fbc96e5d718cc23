//! Validating wrappers around the per-pair evaluators.
//!
//! These reject the configurations the raw kernels silently turn into
//! non-finite or sign-flipped results. Each wrapper validates and then calls
//! the unchecked function, so results are identical when validation passes.

use tracing::debug;

use crate::coordinates::{Axis, SphericalPoint};
use crate::dipole;
use crate::distance;
use crate::errors::GeoFieldError;
use crate::math::{is_finite, R3, Scalar};
use crate::prism::{self, Prism};

fn finite(vector: &R3, quantity: &'static str) -> Result<(), GeoFieldError> {
    if is_finite(vector) {
        Ok(())
    } else {
        debug!(quantity, ?vector, "rejected non-finite input");
        Err(GeoFieldError::NonFinite { quantity })
    }
}

fn check_prism_pair(point: R3, prism: &Prism, magnetization: R3) -> Result<(), GeoFieldError> {
    finite(&point, "observation point")?;
    finite(&magnetization, "magnetization")?;
    prism.validate().inspect_err(|err| debug!(?prism, %err, "rejected prism"))?;
    if prism.contains(point) {
        debug!(?prism, ?point, "observation point inside prism");
        return Err(GeoFieldError::InsidePrism);
    }
    Ok(())
}

/// [`prism::magnetic_field`] for a finite, well-ordered prism and an
/// observation point strictly outside it.
pub fn prism_magnetic_field(
    point: R3,
    prism: &Prism,
    magnetization: R3,
) -> Result<R3, GeoFieldError> {
    check_prism_pair(point, prism, magnetization)?;
    Ok(prism::magnetic_field(point, prism, magnetization))
}

/// [`prism::magnetic_component`] with the checks of [`prism_magnetic_field`].
pub fn prism_magnetic_component(
    point: R3,
    prism: &Prism,
    magnetization: R3,
    axis: Axis,
) -> Result<Scalar, GeoFieldError> {
    check_prism_pair(point, prism, magnetization)?;
    Ok(prism::magnetic_component(point, prism, magnetization, axis))
}

/// [`dipole::magnetic_field`] for finite inputs and a point distinct from the
/// dipole.
pub fn dipole_magnetic_field(point: R3, dipole: R3, moment: R3) -> Result<R3, GeoFieldError> {
    finite(&point, "observation point")?;
    finite(&dipole, "dipole position")?;
    finite(&moment, "magnetic moment")?;
    if point == dipole {
        debug!(?point, "observation point coincides with dipole");
        return Err(GeoFieldError::CoincidentPoints);
    }
    Ok(dipole::magnetic_field(point, dipole, moment))
}

fn check_spherical(point: &SphericalPoint) -> Result<(), GeoFieldError> {
    let SphericalPoint {
        longitude,
        latitude,
        radius,
    } = *point;
    if !(longitude.is_finite() && latitude.is_finite() && radius.is_finite()) {
        debug!(?point, "rejected non-finite spherical point");
        return Err(GeoFieldError::NonFinite {
            quantity: "spherical coordinate",
        });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        debug!(latitude, "latitude out of range");
        return Err(GeoFieldError::OutOfRange {
            quantity: "latitude",
            value: latitude,
        });
    }
    if radius < 0.0 {
        debug!(radius, "negative radius");
        return Err(GeoFieldError::OutOfRange {
            quantity: "radius",
            value: radius,
        });
    }
    Ok(())
}

/// [`distance::distance_spherical`] for finite points with latitudes in
/// `[−90°, 90°]` and non-negative radii.
pub fn distance_spherical(p: SphericalPoint, q: SphericalPoint) -> Result<Scalar, GeoFieldError> {
    check_spherical(&p)?;
    check_spherical(&q)?;
    Ok(distance::distance_spherical(p, q))
}
