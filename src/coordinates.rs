//! Coordinate systems and axis labels.
//!
//! Cartesian points are plain [`R3`] vectors holding `(easting, northing,
//! upward)` in meters. Spherical points get their own type so the two systems
//! cannot be mixed by accident; converting between them is always explicit.

use crate::math::{R3, Scalar};

/// Cartesian axis of the `(easting, northing, upward)` frame.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Positive towards the east.
    Easting,
    /// Positive towards the north.
    Northing,
    /// Positive upwards.
    Upward,
}

impl Axis {
    /// All axes in `(easting, northing, upward)` order.
    pub const ALL: [Self; 3] = [Self::Easting, Self::Northing, Self::Upward];

    /// Position of the axis inside an `R3`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Easting => 0,
            Self::Northing => 1,
            Self::Upward => 2,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Easting => "easting",
            Self::Northing => "northing",
            Self::Upward => "upward",
        };
        f.write_str(name)
    }
}

/// Point in a geocentric spherical coordinate system.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPoint {
    /// Longitude in degrees.
    pub longitude: Scalar,
    /// Spherical latitude in degrees.
    pub latitude: Scalar,
    /// Radial distance from the origin in meters.
    pub radius: Scalar,
}

impl SphericalPoint {
    /// Creates a spherical point from degrees and meters.
    #[must_use]
    pub const fn new(longitude: Scalar, latitude: Scalar, radius: Scalar) -> Self {
        Self {
            longitude,
            latitude,
            radius,
        }
    }

    /// Converts the angles to radians and caches the latitude sine and cosine.
    #[inline]
    #[must_use]
    pub fn precompute(&self) -> SphericalTrig {
        let latitude = self.latitude.to_radians();
        let (sin_latitude, cos_latitude) = latitude.sin_cos();
        SphericalTrig {
            longitude: self.longitude.to_radians(),
            cos_latitude,
            sin_latitude,
            radius: self.radius,
        }
    }

    /// Geocentric Cartesian coordinates of the point in meters.
    ///
    /// The x axis crosses the equator at longitude 0, the z axis points to the
    /// north pole.
    #[must_use]
    pub fn to_cartesian(&self) -> R3 {
        let trig = self.precompute();
        let (sin_lon, cos_lon) = trig.longitude.sin_cos();
        let horizontal = self.radius * trig.cos_latitude;
        R3::new(
            horizontal * cos_lon,
            horizontal * sin_lon,
            self.radius * trig.sin_latitude,
        )
    }
}

/// Spherical point with its trigonometric quantities already evaluated.
///
/// Callers that measure distances from the same point many times build this
/// once and feed it to [`crate::distance::distance_spherical_core`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalTrig {
    /// Longitude in radians.
    pub longitude: Scalar,
    /// Cosine of the latitude.
    pub cos_latitude: Scalar,
    /// Sine of the latitude.
    pub sin_latitude: Scalar,
    /// Radial distance in meters.
    pub radius: Scalar,
}
