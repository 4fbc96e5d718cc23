//! Rectangular prism sources.
//!
//! A prism is an axis-aligned box described by its six bounding planes. The
//! field evaluators in [`magnetic`] rely on the kernel tensor from [`kernels`]
//! evaluated at the eight vertices of the prism.

pub mod kernels;
mod magnetic;

pub use kernels::KernelTensor;
pub use magnetic::{
    magnetic_component, magnetic_e, magnetic_field, magnetic_n, magnetic_u, MagnetizedPrism,
};

use crate::coordinates::Axis;
use crate::errors::GeoFieldError;
use crate::math::{R3, Scalar};

/// Axis-aligned rectangular prism in Cartesian coordinates, in meters.
///
/// The hot-path evaluators assume `west ≤ east`, `south ≤ north` and
/// `bottom ≤ top` without checking; an inverted prism yields a field of the
/// opposite sign. Use [`Prism::validate`] when the bounds come from untrusted
/// input.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism {
    /// Western boundary (minimum easting).
    pub west: Scalar,
    /// Eastern boundary (maximum easting).
    pub east: Scalar,
    /// Southern boundary (minimum northing).
    pub south: Scalar,
    /// Northern boundary (maximum northing).
    pub north: Scalar,
    /// Bottom boundary (minimum upward).
    pub bottom: Scalar,
    /// Top boundary (maximum upward).
    pub top: Scalar,
}

impl Prism {
    /// Creates a prism from its six boundaries.
    #[must_use]
    pub const fn new(
        west: Scalar,
        east: Scalar,
        south: Scalar,
        north: Scalar,
        bottom: Scalar,
        top: Scalar,
    ) -> Self {
        Self {
            west,
            east,
            south,
            north,
            bottom,
            top,
        }
    }

    /// Builds a prism from `[west, east, south, north, bottom, top]`.
    #[must_use]
    pub const fn from_array(bounds: [Scalar; 6]) -> Self {
        let [west, east, south, north, bottom, top] = bounds;
        Self::new(west, east, south, north, bottom, top)
    }

    /// Bounds as `[west, east, south, north, bottom, top]`.
    #[must_use]
    pub const fn to_array(&self) -> [Scalar; 6] {
        [
            self.west,
            self.east,
            self.south,
            self.north,
            self.bottom,
            self.top,
        ]
    }

    /// Lower and upper bound along `axis`.
    #[inline]
    #[must_use]
    pub const fn bounds(&self, axis: Axis) -> (Scalar, Scalar) {
        match axis {
            Axis::Easting => (self.west, self.east),
            Axis::Northing => (self.south, self.north),
            Axis::Upward => (self.bottom, self.top),
        }
    }

    /// Side lengths along easting, northing and upward.
    #[must_use]
    pub fn dimensions(&self) -> R3 {
        R3::new(
            self.east - self.west,
            self.north - self.south,
            self.top - self.bottom,
        )
    }

    /// Volume in cubic meters.
    #[must_use]
    pub fn volume(&self) -> Scalar {
        self.dimensions().product()
    }

    /// Geometric center of the prism.
    #[must_use]
    pub fn center(&self) -> R3 {
        R3::new(
            0.5 * (self.west + self.east),
            0.5 * (self.south + self.north),
            0.5 * (self.bottom + self.top),
        )
    }

    /// Returns `true` when `point` lies inside the prism or on its boundary.
    #[must_use]
    pub fn contains(&self, point: R3) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            let (lower, upper) = self.bounds(axis);
            let c = point[axis.index()];
            lower <= c && c <= upper
        })
    }

    /// Returns `true` when no bound is above its counterpart.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            let (lower, upper) = self.bounds(axis);
            lower <= upper
        })
    }

    /// Checks that every bound is finite and the bounds are well ordered.
    pub fn validate(&self) -> Result<(), GeoFieldError> {
        if self.to_array().iter().any(|b| !b.is_finite()) {
            return Err(GeoFieldError::NonFinite {
                quantity: "prism boundary",
            });
        }
        for axis in Axis::ALL {
            let (lower, upper) = self.bounds(axis);
            if lower > upper {
                return Err(GeoFieldError::InvertedPrism { axis, lower, upper });
            }
        }
        Ok(())
    }
}

impl From<[Scalar; 6]> for Prism {
    fn from(bounds: [Scalar; 6]) -> Self {
        Self::from_array(bounds)
    }
}
