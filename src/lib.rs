#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared mathematical utilities (scalar and vector aliases).
pub mod math;
/// Coordinate systems and axis labels.
pub mod coordinates;
/// Distances in Cartesian and spherical coordinates.
pub mod distance;
/// Point dipole sources.
pub mod dipole;
/// Rectangular prism sources and their kernel tensor.
pub mod prism;
/// Field descriptors built from evaluated vectors.
pub mod fields;
/// Validating wrappers around the per-pair evaluators.
pub mod checked;
/// Forward modelling over many sources and observation points.
pub mod forward;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
