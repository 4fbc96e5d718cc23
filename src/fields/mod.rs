//! Field descriptors built from evaluated field vectors.

mod magnetic;

pub use magnetic::MagneticField;
