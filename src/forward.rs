//! Forward modelling over many sources and many observation points.
//!
//! The field of a collection of sources is the sum of the per-pair kernels.
//! Every pair is independent, so batches over observation points can be
//! split across threads with no coordination (feature `parallel`).

#[cfg(feature = "parallel")]
use std::num::NonZeroUsize;

use tracing::{debug, info_span};

use crate::checked;
use crate::dipole::{self, Dipole};
use crate::errors::GeoFieldError;
use crate::fields::MagneticField;
use crate::math::{is_finite, R3, Scalar};
use crate::prism::{self, MagnetizedPrism};

/// How much input checking a batch performs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Call the raw kernels; degenerate pairs yield non-finite values.
    #[default]
    Unchecked,
    /// Validate every pair and stop at the first invalid one.
    Strict,
}

/// Options for batch forward modelling.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForwardConfig {
    /// Input checking applied to each (point, source) pair.
    pub validation: Validation,
    /// Split observation points across threads. Needs feature `parallel`.
    pub parallel: bool,
}

impl ForwardConfig {
    /// Unchecked, single-threaded configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validation: Validation::Unchecked,
            parallel: false,
        }
    }

    /// Single-threaded configuration validating every pair.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validation: Validation::Strict,
            parallel: false,
        }
    }

    /// Enables chunked parallel evaluation over observation points.
    #[must_use]
    pub const fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

/// A source whose magnetic field can be evaluated at a point.
pub trait FieldSource: Sync {
    /// Magnetic field at `point` in tesla, without validation.
    fn magnetic_field(&self, point: R3) -> R3;

    /// Magnetic field at `point` in tesla, rejecting degenerate configurations.
    fn checked_magnetic_field(&self, point: R3) -> Result<R3, GeoFieldError>;
}

impl FieldSource for MagnetizedPrism {
    #[inline]
    fn magnetic_field(&self, point: R3) -> R3 {
        prism::magnetic_field(point, &self.prism, self.magnetization)
    }

    fn checked_magnetic_field(&self, point: R3) -> Result<R3, GeoFieldError> {
        checked::prism_magnetic_field(point, &self.prism, self.magnetization)
    }
}

impl FieldSource for Dipole {
    #[inline]
    fn magnetic_field(&self, point: R3) -> R3 {
        dipole::magnetic_field(point, self.position, self.moment)
    }

    fn checked_magnetic_field(&self, point: R3) -> Result<R3, GeoFieldError> {
        checked::dipole_magnetic_field(point, self.position, self.moment)
    }
}

/// Total magnetic field of `sources` at `point`, in tesla.
#[must_use]
pub fn field_at<S: FieldSource>(point: R3, sources: &[S]) -> R3 {
    sources
        .iter()
        .fold(R3::zeros(), |b, source| b + source.magnetic_field(point))
}

/// [`field_at`] validating every source against `point`.
pub fn checked_field_at<S: FieldSource>(point: R3, sources: &[S]) -> Result<R3, GeoFieldError> {
    sources.iter().try_fold(R3::zeros(), |b, source| {
        Ok(b + source.checked_magnetic_field(point)?)
    })
}

fn evaluate_chunk<S: FieldSource>(
    points: &[R3],
    sources: &[S],
    validation: Validation,
    out: &mut [R3],
) -> Result<(), GeoFieldError> {
    for (b, point) in out.iter_mut().zip(points) {
        *b = match validation {
            Validation::Unchecked => field_at(*point, sources),
            Validation::Strict => checked_field_at(*point, sources)?,
        };
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<S: FieldSource>(
    points: &[R3],
    sources: &[S],
    validation: Validation,
    out: &mut [R3],
) -> Result<(), GeoFieldError> {
    use rayon::{
        iter::{IndexedParallelIterator, ParallelIterator},
        slice::{ParallelSlice, ParallelSliceMut},
    };

    let ncores = std::thread::available_parallelism()
        .unwrap_or(NonZeroUsize::MIN)
        .get();
    let n = (points.len() / ncores).max(1);

    out.par_chunks_mut(n)
        .zip(points.par_chunks(n))
        .try_for_each(|(out, points)| evaluate_chunk(points, sources, validation, out))
}

/// Total magnetic field of `sources` on every point of `points`, written to
/// `out` in tesla.
///
/// `out` must have the same length as `points`. With
/// [`Validation::Strict`] the first invalid pair aborts the batch and the
/// content of `out` is unspecified.
pub fn field_on_points<S: FieldSource>(
    points: &[R3],
    sources: &[S],
    config: &ForwardConfig,
    out: &mut [R3],
) -> Result<(), GeoFieldError> {
    if out.len() != points.len() {
        return Err(GeoFieldError::LengthMismatch {
            expected: points.len(),
            found: out.len(),
        });
    }
    let span = info_span!(
        "field_on_points",
        points = points.len(),
        sources = sources.len(),
        validation = ?config.validation,
    );
    let _enter = span.enter();

    let result = if config.parallel {
        #[cfg(feature = "parallel")]
        {
            evaluate_parallel(points, sources, config.validation, out)
        }
        #[cfg(not(feature = "parallel"))]
        {
            tracing::warn!(
                "parallel evaluation requested without the `parallel` feature; running serially"
            );
            evaluate_chunk(points, sources, config.validation, out)
        }
    } else {
        evaluate_chunk(points, sources, config.validation, out)
    };

    match &result {
        Ok(()) => debug!("forward batch complete"),
        Err(err) => debug!(%err, "forward batch aborted"),
    }
    result
}

/// Allocating variant of [`field_on_points`].
pub fn collect_field_on_points<S: FieldSource>(
    points: &[R3],
    sources: &[S],
    config: &ForwardConfig,
) -> Result<Vec<R3>, GeoFieldError> {
    let mut out = vec![R3::zeros(); points.len()];
    field_on_points(points, sources, config, &mut out)?;
    Ok(out)
}

/// Field of `sources` at `point` as a magnitude and direction.
#[must_use]
pub fn field_descriptor_at<S: FieldSource>(point: R3, sources: &[S]) -> MagneticField {
    MagneticField::from_vector(field_at(point, sources))
}

/// Total-field anomaly of `sources` on every point of `points`, in tesla.
///
/// Each anomaly is the projection of the anomalous field on the direction of
/// the regional field `regional`, which is what a scalar magnetometer records
/// when the anomaly is small against the regional field. Only the direction
/// of `regional` matters.
pub fn total_field_anomaly<S: FieldSource>(
    points: &[R3],
    sources: &[S],
    regional: R3,
    config: &ForwardConfig,
) -> Result<Vec<Scalar>, GeoFieldError> {
    if !is_finite(&regional) {
        return Err(GeoFieldError::NonFinite {
            quantity: "regional field",
        });
    }
    let norm = regional.norm();
    if norm == 0.0 {
        return Err(GeoFieldError::OutOfRange {
            quantity: "regional field norm",
            value: norm,
        });
    }
    let fields = collect_field_on_points(points, sources, config)?;
    Ok(fields
        .into_iter()
        .map(|b| MagneticField::from(b).projection(regional))
        .collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::prism::Prism;

    fn sources() -> Vec<MagnetizedPrism> {
        vec![
            MagnetizedPrism::new(
                Prism::new(0.0, 10.0, 0.0, 10.0, -20.0, -5.0),
                R3::new(0.0, 0.0, 2.0),
            ),
            MagnetizedPrism::new(
                Prism::new(15.0, 30.0, -5.0, 5.0, -40.0, -10.0),
                R3::new(1.0, -1.0, 0.5),
            ),
        ]
    }

    fn grid() -> Vec<R3> {
        let mut points = Vec::new();
        for i in 0..6 {
            for j in 0..5 {
                points.push(R3::new(-10.0 + 10.0 * f64::from(i), -10.0 + 7.5 * f64::from(j), 1.0));
            }
        }
        points
    }

    #[test]
    fn field_at_sums_individual_sources() {
        let sources = sources();
        let point = R3::new(3.0, -7.0, 2.0);
        let expected = prism::magnetic_field(point, &sources[0].prism, sources[0].magnetization)
            + prism::magnetic_field(point, &sources[1].prism, sources[1].magnetization);
        assert_eq!(field_at(point, &sources), expected);
        assert_eq!(checked_field_at(point, &sources), Ok(expected));
    }

    #[test]
    fn batch_matches_pointwise_evaluation() {
        let sources = sources();
        let points = grid();
        let out = collect_field_on_points(&points, &sources, &ForwardConfig::strict()).unwrap();
        for (point, b) in points.iter().zip(&out) {
            assert_eq!(*b, field_at(*point, &sources));
        }
    }

    #[test]
    fn parallel_request_gives_same_result() {
        let sources = sources();
        let points = grid();
        let serial = collect_field_on_points(&points, &sources, &ForwardConfig::new()).unwrap();
        let parallel =
            collect_field_on_points(&points, &sources, &ForwardConfig::new().with_parallel())
                .unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn strict_batch_reports_point_inside_source() {
        let sources = sources();
        let mut points = grid();
        points.push(R3::new(5.0, 5.0, -10.0));
        let err = collect_field_on_points(&points, &sources, &ForwardConfig::strict());
        assert_eq!(err, Err(GeoFieldError::InsidePrism));
    }

    #[test]
    fn mismatched_output_buffer_is_rejected() {
        let mut out = vec![R3::zeros(); 2];
        let err = field_on_points(&grid(), &sources(), &ForwardConfig::default(), &mut out);
        assert_eq!(
            err,
            Err(GeoFieldError::LengthMismatch {
                expected: 30,
                found: 2
            })
        );
    }

    #[test]
    fn dipole_sources_superpose() {
        let dipoles = [
            Dipole::new(R3::new(0.0, 0.0, -10.0), R3::new(0.0, 0.0, 1.0e3)),
            Dipole::new(R3::new(5.0, 0.0, -10.0), R3::new(0.0, 0.0, -1.0e3)),
        ];
        let point = R3::new(2.5, 0.0, 0.0);
        let b = field_at(point, &dipoles);
        // Opposite moments at mirrored positions cancel the vertical component.
        assert_relative_eq!(b.z, 0.0, epsilon = 1.0e-20);
        assert_relative_eq!(
            b.x,
            dipole::magnetic_e(point, dipoles[0].position, dipoles[0].moment) * 2.0,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn descriptor_matches_summed_vector() {
        let sources = sources();
        let point = R3::new(3.0, -7.0, 2.0);
        let field = field_descriptor_at(point, &sources);
        let b = field_at(point, &sources);
        assert_relative_eq!(field.magnitude, b.norm(), max_relative = 1.0e-15);
        assert_relative_eq!(field.to_vector(), b, max_relative = 1.0e-12);
    }

    #[test]
    fn total_field_anomaly_projects_on_regional_direction() {
        let sources = sources();
        let points = grid();
        let vertical = total_field_anomaly(
            &points,
            &sources,
            R3::new(0.0, 0.0, -5.0e4),
            &ForwardConfig::strict(),
        )
        .unwrap();
        let fields = collect_field_on_points(&points, &sources, &ForwardConfig::new()).unwrap();
        assert_eq!(vertical.len(), points.len());
        for (anomaly, b) in vertical.iter().zip(&fields) {
            assert_relative_eq!(*anomaly, -b.z, max_relative = 1.0e-12, epsilon = 1.0e-25);
        }

        let inclined = R3::new(0.0, 1.0, -1.0);
        let tilted =
            total_field_anomaly(&points, &sources, inclined, &ForwardConfig::new()).unwrap();
        for (anomaly, b) in tilted.iter().zip(&fields) {
            let expected = (b.y - b.z) / 2.0_f64.sqrt();
            assert_relative_eq!(*anomaly, expected, max_relative = 1.0e-12, epsilon = 1.0e-25);
        }
    }

    #[test]
    fn total_field_anomaly_rejects_degenerate_regional_field() {
        let config = ForwardConfig::new();
        assert_eq!(
            total_field_anomaly(&grid(), &sources(), R3::zeros(), &config),
            Err(GeoFieldError::OutOfRange {
                quantity: "regional field norm",
                value: 0.0
            })
        );
        assert_eq!(
            total_field_anomaly(&grid(), &sources(), R3::new(Scalar::NAN, 0.0, 1.0), &config),
            Err(GeoFieldError::NonFinite {
                quantity: "regional field"
            })
        );
    }
}
