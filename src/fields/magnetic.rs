use crate::constants::to_nanotesla;
use crate::math::{R3, Scalar};

/// Magnetic field descriptor expressed in tesla (T).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField {
    /// Magnetic flux density magnitude (T).
    pub magnitude: Scalar,
    /// Unit direction vector, zero for a vanishing field.
    pub direction: R3,
}

impl MagneticField {
    /// Constructs a magnetic field from a vector representation.
    #[must_use]
    pub fn from_vector(vector: R3) -> Self {
        let magnitude = vector.norm();
        let direction = if magnitude == 0.0 {
            R3::zeros()
        } else {
            vector / magnitude
        };

        Self {
            magnitude,
            direction,
        }
    }

    /// Field vector `(b_e, b_n, b_u)` in tesla.
    #[must_use]
    pub fn to_vector(&self) -> R3 {
        self.direction * self.magnitude
    }

    /// Magnitude in nanotesla.
    #[must_use]
    pub fn magnitude_nt(&self) -> Scalar {
        to_nanotesla(self.magnitude)
    }

    /// Projection of the field on `direction`, in tesla.
    ///
    /// With the unit vector of the regional geomagnetic field this is the
    /// first-order total-field anomaly measured by scalar magnetometers.
    #[must_use]
    pub fn projection(&self, direction: R3) -> Scalar {
        let norm = direction.norm();
        if norm == 0.0 {
            return 0.0;
        }
        self.magnitude * self.direction.dot(&direction) / norm
    }
}

impl From<R3> for MagneticField {
    fn from(vector: R3) -> Self {
        Self::from_vector(vector)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_vector_handles_nonzero_input() {
        let vector = R3::new(1.0, 2.0, 2.0);
        let field = MagneticField::from_vector(vector);
        assert_relative_eq!(field.magnitude, 3.0, epsilon = 1.0e-12);
        assert_relative_eq!(field.direction.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(field.to_vector(), vector, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_field_has_zero_direction() {
        let field = MagneticField::from(R3::zeros());
        assert_eq!(field.magnitude, 0.0);
        assert_eq!(field.direction, R3::zeros());
        assert_eq!(field.projection(R3::new(0.0, 0.0, 1.0)), 0.0);
    }

    #[test]
    fn projection_on_unnormalized_direction() {
        let field = MagneticField::from_vector(R3::new(0.0, 3.0e-9, 4.0e-9));
        assert_relative_eq!(field.magnitude_nt(), 5.0, max_relative = 1.0e-12);
        let projected = field.projection(R3::new(0.0, 0.0, -2.0));
        assert_relative_eq!(projected, -4.0e-9, max_relative = 1.0e-12);
    }
}
