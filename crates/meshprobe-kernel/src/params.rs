//! Query parameters.

use meshprobe_math::{Tolerance, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Default ray direction for the reference containment test.
///
/// Skewed off the axes so it rarely lies in a triangle's plane or runs
/// exactly through an edge of axis-aligned geometry.
pub const REFERENCE_DIRECTION: [f64; 3] = [1.0, 0.1, 0.3];

/// Numeric parameters shared by all queries.
///
/// The default reproduces the canonical behavior. Deserializes from a
/// partial table, missing fields take their defaults; unknown fields are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryParams {
    /// Absolute determinant tolerance for the ray-triangle test.
    pub epsilon: f64,
    /// Ray direction used by the reference containment test.
    pub reference_direction: [f64; 3],
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            epsilon: Tolerance::DEFAULT.determinant,
            reference_direction: REFERENCE_DIRECTION,
        }
    }
}

impl QueryParams {
    /// Check that the tolerance is usable and the reference ray has a direction.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ParamsError::InvalidEpsilon(self.epsilon));
        }
        let dir = self.reference_ray_direction();
        if !dir.iter().all(|c| c.is_finite()) || dir.norm_squared() == 0.0 {
            return Err(ParamsError::DegenerateDirection(self.reference_direction));
        }
        Ok(())
    }

    /// [`reference_direction`](Self::reference_direction) as a vector.
    pub fn reference_ray_direction(&self) -> Vec3 {
        Vec3::from(self.reference_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = QueryParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.epsilon, f64::EPSILON);
        assert_eq!(params.reference_ray_direction(), Vec3::new(1.0, 0.1, 0.3));
    }

    #[test]
    fn test_rejects_bad_epsilon() {
        for epsilon in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
            let params = QueryParams {
                epsilon,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ParamsError::InvalidEpsilon(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_direction() {
        let params = QueryParams {
            reference_direction: [0.0, 0.0, 0.0],
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamsError::DegenerateDirection([0.0, 0.0, 0.0]))
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let params: QueryParams = toml::from_str("epsilon = 1e-12").unwrap();
        assert_eq!(params.epsilon, 1e-12);
        assert_eq!(params.reference_direction, REFERENCE_DIRECTION);

        let params: QueryParams = toml::from_str("reference_direction = [1.0, 0.2, 0.1]").unwrap();
        assert_eq!(params.epsilon, f64::EPSILON);
        assert_eq!(params.reference_direction, [1.0, 0.2, 0.1]);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = toml::from_str::<QueryParams>("tolerance = 1.0").unwrap_err();
        assert!(err.to_string().contains("tolerance"), "{err}");
    }
}
