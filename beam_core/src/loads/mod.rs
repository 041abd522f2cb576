//! # Beam Loads
//!
//! Loads applied to a simply-supported beam. Only two kinds exist, so they
//! form a closed enum that the solver and evaluator match on directly.
//!
//! ## Sign Convention
//!
//! - Loads: positive downward (gravity direction), negative for uplift
//! - Positions: metres from the left (pinned) support
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::Load;
//!
//! let point = Load::point(10_000.0, 2.5);
//! let udl = Load::distributed(2_000.0, 0.0, 6.0);
//!
//! assert_eq!(point.resultant(), 10_000.0);
//! assert_eq!(udl.resultant(), 12_000.0);
//! assert_eq!(udl.centroid(), 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single load applied to the beam (SI units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated force (N) at a position (m from left support)
    Point { magnitude_n: f64, position_m: f64 },

    /// Uniform line load (N/m) between two positions (m from left support)
    Distributed {
        intensity_n_per_m: f64,
        start_m: f64,
        end_m: f64,
    },
}

impl Load {
    /// Create a point load
    pub fn point(magnitude_n: f64, position_m: f64) -> Self {
        Load::Point {
            magnitude_n,
            position_m,
        }
    }

    /// Create a uniform load over `[start_m, end_m]`
    pub fn distributed(intensity_n_per_m: f64, start_m: f64, end_m: f64) -> Self {
        Load::Distributed {
            intensity_n_per_m,
            start_m,
            end_m,
        }
    }

    /// Create a uniform load covering the whole span
    pub fn uniform_full(intensity_n_per_m: f64, span_m: f64) -> Self {
        Load::distributed(intensity_n_per_m, 0.0, span_m)
    }

    /// Get display name for legends
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point { .. } => "Point",
            Load::Distributed { .. } => "UDL",
        }
    }

    /// Total force carried by this load (N, positive downward)
    pub fn resultant(&self) -> f64 {
        match *self {
            Load::Point { magnitude_n, .. } => magnitude_n,
            Load::Distributed {
                intensity_n_per_m,
                start_m,
                end_m,
            } => intensity_n_per_m * (end_m - start_m),
        }
    }

    /// Position of the resultant's line of action (m)
    pub fn centroid(&self) -> f64 {
        match *self {
            Load::Point { position_m, .. } => position_m,
            Load::Distributed { start_m, end_m, .. } => (start_m + end_m) / 2.0,
        }
    }

    /// Moment of the resultant about the left support (N·m)
    pub fn moment_about_origin(&self) -> f64 {
        self.resultant() * self.centroid()
    }

    /// Check that the load fits on a span of `span_m`.
    ///
    /// `index` is the load's place in the beam's collection and is only
    /// used to label the error.
    pub fn validate(&self, index: usize, span_m: f64) -> CalcResult<()> {
        match *self {
            Load::Point {
                magnitude_n,
                position_m,
            } => {
                if !magnitude_n.is_finite() {
                    return Err(CalcError::invalid_load(
                        index,
                        format!("point load magnitude {} N is not finite", magnitude_n),
                    ));
                }
                if !(0.0..=span_m).contains(&position_m) {
                    return Err(CalcError::invalid_load(
                        index,
                        format!(
                            "point load position {} m is outside the {} m span",
                            position_m, span_m
                        ),
                    ));
                }
            }
            Load::Distributed {
                intensity_n_per_m,
                start_m,
                end_m,
            } => {
                if !intensity_n_per_m.is_finite() {
                    return Err(CalcError::invalid_load(
                        index,
                        format!("UDL intensity {} N/m is not finite", intensity_n_per_m),
                    ));
                }
                // Also rejects NaN bounds
                if !(start_m < end_m) {
                    return Err(CalcError::invalid_load(
                        index,
                        format!("UDL start {} m must be less than end {} m", start_m, end_m),
                    ));
                }
                if start_m < 0.0 || end_m > span_m {
                    return Err(CalcError::invalid_load(
                        index,
                        format!(
                            "UDL extent [{}, {}] m is outside the {} m span",
                            start_m, end_m, span_m
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Load::Point {
                magnitude_n,
                position_m,
            } => write!(f, "P = {:.3} N @ {:.3} m", magnitude_n, position_m),
            Load::Distributed {
                intensity_n_per_m,
                start_m,
                end_m,
            } => write!(
                f,
                "w = {:.3} N/m over {:.3}-{:.3} m",
                intensity_n_per_m, start_m, end_m
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_resultant() {
        let load = Load::point(-500.0, 1.2);
        assert_eq!(load.resultant(), -500.0);
        assert_eq!(load.centroid(), 1.2);
        assert_eq!(load.moment_about_origin(), -600.0);
    }

    #[test]
    fn test_partial_udl_resultant() {
        // 1 kN/m from 2 m to 8 m: W = 6 kN at 5 m
        let load = Load::distributed(1000.0, 2.0, 8.0);
        assert_eq!(load.resultant(), 6000.0);
        assert_eq!(load.centroid(), 5.0);
        assert_eq!(load.moment_about_origin(), 30_000.0);
    }

    #[test]
    fn test_validate_accepts_supports() {
        assert!(Load::point(100.0, 0.0).validate(0, 5.0).is_ok());
        assert!(Load::point(100.0, 5.0).validate(0, 5.0).is_ok());
        assert!(Load::uniform_full(100.0, 5.0).validate(0, 5.0).is_ok());
    }

    #[test]
    fn test_validate_point_outside_span() {
        let err = Load::point(100.0, 6.0).validate(3, 5.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidLoad { index: 3, .. }));

        let err = Load::point(100.0, -0.1).validate(0, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_LOAD");
    }

    #[test]
    fn test_validate_udl_interval() {
        // start > end
        let err = Load::distributed(100.0, 4.0, 1.0).validate(0, 5.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidLoad { .. }));

        // zero-length
        assert!(Load::distributed(100.0, 2.0, 2.0).validate(0, 5.0).is_err());

        // overhangs the right support
        assert!(Load::distributed(100.0, 2.0, 5.5).validate(0, 5.0).is_err());
    }

    #[test]
    fn test_validate_non_finite() {
        assert!(Load::point(f64::NAN, 1.0).validate(0, 5.0).is_err());
        assert!(Load::point(1.0, f64::NAN).validate(0, 5.0).is_err());
        assert!(Load::distributed(f64::INFINITY, 0.0, 1.0).validate(0, 5.0).is_err());
    }

    #[test]
    fn test_serialization() {
        let load = Load::point(2500.0, 1.5);
        let json = serde_json::to_string(&load).unwrap();
        assert_eq!(
            json,
            r#"{"type":"Point","magnitude_n":2500.0,"position_m":1.5}"#
        );
        let parsed: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, load);
    }
}
