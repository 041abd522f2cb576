//! # Analysis Settings
//!
//! Every tunable of an analysis run lives in [`AnalysisSettings`], which is
//! passed explicitly to [`analyze`](crate::calculations::analyze). There is
//! no process-wide configuration.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "segments": 400,
//!   "deflection_limit_divisor": 250.0,
//!   "equilibrium_tolerance": 1e-9,
//!   "negligible_deflection_m": 1e-6
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of grid segments (samples = segments + 1)
pub const DEFAULT_SEGMENTS: usize = 400;

/// Default serviceability limit L/250
pub const DEFAULT_DEFLECTION_LIMIT_DIVISOR: f64 = 250.0;

/// Default relative tolerance for the global equilibrium check
pub const DEFAULT_EQUILIBRIUM_TOLERANCE: f64 = 1e-9;

/// Smallest accepted equilibrium tolerance; tighter values would reject
/// ordinary rounding in the reaction sums
pub const MIN_EQUILIBRIUM_TOLERANCE: f64 = 1e-12;

/// Deflections below 0.001 mm are reported as negligible
pub const DEFAULT_NEGLIGIBLE_DEFLECTION_M: f64 = 1e-6;

/// Explicit configuration for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of evenly spaced grid segments over the span (>= 2)
    pub segments: usize,

    /// Deflection limit is span / divisor
    pub deflection_limit_divisor: f64,

    /// Relative tolerance for ΣF and ΣM residuals after solving reactions
    /// (>= [`MIN_EQUILIBRIUM_TOLERANCE`])
    pub equilibrium_tolerance: f64,

    /// Peak deflections below this (m) are flagged as negligible
    pub negligible_deflection_m: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            segments: DEFAULT_SEGMENTS,
            deflection_limit_divisor: DEFAULT_DEFLECTION_LIMIT_DIVISOR,
            equilibrium_tolerance: DEFAULT_EQUILIBRIUM_TOLERANCE,
            negligible_deflection_m: DEFAULT_NEGLIGIBLE_DEFLECTION_M,
        }
    }
}

impl AnalysisSettings {
    /// Same settings with a different grid resolution
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Same settings with a different deflection limit (span / divisor)
    pub fn with_limit_divisor(mut self, divisor: f64) -> Self {
        self.deflection_limit_divisor = divisor;
        self
    }

    /// Validate settings before a run.
    pub fn validate(&self) -> CalcResult<()> {
        if self.segments < 2 {
            return Err(CalcError::invalid_input(
                "segments",
                self.segments.to_string(),
                "At least 2 grid segments are required",
            ));
        }
        if !(self.deflection_limit_divisor.is_finite() && self.deflection_limit_divisor > 0.0) {
            return Err(CalcError::invalid_input(
                "deflection_limit_divisor",
                self.deflection_limit_divisor.to_string(),
                "Limit divisor must be positive",
            ));
        }
        if !(self.equilibrium_tolerance >= MIN_EQUILIBRIUM_TOLERANCE) {
            return Err(CalcError::invalid_input(
                "equilibrium_tolerance",
                self.equilibrium_tolerance.to_string(),
                format!("Tolerance must be at least {:e}", MIN_EQUILIBRIUM_TOLERANCE),
            ));
        }
        if !(self.negligible_deflection_m >= 0.0) {
            return Err(CalcError::invalid_input(
                "negligible_deflection_m",
                self.negligible_deflection_m.to_string(),
                "Threshold must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.segments, 400);
        assert_eq!(settings.deflection_limit_divisor, 250.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_coarse_grid() {
        let err = AnalysisSettings::default().with_segments(1).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(AnalysisSettings::default().with_segments(2).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_divisor() {
        assert!(AnalysisSettings::default().with_limit_divisor(0.0).validate().is_err());
        assert!(AnalysisSettings::default().with_limit_divisor(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_tolerance_below_floor() {
        let mut settings = AnalysisSettings::default();
        settings.equilibrium_tolerance = 1e-300;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput { ref field, .. } if field == "equilibrium_tolerance"
        ));

        settings.equilibrium_tolerance = MIN_EQUILIBRIUM_TOLERANCE;
        assert!(settings.validate().is_ok());
        settings.equilibrium_tolerance = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_negligible_threshold() {
        let mut settings = AnalysisSettings::default();
        settings.negligible_deflection_m = -1e-6;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput { ref field, .. } if field == "negligible_deflection_m"
        ));

        settings.negligible_deflection_m = 0.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AnalysisSettings =
            serde_json::from_str(r#"{"deflection_limit_divisor": 360.0}"#).unwrap();
        assert_eq!(settings.deflection_limit_divisor, 360.0);
        assert_eq!(settings.segments, DEFAULT_SEGMENTS);
    }
}
