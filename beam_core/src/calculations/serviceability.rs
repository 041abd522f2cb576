//! Deflection serviceability check (span / divisor, L/250 by default).

use serde::{Deserialize, Serialize};

use super::deflection::DeflectionCurve;
use crate::settings::AnalysisSettings;

/// Outcome of the deflection check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceabilityResult {
    /// max |y| over the curve (m)
    pub max_deflection_m: f64,
    /// Where the peak occurs (m from left support)
    pub position_m: f64,
    /// Allowable deflection L / divisor (m)
    pub limit_m: f64,
    /// The divisor used (250 for L/250)
    pub limit_divisor: f64,
    /// Actual span-to-deflection ratio L/δ, `None` when the beam does not deflect
    pub deflection_ratio: Option<f64>,
    /// δ / limit
    pub utilization: f64,
    /// δ ≤ limit
    pub passes: bool,
    /// Peak is below the negligible-deflection threshold
    pub negligible: bool,
}

/// Compare the peak deflection magnitude against `span / divisor`.
pub fn check(
    curve: &DeflectionCurve,
    span_m: f64,
    settings: &AnalysisSettings,
) -> ServiceabilityResult {
    let (max_deflection_m, position_m) = curve
        .peak()
        .map_or((0.0, 0.0), |p| (p.deflection_m.abs(), p.x_m));

    let limit_m = span_m / settings.deflection_limit_divisor;
    let deflection_ratio = (max_deflection_m > 0.0).then(|| span_m / max_deflection_m);

    ServiceabilityResult {
        max_deflection_m,
        position_m,
        limit_m,
        limit_divisor: settings.deflection_limit_divisor,
        deflection_ratio,
        utilization: max_deflection_m / limit_m,
        passes: max_deflection_m <= limit_m,
        negligible: max_deflection_m < settings.negligible_deflection_m,
    }
}
