//! Grid convergence of the peak deflection.
//!
//! The trapezoidal integration error is O(h²), so doubling the number of
//! segments should barely move the peak. This is a diagnostic for callers
//! choosing `segments`; analyses never run it on their own.

use log::info;
use serde::{Deserialize, Serialize};

use super::analyze;
use crate::beam::Beam;
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// Peak deflection at N and 2N segments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceStudy {
    pub segments: usize,
    pub peak_deflection_m: f64,
    pub refined_segments: usize,
    pub refined_peak_deflection_m: f64,
    /// |δ_2N - δ_N| / |δ_2N| (0 when both are zero)
    pub relative_change: f64,
}

impl ConvergenceStudy {
    /// Whether the change is below `tolerance` (e.g. 0.01 for 1%)
    pub fn converged(&self, tolerance: f64) -> bool {
        self.relative_change < tolerance
    }
}

/// Analyze `beam` at `settings.segments` and twice that, and compare peaks.
pub fn convergence_study(beam: &Beam, settings: &AnalysisSettings) -> CalcResult<ConvergenceStudy> {
    let coarse = analyze(beam, settings)?;
    let refined_settings = settings.with_segments(settings.segments * 2);
    let refined = analyze(beam, &refined_settings)?;

    let peak = coarse.serviceability.max_deflection_m;
    let refined_peak = refined.serviceability.max_deflection_m;
    let relative_change = if refined_peak > 0.0 {
        (refined_peak - peak).abs() / refined_peak
    } else {
        0.0
    };

    info!(
        "Convergence: {} segments -> {:.6e} m, {} segments -> {:.6e} m ({:.4}% change)",
        settings.segments,
        peak,
        refined_settings.segments,
        refined_peak,
        relative_change * 100.0
    );

    Ok(ConvergenceStudy {
        segments: settings.segments,
        peak_deflection_m: peak,
        refined_segments: refined_settings.segments,
        refined_peak_deflection_m: refined_peak,
        relative_change,
    })
}
