//! # Beam Analysis Pipeline
//!
//! A single forward pass over an immutable [`Beam`]:
//!
//! ```text
//! Beam ──► equilibrium ──► internal_forces ──► deflection ──► serviceability
//!          (R1, R2)        (x, V, M)           (x, θ, y)      (δ vs L/250)
//! ```
//!
//! Each stage is a pure function; [`analyze`] runs them in order and
//! collects everything into an [`AnalysisResult`]. Errors stop the run and
//! no partial result is returned.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::calculations::analyze;
//! use beam_core::loads::Load;
//! use beam_core::settings::AnalysisSettings;
//!
//! let beam = Beam::new(6.0, 2.0e7)?
//!     .with_load(Load::uniform_full(5_000.0, 6.0))?;
//!
//! let result = analyze(&beam, &AnalysisSettings::default())?;
//! assert!((result.reactions.left_n - 15_000.0).abs() < 1e-6);
//! println!("δ_max = {:.2} mm", result.serviceability.max_deflection_m * 1e3);
//! # Ok::<(), beam_core::CalcError>(())
//! ```

pub mod convergence;
pub mod deflection;
pub mod equilibrium;
pub mod internal_forces;
pub mod serviceability;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

// Re-export commonly used types
pub use convergence::{convergence_study, ConvergenceStudy};
pub use deflection::{DeflectionCurve, DeflectionPoint};
pub use equilibrium::Reactions;
pub use internal_forces::Sample;
pub use serviceability::ServiceabilityResult;

/// Extreme value of a diagram and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    pub value: f64,
    pub position_m: f64,
}

/// Everything one analysis run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub span_m: f64,
    pub ei_nm2: f64,
    pub settings: AnalysisSettings,

    pub reactions: Reactions,
    /// Grid samples of V and M, ordered from x = 0 to x = L
    pub samples: Vec<Sample>,
    pub deflection: DeflectionCurve,
    pub serviceability: ServiceabilityResult,

    /// Largest |V| (value stored as magnitude)
    pub max_shear: Extreme,
    /// Most positive (sagging) moment
    pub max_moment: Extreme,
    /// Most negative (hogging) moment
    pub min_moment: Extreme,
}

impl AnalysisResult {
    /// `(x, V)` pairs for the shear force diagram
    pub fn shear_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.shear_n)).collect()
    }

    /// `(x, M)` pairs for the bending moment diagram
    pub fn moment_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.moment_nm)).collect()
    }

    /// `(x, y)` pairs for the deflection curve
    pub fn deflection_diagram(&self) -> Vec<(f64, f64)> {
        self.deflection.diagram()
    }

    /// Whether the deflection check passes
    pub fn passes(&self) -> bool {
        self.serviceability.passes
    }
}

fn extreme_by(samples: &[Sample], key: impl Fn(&Sample) -> f64) -> Extreme {
    samples.iter().fold(
        Extreme {
            value: f64::NEG_INFINITY,
            position_m: 0.0,
        },
        |best, s| {
            let value = key(s);
            if value > best.value {
                Extreme {
                    value,
                    position_m: s.x_m,
                }
            } else {
                best
            }
        },
    )
}

/// Run the full analysis of `beam`.
pub fn analyze(beam: &Beam, settings: &AnalysisSettings) -> CalcResult<AnalysisResult> {
    settings.validate()?;

    let reactions = equilibrium::solve_reactions(beam)?;
    let residual = equilibrium::equilibrium_residual(beam, &reactions);
    debug!("Equilibrium residual {:e}", residual);
    equilibrium::check_equilibrium(residual, settings.equilibrium_tolerance)?;

    let samples = internal_forces::evaluate(beam, &reactions, settings.segments)?;
    let deflection = deflection::integrate(&samples, beam.ei_nm2())?;
    let serviceability = serviceability::check(&deflection, beam.span_m(), settings);

    let max_shear = extreme_by(&samples, |s| s.shear_n.abs());
    let max_moment = extreme_by(&samples, |s| s.moment_nm);
    let min_moment = {
        let e = extreme_by(&samples, |s| -s.moment_nm);
        Extreme {
            value: -e.value,
            position_m: e.position_m,
        }
    };

    debug!(
        "Analysis complete: {} loads, {} samples, δ_max = {:e} m ({})",
        beam.loads().len(),
        samples.len(),
        serviceability.max_deflection_m,
        if serviceability.passes { "pass" } else { "fail" }
    );

    Ok(AnalysisResult {
        span_m: beam.span_m(),
        ei_nm2: beam.ei_nm2(),
        settings: *settings,
        reactions,
        samples,
        deflection,
        serviceability,
        max_shear,
        max_moment,
        min_moment,
    })
}
