//! Support reactions from static equilibrium.
//!
//! Pin at x = 0, roller at x = L. Taking moments about the pin:
//!
//! ```text
//! ΣF:  R1 + R2 = F_total
//! ΣM0: R2·L    = Σ P·a + Σ (w·(b - a))·(a + b)/2
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;

/// Vertical support reactions (N, positive upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Pin support at x = 0
    pub left_n: f64,
    /// Roller support at x = L
    pub right_n: f64,
}

impl Reactions {
    /// R1 + R2
    pub fn total(&self) -> f64 {
        self.left_n + self.right_n
    }
}

/// Solve the two support reactions of `beam`.
pub fn solve_reactions(beam: &Beam) -> CalcResult<Reactions> {
    let span = beam.span_m();
    if !(span.is_finite() && span > 0.0) {
        return Err(CalcError::statically_indeterminate(format!(
            "span {} m cannot carry a pin-roller pair",
            span
        )));
    }

    let total_force: f64 = beam.loads().iter().map(Load::resultant).sum();
    let moment_about_left: f64 = beam.loads().iter().map(Load::moment_about_origin).sum();

    let right_n = moment_about_left / span;
    let left_n = total_force - right_n;

    if !(left_n.is_finite() && right_n.is_finite()) {
        return Err(CalcError::statically_indeterminate(
            "reactions are not finite",
        ));
    }

    debug!(
        "Reactions: F_total = {:.6} N, M0 = {:.6} N·m -> R1 = {:.6} N, R2 = {:.6} N",
        total_force, moment_about_left, left_n, right_n
    );

    Ok(Reactions { left_n, right_n })
}

/// Largest equilibrium residual relative to the load scale.
///
/// Returns `max(|ΣF|, |ΣM0| / L) / scale`, where `scale` is the sum of
/// absolute load resultants (1.0 for an unloaded beam).
pub fn equilibrium_residual(beam: &Beam, reactions: &Reactions) -> f64 {
    let span = beam.span_m();
    let force_residual = reactions.total() - beam.total_load();
    let moment_residual = reactions.right_n * span
        - beam
            .loads()
            .iter()
            .map(Load::moment_about_origin)
            .sum::<f64>();

    let scale = beam
        .loads()
        .iter()
        .map(|load| load.resultant().abs())
        .sum::<f64>()
        .max(1.0);

    force_residual.abs().max(moment_residual.abs() / span) / scale
}

/// Fail with `StaticallyIndeterminate` when `residual` exceeds `tolerance`.
pub fn check_equilibrium(residual: f64, tolerance: f64) -> CalcResult<()> {
    if residual <= tolerance {
        Ok(())
    } else {
        Err(CalcError::statically_indeterminate(format!(
            "equilibrium residual {:e} exceeds tolerance {:e}",
            residual, tolerance
        )))
    }
}
