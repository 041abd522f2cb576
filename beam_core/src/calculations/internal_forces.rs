//! Shear and bending moment along the span.
//!
//! Sections are cut at x and everything to the left is summed:
//!
//! ```text
//! V(x) = R1 - Σ_{a ≤ x} P - Σ w·(min(x, b) - a)⁺
//! M(x) = R1·x - Σ_{a ≤ x} P·(x - a) - Σ ∫_a^{min(x, b)} w·(x - s) ds
//! ```
//!
//! A point load sitting exactly at x counts as already passed, so the shear
//! reported there is the value just to the right of the jump.

use serde::{Deserialize, Serialize};

use super::equilibrium::Reactions;
use crate::beam::Beam;
use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;

/// Internal forces at one grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Position from left support (m)
    pub x_m: f64,
    /// Shear force (N), positive when the left side is pushed up
    pub shear_n: f64,
    /// Bending moment (N·m), positive sagging
    pub moment_nm: f64,
}

/// Shear contribution of one load for a section at x
fn load_shear_left_of(load: &Load, x: f64) -> f64 {
    match *load {
        Load::Point {
            magnitude_n,
            position_m,
        } => {
            if position_m <= x {
                magnitude_n
            } else {
                0.0
            }
        }
        Load::Distributed {
            intensity_n_per_m,
            start_m,
            end_m,
        } => {
            if x <= start_m {
                0.0
            } else {
                intensity_n_per_m * (x.min(end_m) - start_m)
            }
        }
    }
}

/// Moment contribution about the section at x of one load
fn load_moment_left_of(load: &Load, x: f64) -> f64 {
    match *load {
        Load::Point {
            magnitude_n,
            position_m,
        } => {
            if position_m <= x {
                magnitude_n * (x - position_m)
            } else {
                0.0
            }
        }
        Load::Distributed {
            intensity_n_per_m,
            start_m,
            end_m,
        } => {
            if x <= start_m {
                0.0
            } else {
                // Loaded part [a, c] acts as w·(c - a) at its midpoint
                let covered_end = x.min(end_m);
                let covered = intensity_n_per_m * (covered_end - start_m);
                covered * (x - (start_m + covered_end) / 2.0)
            }
        }
    }
}

/// Shear at `x` (post-jump at point loads)
pub fn shear_at(beam: &Beam, reactions: &Reactions, x: f64) -> f64 {
    reactions.left_n
        - beam
            .loads()
            .iter()
            .map(|load| load_shear_left_of(load, x))
            .sum::<f64>()
}

/// Bending moment at `x`
pub fn moment_at(beam: &Beam, reactions: &Reactions, x: f64) -> f64 {
    reactions.left_n * x
        - beam
            .loads()
            .iter()
            .map(|load| load_moment_left_of(load, x))
            .sum::<f64>()
}

/// `segments + 1` evenly spaced positions over `[0, span]`.
///
/// The end points are exactly 0 and `span`.
pub fn grid_positions(span_m: f64, segments: usize) -> Vec<f64> {
    (0..=segments)
        .map(|i| {
            if i == segments {
                span_m
            } else {
                span_m * i as f64 / segments as f64
            }
        })
        .collect()
}

/// Evaluate V and M on an evenly spaced grid of `segments` intervals.
pub fn evaluate(beam: &Beam, reactions: &Reactions, segments: usize) -> CalcResult<Vec<Sample>> {
    if segments < 2 {
        return Err(CalcError::invalid_input(
            "segments",
            segments.to_string(),
            "At least 2 grid segments are required",
        ));
    }

    let samples = grid_positions(beam.span_m(), segments)
        .into_iter()
        .map(|x| Sample {
            x_m: x,
            shear_n: shear_at(beam, reactions, x),
            moment_nm: moment_at(beam, reactions, x),
        })
        .collect();

    Ok(samples)
}
