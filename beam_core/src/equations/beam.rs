//! # Simply-Supported Beam Formulas
//!
//! Closed-form solutions for the two textbook cases the engine can be
//! checked against by hand: a single point load and a full-span uniform
//! load. Pin support at left (x = 0), roller at right (x = L).
//!
//! ## Notation
//!
//! - `l` = Span length (m)
//! - `x` = Position along beam from left support (m)
//! - `a` = Load position from left support (m), `b = l - a`
//! - `p` = Point load magnitude (N)
//! - `w` = Uniform load intensity (N/m)
//! - `ei` = Flexural rigidity E·I (N·m²)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive sagging
//! - Deflection: Positive downward (opposite to the integrated curve,
//!   which is positive upward)
//! - Reactions: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

use crate::beam::Beam;
use crate::loads::Load;

// =============================================================================
// POINT LOAD FORMULAS
// =============================================================================

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    (p * (l - a) / l, p * a / l)
}

/// Shear at x (post-jump at x = a)
///
/// - V(x) = R1       for x < a
/// - V(x) = R1 - P   for x ≥ a
#[inline]
pub fn point_load_shear(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x < a {
        r1
    } else {
        r1 - p
    }
}

/// Moment at x
///
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

/// Deflection at x (positive downward)
///
/// ```text
/// x ≤ a:  δ(x) = Pbx(L² - b² - x²) / (6EIL)
/// x > a:  δ(x) = Pa(L-x)(L² - a² - (L-x)²) / (6EIL)
/// ```
#[inline]
pub fn point_load_deflection(p: f64, a: f64, l: f64, x: f64, ei: f64) -> f64 {
    let b = l - a;
    if x <= a {
        p * b * x * (l * l - b * b - x * x) / (6.0 * ei * l)
    } else {
        let u = l - x;
        p * a * u * (l * l - a * a - u * u) / (6.0 * ei * l)
    }
}

/// Deflection directly under the load
///
/// ```text
/// δ(a) = Pab(L² - a² - b²) / (6EIL) = Pa²b² / (3EIL)
/// ```
#[inline]
pub fn point_load_deflection_at_load(p: f64, a: f64, l: f64, ei: f64) -> f64 {
    let b = l - a;
    p * a * b * (l * l - a * a - b * b) / (6.0 * ei * l)
}

/// Maximum deflection for a point load anywhere on the span
///
/// The peak lies in the longer segment, at distance √((L² - s²)/3) from the
/// support on that side, where s is the shorter segment. For a = L/2 this
/// reduces to PL³/(48EI).
pub fn point_load_max_deflection(p: f64, a: f64, l: f64, ei: f64) -> f64 {
    let b = l - a;
    let x_peak = if a >= b {
        ((l * l - b * b) / 3.0).sqrt()
    } else {
        l - ((l * l - a * a) / 3.0).sqrt()
    };
    point_load_deflection(p, a, l, x_peak, ei)
}

// =============================================================================
// UNIFORM LOAD FORMULAS
// =============================================================================

/// Reactions for uniform load w over the full span: R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// V(x) = w(L/2 - x)
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// M(x) = wx(L-x)/2
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    w * x * (l - x) / 2.0
}

/// M_max = wL²/8 at midspan
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// δ(x) = wx(L³ - 2Lx² + x³) / (24EI)
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * ei)
}

/// δ_max = 5wL⁴ / (384EI) at midspan
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, ei: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * ei)
}

// =============================================================================
// HAND-CHECK
// =============================================================================

/// Closed-form peak deflection magnitude when `beam` is one of the textbook
/// cases (a single point load, or a single UDL covering the whole span).
///
/// Returns `None` for any other load arrangement.
pub fn reference_peak_deflection(beam: &Beam) -> Option<f64> {
    let l = beam.span_m();
    let ei = beam.ei_nm2();
    match beam.loads() {
        [Load::Point {
            magnitude_n,
            position_m,
        }] => Some(point_load_max_deflection(*magnitude_n, *position_m, l, ei).abs()),
        [Load::Distributed {
            intensity_n_per_m,
            start_m,
            end_m,
        }] if *start_m == 0.0 && *end_m == l => {
            Some(uniform_load_max_deflection(*intensity_n_per_m, l, ei).abs())
        }
        _ => None,
    }
}
