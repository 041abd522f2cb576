//! Deflection by double integration of curvature (Euler–Bernoulli).
//!
//! ```text
//! κ(x) = M(x) / EI
//! θ(x) = ∫ κ dx + C1
//! y(x) = ∫ θ dx + C2
//! ```
//!
//! Both integrals use the cumulative trapezoidal rule (error O(h²)). The
//! constants are fixed by the pin-roller conditions y(0) = 0 and y(L) = 0.
//!
//! Deflection is measured positive upward, so a sagging (positive) moment
//! produces negative y.

use log::debug;
use serde::{Deserialize, Serialize};

use super::internal_forces::Sample;
use crate::errors::{CalcError, CalcResult};

/// One point of the deflected shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionPoint {
    /// Position from left support (m)
    pub x_m: f64,
    /// Rotation dy/dx (rad)
    pub slope_rad: f64,
    /// Vertical displacement (m), positive upward
    pub deflection_m: f64,
}

/// Deflected shape sampled on the analysis grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCurve {
    pub points: Vec<DeflectionPoint>,
}

impl DeflectionCurve {
    /// Point with the largest |y|, first occurrence on ties
    pub fn peak(&self) -> Option<&DeflectionPoint> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if b.deflection_m.abs() >= p.deflection_m.abs() => Some(b),
            _ => Some(p),
        })
    }

    /// Largest |y| (m), 0 for an empty curve
    pub fn max_magnitude(&self) -> f64 {
        self.peak().map_or(0.0, |p| p.deflection_m.abs())
    }

    /// `(x, y)` pairs for plotting
    pub fn diagram(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x_m, p.deflection_m)).collect()
    }
}

/// Cumulative trapezoidal integral of `values` over `xs`, starting at 0.
fn cumulative_trapezoid(xs: &[f64], values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut acc = 0.0;
    out.push(acc);
    for i in 1..values.len() {
        acc += 0.5 * (values[i - 1] + values[i]) * (xs[i] - xs[i - 1]);
        out.push(acc);
    }
    out
}

/// Solve `[[xi0, 1], [xi1, 1]] · [c1, c2] = [rhs0, rhs1]` by Cramer's rule.
fn solve_boundary_constants(xi0: f64, xi1: f64, rhs0: f64, rhs1: f64) -> CalcResult<(f64, f64)> {
    let det = xi0 - xi1;
    if det == 0.0 || !det.is_finite() {
        return Err(CalcError::statically_indeterminate(
            "support conditions do not fix the integration constants",
        ));
    }
    let c1 = (rhs0 - rhs1) / det;
    let c2 = (xi0 * rhs1 - xi1 * rhs0) / det;
    Ok((c1, c2))
}

/// Integrate the moment samples into a deflection curve.
///
/// `samples` must be ordered by position and cover the span from the left
/// support to the right support.
pub fn integrate(samples: &[Sample], ei_nm2: f64) -> CalcResult<DeflectionCurve> {
    if samples.len() < 2 {
        return Err(CalcError::invalid_input(
            "samples",
            samples.len().to_string(),
            "At least 2 samples are required to integrate",
        ));
    }
    if !(ei_nm2.is_finite() && ei_nm2 > 0.0) {
        return Err(CalcError::invalid_geometry(
            "ei_nm2",
            ei_nm2.to_string(),
            "Flexural rigidity E*I must be positive",
        ));
    }

    let xs: Vec<f64> = samples.iter().map(|s| s.x_m).collect();
    let curvature: Vec<f64> = samples.iter().map(|s| s.moment_nm / ei_nm2).collect();

    let slope_raw = cumulative_trapezoid(&xs, &curvature);
    let deflection_raw = cumulative_trapezoid(&xs, &slope_raw);

    let x0 = xs[0];
    let length = xs[xs.len() - 1] - x0;
    let last = deflection_raw.len() - 1;

    // y = y_raw + C1·ξ + C2 with ξ = (x - x0) / length, so ξ is exactly 0
    // and 1 at the supports.
    let (c1, c2) = solve_boundary_constants(0.0, 1.0, -deflection_raw[0], -deflection_raw[last])?;
    let slope_correction = c1 / length;

    debug!(
        "Deflection integration: {} samples, C1 = {:e}, C2 = {:e}",
        samples.len(),
        slope_correction,
        c2
    );

    let points = xs
        .iter()
        .zip(slope_raw.iter().zip(&deflection_raw))
        .map(|(&x, (&theta, &y))| {
            let xi = (x - x0) / length;
            DeflectionPoint {
                x_m: x,
                slope_rad: theta + slope_correction,
                deflection_m: y + c1 * xi + c2,
            }
        })
        .collect();

    Ok(DeflectionCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Beam;
    use crate::calculations::equilibrium::solve_reactions;
    use crate::calculations::internal_forces::evaluate;
    use crate::equations::beam as formulas;
    use crate::loads::Load;
    use approx::assert_relative_eq;

    fn curve_for(span: f64, ei: f64, loads: Vec<Load>, segments: usize) -> DeflectionCurve {
        let beam = Beam::with_loads(span, ei, loads).unwrap();
        let reactions = solve_reactions(&beam).unwrap();
        let samples = evaluate(&beam, &reactions, segments).unwrap();
        integrate(&samples, beam.ei_nm2()).unwrap()
    }

    #[test]
    fn test_cumulative_trapezoid_linear() {
        // ∫ 2x dx = x²; trapezoid is exact for linear integrands
        let xs = [0.0, 0.5, 1.0, 1.5, 2.0];
        let vals: Vec<f64> = xs.iter().map(|x| 2.0 * x).collect();
        let out = cumulative_trapezoid(&xs, &vals);
        for (x, v) in xs.iter().zip(out) {
            assert_relative_eq!(v, x * x, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_boundary_constants() {
        let (c1, c2) = solve_boundary_constants(0.0, 1.0, -0.0, -3.5).unwrap();
        assert_eq!(c1, -3.5);
        assert_eq!(c2, 0.0);
        assert!(solve_boundary_constants(0.5, 0.5, 1.0, 2.0).is_err());
    }

    #[test]
    fn test_supports_exactly_zero() {
        let curve = curve_for(
            7.3,
            3.1e6,
            vec![Load::point(4200.0, 2.9), Load::distributed(750.0, 1.3, 6.1)],
            137,
        );
        assert_eq!(curve.points.first().unwrap().deflection_m, 0.0);
        assert_eq!(curve.points.last().unwrap().deflection_m, 0.0);
    }

    #[test]
    fn test_udl_midspan_deflection() {
        // 5 m, 10 kN/m, EI = 2e7: δ = 5wL⁴/384EI
        let curve = curve_for(5.0, 2.0e7, vec![Load::uniform_full(10_000.0, 5.0)], 400);
        let expected = formulas::uniform_load_max_deflection(10_000.0, 5.0, 2.0e7);
        let peak = curve.peak().unwrap();

        assert!(peak.deflection_m < 0.0, "sagging must be negative");
        assert_relative_eq!(peak.deflection_m.abs(), expected, max_relative = 0.02);
        assert_relative_eq!(peak.x_m, 2.5, epsilon = 1e-9);
        // Symmetric shape: zero slope at midspan
        assert!(curve.points[200].slope_rad.abs() < 1e-9);
    }

    #[test]
    fn test_point_load_profile() {
        let (span, ei, p, a) = (6.0, 1.5e7, 12_000.0, 2.0);
        let curve = curve_for(span, ei, vec![Load::point(p, a)], 300);
        for point in curve.points.iter().step_by(25) {
            let expected = formulas::point_load_deflection(p, a, span, point.x_m, ei);
            assert_relative_eq!(-point.deflection_m, expected, epsilon = 1e-3 * 2.0e-3);
        }
    }

    #[test]
    fn test_unloaded_beam_is_flat() {
        let curve = curve_for(3.0, 1.0e6, vec![], 10);
        assert_eq!(curve.max_magnitude(), 0.0);
        assert_eq!(curve.points.len(), 11);
    }

    #[test]
    fn test_rejects_short_input() {
        let one = [Sample {
            x_m: 0.0,
            shear_n: 0.0,
            moment_nm: 0.0,
        }];
        assert!(integrate(&one, 1.0e6).is_err());
    }

    #[test]
    fn test_uplift_deflects_upward() {
        let curve = curve_for(4.0, 1.0e6, vec![Load::point(-1000.0, 2.0)], 80);
        assert!(curve.peak().unwrap().deflection_m > 0.0);
    }
}
