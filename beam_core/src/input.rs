//! # Beam Input Document
//!
//! The front-end representation of a beam: every value carries the unit the
//! user typed it in. [`BeamInput::to_beam`] converts to SI and validates,
//! so the engine never sees anything else.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "B-1",
//!   "span": { "value": 6000.0, "unit": "mm" },
//!   "modulus": { "value": 200.0, "unit": "GPa" },
//!   "inertia": { "value": 8.36e7, "unit": "mm4" },
//!   "loads": [
//!     { "type": "Point",
//!       "magnitude": { "value": 20.0, "unit": "kN" },
//!       "position": { "value": 2.0, "unit": "m" } },
//!     { "type": "Uniform",
//!       "intensity": { "value": 1.5, "unit": "kN/m" } }
//!   ],
//!   "settings": { "segments": 400 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::{flexural_rigidity, Beam};
use crate::errors::CalcResult;
use crate::loads::Load;
use crate::settings::AnalysisSettings;
use crate::units::{
    ForceUnit, InertiaUnit, LengthUnit, LineLoadUnit, ModulusUnit, Quantity,
};

/// A load as entered, in user units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadInput {
    /// Concentrated load (use negative magnitude for upward loading)
    Point {
        magnitude: Quantity<ForceUnit>,
        position: Quantity<LengthUnit>,
    },

    /// Uniform load over the whole span
    Uniform { intensity: Quantity<LineLoadUnit> },

    /// Uniform load over part of the span
    PartialUniform {
        intensity: Quantity<LineLoadUnit>,
        start: Quantity<LengthUnit>,
        end: Quantity<LengthUnit>,
    },
}

impl LoadInput {
    /// Convert to an SI [`Load`] on a span of `span_m`
    pub fn to_load(&self, span_m: f64) -> Load {
        match self {
            LoadInput::Point {
                magnitude,
                position,
            } => Load::point(magnitude.to_si(), position.to_si()),
            LoadInput::Uniform { intensity } => Load::uniform_full(intensity.to_si(), span_m),
            LoadInput::PartialUniform {
                intensity,
                start,
                end,
            } => Load::distributed(intensity.to_si(), start.to_si(), end.to_si()),
        }
    }
}

/// Input parameters for a simply-supported beam, in user units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    pub span: Quantity<LengthUnit>,

    /// Young's modulus of elasticity
    pub modulus: Quantity<ModulusUnit>,

    /// Second moment of area
    pub inertia: Quantity<InertiaUnit>,

    #[serde(default)]
    pub loads: Vec<LoadInput>,

    /// Analysis settings; omitted fields take their defaults
    #[serde(default)]
    pub settings: AnalysisSettings,
}

impl BeamInput {
    /// Convert to SI and build a validated [`Beam`].
    pub fn to_beam(&self) -> CalcResult<Beam> {
        let span_m = self.span.to_si();
        let ei = flexural_rigidity(self.modulus.to_si(), self.inertia.to_si());
        Beam::with_loads(
            span_m,
            ei,
            self.loads.iter().map(|load| load.to_load(span_m)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use approx::assert_relative_eq;

    const DOC: &str = r#"{
        "label": "B-1",
        "span": { "value": 6000.0, "unit": "mm" },
        "modulus": { "value": 200.0, "unit": "GPa" },
        "inertia": { "value": 8.36e7, "unit": "mm4" },
        "loads": [
            { "type": "Point",
              "magnitude": { "value": 20.0, "unit": "kN" },
              "position": { "value": 200.0, "unit": "cm" } },
            { "type": "Uniform",
              "intensity": { "value": 1.5, "unit": "kN/m" } }
        ],
        "settings": { "segments": 200 }
    }"#;

    #[test]
    fn test_parse_and_convert() {
        let input: BeamInput = serde_json::from_str(DOC).unwrap();
        assert_eq!(input.settings.segments, 200);
        assert_eq!(input.settings.deflection_limit_divisor, 250.0);

        let beam = input.to_beam().unwrap();
        assert_relative_eq!(beam.span_m(), 6.0, max_relative = 1e-12);
        assert_relative_eq!(beam.ei_nm2(), 200e9 * 8.36e-5, max_relative = 1e-12);
        assert_eq!(beam.loads().len(), 2);
        assert_relative_eq!(beam.loads()[0].resultant(), 20_000.0);
        assert_relative_eq!(beam.loads()[0].centroid(), 2.0, max_relative = 1e-12);
        assert_relative_eq!(beam.loads()[1].resultant(), 9_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_position_beyond_span_rejected() {
        let input = BeamInput {
            label: String::new(),
            span: Quantity::new(3.0, LengthUnit::Metre),
            modulus: Quantity::new(11_000.0, ModulusUnit::Megapascal),
            inertia: Quantity::new(1.0e-5, InertiaUnit::Metre4),
            loads: vec![LoadInput::Point {
                magnitude: Quantity::new(2.0, ForceUnit::Kilonewton),
                position: Quantity::new(3500.0, LengthUnit::Millimetre),
            }],
            settings: AnalysisSettings::default(),
        };
        assert!(matches!(
            input.to_beam(),
            Err(CalcError::InvalidLoad { index: 0, .. })
        ));
    }

    fn input_on_span(span: Quantity<LengthUnit>, loads: Vec<LoadInput>) -> BeamInput {
        BeamInput {
            label: String::new(),
            span,
            modulus: Quantity::new(200.0, ModulusUnit::Gigapascal),
            inertia: Quantity::new(5.0e6, InertiaUnit::Millimetre4),
            loads,
            settings: AnalysisSettings::default(),
        }
    }

    #[test]
    fn test_load_at_right_support_in_other_unit() {
        let input = input_on_span(
            Quantity::new(0.7, LengthUnit::Metre),
            vec![LoadInput::Point {
                magnitude: Quantity::new(1.0, ForceUnit::Kilonewton),
                position: Quantity::new(70.0, LengthUnit::Centimetre),
            }],
        );
        let beam = input.to_beam().unwrap();
        assert_eq!(beam.loads()[0].centroid(), beam.span_m());

        let input = input_on_span(
            Quantity::new(0.7, LengthUnit::Metre),
            vec![LoadInput::Point {
                magnitude: Quantity::new(1.0, ForceUnit::Kilonewton),
                position: Quantity::new(700.0, LengthUnit::Millimetre),
            }],
        );
        assert!(input.to_beam().is_ok());
    }

    #[test]
    fn test_partial_udl_ending_at_support_in_other_unit() {
        let input = input_on_span(
            Quantity::new(4100.0, LengthUnit::Millimetre),
            vec![LoadInput::PartialUniform {
                intensity: Quantity::new(2.0, LineLoadUnit::KilonewtonPerMetre),
                start: Quantity::new(30.0, LengthUnit::Centimetre),
                end: Quantity::new(410.0, LengthUnit::Centimetre),
            }],
        );
        let beam = input.to_beam().unwrap();
        assert_eq!(beam.span_m(), 4.1);
        assert_relative_eq!(beam.loads()[0].resultant(), 2_000.0 * 3.8, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        let input = BeamInput {
            label: "bad".into(),
            span: Quantity::new(3.0, LengthUnit::Metre),
            modulus: Quantity::new(0.0, ModulusUnit::Gigapascal),
            inertia: Quantity::new(1.0e6, InertiaUnit::Millimetre4),
            loads: vec![],
            settings: AnalysisSettings::default(),
        };
        assert!(matches!(
            input.to_beam(),
            Err(CalcError::InvalidGeometry { .. })
        ));
    }
}
