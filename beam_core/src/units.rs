//! # Unit Types
//!
//! Unit selections accepted by the input front end. The analysis engine only
//! ever sees SI values (N, m, Pa, m⁴); everything here exists to turn user
//! entries into those values before a [`Beam`](crate::beam::Beam) is built.
//!
//! ## Supported Units
//!
//! - Length: metres (m), millimetres (mm), centimetres (cm)
//! - Modulus of elasticity: gigapascals (GPa), megapascals (MPa)
//! - Second moment of area: mm⁴, m⁴
//! - Force: newtons (N), kilonewtons (kN)
//! - Distributed load: N/m, kN/m
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{LengthUnit, Quantity};
//!
//! let span = Quantity::new(6000.0, LengthUnit::Millimetre);
//! assert_eq!(span.to_si(), 6.0);
//! ```

use serde::{Deserialize, Serialize};

/// Conversion to and from SI base values.
///
/// Units smaller than SI scale by an exact integer divisor rather than an
/// inexact decimal factor, so 70 cm becomes exactly the same `f64` as 0.7 m.
pub trait Unit: Copy {
    /// Multiplier for units larger than the SI base
    fn si_factor(self) -> f64 {
        1.0
    }

    /// Exact divisor for units smaller than the SI base
    fn si_divisor(self) -> f64 {
        1.0
    }

    /// Short display label (e.g. "mm")
    fn label(self) -> &'static str;

    /// Convert a value in this unit to SI
    fn to_si(self, value: f64) -> f64 {
        value * self.si_factor() / self.si_divisor()
    }

    /// Convert an SI value into this unit
    fn from_si(self, value_si: f64) -> f64 {
        value_si * self.si_divisor() / self.si_factor()
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "m")]
    Metre,
    #[serde(rename = "mm")]
    Millimetre,
    #[serde(rename = "cm")]
    Centimetre,
}

impl LengthUnit {
    /// Units in menu order
    pub const ALL: [LengthUnit; 3] = [
        LengthUnit::Metre,
        LengthUnit::Millimetre,
        LengthUnit::Centimetre,
    ];
}

impl Unit for LengthUnit {
    fn si_divisor(self) -> f64 {
        match self {
            LengthUnit::Metre => 1.0,
            LengthUnit::Millimetre => 1000.0,
            LengthUnit::Centimetre => 100.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LengthUnit::Metre => "m",
            LengthUnit::Millimetre => "mm",
            LengthUnit::Centimetre => "cm",
        }
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Modulus of elasticity unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModulusUnit {
    #[default]
    #[serde(rename = "GPa")]
    Gigapascal,
    #[serde(rename = "MPa")]
    Megapascal,
}

impl ModulusUnit {
    pub const ALL: [ModulusUnit; 2] = [ModulusUnit::Gigapascal, ModulusUnit::Megapascal];
}

impl Unit for ModulusUnit {
    fn si_factor(self) -> f64 {
        match self {
            ModulusUnit::Gigapascal => 1e9,
            ModulusUnit::Megapascal => 1e6,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ModulusUnit::Gigapascal => "GPa",
            ModulusUnit::Megapascal => "MPa",
        }
    }
}

// ============================================================================
// Section Units
// ============================================================================

/// Second moment of area unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InertiaUnit {
    #[default]
    #[serde(rename = "mm4")]
    Millimetre4,
    #[serde(rename = "m4")]
    Metre4,
}

impl InertiaUnit {
    pub const ALL: [InertiaUnit; 2] = [InertiaUnit::Millimetre4, InertiaUnit::Metre4];
}

impl Unit for InertiaUnit {
    fn si_divisor(self) -> f64 {
        match self {
            InertiaUnit::Millimetre4 => 1e12,
            InertiaUnit::Metre4 => 1.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            InertiaUnit::Millimetre4 => "mm^4",
            InertiaUnit::Metre4 => "m^4",
        }
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceUnit {
    #[default]
    #[serde(rename = "N")]
    Newton,
    #[serde(rename = "kN")]
    Kilonewton,
}

impl ForceUnit {
    pub const ALL: [ForceUnit; 2] = [ForceUnit::Newton, ForceUnit::Kilonewton];
}

impl Unit for ForceUnit {
    fn si_factor(self) -> f64 {
        match self {
            ForceUnit::Newton => 1.0,
            ForceUnit::Kilonewton => 1e3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::Kilonewton => "kN",
        }
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed (line) load unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineLoadUnit {
    #[default]
    #[serde(rename = "N/m")]
    NewtonPerMetre,
    #[serde(rename = "kN/m")]
    KilonewtonPerMetre,
}

impl LineLoadUnit {
    pub const ALL: [LineLoadUnit; 2] = [
        LineLoadUnit::NewtonPerMetre,
        LineLoadUnit::KilonewtonPerMetre,
    ];
}

impl Unit for LineLoadUnit {
    fn si_factor(self) -> f64 {
        match self {
            LineLoadUnit::NewtonPerMetre => 1.0,
            LineLoadUnit::KilonewtonPerMetre => 1e3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LineLoadUnit::NewtonPerMetre => "N/m",
            LineLoadUnit::KilonewtonPerMetre => "kN/m",
        }
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// A user-entered value paired with its unit.
///
/// Serializes as `{ "value": 6000.0, "unit": "mm" }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: Unit> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Quantity { value, unit }
    }

    /// The value in SI base units
    pub fn to_si(&self) -> f64 {
        self.unit.to_si(self.value)
    }
}

impl<U: Unit> std::fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_conversions() {
        assert_eq!(LengthUnit::Metre.to_si(4.5), 4.5);
        assert_relative_eq!(LengthUnit::Millimetre.to_si(4500.0), 4.5);
        assert_relative_eq!(LengthUnit::Centimetre.to_si(450.0), 4.5);
        assert_relative_eq!(LengthUnit::Millimetre.from_si(4.5), 4500.0);
    }

    #[test]
    fn test_sub_si_lengths_match_metres_exactly() {
        assert_eq!(LengthUnit::Centimetre.to_si(70.0), 0.7);
        assert_eq!(LengthUnit::Millimetre.to_si(700.0), 0.7);
        assert_eq!(LengthUnit::Centimetre.to_si(30.0), 0.3);
        assert_eq!(LengthUnit::Millimetre.to_si(4100.0), 4.1);
    }

    #[test]
    fn test_modulus_and_inertia() {
        // 200 GPa steel, 8.36e7 mm^4 section
        assert_relative_eq!(ModulusUnit::Gigapascal.to_si(200.0), 200e9);
        assert_relative_eq!(ModulusUnit::Megapascal.to_si(11_000.0), 11e9);
        assert_relative_eq!(InertiaUnit::Millimetre4.to_si(8.36e7), 8.36e-5, max_relative = 1e-12);
        assert_eq!(InertiaUnit::Metre4.to_si(8.36e-5), 8.36e-5);
    }

    #[test]
    fn test_force_units() {
        assert_relative_eq!(ForceUnit::Kilonewton.to_si(12.5), 12_500.0);
        assert_relative_eq!(LineLoadUnit::KilonewtonPerMetre.to_si(2.0), 2000.0);
        assert_eq!(LineLoadUnit::NewtonPerMetre.label(), "N/m");
    }

    #[test]
    fn test_quantity_serialization() {
        let q = Quantity::new(6000.0, LengthUnit::Millimetre);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":6000.0,"unit":"mm"}"#);

        let parsed: Quantity<LengthUnit> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, q);
        assert_eq!(q.to_string(), "6000 mm");
    }
}
