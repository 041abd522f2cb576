//! # Beam Model
//!
//! Geometry, stiffness and the ordered load collection of a simply-supported
//! beam (pin at x = 0, roller at x = L). A [`Beam`] is validated on
//! construction and never mutated afterwards: adding a load consumes the
//! beam and hands back a new one.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{flexural_rigidity, Beam};
//! use beam_core::loads::Load;
//!
//! // 6 m steel beam, E = 200 GPa, I = 8.36e-5 m^4
//! let beam = Beam::new(6.0, flexural_rigidity(200e9, 8.36e-5))?
//!     .with_load(Load::point(20_000.0, 2.0))?
//!     .with_load(Load::uniform_full(1_500.0, 6.0))?;
//!
//! assert_eq!(beam.loads().len(), 2);
//! # Ok::<(), beam_core::CalcError>(())
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;

/// Below this second moment of area (m⁴) the input is most likely in the
/// wrong unit.
pub const SUSPICIOUS_INERTIA_M4: f64 = 1e-10;

/// Flexural rigidity E·I (N·m²) from modulus (Pa) and second moment (m⁴).
pub fn flexural_rigidity(e_pa: f64, i_m4: f64) -> f64 {
    if i_m4 > 0.0 && i_m4 < SUSPICIOUS_INERTIA_M4 {
        warn!(
            "Moment of inertia {:e} m^4 is extremely small - check units",
            i_m4
        );
    }
    e_pa * i_m4
}

/// Simply-supported beam with its applied loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BeamData")]
pub struct Beam {
    span_m: f64,
    ei_nm2: f64,
    loads: Vec<Load>,
}

/// Unvalidated wire shape; deserialization goes through [`Beam::with_loads`].
#[derive(Deserialize)]
struct BeamData {
    span_m: f64,
    ei_nm2: f64,
    #[serde(default)]
    loads: Vec<Load>,
}

impl TryFrom<BeamData> for Beam {
    type Error = CalcError;

    fn try_from(data: BeamData) -> CalcResult<Self> {
        Beam::with_loads(data.span_m, data.ei_nm2, data.loads)
    }
}

impl Beam {
    /// Create an unloaded beam.
    ///
    /// Fails with `InvalidGeometry` when the span or the flexural rigidity is
    /// not a positive finite number.
    pub fn new(span_m: f64, ei_nm2: f64) -> CalcResult<Self> {
        if !(span_m.is_finite() && span_m > 0.0) {
            return Err(CalcError::invalid_geometry(
                "span_m",
                span_m.to_string(),
                "Span must be a positive length",
            ));
        }
        if !(ei_nm2.is_finite() && ei_nm2 > 0.0) {
            return Err(CalcError::invalid_geometry(
                "ei_nm2",
                ei_nm2.to_string(),
                "Flexural rigidity E*I must be positive",
            ));
        }
        Ok(Beam {
            span_m,
            ei_nm2,
            loads: Vec::new(),
        })
    }

    /// Create a beam and validate every load against its span.
    pub fn with_loads(
        span_m: f64,
        ei_nm2: f64,
        loads: impl IntoIterator<Item = Load>,
    ) -> CalcResult<Self> {
        loads
            .into_iter()
            .try_fold(Beam::new(span_m, ei_nm2)?, Beam::with_load)
    }

    /// Return a new beam with `load` appended.
    pub fn with_load(mut self, load: Load) -> CalcResult<Self> {
        load.validate(self.loads.len(), self.span_m)?;
        self.loads.push(load);
        Ok(self)
    }

    /// Span length L (m)
    pub fn span_m(&self) -> f64 {
        self.span_m
    }

    /// Flexural rigidity E·I (N·m²)
    pub fn ei_nm2(&self) -> f64 {
        self.ei_nm2
    }

    /// Loads in the order they were added
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Sum of all load resultants (N, positive downward)
    pub fn total_load(&self) -> f64 {
        self.loads.iter().map(Load::resultant).sum()
    }
}
