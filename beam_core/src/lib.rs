//! # beam_core - Simply-Supported Beam Analysis Engine
//!
//! `beam_core` computes the static response of a simply-supported beam under
//! point loads and uniformly distributed loads: support reactions, shear
//! force and bending moment diagrams, the deflection curve, and a deflection
//! serviceability check (L/250 by default).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from an immutable beam to a new result
//! - **SI only**: The engine sees N, m, Pa and m⁴; unit conversion happens
//!   in the [`input`] front end
//! - **JSON-First**: Inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, AnalysisSettings, Beam, Load};
//!
//! // 5 m beam, EI = 2e7 N·m², 10 kN/m over the full span
//! let beam = Beam::new(5.0, 2.0e7)?.with_load(Load::uniform_full(10_000.0, 5.0))?;
//! let result = analyze(&beam, &AnalysisSettings::default())?;
//!
//! assert!((result.reactions.left_n - 25_000.0).abs() < 1e-6);
//! assert!(result.passes());
//! # Ok::<(), beam_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam geometry, stiffness and load collection
//! - [`loads`] - Point and distributed loads
//! - [`calculations`] - Equilibrium, internal forces, deflection, serviceability
//! - [`equations`] - Closed-form textbook formulas for hand checks
//! - [`settings`] - Explicit analysis configuration
//! - [`units`] - Unit selections for the input front end
//! - [`input`] - JSON input document in user units
//! - [`errors`] - Structured error types
//! - [`file_io`] - Input loading and atomic result saves

pub mod beam;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod input;
pub mod loads;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use beam::{flexural_rigidity, Beam};
pub use calculations::{analyze, AnalysisResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_input, load_result, save_result};
pub use input::{BeamInput, LoadInput};
pub use loads::Load;
pub use settings::AnalysisSettings;
