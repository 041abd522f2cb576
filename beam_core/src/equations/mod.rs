//! # Structural Engineering Equations
//!
//! Closed-form results used to cross-check the numerical engine and to
//! print hand-calculation values next to the computed ones.
//!
//! - [`beam`] - Simply-supported beam formulas (reactions, shear, moment, deflection)

pub mod beam;

// Re-export commonly used items
pub use beam::{
    point_load_deflection,
    point_load_deflection_at_load,
    point_load_max_deflection,
    point_load_moment,
    point_load_reactions,
    point_load_shear,
    reference_peak_deflection,
    uniform_load_deflection,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_moment,
    uniform_load_reactions,
    uniform_load_shear,
};
