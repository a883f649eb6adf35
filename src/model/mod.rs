//! Parameter Model Module
//!
//! Deterministic derivation of the quantities a transient wellbore
//! temperature simulation consumes. All math here is pure arithmetic over
//! one input deck — no iteration over depth or time.
//!
//! - [`ParameterModel`] — the immutable derived snapshot
//! - [`heat_source`] — empirical qp/qa heat-generation correlations

pub mod heat_source;
pub mod parameters;

pub use heat_source::{
    annulus_friction_heat, bit_power_heat, nozzle_pressure_heat, pipe_heat_source,
};
pub use parameters::{ParameterModel, RADIAL_SECTIONS};
