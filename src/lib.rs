//! Welltherm: Wellbore Thermal Circulation Parameters
//!
//! Derives the physical parameters and heat-source terms needed to run a
//! transient wellbore temperature simulation during drilling fluid
//! circulation. One input deck and one trajectory step size in, one
//! immutable parameter snapshot out.
//!
//! ## Architecture
//!
//! - **Config**: typed well input deck (`WellInput`), loadable from TOML
//! - **Well Path**: trajectory sampling contract supplying the grid cell length
//! - **Model**: derived snapshot (`ParameterModel`) — radii, velocities,
//!   per-cell gradients, and the qp/qa heat-source terms

pub mod config;
pub mod error;
pub mod model;
pub mod wellpath;

// Re-export the input deck
pub use config::WellInput;

// Re-export commonly used types
pub use error::ParameterError;
pub use model::{ParameterModel, RADIAL_SECTIONS};
pub use wellpath::{TrajectoryStation, UniformWellPath, WellPathSampler};
