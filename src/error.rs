//! Error types for input loading and parameter derivation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading a well input deck or deriving a
/// [`ParameterModel`](crate::ParameterModel).
///
/// Derivation is all-or-nothing: any failure aborts construction and no
/// partially initialized snapshot is observable.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// One or more required deck keys are absent. Lists every missing key,
    /// not just the first.
    #[error("missing required parameter(s): {}", .keys.join(", "))]
    MissingParameters { keys: Vec<String> },

    /// A derived quantity hit an arithmetic domain violation (zero
    /// cross-sectional area, negative base under a fractional exponent).
    #[error("domain error deriving {quantity}: {detail}")]
    Domain {
        quantity: &'static str,
        detail: String,
    },

    /// Input deck file could not be read.
    #[error("failed to read input deck {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    /// Input deck file is not valid TOML.
    #[error("failed to parse input deck {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}
