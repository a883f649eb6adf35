//! Typed well input deck — every measured/assumed property the parameter
//! derivation consumes, with field-standard key names.
//!
//! Key names follow the industry deck convention (`ddi`, `lambdal`, `WOB`,
//! ...) so existing decks port over unchanged. Each field documents its
//! meaning and unit; all fields are required.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ParameterError;

/// Input deck for one physical/operational state of the well.
///
/// A pure value object with no defaults and no unit conversion. Construction
/// validates key presence only; arithmetic validity is enforced later, when
/// the parameter snapshot is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellInput {
    // === Temperatures ===
    /// Inlet fluid temperature (°C)
    pub tin: f64,
    /// Surface temperature at RKB (°C)
    pub ts: f64,

    // === Depths ===
    /// Water depth (m)
    pub wd: f64,
    /// Measured depth of the target (m)
    pub mdt: f64,

    // === Wellbore Geometry (diameters, m) ===
    /// Drill string inner diameter
    pub ddi: f64,
    /// Drill string outer diameter
    pub ddo: f64,
    /// Casing inner diameter
    pub dcsg: f64,
    /// Surrounding space inner diameter
    pub dsr: f64,
    /// Surrounding space outer diameter
    pub dsro: f64,
    /// Riser inner diameter
    pub dri: f64,
    /// Riser outer diameter
    pub dro: f64,
    /// Undisturbed formation diameter
    pub dfm: f64,

    // === Flow ===
    /// Circulation flow rate (m³/h)
    pub q: f64,

    // === Thermal Conductivity (W/(m·°C)) ===
    /// Drilling fluid
    pub lambdal: f64,
    /// Casing
    pub lambdac: f64,
    /// Drill pipe
    pub lambdad: f64,
    /// Comprehensive casing / surrounding space
    pub lambdacsr: f64,
    /// Surrounding space
    pub lambdasr: f64,
    /// Formation
    pub lambdafm: f64,
    /// Comprehensive surrounding space / formation
    pub lambdasrfm: f64,
    /// Riser
    pub lambdar: f64,
    /// Comprehensive riser / seawater
    pub lambdarw: f64,
    /// Seawater
    pub lambdaw: f64,

    // === Specific Heat Capacity (J/(kg·°C)) ===
    /// Drilling fluid
    pub cl: f64,
    /// Casing
    pub cc: f64,
    /// Drill pipe
    pub cd: f64,
    /// Riser
    pub cr: f64,
    /// Seawater
    pub cw: f64,
    /// Surrounding space
    pub csr: f64,
    /// Formation
    pub cfm: f64,

    // === Convective Heat Transfer Coefficient (W/(m²·°C)) ===
    /// Drill pipe inner wall
    pub h1: f64,
    /// Drill pipe outer wall
    pub h2: f64,
    /// Casing inner wall
    pub h3: f64,
    /// Riser inner wall
    pub h3r: f64,

    // === Densities (kg/m³) ===
    /// Drilling fluid
    pub rhol: f64,
    /// Drill pipe
    pub rhod: f64,
    /// Casing
    pub rhoc: f64,
    /// Riser
    pub rhor: f64,
    /// Formation
    pub rhofm: f64,
    /// Seawater
    pub rhow: f64,
    /// Surrounding space
    pub rhosr: f64,

    // === Thermal Gradients (°C/m) ===
    /// Geothermal gradient
    pub gt: f64,
    /// Seawater thermal gradient
    pub wtg: f64,

    // === Operational Parameters ===
    /// Drill string revolutions per minute
    #[serde(rename = "RPM")]
    pub rpm: f64,
    /// Torque on the drill string (kN·m)
    #[serde(rename = "T")]
    pub t: f64,
    /// Torque on the bit (kN·m)
    #[serde(rename = "Tbit")]
    pub tbit: f64,
    /// Weight on bit (kN)
    #[serde(rename = "WOB")]
    pub wob: f64,
    /// Rate of penetration (m/h)
    #[serde(rename = "ROP")]
    pub rop: f64,
    /// Total flow area of the bit nozzles (m²)
    #[serde(rename = "An")]
    pub an: f64,
}

/// Every key a complete deck must carry, in deck order.
pub const REQUIRED_KEYS: &[&str] = &[
    "tin", "ts", "wd", "mdt",
    "ddi", "ddo", "dcsg", "dsr", "dsro", "dri", "dro", "dfm",
    "q",
    "lambdal", "lambdac", "lambdad", "lambdacsr", "lambdasr", "lambdafm",
    "lambdasrfm", "lambdar", "lambdarw", "lambdaw",
    "cl", "cc", "cd", "cr", "cw", "csr", "cfm",
    "h1", "h2", "h3", "h3r",
    "rhol", "rhod", "rhoc", "rhor", "rhofm", "rhow", "rhosr",
    "gt", "wtg",
    "RPM", "T", "Tbit", "WOB", "ROP", "An",
];

impl WellInput {
    /// Build a deck from a raw name→value mapping.
    ///
    /// Checks ALL required keys before reading any value: a deck missing
    /// several keys reports every one of them in a single error instead of
    /// failing on the first access.
    pub fn from_map(values: &HashMap<String, f64>) -> Result<Self, ParameterError> {
        let mut missing: Vec<String> = Vec::new();
        let mut fetch = |key: &'static str| -> f64 {
            match values.get(key) {
                Some(v) => *v,
                None => {
                    missing.push(key.to_string());
                    f64::NAN
                }
            }
        };

        let input = Self {
            tin: fetch("tin"),
            ts: fetch("ts"),
            wd: fetch("wd"),
            mdt: fetch("mdt"),
            ddi: fetch("ddi"),
            ddo: fetch("ddo"),
            dcsg: fetch("dcsg"),
            dsr: fetch("dsr"),
            dsro: fetch("dsro"),
            dri: fetch("dri"),
            dro: fetch("dro"),
            dfm: fetch("dfm"),
            q: fetch("q"),
            lambdal: fetch("lambdal"),
            lambdac: fetch("lambdac"),
            lambdad: fetch("lambdad"),
            lambdacsr: fetch("lambdacsr"),
            lambdasr: fetch("lambdasr"),
            lambdafm: fetch("lambdafm"),
            lambdasrfm: fetch("lambdasrfm"),
            lambdar: fetch("lambdar"),
            lambdarw: fetch("lambdarw"),
            lambdaw: fetch("lambdaw"),
            cl: fetch("cl"),
            cc: fetch("cc"),
            cd: fetch("cd"),
            cr: fetch("cr"),
            cw: fetch("cw"),
            csr: fetch("csr"),
            cfm: fetch("cfm"),
            h1: fetch("h1"),
            h2: fetch("h2"),
            h3: fetch("h3"),
            h3r: fetch("h3r"),
            rhol: fetch("rhol"),
            rhod: fetch("rhod"),
            rhoc: fetch("rhoc"),
            rhor: fetch("rhor"),
            rhofm: fetch("rhofm"),
            rhow: fetch("rhow"),
            rhosr: fetch("rhosr"),
            gt: fetch("gt"),
            wtg: fetch("wtg"),
            rpm: fetch("RPM"),
            t: fetch("T"),
            tbit: fetch("Tbit"),
            wob: fetch("WOB"),
            rop: fetch("ROP"),
            an: fetch("An"),
        };

        if missing.is_empty() {
            Ok(input)
        } else {
            Err(ParameterError::MissingParameters { keys: missing })
        }
    }

    /// Load a deck from a TOML file.
    ///
    /// Two-pass: the raw TOML is walked first so that every missing required
    /// key lands in one aggregated error and unknown keys produce "did you
    /// mean" warnings, then serde deserializes the typed deck.
    pub fn load_from_file(path: &Path) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ParameterError::Io(path.to_path_buf(), e))?;

        let value: toml::Value = contents
            .parse()
            .map_err(|e| ParameterError::Parse(path.to_path_buf(), e))?;

        for w in super::validation::validate_unknown_keys(&value) {
            warn!("{}", w);
        }

        let missing = super::validation::missing_deck_keys(&value);
        if !missing.is_empty() {
            return Err(ParameterError::MissingParameters { keys: missing });
        }

        toml::from_str(&contents).map_err(|e| ParameterError::Parse(path.to_path_buf(), e))
    }
}
