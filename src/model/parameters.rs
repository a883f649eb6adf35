//! The derived parameter snapshot for one circulation state.
//!
//! One pass over the input deck produces every quantity the thermal grid
//! needs: radii from diameters, the riser discretization, flow velocities,
//! per-cell thermal gradients, and the two heat-source terms. The snapshot
//! is immutable — a new physical or operational state means a new snapshot.

use serde::Serialize;
use std::f64::consts::PI;

use crate::config::WellInput;
use crate::error::ParameterError;
use crate::model::heat_source;
use crate::wellpath::WellPathSampler;

/// Number of radial sections in the grid: inside drill string, drill string
/// wall, annulus, casing, and surrounding space.
pub const RADIAL_SECTIONS: usize = 5;

/// Derived physical parameters and heat-source terms for one circulation
/// state.
///
/// Construct with [`ParameterModel::derive`] (trajectory sampler) or
/// [`ParameterModel::with_cell_length`] (precomputed grid step). Construction
/// either fully succeeds or fails with a [`ParameterError`]; there is no
/// partially populated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterModel {
    // === Grid ===
    /// Length of each grid cell along the trajectory (m)
    pub cell_length: f64,
    /// Number of grid cells covering the riser section
    pub riser_cells: usize,

    // === Temperatures ===
    /// Inlet fluid temperature (°C)
    pub tin: f64,
    /// Surface temperature at RKB (°C)
    pub ts: f64,

    // === Wellbore Geometry (radii, m) ===
    /// Drill string inner radius
    pub r1: f64,
    /// Drill string outer radius
    pub r2: f64,
    /// Casing inner radius
    pub r3: f64,
    /// Riser inner radius
    pub r3r: f64,
    /// Riser outer radius
    pub r4r: f64,
    /// Surrounding space inner radius
    pub r4: f64,
    /// Surrounding space outer radius
    pub r5: f64,
    /// Undisturbed formation radius
    pub rfm: f64,

    // === Flow ===
    /// Circulation flow rate (m³/h)
    pub q: f64,
    /// Fluid velocity through the drill pipe (m/s)
    pub vp: f64,
    /// Fluid velocity through the annulus (m/s)
    pub va: f64,

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

    // === Thermal Gradients (°C per grid cell) ===
    /// Geothermal gradient, scaled by cell length
    pub gt: f64,
    /// Seawater thermal gradient, scaled by cell length
    pub wtg: f64,

    // === Operational Parameters ===
    /// Drill string revolutions per minute
    pub rpm: f64,
    /// Torque on the drill string (kN·m)
    pub t: f64,
    /// Torque on the bit (kN·m)
    pub tbit: f64,
    /// Weight on bit (kN)
    pub wob: f64,
    /// Rate of penetration (m/h)
    pub rop: f64,
    /// Total flow area of the bit nozzles (m²)
    pub an: f64,
    /// Measured depth of the target (m)
    pub mdt: f64,

    // === Heat Source Terms ===
    /// Mechanical/frictional heat into the fluid inside the pipe
    pub qp: f64,
    /// Heat generated at the bit and in the annulus
    pub qa: f64,
}

impl ParameterModel {
    /// Derive the snapshot using a trajectory sampler for the grid step.
    ///
    /// The sampler must discretize the path uniformly (see
    /// [`WellPathSampler`]); its reported cell length applies to the whole
    /// domain.
    pub fn derive(
        input: &WellInput,
        path: &impl WellPathSampler,
    ) -> Result<Self, ParameterError> {
        Self::with_cell_length(input, path.cell_length())
    }

    /// Derive the snapshot from a precomputed grid cell length (m).
    ///
    /// For callers that already know the trajectory step — no sampler
    /// involved.
    pub fn with_cell_length(input: &WellInput, cell_length: f64) -> Result<Self, ParameterError> {
        if !cell_length.is_finite() || cell_length <= 0.0 {
            return Err(ParameterError::Domain {
                quantity: "riser discretization",
                detail: format!("grid cell length must be positive and finite, got {cell_length} m"),
            });
        }
        let riser_cells = (input.wd / cell_length).round() as usize;

        let r1 = input.ddi / 2.0;
        let r2 = input.ddo / 2.0;
        let r3 = input.dcsg / 2.0;
        let r3r = input.dri / 2.0;
        let r4r = input.dro / 2.0;
        let r4 = input.dsr / 2.0;
        let r5 = input.dsro / 2.0;
        let rfm = input.dfm / 2.0;

        let pipe_area = PI * r1.powi(2);
        if pipe_area <= 0.0 {
            return Err(ParameterError::Domain {
                quantity: "pipe velocity",
                detail: format!("drill string inner radius must be positive, got {r1} m"),
            });
        }
        let vp = (input.q / pipe_area) / 3600.0;

        let annulus_area = PI * (r3.powi(2) - r2.powi(2));
        if annulus_area <= 0.0 {
            return Err(ParameterError::Domain {
                quantity: "annulus velocity",
                detail: format!(
                    "casing inner radius ({r3} m) must exceed drill string outer radius ({r2} m)"
                ),
            });
        }
        let va = (input.q / annulus_area) / 3600.0;

        let qp = heat_source::pipe_heat_source(input.rpm, input.t, input.rhol, vp, input.mdt, input.ddi);
        let qa = heat_source::bit_power_heat(input.wob, input.rop, input.rpm, input.tbit)
            + heat_source::nozzle_pressure_heat(input.rhol, input.q, input.an)?
            + heat_source::annulus_friction_heat(input.mdt, r2, r3, va)?;

        Ok(Self {
            cell_length,
            riser_cells,
            tin: input.tin,
            ts: input.ts,
            r1,
            r2,
            r3,
            r3r,
            r4r,
            r4,
            r5,
            rfm,
            q: input.q,
            vp,
            va,
            lambdal: input.lambdal,
            lambdac: input.lambdac,
            lambdad: input.lambdad,
            lambdacsr: input.lambdacsr,
            lambdasr: input.lambdasr,
            lambdafm: input.lambdafm,
            lambdasrfm: input.lambdasrfm,
            lambdar: input.lambdar,
            lambdarw: input.lambdarw,
            lambdaw: input.lambdaw,
            cl: input.cl,
            cc: input.cc,
            cd: input.cd,
            cr: input.cr,
            cw: input.cw,
            csr: input.csr,
            cfm: input.cfm,
            h1: input.h1,
            h2: input.h2,
            h3: input.h3,
            h3r: input.h3r,
            rhol: input.rhol,
            rhod: input.rhod,
            rhoc: input.rhoc,
            rhor: input.rhor,
            rhofm: input.rhofm,
            rhow: input.rhow,
            rhosr: input.rhosr,
            gt: input.gt * cell_length,
            wtg: input.wtg * cell_length,
            rpm: input.rpm,
            t: input.t,
            tbit: input.tbit,
            wob: input.wob,
            rop: input.rop,
            an: input.an,
            mdt: input.mdt,
            qp,
            qa,
        })
    }
}
