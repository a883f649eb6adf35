//! Empirical heat-generation correlations for circulation heating.
//!
//! Two source terms feed the thermal balance: `qp`, mechanical/frictional
//! heat delivered to the fluid inside the drill pipe, and `qa`, heat released
//! at the bit and into the annulus. Both are calibrated correlations — the
//! numeric constants are part of the calibration and are not open to
//! rearrangement.

use std::f64::consts::PI;

use crate::error::ParameterError;

/// Mechanical/frictional heat into the fluid inside the drill pipe (qp).
///
/// Formula: `qp = 2π (RPM/60) T · 2 · 0.24 · ρl · vp² · (mdt / (ddi · 127.094e6)) · (1/0.24^0.5)`
///
/// Where:
/// - RPM = rotary speed (rev/min)
/// - T = torque on the drill string (kN·m)
/// - ρl = fluid density (kg/m³)
/// - vp = fluid velocity through the pipe (m/s)
/// - mdt = measured depth of the target (m)
/// - ddi = drill string inner diameter (m)
///
/// Combines rotational power input with a depth-normalized friction/geometry
/// factor. The caller guarantees `ddi > 0` (a zero pipe bore has already
/// failed the pipe-velocity derivation).
pub fn pipe_heat_source(
    rpm: f64,
    torque: f64,
    fluid_density: f64,
    pipe_velocity: f64,
    target_depth: f64,
    pipe_inner_diameter: f64,
) -> f64 {
    2.0 * PI
        * (rpm / 60.0)
        * torque
        * 2.0
        * 0.24
        * fluid_density
        * pipe_velocity.powi(2)
        * (target_depth / (pipe_inner_diameter * 127.094e6))
        * (1.0 / 0.24_f64.powf(0.5))
}

/// Mechanical power dissipated at the bit.
///
/// Formula: `0.05 (WOB (ROP/3600) + 2π (RPM/60) Tbit)`
///
/// Where:
/// - WOB = weight on bit (kN)
/// - ROP = rate of penetration (m/h)
/// - Tbit = torque on the bit (kN·m)
///
/// The 0.05 factor is the calibrated fraction of bit power that ends up as
/// heat in the circulating fluid.
pub fn bit_power_heat(wob: f64, rop: f64, rpm: f64, bit_torque: f64) -> f64 {
    0.05 * (wob * (rop / 3600.0) + 2.0 * PI * (rpm / 60.0) * bit_torque)
}

/// Hydraulic heat from the pressure drop across the bit nozzles.
///
/// Formula: `(ρl/2 · 9.81) ((q/3600) / (0.095 An))`
///
/// Where:
/// - ρl = fluid density (kg/m³)
/// - q = flow rate (m³/h)
/// - An = total nozzle flow area (m²)
///
/// A zero nozzle area would silently produce an infinite term, so it aborts
/// derivation instead.
pub fn nozzle_pressure_heat(
    fluid_density: f64,
    flow_rate: f64,
    nozzle_area: f64,
) -> Result<f64, ParameterError> {
    let throat = 0.095 * nozzle_area;
    if throat <= 0.0 {
        return Err(ParameterError::Domain {
            quantity: "nozzle pressure-drop heat",
            detail: format!("nozzle flow area must be positive, got {nozzle_area} m^2"),
        });
    }
    Ok((fluid_density / 2.0 * 9.81) * ((flow_rate / 3600.0) / throat))
}

/// Power-law friction heat in the annulus above the bit.
///
/// Formula: `(2 · 0.3832 · mdt / ((r3−r2) · 127.094e6)) · ((2 (0.7+1) va) / (0.7π (r3+r2) (r3−r2)²))^0.7`
///
/// Where:
/// - mdt = measured depth of the target (m)
/// - r2 = drill string outer radius (m)
/// - r3 = casing inner radius (m)
/// - va = fluid velocity through the annulus (m/s)
///
/// The grouped term is a power-law wall shear rate for annular flow with
/// behaviour index n = 0.7. A closed annulus (`r3 ≤ r2`) or reverse flow
/// would put a zero denominator or a negative base under the fractional
/// exponent, so both abort derivation.
pub fn annulus_friction_heat(
    target_depth: f64,
    r2: f64,
    r3: f64,
    annulus_velocity: f64,
) -> Result<f64, ParameterError> {
    let gap = r3 - r2;
    if gap <= 0.0 {
        return Err(ParameterError::Domain {
            quantity: "annulus friction heat",
            detail: format!(
                "casing inner radius ({r3} m) must exceed drill string outer radius ({r2} m)"
            ),
        });
    }

    let wall_shear_rate = (2.0 * (0.7 + 1.0) * annulus_velocity) / (0.7 * PI * (r3 + r2) * gap.powi(2));
    if wall_shear_rate < 0.0 {
        return Err(ParameterError::Domain {
            quantity: "annulus friction heat",
            detail: format!(
                "wall shear rate must be non-negative, got {wall_shear_rate} (reverse annular flow?)"
            ),
        });
    }

    Ok((2.0 * 0.3832 * target_depth / (gap * 127.094e6)) * wall_shear_rate.powf(0.7))
}
