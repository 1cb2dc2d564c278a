//! Assertion helpers with diagnostic output.
//!
//! Every failure message includes expected vs actual plus the scenario
//! context string handed in by the caller.

use wall_engine::WallEngine;

use crate::helpers::{self, HarnessError};

fn fail(detail: String) -> HarnessError {
    HarnessError::AssertionFailed { detail }
}

/// Assert the rounded width readouts.
pub fn assert_readout(
    engine: &WallEngine,
    expected_standard: f64,
    expected_leader: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let readout = engine.readout();
    if readout.standard_width_mm != expected_standard || readout.leader_width_mm != expected_leader
    {
        return Err(fail(format!(
            "[{}] expected standard={} leader={}, got standard={} leader={}",
            ctx,
            expected_standard,
            expected_leader,
            readout.standard_width_mm,
            readout.leader_width_mm,
        )));
    }
    Ok(())
}

/// Assert panel widths, gaps and legs reproduce the configured total
/// length within floating-point tolerance.
pub fn assert_length_budget(engine: &WallEngine, ctx: &str) -> Result<(), HarnessError> {
    let occupied = helpers::occupied_length(engine);
    let total = engine.config().total_length;
    if (occupied - total).abs() > 1e-6 {
        return Err(fail(format!(
            "[{}] widths + gaps occupy {:.6} mm of a {:.6} mm opening",
            ctx, occupied, total,
        )));
    }
    Ok(())
}

/// Assert every pivot yaw is within `tol` radians of zero.
pub fn assert_chain_at_rest(engine: &WallEngine, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    let yaws = helpers::pivot_yaws(engine)?;
    for (depth, yaw) in yaws.iter().enumerate() {
        if yaw.abs() > tol {
            return Err(fail(format!(
                "[{}] pivot {} still rotated by {} rad (tol {})",
                ctx, depth, yaw, tol,
            )));
        }
    }
    Ok(())
}

/// Assert pivot yaw signs strictly alternate with depth parity for
/// depths >= 1, and that the root sign matches the latched direction.
pub fn assert_alternating_rotation(engine: &WallEngine, ctx: &str) -> Result<(), HarnessError> {
    let yaws = helpers::pivot_yaws(engine)?;
    let base = yaws.first().copied().unwrap_or(0.0);
    if base == 0.0 {
        return Err(fail(format!("[{}] chain is not folded", ctx)));
    }
    for (depth, yaw) in yaws.iter().enumerate().skip(1) {
        let expected_sign = if depth % 2 == 1 { -1.0 } else { 1.0 };
        if yaw * base * expected_sign <= 0.0 {
            return Err(fail(format!(
                "[{}] pivot {} yaw {} breaks the zig-zag (root {})",
                ctx, depth, yaw, base,
            )));
        }
        if (yaw.abs() - 2.0 * base.abs()).abs() > 1e-9 {
            return Err(fail(format!(
                "[{}] pivot {} yaw {} is not twice the root magnitude {}",
                ctx, depth, yaw, base,
            )));
        }
    }
    Ok(())
}
