//! Engine construction and probing helpers.

use thiserror::Error;

use wall_engine::{EngineError, WallEngine};
use wall_scene::Point3d;
use wall_types::{Config, FoldState};

/// Ticks allowed for a fold to converge before the harness gives up.
/// The easing needs ~144 ticks from flat to fully folded.
pub const SETTLE_BUDGET: usize = 400;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("fold did not settle within {budget} ticks")]
    DidNotSettle { budget: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Build an engine, converting the error for harness chaining.
pub fn engine_from(config: Config) -> Result<WallEngine, HarnessError> {
    Ok(WallEngine::new(config)?)
}

/// Tick until the fold leaves the `Folding` state. Returns the tick
/// count actually spent.
pub fn settle(engine: &mut WallEngine) -> Result<usize, HarnessError> {
    for tick in 0..SETTLE_BUDGET {
        if engine.tick()? != FoldState::Folding {
            return Ok(tick);
        }
    }
    Err(HarnessError::DidNotSettle {
        budget: SETTLE_BUDGET,
    })
}

/// Current yaw of every pivot, in chain order.
pub fn pivot_yaws(engine: &WallEngine) -> Result<Vec<f64>, HarnessError> {
    let graph = engine.graph();
    engine
        .assembly()
        .links
        .iter()
        .map(|link| Ok(graph.yaw(link.pivot)?))
        .collect::<Result<Vec<_>, EngineError>>()
        .map_err(HarnessError::from)
}

/// World-space x of every panel center, in chain order.
pub fn panel_world_xs(engine: &WallEngine) -> Result<Vec<f64>, HarnessError> {
    let graph = engine.graph();
    engine
        .assembly()
        .links
        .iter()
        .map(|link| {
            let world = graph.world_transform(link.panel)?;
            Ok(world.transform_point(&Point3d::ORIGIN).x)
        })
        .collect::<Result<Vec<_>, EngineError>>()
        .map_err(HarnessError::from)
}

/// Sum of solved panel widths plus hinge gaps plus leg hardware — must
/// reproduce the configured total length.
pub fn occupied_length(engine: &WallEngine) -> f64 {
    let config = engine.config();
    let dims = engine.dimensions();
    let n = f64::from(config.sections);
    let panels = dims.leader_width + (n - 1.0) * dims.standard_width;
    let gaps = (n - 1.0) * dims.gap;
    match config.variant {
        wall_types::Variant::Flush => panels + gaps,
        wall_types::Variant::LegTrack { leg_width, .. } => {
            // One extra gap between the left leg and the leader.
            panels + gaps + dims.gap + 2.0 * leg_width
        }
    }
}
