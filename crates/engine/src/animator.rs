//! Fold-progress easing and rotation propagation down the pivot chain.

use std::f64::consts::FRAC_PI_2;

use tracing::warn;

use wall_scene::SceneGraph;
use wall_types::{FoldDirection, FoldState, WallError};

use crate::builder::WallAssembly;
use crate::EngineError;

/// Easing factor applied per tick. Asymptotic approach, never
/// overshoots.
const SPEED: f64 = 0.05;
/// Convergence band in radians; progress inside it counts as arrived.
pub const EPSILON: f64 = 0.001;
/// Fully-folded target angle.
pub const FOLDED_ANGLE: f64 = FRAC_PI_2;
/// Below this target the wall counts as open for toggling purposes.
const TOGGLE_THRESHOLD: f64 = 0.1;

/// Per-wall fold state machine.
///
/// Owns the single scalar fold progress; pivot yaws are derived from it
/// every tick. Direction is latched when a fold gesture starts; a
/// direction change requires a chain rebuild, which resets progress.
#[derive(Debug, Clone, Copy)]
pub struct FoldAnimator {
    fold_angle: f64,
    target_angle: f64,
    direction: FoldDirection,
}

impl FoldAnimator {
    pub fn new(direction: FoldDirection) -> Self {
        Self {
            fold_angle: 0.0,
            target_angle: 0.0,
            direction,
        }
    }

    pub fn fold_angle(&self) -> f64 {
        self.fold_angle
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    pub fn direction(&self) -> FoldDirection {
        self.direction
    }

    /// Zero progress and target after a chain rebuild; the new chain
    /// starts at rest.
    pub fn reset(&mut self, direction: FoldDirection) {
        self.fold_angle = 0.0;
        self.target_angle = 0.0;
        self.direction = direction;
    }

    /// Begin unfolding toward flat.
    pub fn set_target_open(&mut self) {
        self.target_angle = 0.0;
    }

    /// Begin folding toward fully folded. The caller has already rebuilt
    /// the chain for `direction`.
    pub fn set_target_folded(&mut self, direction: FoldDirection) {
        self.direction = direction;
        self.target_angle = FOLDED_ANGLE;
    }

    /// True if a toggle gesture should unfold rather than fold.
    pub fn is_engaged(&self) -> bool {
        self.target_angle > TOGGLE_THRESHOLD
    }

    pub fn state(&self) -> FoldState {
        if (self.fold_angle - self.target_angle).abs() > EPSILON {
            FoldState::Folding
        } else if self.target_angle > TOGGLE_THRESHOLD {
            FoldState::Folded
        } else {
            FoldState::Open
        }
    }

    /// Advance one frame. Returns `true` once progress is within the
    /// convergence band (approximate equality, never exact).
    pub fn tick(
        &mut self,
        graph: &mut SceneGraph,
        assembly: &WallAssembly,
    ) -> Result<bool, EngineError> {
        if (self.fold_angle - self.target_angle).abs() <= EPSILON {
            return Ok(true);
        }
        self.fold_angle += (self.target_angle - self.fold_angle) * SPEED;
        self.propagate(graph, assembly)?;
        Ok(false)
    }

    /// Write derived yaws to every pivot in the chain.
    ///
    /// Root pivot turns against the fold direction; each deeper pivot
    /// turns twice as far with alternating sign, which folds adjacent
    /// panels against each other instead of swinging the whole run.
    pub fn propagate(
        &self,
        graph: &mut SceneGraph,
        assembly: &WallAssembly,
    ) -> Result<(), EngineError> {
        let bound = assembly.sections();
        let base = -self.fold_angle * self.direction.sign();

        let mut sign = -1.0;
        for (depth, link) in assembly.links.iter().enumerate() {
            if depth >= bound {
                // Malformed chain; abort propagation for this frame
                // rather than keep walking.
                warn!(expected = bound, walked = depth + 1, "pivot chain overrun");
                return Err(EngineError::Wall(WallError::ChainTraversalOverrun {
                    expected: bound,
                    walked: depth + 1,
                }));
            }
            if depth == 0 {
                graph.set_yaw(link.pivot, base)?;
            } else {
                graph.set_yaw(link.pivot, base * 2.0 * sign)?;
                sign = -sign;
            }
        }
        Ok(())
    }
}
