//! Core of the folding partition wall configurator.
//!
//! Turns a [`wall_types::Config`] into a chain of nested pivot/panel
//! transform nodes in a [`wall_scene::SceneGraph`] and animates the
//! concertina fold by propagating alternating yaw rotations down the
//! chain. Rendering, input wiring and display are external
//! collaborators; this crate produces geometry and readout values only.

pub mod accessory;
pub mod animator;
pub mod builder;
pub mod engine;
pub mod sequence;
pub mod solver;
pub mod variant;

pub use animator::FoldAnimator;
pub use builder::{ChainLink, MaterialPalette, WallAssembly, WheelBinding};
pub use engine::WallEngine;

use thiserror::Error;
use wall_scene::SceneError;
use wall_types::WallError;

/// Errors from the configurator engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Wall(#[from] WallError),

    #[error("scene graph error: {0}")]
    Scene(#[from] SceneError),
}

impl EngineError {
    /// True for rejected configurations (as opposed to internal defects).
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            EngineError::Wall(WallError::InvalidConfiguration { .. })
        )
    }
}
