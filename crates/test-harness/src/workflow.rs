//! Fluent API for configure-fold-verify scripts.

use wall_engine::WallEngine;
use wall_types::Config;

use crate::helpers::{self, HarnessError};

/// Drives one engine through a scripted scenario, consuming and
/// returning itself so steps chain.
pub struct WallWorkflow {
    engine: WallEngine,
}

impl WallWorkflow {
    pub fn new(config: Config) -> Result<Self, HarnessError> {
        Ok(Self {
            engine: helpers::engine_from(config)?,
        })
    }

    pub fn fold_forward(mut self) -> Result<Self, HarnessError> {
        self.engine.fold_forward()?;
        Ok(self)
    }

    pub fn fold_backward(mut self) -> Result<Self, HarnessError> {
        self.engine.fold_backward()?;
        Ok(self)
    }

    pub fn unfold(mut self) -> Result<Self, HarnessError> {
        self.engine.unfold();
        Ok(self)
    }

    pub fn toggle(mut self) -> Result<Self, HarnessError> {
        self.engine.toggle_fold()?;
        Ok(self)
    }

    pub fn resize(mut self, length: f64, height: f64, sections: u32) -> Result<Self, HarnessError> {
        self.engine.set_dimensions(length, height, sections)?;
        Ok(self)
    }

    /// Run ticks until the fold converges.
    pub fn settle(mut self) -> Result<Self, HarnessError> {
        helpers::settle(&mut self.engine)?;
        Ok(self)
    }

    /// Run exactly `n` ticks, converged or not.
    pub fn tick_n(mut self, n: usize) -> Result<Self, HarnessError> {
        for _ in 0..n {
            self.engine.tick()?;
        }
        Ok(self)
    }

    /// Apply an assertion to the current engine state.
    pub fn verify(
        self,
        check: impl FnOnce(&WallEngine) -> Result<(), HarnessError>,
    ) -> Result<Self, HarnessError> {
        check(&self.engine)?;
        Ok(self)
    }

    pub fn engine(&self) -> &WallEngine {
        &self.engine
    }

    pub fn into_engine(self) -> WallEngine {
        self.engine
    }
}
