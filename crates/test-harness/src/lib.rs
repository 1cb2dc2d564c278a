//! Test harness for scripted wall-configurator workflows.
//!
//! Provides programmatic tools for driving multi-step configure/fold
//! scenarios and verifying geometry at every step.
//!
//! # Key Components
//!
//! - [`WallWorkflow`] — fluent API for configure-fold-verify scripts
//! - [`helpers`] — engine construction, settling, yaw/position probes
//! - [`assertions`] — rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod workflow;

pub use helpers::HarnessError;
pub use workflow::WallWorkflow;
