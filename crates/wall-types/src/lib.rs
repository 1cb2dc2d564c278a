pub mod config;
pub mod error;
pub mod panel;

pub use config::*;
pub use error::*;
pub use panel::*;
