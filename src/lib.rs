pub mod cli;
pub mod commands;
pub mod error;
pub mod generators;
pub mod loader;
pub mod models;
pub mod scaffold;
pub mod telemetry;
pub mod walker;

pub use error::{BddGenError, Result};
