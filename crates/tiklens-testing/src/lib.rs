//! Testing infrastructure for tiklens integration tests.
//!
//! - `ExportBuilder`: fluent construction of TikTok export files
//! - `TestWorld`: isolated data directory and export location for CLI runs

pub mod fixtures;
pub mod world;

pub use fixtures::ExportBuilder;
pub use world::TestWorld;
