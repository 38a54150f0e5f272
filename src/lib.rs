pub mod analytics;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod repo;
pub mod seed;
pub mod storage;

pub use error::{Result, TrackerError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
