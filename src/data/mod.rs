//! Data loading
//!
//! This module handles loading the leveling config from external RON files,
//! so the curve and reward amounts can be tuned without a rebuild.

pub mod loader;

pub use loader::{LevelingConfig, DEFAULT_CONFIG_PATH};
