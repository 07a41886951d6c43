//! Configuration module for PassGen
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PassgenPaths;
pub use settings::Settings;
