//! Configuration module for veeamrun
//!
//! This module provides configuration management including:
//! - Platform detection (which backup path to take)
//! - Settings file location
//! - Settings loading with platform defaults

pub mod paths;
pub mod platform;
pub mod settings;

pub use paths::ConfigPaths;
pub use platform::Platform;
pub use settings::Settings;
