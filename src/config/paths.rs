//! Settings file location for veeamrun
//!
//! The settings file sits at a fixed, platform-dependent path:
//!
//! - Linux: `/etc/veeamrun/config.json`
//! - Windows: `C:\veeamrun\config.json`

use std::path::{Path, PathBuf};

use super::platform::Platform;

/// Locates the optional settings file
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    settings_file: PathBuf,
}

impl ConfigPaths {
    /// Use the default settings file of the given platform
    pub fn new(platform: Platform) -> Self {
        Self {
            settings_file: default_settings_file(platform),
        }
    }

    /// Use an explicit settings file (useful for testing)
    pub fn with_settings_file(settings_file: PathBuf) -> Self {
        Self { settings_file }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }
}

/// Default settings file location for a platform
pub fn default_settings_file(platform: Platform) -> PathBuf {
    match platform {
        Platform::Linux => PathBuf::from("/etc/veeamrun/config.json"),
        Platform::Windows => PathBuf::from(r"C:\veeamrun\config.json"),
    }
}
