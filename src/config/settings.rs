//! Settings for veeamrun
//!
//! Every fixed value the tool relies on (log location and rotation, poll
//! interval, mail relay, addresses, executable paths) lives here. A settings
//! file is optional; any field it leaves out keeps the platform default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ConfigPaths;
use super::platform::Platform;
use crate::error::VeeamrunError;

/// Settings for a veeamrun invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Rotating log file
    pub log_file: PathBuf,

    /// Size in bytes at which the log file is rotated
    pub log_max_bytes: u64,

    /// Number of rotated log files kept next to the active one
    pub log_backups: usize,

    /// Log filter directive (`debug`, `info`, ...)
    pub log_level: String,

    /// Delay between two session status queries
    pub poll_interval_secs: u64,

    /// Mail relay host
    pub smtp_host: String,

    /// Mail relay port
    pub smtp_port: u16,

    /// Sender address of the notification
    pub mail_from: String,

    /// Recipient address, `{hostname}` is substituted
    pub mail_to_template: String,

    /// Subject line, `{status}` and `{job}` are substituted
    pub subject_template: String,

    /// Body text, `{job}`, `{hostname}` and `{status}` are substituted
    pub body_template: String,

    /// The `veeamconfig` executable (Linux)
    pub veeamconfig_path: String,

    /// Scripting host used for configuration backups (Windows)
    pub scripting_host_path: String,

    /// Where the configuration backup script is written (Windows)
    pub script_path: PathBuf,

    /// Standalone agent executable (Windows)
    pub agent_path: String,

    /// Job name that requests a configuration backup instead of an agent run
    pub config_backup_job: String,
}

impl Settings {
    /// Default settings for a platform
    pub fn for_platform(platform: Platform) -> Self {
        let log_file = match platform {
            Platform::Linux => PathBuf::from("/var/log/veeamrun/veeamrun.log"),
            Platform::Windows => PathBuf::from(r"C:\veeamrun\veeamrun.log"),
        };

        Self {
            log_file,
            log_max_bytes: 1_000_000,
            log_backups: 10,
            log_level: "debug".to_string(),
            poll_interval_secs: 300,
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 25,
            mail_from: "veeamrun@sibio.fr".to_string(),
            mail_to_template: "{hostname}@supervision.sibio.fr".to_string(),
            subject_template: "[{status}] {job} (standalone agent)".to_string(),
            body_template: "Job {job} on host {hostname} has terminated with status {status}.\n"
                .to_string(),
            veeamconfig_path: "veeamconfig".to_string(),
            scripting_host_path: "powershell".to_string(),
            script_path: PathBuf::from(r"C:\veeamrun\run.ps1"),
            agent_path: r"C:\Program Files\Veeam\Endpoint Backup\Veeam.EndPoint.Manager.exe"
                .to_string(),
            config_backup_job: "VEEAM".to_string(),
        }
    }

    /// Load settings from disk, or use the platform defaults if the file doesn't exist
    ///
    /// Fields missing from the file keep their platform default.
    pub fn load_or_default(paths: &ConfigPaths, platform: Platform) -> Result<Self, VeeamrunError> {
        let settings_path = paths.settings_file();
        let defaults = Self::for_platform(platform);

        if !settings_path.exists() {
            return Ok(defaults);
        }

        let contents = std::fs::read_to_string(settings_path).map_err(|e| {
            VeeamrunError::Config(format!(
                "Failed to read settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        let overrides: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
            VeeamrunError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        let serde_json::Value::Object(overrides) = overrides else {
            return Err(VeeamrunError::Config(format!(
                "Settings file {} must contain a JSON object",
                settings_path.display()
            )));
        };

        let mut merged = serde_json::to_value(&defaults)?;
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }

        serde_json::from_value(merged)
            .map_err(|e| VeeamrunError::Config(format!("Invalid settings: {}", e)))
    }
}
