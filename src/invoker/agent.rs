//! Fire-and-forget backups on Windows

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use super::BackupStrategy;
use crate::config::Settings;
use crate::error::{VeeamrunError, VeeamrunResult};
use crate::process::CommandRunner;

/// PowerShell script that triggers a Veeam configuration backup
pub const CONFIG_BACKUP_SCRIPT: &str =
    "Add-PsSnapin -Name VeeamPSSnapIn\r\nStart-VBRConfigurationBackupJob\r\n";

/// Runs the backup as a single process and judges it by its exit code
///
/// The reserved configuration backup job name runs a PowerShell script;
/// every other name runs the standalone agent.
#[derive(Debug)]
pub struct AgentJob<R> {
    runner: R,
    agent: String,
    scripting_host: String,
    script_path: PathBuf,
    config_backup_job: String,
}

impl<R: CommandRunner> AgentJob<R> {
    pub fn new(settings: &Settings, runner: R) -> Self {
        Self {
            runner,
            agent: settings.agent_path.clone(),
            scripting_host: settings.scripting_host_path.clone(),
            script_path: settings.script_path.clone(),
            config_backup_job: settings.config_backup_job.clone(),
        }
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    fn write_script(&self) -> VeeamrunResult<()> {
        fs::write(&self.script_path, CONFIG_BACKUP_SCRIPT).map_err(|e| {
            VeeamrunError::Io(format!(
                "Failed to write script {}: {}",
                self.script_path.display(),
                e
            ))
        })
    }

    fn run_config_backup(&mut self) -> VeeamrunResult<Option<i32>> {
        info!("this is a Configuration Backup");
        self.write_script()?;

        let script = self.script_path.to_string_lossy().into_owned();
        self.runner.status(
            &self.scripting_host,
            &["-ExecutionPolicy", "Bypass", "-File", &script],
        )
    }
}

impl<R: CommandRunner> BackupStrategy for AgentJob<R> {
    /// Exit code of the backup process
    type Handle = Option<i32>;

    fn start(&mut self, job_name: &str) -> VeeamrunResult<Option<i32>> {
        debug!("... we are under windows (or we assume to be)");
        if job_name == self.config_backup_job {
            self.run_config_backup()
        } else {
            self.runner.status(&self.agent, &["/backup"])
        }
    }

    fn await_completion(&mut self, job_name: &str, code: Option<i32>) -> VeeamrunResult<bool> {
        match code {
            Some(code) => info!("job {} finished with answer code {}", job_name, code),
            None => info!("job {} finished without an exit code", job_name),
        }
        Ok(code == Some(0))
    }
}
