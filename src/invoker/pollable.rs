//! Session-tracked backups through `veeamconfig`

use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use super::session::{parse_session_id, session_state, SessionState};
use super::BackupStrategy;
use crate::config::Settings;
use crate::error::VeeamrunResult;
use crate::process::CommandRunner;

/// Starts a job with `veeamconfig job start` and polls its session
///
/// The wait has no upper bound: a session that keeps reporting `Running`
/// blocks forever.
#[derive(Debug)]
pub struct PollableJob<R> {
    runner: R,
    veeamconfig: String,
    poll_interval: Duration,
}

impl<R: CommandRunner> PollableJob<R> {
    pub fn new(settings: &Settings, runner: R) -> Self {
        Self {
            runner,
            veeamconfig: settings.veeamconfig_path.clone(),
            poll_interval: Duration::from_secs(settings.poll_interval_secs),
        }
    }

    /// Query the current state of a session once
    pub fn query_state(&mut self, session_id: &str) -> VeeamrunResult<SessionState> {
        let output = self
            .runner
            .capture(&self.veeamconfig, &["session", "info", "--id", session_id])?;
        Ok(session_state(session_id, &output))
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}

impl<R: CommandRunner> BackupStrategy for PollableJob<R> {
    /// The session identifier
    type Handle = String;

    fn start(&mut self, job_name: &str) -> VeeamrunResult<String> {
        debug!("... we are under linux");
        let output = self
            .runner
            .capture(&self.veeamconfig, &["job", "start", "--name", job_name])?;
        info!("Job {} launched", job_name);
        parse_session_id(&output)
    }

    fn await_completion(&mut self, job_name: &str, session_id: String) -> VeeamrunResult<bool> {
        let mut state = self.query_state(&session_id)?;
        while state.is_running() {
            info!(
                "Job {} is running, waiting {}s",
                job_name,
                self.poll_interval.as_secs()
            );
            thread::sleep(self.poll_interval);
            state = self.query_state(&session_id)?;
        }

        Ok(!state.is_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use crate::testing::ScriptedRunner;

    const STARTED: &str = "Backup job has been started.\nSession ID: [{1111-2222}]\n";

    fn info(state: &str) -> String {
        format!("Job name: nightly\nState: {}\n", state)
    }

    fn job_with(outputs: Vec<String>) -> PollableJob<ScriptedRunner> {
        let mut settings = Settings::for_platform(Platform::Linux);
        settings.poll_interval_secs = 0;
        PollableJob::new(&settings, ScriptedRunner::with_outputs(outputs))
    }

    /// Number of `session info` queries issued
    fn queries(job: PollableJob<ScriptedRunner>) -> usize {
        job.into_runner()
            .calls
            .iter()
            .filter(|call| call.args.first().map(String::as_str) == Some("session"))
            .count()
    }

    #[test]
    fn test_running_running_failed() {
        let mut job = job_with(vec![
            STARTED.to_string(),
            info("Running"),
            info("Running"),
            info("Failed"),
        ]);

        assert!(!job.run("nightly").unwrap());
        assert_eq!(queries(job), 3);
    }

    #[test]
    fn test_running_success() {
        let mut job = job_with(vec![STARTED.to_string(), info("Running"), info("Success")]);

        assert!(job.run("nightly").unwrap());
        assert_eq!(queries(job), 2);
    }

    #[test]
    fn test_unknown_state_ends_wait_as_success() {
        let mut job = job_with(vec![STARTED.to_string(), "no state line".to_string()]);

        assert!(job.run("nightly").unwrap());
        assert_eq!(queries(job), 1);
    }

    #[test]
    fn test_warning_is_success() {
        let mut job = job_with(vec![STARTED.to_string(), info("Warning")]);
        assert!(job.run("nightly").unwrap());
    }

    #[test]
    fn test_command_lines() {
        let mut job = job_with(vec![STARTED.to_string(), info("Success")]);
        job.run("nightly").unwrap();

        let calls = job.into_runner().calls;
        assert_eq!(calls[0].program, "veeamconfig");
        assert_eq!(calls[0].args(), ["job", "start", "--name", "nightly"]);
        assert_eq!(calls[1].args(), ["session", "info", "--id", "1111-2222"]);
    }

    #[test]
    fn test_missing_session_id_stops_before_polling() {
        let mut job = job_with(vec!["Error: no such job\n".to_string()]);

        let err = job.run("nightly").unwrap_err();
        assert!(err.is_session_id_not_found());
        assert_eq!(queries(job), 0);
    }
}
