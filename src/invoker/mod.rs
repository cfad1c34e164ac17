//! Backup invocation for veeamrun
//!
//! Starts a named backup job and decides whether it succeeded.
//!
//! # Architecture
//!
//! Two strategies implement `BackupStrategy`:
//!
//! - `PollableJob` (Linux): starts the job through `veeamconfig`, reads the
//!   session identifier from its output and polls the session until it is no
//!   longer `Running`.
//! - `AgentJob` (Windows): runs the standalone agent, or a configuration
//!   backup script, and judges the result by the exit code alone.
//!
//! `Invoker` picks one of them once, from the detected `Platform`.
//!
//! # Example
//!
//! ```rust,ignore
//! use veeamrun::config::{Platform, Settings};
//! use veeamrun::invoker::Invoker;
//! use veeamrun::process::SystemRunner;
//!
//! let platform = Platform::detect();
//! let settings = Settings::for_platform(platform);
//! let mut invoker = Invoker::for_platform(platform, &settings, SystemRunner);
//! let succeeded = invoker.run("nightly")?;
//! ```

mod agent;
mod pollable;
pub mod session;

use tracing::{error, info};

use crate::config::{Platform, Settings};
use crate::error::VeeamrunResult;
use crate::process::CommandRunner;

pub use agent::AgentJob;
pub use pollable::PollableJob;
pub use session::SessionState;

/// A way of running a backup job to completion
pub trait BackupStrategy {
    /// What `start` hands over to `await_completion`
    type Handle;

    /// Launch the named job
    fn start(&mut self, job_name: &str) -> VeeamrunResult<Self::Handle>;

    /// Block until the launched job is finished; `true` means success
    fn await_completion(&mut self, job_name: &str, handle: Self::Handle) -> VeeamrunResult<bool>;

    /// Start the job, wait for it and log the verdict
    fn run(&mut self, job_name: &str) -> VeeamrunResult<bool> {
        info!("launch job {}", job_name);
        let handle = self.start(job_name)?;
        let succeeded = self.await_completion(job_name, handle)?;

        if succeeded {
            info!("Job was successful");
        } else {
            error!("Job failed...");
        }

        Ok(succeeded)
    }
}

/// The backup strategy selected for this platform
#[derive(Debug)]
pub enum Invoker<R> {
    Pollable(PollableJob<R>),
    Agent(AgentJob<R>),
}

impl<R: CommandRunner> Invoker<R> {
    /// Select the strategy matching `platform`
    pub fn for_platform(platform: Platform, settings: &Settings, runner: R) -> Self {
        match platform {
            Platform::Linux => Invoker::Pollable(PollableJob::new(settings, runner)),
            Platform::Windows => Invoker::Agent(AgentJob::new(settings, runner)),
        }
    }

    /// Run the named job to completion; `true` means success
    pub fn run(&mut self, job_name: &str) -> VeeamrunResult<bool> {
        match self {
            Invoker::Pollable(job) => job.run(job_name),
            Invoker::Agent(job) => job.run(job_name),
        }
    }

    /// Get the command runner back (inspection in tests)
    pub fn into_runner(self) -> R {
        match self {
            Invoker::Pollable(job) => job.into_runner(),
            Invoker::Agent(job) => job.into_runner(),
        }
    }
}
