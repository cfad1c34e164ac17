//! The `veeamrun <hostname> <jobname>` command

use clap::Args;
use tracing::{debug, info};

use crate::error::VeeamrunResult;
use crate::invoker::Invoker;
use crate::notify::{Mailer, Notifier};
use crate::process::CommandRunner;

/// Positional arguments of a run
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Hostname for Zabbix reporting
    pub hostname: String,

    /// VEEAM job name
    pub jobname: String,
}

/// Run the backup job and mail its outcome
///
/// Returns the job outcome. Any error (unparsable tool output, spawn or mail
/// failure) is returned as is; no notification is sent when the invoker
/// fails.
pub fn handle_run<R, M>(
    args: &RunArgs,
    invoker: &mut Invoker<R>,
    notifier: &Notifier<'_, M>,
) -> VeeamrunResult<bool>
where
    R: CommandRunner,
    M: Mailer,
{
    info!("Starting");
    debug!("...got jobname {}", args.jobname);

    let succeeded = invoker.run(&args.jobname)?;
    notifier.notify(&args.hostname, &args.jobname, succeeded)?;

    Ok(succeeded)
}
