use anyhow::Result;
use clap::Parser;
use tracing::error;

use veeamrun::cli::{handle_run, RunArgs};
use veeamrun::config::{ConfigPaths, Platform, Settings};
use veeamrun::invoker::Invoker;
use veeamrun::logging::init_logging;
use veeamrun::notify::{Notifier, SmtpMailer};
use veeamrun::process::SystemRunner;

#[derive(Parser)]
#[command(
    name = "veeamrun",
    version,
    about = "Run a Veeam backup job and mail its outcome",
    long_about = "Starts the named Veeam backup job, waits for it to finish and \
                  mails a status report to <hostname>'s monitoring inbox. \
                  Progress is written to the veeamrun log file."
)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Settings and logger first, everything after this is logged
    let platform = Platform::detect();
    let settings = Settings::load_or_default(&ConfigPaths::new(platform), platform)?;
    init_logging(&settings)?;

    let mut invoker = Invoker::for_platform(platform, &settings, SystemRunner);
    let notifier = Notifier::new(&settings, SmtpMailer::from_settings(&settings));

    if let Err(err) = handle_run(&cli.run, &mut invoker, &notifier) {
        error!("veeamrun aborted: {}", err);
        return Err(err.into());
    }

    Ok(())
}
