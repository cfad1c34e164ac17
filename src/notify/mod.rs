//! Outcome notification for veeamrun
//!
//! Exactly one plain-text mail is sent per job run, addressed to the host's
//! monitoring inbox. Delivery errors are returned to the caller untouched.

mod message;
mod smtp;

use tracing::info;

use crate::config::Settings;
use crate::error::VeeamrunResult;

pub use message::{status_label, Notification};
pub use smtp::{build_message, SmtpMailer};

/// Delivers a composed notification
pub trait Mailer {
    fn send(&self, notification: &Notification) -> VeeamrunResult<()>;
}

/// Composes the status mail for a job outcome and hands it to a `Mailer`
pub struct Notifier<'a, M> {
    settings: &'a Settings,
    mailer: M,
}

impl<'a, M: Mailer> Notifier<'a, M> {
    pub fn new(settings: &'a Settings, mailer: M) -> Self {
        Self { settings, mailer }
    }

    /// Send the outcome of `job_name` on `hostname`
    pub fn notify(&self, hostname: &str, job_name: &str, succeeded: bool) -> VeeamrunResult<()> {
        let notification = Notification::compose(self.settings, hostname, job_name, succeeded);
        info!(
            "Sending {} report for job {} to {}",
            status_label(succeeded),
            job_name,
            notification.to
        );
        self.mailer.send(&notification)
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }
}
