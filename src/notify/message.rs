//! Notification content

use crate::config::Settings;

/// Outcome label used in the subject and the body
pub fn status_label(succeeded: bool) -> &'static str {
    if succeeded {
        "Success"
    } else {
        "Failed"
    }
}

/// A single plain-text status mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// Render the configured templates for one job outcome
    ///
    /// Placeholders: `{hostname}`, `{job}` and `{status}`.
    pub fn compose(settings: &Settings, hostname: &str, job_name: &str, succeeded: bool) -> Self {
        let status = status_label(succeeded);
        let render = |template: &str| {
            template
                .replace("{hostname}", hostname)
                .replace("{job}", job_name)
                .replace("{status}", status)
        };

        Self {
            from: settings.mail_from.clone(),
            to: render(&settings.mail_to_template),
            subject: render(&settings.subject_template),
            body: render(&settings.body_template),
        }
    }
}
