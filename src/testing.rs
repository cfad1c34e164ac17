//! Test doubles shared by the unit tests

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{VeeamrunError, VeeamrunResult};
use crate::notify::{Mailer, Notification};
use crate::process::CommandRunner;

/// A recorded program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
}

impl Call {
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// `CommandRunner` replaying canned outputs and exit codes in order
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outputs: VecDeque<String>,
    codes: VecDeque<Option<i32>>,
    pub calls: Vec<Call>,
}

impl ScriptedRunner {
    pub fn with_outputs<I, S>(outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outputs: outputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_codes(codes: impl IntoIterator<Item = Option<i32>>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            ..Self::default()
        }
    }

    fn record(&mut self, program: &str, args: &[&str]) {
        self.calls.push(Call {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
    }
}

impl CommandRunner for ScriptedRunner {
    fn capture(&mut self, program: &str, args: &[&str]) -> VeeamrunResult<String> {
        self.record(program, args);
        self.outputs
            .pop_front()
            .ok_or_else(|| VeeamrunError::spawn(program, "no scripted output left"))
    }

    fn status(&mut self, program: &str, args: &[&str]) -> VeeamrunResult<Option<i32>> {
        self.record(program, args);
        self.codes
            .pop_front()
            .ok_or_else(|| VeeamrunError::spawn(program, "no scripted exit code left"))
    }
}

/// `Mailer` keeping every notification it is asked to send
#[derive(Debug, Default)]
pub struct RecordingMailer {
    pub sent: RefCell<Vec<Notification>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, notification: &Notification) -> VeeamrunResult<()> {
        if self.fail {
            return Err(VeeamrunError::Mail("Connection refused".to_string()));
        }
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}
