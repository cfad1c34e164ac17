//! External program execution
//!
//! The backup tools are only ever driven through their command line. The
//! `CommandRunner` trait is the seam between the invokers and the operating
//! system so that the invokers can be exercised with scripted output.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{VeeamrunError, VeeamrunResult};

/// Runs external programs to completion
pub trait CommandRunner {
    /// Run `program` and return its standard output as text
    ///
    /// The exit status is not inspected.
    fn capture(&mut self, program: &str, args: &[&str]) -> VeeamrunResult<String>;

    /// Run `program` with inherited stdio and return its exit code
    ///
    /// `None` means the program did not exit normally (e.g. killed by a signal).
    fn status(&mut self, program: &str, args: &[&str]) -> VeeamrunResult<Option<i32>>;
}

/// `CommandRunner` backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(&mut self, program: &str, args: &[&str]) -> VeeamrunResult<String> {
        debug!("running {} {}", program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| VeeamrunError::spawn(program, e))?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn status(&mut self, program: &str, args: &[&str]) -> VeeamrunResult<Option<i32>> {
        debug!("running {} {}", program, args.join(" "));
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| VeeamrunError::spawn(program, e))?;

        Ok(status.code())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_capture_stdout() {
        let output = SystemRunner.capture("echo", &["Session ID: [{abc}]"]).unwrap();
        assert_eq!(output, "Session ID: [{abc}]\n");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SystemRunner.status("true", &[]).unwrap(), Some(0));
        assert_eq!(SystemRunner.status("false", &[]).unwrap(), Some(1));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = SystemRunner
            .capture("/nonexistent/veeamconfig", &["job", "start"])
            .unwrap_err();
        assert!(matches!(err, VeeamrunError::Spawn { .. }));
    }
}
