//! veeamrun - run a Veeam backup job and report its outcome by mail
//!
//! This library provides the pieces behind the `veeamrun <hostname> <jobname>`
//! command, meant to be fired by a scheduler once per job. It starts the job
//! through the local Veeam tooling, waits for it to finish, keeps a rotating
//! log and mails a status report to the host's monitoring inbox.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Platform detection and settings
//! - `error`: Custom error types
//! - `logging`: Rotating file logger
//! - `process`: External program execution
//! - `invoker`: Backup strategies (session polling on Linux, exit code on Windows)
//! - `notify`: Status mail composition and SMTP delivery
//! - `cli`: Command entry point
//!
//! # Example
//!
//! ```rust,ignore
//! use veeamrun::config::{ConfigPaths, Platform, Settings};
//!
//! let platform = Platform::detect();
//! let settings = Settings::load_or_default(&ConfigPaths::new(platform), platform)?;
//! veeamrun::logging::init_logging(&settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod notify;
pub mod process;

#[cfg(test)]
mod testing;

pub use error::{VeeamrunError, VeeamrunResult};
