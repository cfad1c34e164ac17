//! CLI command handlers
//!
//! This module contains the implementation of the command line entry point,
//! bridging the clap argument parsing with the invoker and notifier.

pub mod run;

pub use run::{handle_run, RunArgs};
