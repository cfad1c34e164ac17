//! Full runs against a stand-in `veeamconfig` and an unreachable mail relay

#![cfg(target_os = "linux")]

use std::fs;
use std::net::TcpListener;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use veeamrun::cli::{handle_run, RunArgs};
use veeamrun::config::{ConfigPaths, Platform, Settings};
use veeamrun::invoker::Invoker;
use veeamrun::logging::{build_subscriber, RotatingFile};
use veeamrun::notify::{Notifier, SmtpMailer};
use veeamrun::process::SystemRunner;
use veeamrun::{VeeamrunError, VeeamrunResult};

/// Write an executable stand-in for `veeamconfig`
fn fake_veeamconfig(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("veeamconfig");
    fs::write(&path, format!("#!/bin/sh\n{}", script)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Load settings from a settings file in `dir` pointing at the stand-in tool
fn load_settings(dir: &Path, veeamconfig: &Path) -> Settings {
    let config = dir.join("config.json");
    let overrides = serde_json::json!({
        "log_file": dir.join("log").join("veeamrun.log"),
        "poll_interval_secs": 0,
        "veeamconfig_path": veeamconfig,
        "smtp_port": closed_port(),
    });
    fs::write(&config, overrides.to_string()).unwrap();

    Settings::load_or_default(&ConfigPaths::with_settings_file(config), Platform::Linux).unwrap()
}

/// Run `nightly` for `web01` with the file logger active, return result and log
fn run_logged(settings: &Settings) -> (VeeamrunResult<bool>, String) {
    let file = RotatingFile::open(
        &settings.log_file,
        settings.log_max_bytes,
        settings.log_backups,
    )
    .unwrap();
    let subscriber = build_subscriber(Mutex::new(file), &settings.log_level).unwrap();

    let args = RunArgs {
        hostname: "web01".to_string(),
        jobname: "nightly".to_string(),
    };
    let result = tracing::subscriber::with_default(subscriber, || {
        let mut invoker = Invoker::for_platform(Platform::Linux, settings, SystemRunner);
        let notifier = Notifier::new(settings, SmtpMailer::from_settings(settings));
        handle_run(&args, &mut invoker, &notifier)
    });

    (result, fs::read_to_string(&settings.log_file).unwrap())
}

#[test]
fn test_missing_session_id_aborts_and_logs() {
    let temp = TempDir::new().unwrap();
    let tool = fake_veeamconfig(temp.path(), "echo 'Error: job nightly not found'\n");
    let settings = load_settings(temp.path(), &tool);

    let (result, log) = run_logged(&settings);

    assert!(result.unwrap_err().is_session_id_not_found());
    assert!(log.contains("Starting"));
    assert!(log.contains("launch job nightly"));
    assert!(log.contains("Could not find job ID in the output"));
    assert!(!log.contains("Sending"));
}

#[test]
fn test_finished_job_reaches_mail_relay() {
    let temp = TempDir::new().unwrap();
    let tool = fake_veeamconfig(
        temp.path(),
        "case \"$1\" in\n\
         job) echo 'Session ID: [{e2e-1}]' ;;\n\
         session) echo 'State: Success' ;;\n\
         esac\n",
    );
    let settings = load_settings(temp.path(), &tool);

    // Nothing listens on the relay port, so delivery is the failing step
    let (result, log) = run_logged(&settings);

    assert!(matches!(result, Err(VeeamrunError::Mail(_))));
    assert!(log.contains("Found job ID: e2e-1"));
    assert!(log.contains("Job ID e2e-1 status is Success"));
    assert!(log.contains("Job was successful"));
    assert!(log.contains("Sending Success report for job nightly to web01@supervision.sibio.fr"));
}
