use std::process::{Command, Stdio};

use crate::plan::LaunchPlan;

/// Execute a [`LaunchPlan`], detaching from whatever gets started.
///
/// Spawned children are not waited on and their exit codes are not observed;
/// the handle is dropped immediately.
///
/// Returns an error if spawning the process or handing the target to the OS
/// shell fails.
pub fn run_plan(plan: &LaunchPlan) -> anyhow::Result<()> {
    match plan {
        LaunchPlan::DirectSpawn { executable, args } => {
            tracing::debug!("spawning {executable} with {} argument(s)", args.len());
            Command::new(executable)
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map(|_| ())
                .map_err(|e| e.into())
        }
        LaunchPlan::OpenDirectory { path } => {
            tracing::debug!("revealing directory {path}");
            open_directory(path)
        }
        LaunchPlan::ShellOpen { target } => {
            tracing::debug!("shell-open {target}");
            open::that(target).map_err(|e| e.into())
        }
    }
}

#[cfg(target_os = "windows")]
fn open_directory(path: &str) -> anyhow::Result<()> {
    Command::new("explorer.exe")
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| e.into())
}

#[cfg(not(target_os = "windows"))]
fn open_directory(path: &str) -> anyhow::Result<()> {
    open::that(path).map_err(|e| e.into())
}
