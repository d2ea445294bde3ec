use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(".lnk resolution requires Windows")]
    UnsupportedPlatform,
    #[error("could not resolve target from .lnk: {0}")]
    ResolutionFailed(String),
}

/// Target stored inside a shortcut file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: String,
    pub arguments: String,
}

impl ResolvedTarget {
    /// Target path and argument string joined with a single space. When the
    /// shortcut stores no arguments the path is returned as-is, without a
    /// trailing space.
    pub fn command_line(&self) -> String {
        if self.arguments.is_empty() {
            self.path.clone()
        } else {
            format!("{} {}", self.path, self.arguments)
        }
    }
}

/// Single quotes must be doubled to stay embeddable in the automation
/// script's string literal.
fn escape_single_quotes(path: &str) -> String {
    path.replace('\'', "''")
}

fn resolver_script(lnk_path: &str) -> String {
    format!(
        "try {{ $s=(New-Object -ComObject WScript.Shell).CreateShortcut('{}'); \
         Write-Output $s.TargetPath; Write-Output $s.Arguments }} catch {{ exit 1 }}",
        escape_single_quotes(lnk_path)
    )
}

/// Interpret the automation facility's stdout: line 1 is the target path,
/// line 2 the argument string (absent = empty). The overall output and each
/// line are trimmed before use.
pub fn parse_resolver_output(stdout: &str) -> Result<ResolvedTarget, ResolveError> {
    let out = stdout.trim();
    if out.is_empty() {
        return Err(ResolveError::ResolutionFailed(
            "resolver produced no output".into(),
        ));
    }
    let mut lines = out.lines();
    let path = lines.next().unwrap_or("").trim();
    let arguments = lines.next().unwrap_or("").trim();
    if path.is_empty() {
        return Err(ResolveError::ResolutionFailed(
            "shortcut has no target path".into(),
        ));
    }
    Ok(ResolvedTarget {
        path: path.to_string(),
        arguments: arguments.to_string(),
    })
}

/// Read the target path and argument string stored in a `.lnk` file.
///
/// Delegates to PowerShell's `WScript.Shell` automation object rather than
/// parsing the binary shortcut format. Only defined on Windows; elsewhere it
/// fails with [`ResolveError::UnsupportedPlatform`].
#[cfg(target_os = "windows")]
pub fn resolve_lnk(lnk_path: &Path) -> Result<ResolvedTarget, ResolveError> {
    use std::os::windows::process::CommandExt;

    let script = resolver_script(&lnk_path.to_string_lossy());
    let output = std::process::Command::new("powershell")
        .args(["-NoProfile", "-Command", script.as_str()])
        .creation_flags(0x08000000) // CREATE_NO_WINDOW
        .output()
        .map_err(|e| ResolveError::ResolutionFailed(format!("powershell: {e}")))?;
    if !output.status.success() {
        return Err(ResolveError::ResolutionFailed(format!(
            "resolver exited with {}",
            output.status
        )));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let resolved = parse_resolver_output(&stdout)?;
    tracing::debug!(
        "resolved {} -> {}",
        lnk_path.display(),
        resolved.command_line()
    );
    Ok(resolved)
}

#[cfg(not(target_os = "windows"))]
pub fn resolve_lnk(_lnk_path: &Path) -> Result<ResolvedTarget, ResolveError> {
    Err(ResolveError::UnsupportedPlatform)
}
