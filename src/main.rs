use std::path::PathBuf;
use std::sync::Arc;

use lnk_opener::host::{HostContext, HostUi};
use lnk_opener::settings::Settings;

/// Console stand-in for the editor host's UI surface. Warnings and errors go
/// to the log; there is no document slot, so the placeholder calls are the
/// default no-ops.
struct ConsoleUi;

impl HostUi for ConsoleUi {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

fn settings_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lnk_opener")
        .join("settings.json")
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(&settings_path().to_string_lossy())?;
    lnk_opener::logging::init(settings.debug_logging);

    let mut host = HostContext::new(Arc::new(ConsoleUi), settings);
    host.activate();
    for arg in std::env::args().skip(1) {
        let path = PathBuf::from(arg);
        host.handle_command(Some(&path), None);
    }
    host.deactivate();
    Ok(())
}
