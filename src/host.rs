use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::launcher::run_plan;
use crate::plan;
use crate::settings::Settings;
use crate::shortcut::{resolve_lnk, ResolveError};

/// User-facing surface of the editor host.
///
/// Every method is fire-and-forget; implementations must not panic and have
/// no way to report failure back into the flow.
pub trait HostUi: Send + Sync {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Occupy the host's document slot with a content-free surface so the
    /// shortcut's raw bytes never render as text.
    fn show_placeholder(&self) {}
    fn dismiss_placeholder(&self) {}
}

/// Returns `true` for paths the passive document-open trigger should handle.
pub fn is_shortcut_path(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("lnk"))
        .unwrap_or(false)
}

/// Process-wide context owning the two host registrations: an explicit
/// command and a passive document-open notification. Events arriving while
/// the context is not active are dropped.
pub struct HostContext {
    ui: Arc<dyn HostUi>,
    settings: Settings,
    active: bool,
}

impl HostContext {
    pub fn new(ui: Arc<dyn HostUi>, settings: Settings) -> Self {
        Self {
            ui,
            settings,
            active: false,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
        tracing::debug!("shortcut handlers registered");
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        tracing::debug!("shortcut handlers unregistered");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Explicit "open shortcut" command. Falls back to the host's active
    /// document when invoked without a resource; does nothing when neither
    /// is present.
    pub fn handle_command(&self, resource: Option<&Path>, active_document: Option<&Path>) {
        if !self.active {
            return;
        }
        let Some(path) = resource.or(active_document) else {
            return;
        };
        self.open_shortcut(path);
    }

    /// Passive trigger: the host opened a document. Only `.lnk` paths are
    /// handled; the document slot is occupied by a transient placeholder
    /// which is dismissed again shortly after the launch goes out-of-band.
    pub fn handle_document_opened(&self, path: &Path) {
        if !self.active || !is_shortcut_path(path) {
            return;
        }
        self.ui.show_placeholder();
        self.open_shortcut(path);
        self.dismiss_after_delay();
    }

    /// One independent request: resolve, plan, launch. Resolution failures
    /// surface as a single message; nothing is retried.
    fn open_shortcut(&self, path: &Path) {
        match resolve_lnk(path) {
            Ok(resolved) => {
                let line = resolved.command_line();
                match plan::plan_with_limit(&line, self.settings.join_limit) {
                    Some(p) => {
                        if let Err(e) = run_plan(&p) {
                            tracing::error!("launch failed for {line}: {e}");
                            self.ui.error(&format!("Failed to open .lnk: {e}"));
                        }
                    }
                    None => {
                        tracing::debug!("{} resolved to an empty command line", path.display())
                    }
                }
            }
            Err(ResolveError::UnsupportedPlatform) => {
                self.ui.warn(".lnk handling is only supported on Windows");
            }
            Err(err) => {
                tracing::warn!("resolution failed for {}: {err}", path.display());
                self.ui.error(&format!("Failed to open .lnk: {err}"));
            }
        }
    }

    fn dismiss_after_delay(&self) {
        let ui = Arc::clone(&self.ui);
        let delay = Duration::from_millis(self.settings.placeholder_dismiss_ms);
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            ui.dismiss_placeholder();
        });
    }
}
