pub mod shortcut;
pub mod plan;
pub mod launcher;
pub mod host;
pub mod settings;
pub mod logging;
