use serde::{Deserialize, Serialize};

use crate::plan::DEFAULT_JOIN_LIMIT;

fn default_join_limit() -> usize {
    DEFAULT_JOIN_LIMIT
}

fn default_placeholder_dismiss_ms() -> u64 {
    120
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Number of leading tokens tried when reassembling an executable path
    /// that was stored without quoting. Defaults to `6`.
    #[serde(default = "default_join_limit")]
    pub join_limit: usize,
    /// Delay before the transient placeholder surface is dismissed.
    #[serde(default = "default_placeholder_dismiss_ms")]
    pub placeholder_dismiss_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            join_limit: default_join_limit(),
            placeholder_dismiss_ms: default_placeholder_dismiss_ms(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or empty.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
