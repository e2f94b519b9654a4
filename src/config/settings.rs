use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::TimeIndexedScheme;
use crate::errors::{KeyRatchetError, Result};

/// Project-level configuration, loaded from `.keyratchet.toml`.
///
/// Every field has a sensible default so keyratchet works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Bucket width in milliseconds for `index` and `forward` (default: 1 hour).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: i64,

    /// Subject used for `wrap`/`unwrap` when `--subject` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_subject: Option<String>,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_tick_ms() -> i64 {
    TimeIndexedScheme::HOUR.tick()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            default_subject: None,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".keyratchet.toml";

    /// Load settings from `<project_dir>/.keyratchet.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            KeyRatchetError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the time-bucketing scheme from `tick_ms`.
    pub fn scheme(&self) -> Result<TimeIndexedScheme> {
        TimeIndexedScheme::new(self.tick_ms)
            .map_err(|e| KeyRatchetError::ConfigError(format!("tick_ms: {e}")))
    }

    /// Pick the subject: explicit flag first, then `default_subject`.
    pub fn resolve_subject(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.default_subject.clone())
            .ok_or_else(|| {
                KeyRatchetError::ConfigError(
                    "no subject given — pass --subject or set default_subject".into(),
                )
            })
    }
}

// ── Tests ────────────────────────────────────────────────────────────
