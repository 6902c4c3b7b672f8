use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COMPLETION_HOLD_MS, DEFAULT_ENDPOINT, DEFAULT_PROGRESS_CAP,
    DEFAULT_PROGRESS_INTERVAL_MS, DEFAULT_PROGRESS_STEP,
};
use crate::error::Result;
use crate::i18n::Language;

/// Client settings. Every field has a default, so partial TOML files load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Analysis endpoint receiving the multipart upload.
    pub endpoint: String,
    /// Language shown at startup.
    pub language: Language,
    /// Directory export snapshots are written to. `None` = current directory.
    pub export_dir: Option<PathBuf>,
    /// Request timeout. `None` = no client-side limit.
    pub timeout_secs: Option<u64>,
    pub progress: ProgressConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: Language::default(),
            export_dir: None,
            timeout_secs: None,
            progress: ProgressConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Export directory, falling back to the working directory.
    pub fn export_dir_or_current(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Pacing of the cosmetic progress bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Percentage points per tick.
    pub step: u8,
    pub interval_ms: u64,
    /// Value the bar saturates at while waiting.
    pub cap: u8,
    /// Time spent at 100% before the result is shown.
    pub completion_hold_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_PROGRESS_STEP,
            interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
            cap: DEFAULT_PROGRESS_CAP,
            completion_hold_ms: DEFAULT_COMPLETION_HOLD_MS,
        }
    }
}

impl ProgressConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn completion_hold(&self) -> Duration {
        Duration::from_millis(self.completion_hold_ms)
    }
}
