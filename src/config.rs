use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "nlp_processor";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub resources: ResourceSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_redirects: usize,
    /// Honor HTTP(S)_PROXY environment variables.
    pub use_system_proxy: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceSettings {
    /// Directory holding `stopwords.txt`, `lemma_exceptions.tsv` and `nouns.txt`.
    /// When unset the data compiled into the binary is used.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub preview_tokens: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        FetchSettings {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 5,
            use_system_proxy: true,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings { preview_tokens: 50 }
    }
}

impl Settings {
    /// Defaults, then `nlp_processor.toml` if present, then `NLP__*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Like [`Settings::load`], but a broken source logs a warning and the
    /// built-in defaults are used instead.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(CONFIG_FILE)
    }

    fn load_or_default_from(file: &str) -> Self {
        Self::load_from(file).unwrap_or_else(|e| {
            warn!(file, "{e}; using default settings");
            Settings::default()
        })
    }

    fn load_from(file: &str) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let settings = Config::builder()
            .set_default("fetch.timeout_secs", defaults.fetch.timeout_secs)?
            .set_default("fetch.user_agent", defaults.fetch.user_agent)?
            .set_default("fetch.max_redirects", defaults.fetch.max_redirects as u64)?
            .set_default("display.preview_tokens", defaults.display.preview_tokens as u64)?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("NLP").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
