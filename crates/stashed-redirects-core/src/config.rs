use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::key::{KeyNamespacer, KeyScheme, DEFAULT_KEY_PREFIX};
use crate::source::DEFAULT_REDIRECT_PARAM;
use crate::validator::SameOriginValidator;

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_redirect_param() -> String {
    DEFAULT_REDIRECT_PARAM.to_string()
}

/// Configuration loaded from `~/.config/stashed-redirects/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashConfig {
    /// Prefix for every stashed-redirect session key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// "plain" (prefix + purpose) or "hashed" (prefix + sha256 of purpose).
    #[serde(default)]
    pub key_scheme: KeyScheme,
    /// Query/form parameter read by the default source.
    #[serde(default = "default_redirect_param")]
    pub redirect_param: String,
    /// Origins absolute redirect URLs may point at, e.g. "https://example.com".
    /// Local paths are always allowed.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            key_scheme: KeyScheme::default(),
            redirect_param: default_redirect_param(),
            allowed_origins: Vec::new(),
        }
    }
}

impl StashConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parse stash config")
    }

    pub fn namespacer(&self) -> KeyNamespacer {
        KeyNamespacer::new(self.key_prefix.clone(), self.key_scheme)
    }

    /// Validator accepting local paths and the configured origins.
    pub fn validator(&self) -> Result<SameOriginValidator> {
        SameOriginValidator::from_origins(&self.allowed_origins)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("stashed-redirects")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StashConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StashConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    StashConfig::from_toml_str(&data)
}
