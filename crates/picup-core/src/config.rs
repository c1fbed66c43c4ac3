use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default PicGo HTTP server upload endpoint.
pub const DEFAULT_PICGO_SERVER: &str = "http://127.0.0.1:36677/upload";

/// Global configuration loaded from `~/.config/picup/config.toml`.
///
/// Every field has a default, so a partial file is merged over the defaults
/// key by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PicupConfig {
    /// Upload endpoint (absolute HTTP/HTTPS URL).
    pub picgo_server: String,
    /// Domains whose images are never uploaded. Subdomains match too.
    pub blacklist: Vec<String>,
    /// Optional total request timeout in seconds (None = wait forever).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for PicupConfig {
    fn default() -> Self {
        Self {
            picgo_server: DEFAULT_PICGO_SERVER.to_string(),
            blacklist: Vec::new(),
            timeout_secs: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("picup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PicupConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PicupConfig> {
    if !path.exists() {
        let default_cfg = PicupConfig::default();
        save_to_path(&default_cfg, path)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PicupConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Write configuration to `path` (creates parent dir if needed).
pub fn save_to_path(cfg: &PicupConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
