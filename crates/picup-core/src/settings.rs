//! Settings panel: render current settings and apply edits, saving after each one.

use crate::config::{self, PicupConfig, DEFAULT_PICGO_SERVER};
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Please enter a valid HTTP/HTTPS URL")]
    InvalidServerUrl,
    #[error(transparent)]
    Save(#[from] anyhow::Error),
}

/// What a settings UI needs: a rendering and one handler per editable field.
pub trait SettingsPanel {
    /// Human-readable view of the current settings and usage notes.
    fn render(&self) -> String;

    /// Set the upload endpoint. A non-empty value must start with `http`.
    fn on_server_change(&mut self, value: &str) -> Result<(), SettingsError>;

    /// Replace the blacklist from newline-separated text (trimmed, blanks dropped).
    fn on_blacklist_change(&mut self, text: &str) -> Result<(), SettingsError>;
}

/// Settings backed by a TOML file.
#[derive(Debug, Clone)]
pub struct Settings {
    config: PicupConfig,
    path: PathBuf,
}

impl Settings {
    /// Load (or create) the default config file.
    pub fn load_default() -> Result<Self> {
        Self::load_at(config::config_path()?)
    }

    pub fn load_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = config::load_or_init_at(&path)?;
        Ok(Self { config, path })
    }

    pub fn config(&self) -> &PicupConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), SettingsError> {
        config::save_to_path(&self.config, &self.path)?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Add one domain to the blacklist (no dedup, matching manual edits).
    pub fn add_blacklisted(&mut self, domain: &str) -> Result<(), SettingsError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Ok(());
        }
        self.config.blacklist.push(domain.to_string());
        self.save()
    }

    /// Remove every entry equal to `domain`. Returns how many were removed.
    pub fn remove_blacklisted(&mut self, domain: &str) -> Result<usize, SettingsError> {
        let domain = domain.trim();
        let before = self.config.blacklist.len();
        self.config.blacklist.retain(|d| d != domain);
        let removed = before - self.config.blacklist.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }
}

/// Newline-separated text → trimmed, non-empty domains.
pub fn parse_blacklist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect()
}

impl SettingsPanel for Settings {
    fn render(&self) -> String {
        let timeout = self
            .config
            .timeout_secs
            .map(|secs| format!("{secs}s"))
            .unwrap_or_else(|| "none".to_string());
        let mut lines = vec![
            "Image Uploader Settings".to_string(),
            String::new(),
            format!("PicGo Server: {}", self.config.picgo_server),
            format!("  PicGo HTTP API endpoint (default {DEFAULT_PICGO_SERVER})"),
            format!("Timeout: {timeout}"),
            String::new(),
            "Domain Blacklist".to_string(),
            "  Images from these domains will not be uploaded.".to_string(),
        ];
        if self.config.blacklist.is_empty() {
            lines.push("  (empty)".to_string());
        }
        lines.extend(self.config.blacklist.iter().map(|d| format!("  - {d}")));
        lines.extend(
            [
                "",
                "How to Use",
                "  - Configure your PicGo server URL (picup config set-server <URL>)",
                "  - Add domains to the blacklist if needed (picup config blacklist add <DOMAIN>)",
                "  - Run `picup upload <NOTE>` on a document with images",
                "  - Local images will be uploaded and URLs replaced",
                "",
            ]
            .map(String::from),
        );
        lines.push(format!("Config file: {}", self.path.display()));
        lines.join("\n")
    }

    fn on_server_change(&mut self, value: &str) -> Result<(), SettingsError> {
        if !value.is_empty() && !value.starts_with("http") {
            tracing::warn!(value, "rejected invalid server url");
            return Err(SettingsError::InvalidServerUrl);
        }
        self.config.picgo_server = value.to_string();
        self.save()
    }

    fn on_blacklist_change(&mut self, text: &str) -> Result<(), SettingsError> {
        self.config.blacklist = parse_blacklist(text);
        self.save()
    }
}
