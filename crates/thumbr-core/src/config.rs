use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RewriteError;

/// Fallback image returned for missing or unusable references.
pub const PLACEHOLDER_URL: &str = "https://www.redbubble.com/frontend-static/error/artwork.jpg";
/// Substring identifying a URL already served by the resizing proxy.
pub const PROXY_HOST_MARKER: &str = "images.weserv.nl";
/// Substring identifying an image served from the application's own lesson path.
pub const LOCAL_PATH_MARKER: &str = "/lesson-images";
/// Base the encoded source URL is appended to (`?url=...`).
pub const PROXY_BASE: &str = "https://images.weserv.nl/";
pub const DEFAULT_WIDTH: u32 = 480;
pub const DEFAULT_QUALITY: u8 = 80;

/// Rewrite policy loaded from `~/.config/thumbr/config.toml`.
///
/// Every field is optional in the file; missing fields take the built-in
/// policy (weserv, 480px wide, quality 80).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// Proxy endpoint; the query string is appended directly after it.
    pub proxy_base: String,
    /// References containing this substring are treated as already proxied.
    pub proxy_marker: String,
    /// References containing this substring are treated as local paths.
    pub local_marker: String,
    /// Returned when the reference is missing, empty, or cannot be encoded.
    pub placeholder: String,
    /// Target width in pixels (`w=`).
    pub width: u32,
    /// Recompression quality (`q=`), 1..=100.
    pub quality: u8,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            proxy_base: PROXY_BASE.to_string(),
            proxy_marker: PROXY_HOST_MARKER.to_string(),
            local_marker: LOCAL_PATH_MARKER.to_string(),
            placeholder: PLACEHOLDER_URL.to_string(),
            width: DEFAULT_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl RewriterConfig {
    /// Checks that the policy can only ever produce non-empty, parseable URLs,
    /// and that every proxy URL it builds is itself recognised as proxied.
    pub fn validate(&self) -> Result<(), RewriteError> {
        if self.proxy_marker.is_empty() {
            return Err(RewriteError::InvalidConfig("proxy_marker is empty".into()));
        }
        if self.local_marker.is_empty() {
            return Err(RewriteError::InvalidConfig("local_marker is empty".into()));
        }
        if self.placeholder.is_empty() {
            return Err(RewriteError::InvalidConfig("placeholder is empty".into()));
        }
        url::Url::parse(&self.proxy_base).map_err(|e| {
            RewriteError::InvalidConfig(format!("proxy_base {:?}: {}", self.proxy_base, e))
        })?;
        if !self.proxy_base.contains(&self.proxy_marker) {
            return Err(RewriteError::InvalidConfig(format!(
                "proxy_base {:?} must contain proxy_marker {:?}",
                self.proxy_base, self.proxy_marker
            )));
        }
        if self.proxy_base.contains('?') {
            return Err(RewriteError::InvalidConfig(
                "proxy_base must not carry a query string".into(),
            ));
        }
        if self.width == 0 {
            return Err(RewriteError::InvalidConfig("width must be > 0".into()));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(RewriteError::InvalidConfig(format!(
                "quality must be 1..=100, got {}",
                self.quality
            )));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thumbr")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<RewriterConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but at an explicit path (tests, `--config`).
pub fn load_or_init_at(path: &Path) -> Result<RewriterConfig> {
    if !path.exists() {
        let default_cfg = RewriterConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RewriterConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
