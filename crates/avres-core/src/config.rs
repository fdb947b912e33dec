use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_CDN_BASE_URL: &str = "https://cdn.lookaround.app/assets/";
const DEFAULT_MANIFEST_URL: &str = "https://cdn.lookaround.app/assets/avatars/manifest.json";
const DEFAULT_AVATAR_ID: &str = "white-f-1-casual";
const DEFAULT_LOCAL_ASSET_ROOT: &str = "assets/avatars";

/// Global configuration loaded from `~/.config/avres/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Base URL that CDN-relative asset paths are joined against.
    pub cdn_base_url: String,
    /// URL of the JSON manifest listing CDN-hosted presets.
    pub manifest_url: String,
    /// Resolve every avatar against the CDN, bypassing bundled files.
    /// The production default: the app bundle cannot serve relative
    /// filesystem paths to the renderer.
    pub force_cdn: bool,
    /// Registry id that unresolvable inputs degrade to.
    pub default_avatar: String,
    /// Directory prefix for bundled preset files.
    pub local_asset_root: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            force_cdn: true,
            default_avatar: DEFAULT_AVATAR_ID.to_string(),
            local_asset_root: DEFAULT_LOCAL_ASSET_ROOT.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("avres")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ResolverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ResolverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ResolverConfig = toml::from_str(&data)?;
    Ok(cfg)
}
