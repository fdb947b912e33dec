//! Local-mode resolution against the bundled registry.

use crate::config::ResolverConfig;
use crate::registry;

use super::{join_base, with_glb_suffix, AvatarRef};

/// Filename used when even the default id is missing from the registry.
const FALLBACK_LOCAL_FILE: &str = "White_F_1_Casual.glb";

/// Resolves in local mode: bundled presets map to files under the local
/// asset root; anything else is assumed to be a CDN-relative id. Blank
/// input degrades to the default preset's bundled file.
pub fn resolve_local_url(cfg: &ResolverConfig, avatar: AvatarRef<'_>) -> String {
    let preset = match avatar {
        AvatarRef::Preset(p) => Some(p),
        AvatarRef::Id(id) => registry::find_preset(id),
    };

    if let Some(p) = preset {
        if p.is_local {
            return local_path(cfg, &p.file);
        }
        return join_base(&cfg.cdn_base_url, &with_glb_suffix(&p.id));
    }

    let id = match avatar {
        AvatarRef::Id(id) => id.trim(),
        AvatarRef::Preset(_) => "",
    };
    if !id.is_empty() {
        return join_base(&cfg.cdn_base_url, &with_glb_suffix(id));
    }

    tracing::warn!("blank avatar id in local mode; serving default preset");
    match registry::find_preset(&cfg.default_avatar) {
        Some(p) => local_path(cfg, &p.file),
        None => local_path(cfg, FALLBACK_LOCAL_FILE),
    }
}

fn local_path(cfg: &ResolverConfig, file: &str) -> String {
    format!("{}/{}", cfg.local_asset_root.trim_end_matches('/'), file)
}
