//! Avatar id to asset URL resolution.
//!
//! `resolve_url` is total: any input produces a usable URL string. Unknown
//! ids degrade to the configured default asset instead of erroring, so a
//! missing avatar renders as the default rather than blocking the caller.

mod cdn;
mod local;

pub use cdn::resolve_cdn_url;
pub use local::resolve_local_url;

use crate::config::ResolverConfig;
use crate::registry::AvatarPreset;

/// Resolver input: an id (which need not exist in the registry) or a full
/// preset record.
#[derive(Debug, Clone, Copy)]
pub enum AvatarRef<'a> {
    Id(&'a str),
    Preset(&'a AvatarPreset),
}

impl<'a> AvatarRef<'a> {
    fn id(&self) -> &'a str {
        match *self {
            AvatarRef::Id(id) => id,
            AvatarRef::Preset(p) => p.id.as_str(),
        }
    }
}

impl<'a> From<&'a str> for AvatarRef<'a> {
    fn from(id: &'a str) -> Self {
        AvatarRef::Id(id)
    }
}

impl<'a> From<&'a AvatarPreset> for AvatarRef<'a> {
    fn from(preset: &'a AvatarPreset) -> Self {
        AvatarRef::Preset(preset)
    }
}

/// Resolves an avatar to the URL its asset bytes can be fetched from.
pub fn resolve_url(cfg: &ResolverConfig, avatar: AvatarRef<'_>) -> String {
    if cfg.force_cdn {
        cdn::resolve_cdn_url(cfg, avatar.id())
    } else {
        local::resolve_local_url(cfg, avatar)
    }
}

/// Joins a CDN-relative path onto the base URL.
pub(crate) fn join_base(base: &str, rel: &str) -> String {
    let rel = rel.trim_start_matches('/');
    if let Ok(mut base_url) = url::Url::parse(base) {
        // Url::join drops the last path segment unless base ends in '/'.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        if let Ok(joined) = base_url.join(rel) {
            return joined.to_string();
        }
    }
    format!("{}/{}", base.trim_end_matches('/'), rel)
}

/// Appends the GLB extension unless the path already carries it.
pub(crate) fn with_glb_suffix(path: &str) -> String {
    if path.ends_with(".glb") {
        path.to_string()
    } else {
        format!("{path}.glb")
    }
}
