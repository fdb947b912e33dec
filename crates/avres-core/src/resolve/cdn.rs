//! Force-CDN resolution rules.

use crate::config::ResolverConfig;
use crate::registry;

use super::{join_base, with_glb_suffix};

/// Ids carrying this prefix were minted elsewhere in the app by flattening
/// a CDN directory path, `avatars/Black/Black_F_3_Util.glb` becoming
/// `avatars_Black_Black_F_3_Util`. Reconstruction below is coupled to that
/// naming convention.
const FLATTENED_PREFIX: &str = "avatars_";

/// Asset served when even the configured default id has no mapping.
const FALLBACK_CDN_PATH: &str = "avatars/White/White_F_1_Casual.glb";

/// Resolves `id` against the CDN.
///
/// Order: mapping table, flattened-id reconstruction, relative-path
/// passthrough, then the default asset with a warning. Total; never fails.
pub fn resolve_cdn_url(cfg: &ResolverConfig, id: &str) -> String {
    if let Some(path) = registry::cdn_path_for(id) {
        return join_base(&cfg.cdn_base_url, path);
    }

    if let Some(path) = reconstruct_flattened_path(id) {
        return join_base(&cfg.cdn_base_url, &path);
    }

    if id.contains('/') {
        return join_base(&cfg.cdn_base_url, &with_glb_suffix(id));
    }

    tracing::warn!("no CDN mapping for avatar id {id:?}; serving default asset");
    let path = registry::cdn_path_for(&cfg.default_avatar).unwrap_or(FALLBACK_CDN_PATH);
    join_base(&cfg.cdn_base_url, path)
}

/// Rebuilds `avatars/<category>/<file>.glb` from a flattened id like
/// `avatars_Black_Black_F_3_Util`. Needs the prefix plus at least a
/// category token and a filename token; anything shorter is not treated
/// as a flattened id.
fn reconstruct_flattened_path(id: &str) -> Option<String> {
    let rest = id.strip_prefix(FLATTENED_PREFIX)?;
    let (category, file) = rest.split_once('_')?;
    if category.is_empty() || file.is_empty() {
        return None;
    }
    Some(format!("avatars/{category}/{file}.glb"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ResolverConfig {
        ResolverConfig::default()
    }

    #[test]
    fn mapped_ids_resolve_to_base_plus_mapped_path() {
        let cfg = cfg();
        for (id, path) in registry::cdn_mappings() {
            let url = resolve_cdn_url(&cfg, id);
            assert_eq!(url, format!("{}{}", cfg.cdn_base_url, path));
        }
    }

    #[test]
    fn flattened_id_is_reconstructed() {
        let cfg = cfg();
        assert_eq!(
            resolve_cdn_url(&cfg, "avatars_Black_Black_F_3_Util"),
            format!("{}avatars/Black/Black_F_3_Util.glb", cfg.cdn_base_url)
        );
    }

    #[test]
    fn flattened_id_needs_category_and_filename() {
        assert_eq!(reconstruct_flattened_path("avatars_Black"), None);
        assert_eq!(reconstruct_flattened_path("avatars_Black_"), None);
        assert_eq!(reconstruct_flattened_path("avatars__F_3"), None);
        assert_eq!(reconstruct_flattened_path("something_else_entirely"), None);
    }

    #[test]
    fn relative_path_passes_through_with_suffix_appended_once() {
        let cfg = cfg();
        assert_eq!(
            resolve_cdn_url(&cfg, "avatars/White/White_M_2_Formal"),
            format!("{}avatars/White/White_M_2_Formal.glb", cfg.cdn_base_url)
        );
        assert_eq!(
            resolve_cdn_url(&cfg, "avatars/White/White_M_2_Formal.glb"),
            format!("{}avatars/White/White_M_2_Formal.glb", cfg.cdn_base_url)
        );
    }

    #[test]
    fn unknown_id_degrades_to_default_mapping() {
        let cfg = cfg();
        let default_path = registry::cdn_path_for(&cfg.default_avatar).unwrap();
        assert_eq!(
            resolve_cdn_url(&cfg, "xyz123"),
            format!("{}{}", cfg.cdn_base_url, default_path)
        );
    }

    #[test]
    fn unmapped_default_degrades_to_hardcoded_asset() {
        let cfg = ResolverConfig {
            default_avatar: "not-a-registry-id".to_string(),
            ..ResolverConfig::default()
        };
        assert_eq!(
            resolve_cdn_url(&cfg, "xyz123"),
            format!("{}{}", cfg.cdn_base_url, FALLBACK_CDN_PATH)
        );
    }
}
