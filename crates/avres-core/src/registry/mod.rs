//! Bundled avatar preset registry.
//!
//! The registry is immutable and materialized once per process. CDN-hosted
//! presets discovered via the remote manifest (see `crate::manifest`) share
//! the same record type but are never part of this table.

mod data;
mod filter;

pub use filter::{filter_presets, FilterCriteria};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Avatar gender, serialized with the app's one-letter wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "N")]
    Neutral,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Neutral => "N",
        }
    }

    /// Parses a wire code or spelled-out name. Anything unrecognized is
    /// Neutral, matching the manifest defaulting rules.
    pub fn from_code(code: &str) -> Gender {
        match code.trim() {
            "M" | "m" | "Male" | "male" => Gender::Male,
            "F" | "f" | "Female" | "female" => Gender::Female,
            _ => Gender::Neutral,
        }
    }
}

/// One complete avatar asset record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarPreset {
    /// Unique key across the bundled registry.
    pub id: String,
    pub name: String,
    /// Relative filename; resolves under the local asset root when `is_local`.
    pub file: String,
    pub ethnicity: String,
    pub gender: Gender,
    pub outfit: String,
    pub is_local: bool,
    #[serde(rename = "sizeKB")]
    pub size_kb: u32,
    pub license: String,
    pub source: String,
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Bundled presets in registry order.
pub fn local_presets() -> &'static [AvatarPreset] {
    static PRESETS: OnceLock<Vec<AvatarPreset>> = OnceLock::new();
    PRESETS.get_or_init(data::build_local_presets)
}

/// Looks up a bundled preset by id.
pub fn find_preset(id: &str) -> Option<&'static AvatarPreset> {
    local_presets().iter().find(|p| p.id == id)
}

/// CDN-relative path for a bundled id, from the static mapping table.
/// Consulted only in force-CDN mode.
pub fn cdn_path_for(id: &str) -> Option<&'static str> {
    data::LOCAL_TO_CDN_MAP
        .iter()
        .find(|(local_id, _)| *local_id == id)
        .map(|(_, path)| *path)
}

/// Mapping table entries in declaration order.
pub fn cdn_mappings() -> &'static [(&'static str, &'static str)] {
    data::LOCAL_TO_CDN_MAP
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn registry_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for preset in local_presets() {
            assert!(seen.insert(preset.id.as_str()), "duplicate id {}", preset.id);
        }
    }

    #[test]
    fn local_presets_have_files() {
        for preset in local_presets() {
            assert!(preset.is_local, "{} should be bundled", preset.id);
            assert!(!preset.file.is_empty(), "{} has no file", preset.id);
            assert!(preset.file.ends_with(".glb"), "{} is not a GLB", preset.id);
        }
    }

    #[test]
    fn find_preset_hit_and_miss() {
        let preset = find_preset("white-f-1-casual").expect("default preset exists");
        assert_eq!(preset.gender, Gender::Female);
        assert_eq!(preset.ethnicity, "White");
        assert!(find_preset("no-such-avatar").is_none());
    }

    #[test]
    fn every_mapped_id_exists_in_registry() {
        for (id, path) in cdn_mappings() {
            assert!(find_preset(id).is_some(), "mapped id {id} not in registry");
            assert!(path.ends_with(".glb"), "mapped path {path} is not a GLB");
        }
    }

    #[test]
    fn gender_code_roundtrip() {
        assert_eq!(Gender::from_code("F"), Gender::Female);
        assert_eq!(Gender::from_code("male"), Gender::Male);
        assert_eq!(Gender::from_code("X"), Gender::Neutral);
        assert_eq!(Gender::from_code(Gender::Male.code()), Gender::Male);
    }

    #[test]
    fn preset_json_uses_wire_field_names() {
        let preset = find_preset("white-f-1-casual").unwrap();
        let json = serde_json::to_value(preset).unwrap();
        assert_eq!(json["gender"], "F");
        assert!(json["sizeKB"].is_u64());
        assert!(json["isLocal"].as_bool().unwrap());
    }
}
