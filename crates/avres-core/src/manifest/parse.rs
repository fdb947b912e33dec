//! Manifest wire format.
//!
//! Expected shape: `{ "avatars": [ { id, name, file, ethnicity, gender,
//! outfit, sizeKB, tags }, ... ] }`. Missing fields are defaulted per
//! entry; entries that fail to deserialize at all are skipped, never
//! failing the whole document.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::registry::{AvatarPreset, Gender};

const DEFAULT_SIZE_KB: u32 = 2000;
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    avatars: Vec<serde_json::Value>,
}

/// One manifest entry; every field except `id` may be missing.
#[derive(Debug, Deserialize)]
pub(super) struct ManifestEntry {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    ethnicity: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    outfit: Option<String>,
    #[serde(default, rename = "sizeKB")]
    size_kb: Option<u32>,
    #[serde(default)]
    tags: Vec<String>,
}

impl ManifestEntry {
    /// Converts to a preset, defaulting absent fields.
    fn into_preset(self) -> AvatarPreset {
        let file = self.file.unwrap_or_else(|| format!("{}.glb", self.id));
        let name = self.name.unwrap_or_else(|| self.id.clone());
        AvatarPreset {
            name,
            file,
            ethnicity: self.ethnicity.unwrap_or_else(|| UNKNOWN.to_string()),
            gender: self
                .gender
                .as_deref()
                .map(Gender::from_code)
                .unwrap_or(Gender::Neutral),
            outfit: self.outfit.unwrap_or_else(|| UNKNOWN.to_string()),
            is_local: false,
            size_kb: self.size_kb.unwrap_or(DEFAULT_SIZE_KB),
            license: "unspecified".to_string(),
            source: "cdn".to_string(),
            tags: self.tags.into_iter().collect::<BTreeSet<_>>(),
            thumbnail_url: None,
            id: self.id,
        }
    }
}

/// Parses the manifest body into presets, skipping malformed entries.
pub(super) fn parse_manifest(bytes: &[u8]) -> Result<Vec<AvatarPreset>> {
    let doc: ManifestDoc = serde_json::from_slice(bytes).context("parse manifest JSON")?;
    let mut presets = Vec::with_capacity(doc.avatars.len());
    for value in doc.avatars {
        match serde_json::from_value::<ManifestEntry>(value) {
            Ok(entry) => presets.push(entry.into_preset()),
            Err(err) => tracing::debug!("skipping malformed manifest entry: {}", err),
        }
    }
    Ok(presets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_entry_parses() {
        let body = br#"{"avatars":[{
            "id": "cdn-redhead-f-1",
            "name": "Ruby",
            "file": "Redhead_F_1.glb",
            "ethnicity": "White",
            "gender": "F",
            "outfit": "Casual",
            "sizeKB": 2150,
            "tags": ["cdn", "new"]
        }]}"#;
        let presets = parse_manifest(body).unwrap();
        assert_eq!(presets.len(), 1);
        let p = &presets[0];
        assert_eq!(p.id, "cdn-redhead-f-1");
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.size_kb, 2150);
        assert!(!p.is_local);
        assert_eq!(p.source, "cdn");
        assert!(p.tags.contains("new"));
    }

    #[test]
    fn missing_fields_default() {
        let body = br#"{"avatars":[{"id":"mystery-1"}]}"#;
        let presets = parse_manifest(body).unwrap();
        let p = &presets[0];
        assert_eq!(p.gender, Gender::Neutral);
        assert_eq!(p.ethnicity, "Unknown");
        assert_eq!(p.outfit, "Unknown");
        assert_eq!(p.size_kb, 2000);
        assert!(p.tags.is_empty());
        assert_eq!(p.file, "mystery-1.glb");
        assert_eq!(p.name, "mystery-1");
    }

    #[test]
    fn malformed_entry_is_skipped_not_fatal() {
        let body = br#"{"avatars":[
            {"id": "good-1"},
            {"sizeKB": "not a number"},
            {"id": "good-2", "gender": "M"}
        ]}"#;
        let presets = parse_manifest(body).unwrap();
        let ids: Vec<&str> = presets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["good-1", "good-2"]);
        assert_eq!(presets[1].gender, Gender::Male);
    }

    #[test]
    fn empty_and_absent_avatar_list() {
        assert!(parse_manifest(br#"{"avatars":[]}"#).unwrap().is_empty());
        assert!(parse_manifest(br#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_manifest(b"not json at all").is_err());
    }
}
