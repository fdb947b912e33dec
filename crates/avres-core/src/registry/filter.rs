//! Predicate filtering over the bundled registry.

use super::{local_presets, AvatarPreset, Gender};

/// Filter criteria; `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub gender: Option<Gender>,
    /// Case-insensitive ethnicity match.
    pub ethnicity: Option<String>,
    /// Case-insensitive outfit match.
    pub outfit: Option<String>,
    /// Exact tag match.
    pub tag: Option<String>,
    pub local_only: bool,
}

/// Filters the bundled registry, preserving registry order. Pure: same
/// criteria always yield the same sequence.
pub fn filter_presets(criteria: &FilterCriteria) -> Vec<&'static AvatarPreset> {
    local_presets()
        .iter()
        .filter(|p| matches(p, criteria))
        .collect()
}

fn matches(preset: &AvatarPreset, c: &FilterCriteria) -> bool {
    if let Some(gender) = c.gender {
        if preset.gender != gender {
            return false;
        }
    }
    if let Some(ethnicity) = &c.ethnicity {
        if !preset.ethnicity.eq_ignore_ascii_case(ethnicity) {
            return false;
        }
    }
    if let Some(outfit) = &c.outfit {
        if !preset.outfit.eq_ignore_ascii_case(outfit) {
            return false;
        }
    }
    if let Some(tag) = &c.tag {
        if !preset.tags.contains(tag.as_str()) {
            return false;
        }
    }
    if c.local_only && !preset.is_local {
        return false;
    }
    true
}
