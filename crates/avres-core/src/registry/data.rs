//! Bundled preset definitions and the local-id to CDN-path mapping.

use super::{AvatarPreset, Gender};

/// Mapping from bundled preset id to its CDN-relative path.
pub(super) const LOCAL_TO_CDN_MAP: &[(&str, &str)] = &[
    ("asian-f-1-casual", "avatars/Asian/Asian_F_1_Casual.glb"),
    ("asian-f-2-formal", "avatars/Asian/Asian_F_2_Formal.glb"),
    ("asian-m-1-casual", "avatars/Asian/Asian_M_1_Casual.glb"),
    ("black-f-3-util", "avatars/Black/Black_F_3_Util.glb"),
    ("black-m-2-formal", "avatars/Black/Black_M_2_Formal.glb"),
    ("latino-f-2-casual", "avatars/Latino/Latino_F_2_Casual.glb"),
    ("latino-m-1-util", "avatars/Latino/Latino_M_1_Util.glb"),
    ("white-f-1-casual", "avatars/White/White_F_1_Casual.glb"),
    ("white-f-3-formal", "avatars/White/White_F_3_Formal.glb"),
    ("white-m-1-casual", "avatars/White/White_M_1_Casual.glb"),
    ("white-m-2-formal", "avatars/White/White_M_2_Formal.glb"),
    ("neutral-1-base", "avatars/Neutral/Neutral_1_Base.glb"),
];

fn preset(
    id: &str,
    name: &str,
    file: &str,
    ethnicity: &str,
    gender: Gender,
    outfit: &str,
    size_kb: u32,
    tags: &[&str],
) -> AvatarPreset {
    AvatarPreset {
        id: id.to_string(),
        name: name.to_string(),
        file: file.to_string(),
        ethnicity: ethnicity.to_string(),
        gender,
        outfit: outfit.to_string(),
        is_local: true,
        size_kb,
        license: "CC-BY-4.0".to_string(),
        source: "bundled".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        thumbnail_url: None,
    }
}

pub(super) fn build_local_presets() -> Vec<AvatarPreset> {
    let mut presets = vec![
        preset(
            "asian-f-1-casual",
            "Mei",
            "Asian_F_1_Casual.glb",
            "Asian",
            Gender::Female,
            "Casual",
            1840,
            &["casual", "everyday"],
        ),
        preset(
            "asian-f-2-formal",
            "Hana",
            "Asian_F_2_Formal.glb",
            "Asian",
            Gender::Female,
            "Formal",
            2210,
            &["formal", "evening"],
        ),
        preset(
            "asian-m-1-casual",
            "Kenji",
            "Asian_M_1_Casual.glb",
            "Asian",
            Gender::Male,
            "Casual",
            1910,
            &["casual", "everyday"],
        ),
        preset(
            "black-f-3-util",
            "Amara",
            "Black_F_3_Util.glb",
            "Black",
            Gender::Female,
            "Util",
            2050,
            &["utility", "outdoor"],
        ),
        preset(
            "black-m-2-formal",
            "Jalen",
            "Black_M_2_Formal.glb",
            "Black",
            Gender::Male,
            "Formal",
            2340,
            &["formal", "evening"],
        ),
        preset(
            "latino-f-2-casual",
            "Sofia",
            "Latino_F_2_Casual.glb",
            "Latino",
            Gender::Female,
            "Casual",
            1780,
            &["casual", "summer"],
        ),
        preset(
            "latino-m-1-util",
            "Mateo",
            "Latino_M_1_Util.glb",
            "Latino",
            Gender::Male,
            "Util",
            1990,
            &["utility", "outdoor"],
        ),
        preset(
            "white-f-1-casual",
            "Emma",
            "White_F_1_Casual.glb",
            "White",
            Gender::Female,
            "Casual",
            1720,
            &["casual", "everyday", "default"],
        ),
        preset(
            "white-f-3-formal",
            "Claire",
            "White_F_3_Formal.glb",
            "White",
            Gender::Female,
            "Formal",
            2280,
            &["formal", "evening"],
        ),
        preset(
            "white-m-1-casual",
            "Liam",
            "White_M_1_Casual.glb",
            "White",
            Gender::Male,
            "Casual",
            1860,
            &["casual", "everyday"],
        ),
        preset(
            "white-m-2-formal",
            "Oliver",
            "White_M_2_Formal.glb",
            "White",
            Gender::Male,
            "Formal",
            2400,
            &["formal", "evening"],
        ),
        preset(
            "neutral-1-base",
            "Sam",
            "Neutral_1_Base.glb",
            "Neutral",
            Gender::Neutral,
            "Base",
            1540,
            &["base", "minimal"],
        ),
    ];

    // Featured presets ship pre-rendered thumbnails; the rest render on device.
    for p in presets.iter_mut() {
        if matches!(p.id.as_str(), "white-f-1-casual" | "asian-m-1-casual") {
            p.thumbnail_url = Some(format!(
                "https://cdn.lookaround.app/assets/thumbs/{}.webp",
                p.id
            ));
        }
    }

    presets
}
