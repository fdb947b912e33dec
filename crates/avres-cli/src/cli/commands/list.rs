//! `avres list` – show bundled presets, optionally filtered.

use anyhow::Result;
use avres_core::registry::{filter_presets, AvatarPreset, FilterCriteria, Gender};

pub fn run_list(
    gender: Option<&str>,
    ethnicity: Option<String>,
    outfit: Option<String>,
    tag: Option<String>,
    local_only: bool,
    json: bool,
) -> Result<()> {
    let criteria = FilterCriteria {
        gender: gender.map(Gender::from_code),
        ethnicity,
        outfit,
        tag,
        local_only,
    };
    let presets = filter_presets(&criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    if presets.is_empty() {
        println!("No presets match.");
    } else {
        print_table(&presets);
    }
    Ok(())
}

fn print_table(presets: &[&AvatarPreset]) {
    println!(
        "{:<20} {:<8} {:<10} {:<8} {:<8} {}",
        "ID", "GENDER", "ETHNICITY", "OUTFIT", "SIZE", "FILE"
    );
    for p in presets {
        println!(
            "{:<20} {:<8} {:<10} {:<8} {:<8} {}",
            p.id,
            p.gender.code(),
            p.ethnicity,
            p.outfit,
            format!("{}KB", p.size_kb),
            p.file
        );
    }
}
