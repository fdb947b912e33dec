//! `avres manifest` – fetch the CDN manifest and list its presets.

use anyhow::Result;
use avres_core::config::ResolverConfig;
use avres_core::manifest::ManifestCache;

pub async fn run_manifest(cfg: &ResolverConfig, json: bool) -> Result<()> {
    let cache = ManifestCache::new();
    let presets = cache.get_or_fetch(cfg).await;

    if json {
        println!("{}", serde_json::to_string_pretty(presets)?);
        return Ok(());
    }

    if presets.is_empty() {
        println!("Manifest lists no presets (or was unreachable; see log).");
    } else {
        println!(
            "{:<24} {:<8} {:<10} {:<8} {}",
            "ID", "GENDER", "ETHNICITY", "SIZE", "FILE"
        );
        for p in presets {
            println!(
                "{:<24} {:<8} {:<10} {:<8} {}",
                p.id,
                p.gender.code(),
                p.ethnicity,
                format!("{}KB", p.size_kb),
                p.file
            );
        }
    }
    Ok(())
}
