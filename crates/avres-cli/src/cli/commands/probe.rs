//! `avres probe <id>` – resolve an avatar id and HEAD the resulting URL.

use anyhow::{Context, Result};
use avres_core::config::ResolverConfig;
use avres_core::probe;
use avres_core::resolve::{self, AvatarRef};

pub async fn run_probe(cfg: &ResolverConfig, id: &str) -> Result<()> {
    let url = resolve::resolve_url(cfg, AvatarRef::Id(id));
    let head = tokio::task::spawn_blocking({
        let url = url.clone();
        move || probe::probe(&url)
    })
    .await
    .context("probe task join")?
    .with_context(|| format!("asset unreachable: {url}"))?;

    println!("URL:            {url}");
    println!(
        "Content-Length: {}",
        head.content_length
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "Content-Type:   {}",
        head.content_type.as_deref().unwrap_or("-")
    );
    println!("ETag:           {}", head.etag.as_deref().unwrap_or("-"));
    println!(
        "Last-Modified:  {}",
        head.last_modified.as_deref().unwrap_or("-")
    );
    Ok(())
}
