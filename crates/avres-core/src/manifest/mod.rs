//! CDN avatar manifest: lazy fetch with process-lifetime memoization.
//!
//! The first `get_or_fetch` call downloads and parses the manifest; the
//! result, including the empty set produced by a failed fetch, stays cached
//! until the process exits. There is no retry and no invalidation; a
//! restart is the only way to refetch.

mod fetch;
mod parse;

use anyhow::{Context, Result};
use tokio::sync::OnceCell;

use crate::config::ResolverConfig;
use crate::registry::AvatarPreset;

/// Once-per-process cache of CDN-hosted presets.
#[derive(Default)]
pub struct ManifestCache {
    presets: OnceCell<Vec<AvatarPreset>>,
}

impl ManifestCache {
    pub fn new() -> Self {
        Self {
            presets: OnceCell::new(),
        }
    }

    /// Returns the CDN preset list, fetching the manifest on first call.
    ///
    /// Fetch or parse failure yields an empty cached list and a warning;
    /// the caller proceeds with the bundled registry only. Concurrent first
    /// callers share a single fetch.
    pub async fn get_or_fetch(&self, cfg: &ResolverConfig) -> &[AvatarPreset] {
        self.presets
            .get_or_init(|| async move {
                match fetch_presets(&cfg.manifest_url).await {
                    Ok(presets) => {
                        tracing::info!("loaded {} CDN presets from manifest", presets.len());
                        presets
                    }
                    Err(err) => {
                        tracing::warn!(
                            "CDN manifest unavailable, continuing with bundled presets only: {:#}",
                            err
                        );
                        Vec::new()
                    }
                }
            })
            .await
    }
}

async fn fetch_presets(manifest_url: &str) -> Result<Vec<AvatarPreset>> {
    let url = manifest_url.to_string();
    let body = tokio::task::spawn_blocking(move || fetch::fetch_body(&url))
        .await
        .context("manifest fetch task join")??;
    parse::parse_manifest(&body)
}
