//! HTTP HEAD probing of resolved asset URLs.
//!
//! Verifies that a resolved avatar URL actually serves an asset before a
//! registry or mapping change ships: confirms reachability and captures
//! `Content-Length`, `Content-Type`, and cache validators.

mod parse;

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

/// Metadata from a HEAD response for one asset URL.
#[derive(Debug, Clone)]
pub struct AssetHead {
    /// Asset size in bytes, if `Content-Length` is present.
    pub content_length: Option<u64>,
    /// MIME type; GLB assets are expected to be `model/gltf-binary`.
    pub content_type: Option<String>,
    /// `ETag` value if present.
    pub etag: Option<String>,
    /// `Last-Modified` value if present.
    pub last_modified: Option<String>,
}

/// Performs a HEAD request and returns parsed metadata.
///
/// Follows redirects. Non-2xx responses are errors; unlike URL resolution
/// this operation exists to report breakage, not mask it. Runs in the
/// current thread; call from `spawn_blocking` if used from async code.
pub fn probe(url: &str) -> Result<AssetHead> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("HEAD {} returned HTTP {}", url, code);
    }

    Ok(parse::parse_headers(&headers))
}
