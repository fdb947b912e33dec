//! Parse HTTP response header lines into AssetHead.

use super::AssetHead;

/// Parse collected header lines into AssetHead.
pub(crate) fn parse_headers(lines: &[String]) -> AssetHead {
    let mut content_length = None;
    let mut content_type = None;
    let mut etag = None;
    let mut last_modified = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("etag") {
                etag = Some(value.trim_matches('"').to_string());
            }
            if name.eq_ignore_ascii_case("last-modified") {
                last_modified = Some(value.to_string());
            }
        }
    }

    AssetHead {
        content_length,
        content_type,
        etag,
        last_modified,
    }
}
