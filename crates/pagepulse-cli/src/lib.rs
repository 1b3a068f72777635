pub mod commands;

/// Default bare hostnames to https before handing them to the fetcher.
///
/// A URL that still fails to parse is passed through anyway: malformed
/// targets are per-target fetch failures, not upfront rejections.
pub fn normalize_url(raw: &str) -> String {
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    if let Err(e) = url::Url::parse(&candidate) {
        tracing::warn!("URL {} looks malformed ({}); the fetch will likely fail", candidate, e);
    }

    candidate
}
