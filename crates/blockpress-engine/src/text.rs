//! Plain-text and link helpers.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Remove every HTML tag, keeping the text between them.
pub fn strip_html(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// HTML reduced to plain text: tags stripped, entities decoded, trimmed.
pub fn plain_text(html: &str) -> String {
    let stripped = strip_html(html);
    html_escape::decode_html_entities(&stripped)
        .trim()
        .to_string()
}

/// Turn an absolute CMS link into a path for the internal router.
///
/// Links outside the CMS domain are returned unchanged.
pub fn internal_path(url: &str, site_url: &str) -> String {
    let site = site_url.trim_end_matches('/');
    if site.is_empty() {
        return url.to_string();
    }
    match url.strip_prefix(site) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') || rest.starts_with('?') => rest.to_string(),
        _ => url.to_string(),
    }
}
