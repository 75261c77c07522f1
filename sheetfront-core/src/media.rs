//! Image URL normalization for Drive share links.

use once_cell::sync::Lazy;
use regex::Regex;

// Share-link shapes probed in priority order; the first capture wins.
static ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"/file/d/([A-Za-z0-9_-]+)",
        r"[?&]id=([A-Za-z0-9_-]+)",
        r"/d/([A-Za-z0-9_-]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("share link pattern compiles"))
    .collect()
});

/// Rewrite a Drive share link to its direct-content form.
///
/// Any of the recognized link shapes resolves to the same direct URL for a
/// given file id. URLs that are not Drive share links pass through
/// unchanged; empty input stays empty.
#[must_use]
pub fn direct_image_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() || !trimmed.contains("drive.google.com") {
        return trimmed.to_string();
    }
    for pattern in ID_PATTERNS.iter() {
        if let Some(id) = pattern.captures(trimmed).and_then(|caps| caps.get(1)) {
            return format!(
                "https://drive.google.com/thumbnail?id={}&sz=w2000",
                id.as_str()
            );
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECT: &str = "https://drive.google.com/thumbnail?id=1AbC_d-9xYz&sz=w2000";

    #[test]
    fn all_three_share_shapes_resolve_to_the_same_url() {
        assert_eq!(
            direct_image_url("https://drive.google.com/file/d/1AbC_d-9xYz/view?usp=sharing"),
            DIRECT
        );
        assert_eq!(
            direct_image_url("https://drive.google.com/open?id=1AbC_d-9xYz"),
            DIRECT
        );
        assert_eq!(
            direct_image_url("https://drive.google.com/d/1AbC_d-9xYz/preview"),
            DIRECT
        );
    }

    #[test]
    fn non_drive_urls_pass_through() {
        assert_eq!(
            direct_image_url("https://example.com/a.png"),
            "https://example.com/a.png"
        );
        assert_eq!(direct_image_url("  https://example.com/a.png  "), "https://example.com/a.png");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(direct_image_url(""), "");
        assert_eq!(direct_image_url("   "), "");
    }

    #[test]
    fn unrecognized_drive_urls_pass_through() {
        let url = "https://drive.google.com/drive/folders";
        assert_eq!(direct_image_url(url), url);
    }
}
