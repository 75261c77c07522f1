//! Cleanup for sheet text destined for rendered markup.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<\s*script[^>]*>.*?<\s*/\s*script\s*>").expect("script pattern compiles")
});

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern compiles"));

/// Strip script tags from untrusted sheet text, case-insensitively and
/// tolerant of whitespace inside the tag boundaries.
#[must_use]
pub fn strip_scripts(html: &str) -> String {
    SCRIPT_TAG.replace_all(html, "").into_owned()
}

/// Strip scripts and convert literal newlines to explicit line breaks.
#[must_use]
pub fn with_breaks(html: &str) -> String {
    LINE_BREAK
        .replace_all(&strip_scripts(html), "<br>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_tags_case_insensitively() {
        assert_eq!(strip_scripts("a<script>alert(1)</script>b"), "ab");
        assert_eq!(strip_scripts("a< ScRiPt src=x >x</ SCRIPT >b"), "ab");
        assert_eq!(strip_scripts("a<script>x\ny</script>b"), "ab");
    }

    #[test]
    fn leaves_other_markup_alone() {
        assert_eq!(strip_scripts("<b>굵게</b>"), "<b>굵게</b>");
    }

    #[test]
    fn converts_newlines_to_breaks() {
        assert_eq!(with_breaks("첫 줄\n둘째 줄"), "첫 줄<br>둘째 줄");
        assert_eq!(with_breaks("a\r\nb\rc"), "a<br>b<br>c");
    }
}
