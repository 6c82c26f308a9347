//! Meta-refresh redirect detection.
//!
//! A single textual pattern, not an HTML parser. Tags with the attributes in
//! another order, or with `content` before `http-equiv`, are not detected.

use std::sync::LazyLock;

use regex::Regex;

/// `<meta http-equiv="refresh" content="N;url=TARGET" ...>`, case-insensitive,
/// matching across line breaks inside the tag.
static META_REFRESH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<meta\s+http-equiv=["']refresh["']\s+content=["']\d+;\s*url=([^"']+)["'].*?>"#,
    )
    .expect("meta refresh pattern is a valid regex")
});

/// Returns the target of the first meta-refresh tag in `body`, if any.
pub fn extract_meta_refresh(body: &str) -> Option<String> {
    META_REFRESH_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
