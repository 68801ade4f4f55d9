//! Stylesheet scraping.

const URL_OPEN: &str = "url(";

/// Returns the first `url(...)` target in a stylesheet, with quotes stripped.
///
/// Google Fonts `css2` responses list one `@font-face` per subset; the first
/// `src` is the one to download.
pub fn extract_font_url(css: &str) -> Option<&str> {
    let start = css.find(URL_OPEN)? + URL_OPEN.len();
    let len = css[start..].find(')')?;
    let url = css[start..start + len].trim().trim_matches(|c| c == '"' || c == '\'');
    (!url.is_empty()).then_some(url)
}
