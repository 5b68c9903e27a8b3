// src/core/sanitize.rs

/// Minimal HTML entity decoding: handle `&nbsp;` and `&amp;` only.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Drop thousands separators: "1,234" → "1234".
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|&c| c != ',').collect()
}

/// Parse a count as printed on the site, with or without separators.
/// `None` for anything that is not a plain non-negative integer fitting in `u32`.
pub fn parse_count(s: &str) -> Option<u32> {
    let digits = strip_separators(s.trim());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
