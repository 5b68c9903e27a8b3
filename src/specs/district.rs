// src/specs/district.rs
//! Scraping *spec* for the district school list (`school_list.asp`).
//!
//! - Page count comes from the "Page 1 of N" pager; districts with a single page
//!   print no pager, so absence means one page.
//! - School links are the `school_detail.asp?...` fragments carrying both the
//!   district id and a school id that starts with the district id.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::DETAIL_PAGE;
use crate::config::options::DistrictId;
use crate::core::sanitize::normalize_entities;

// Site markup: <strong>&nbsp;&nbsp;Page <font color='#EDFFE8'>1&nbsp;of&nbsp;3
static PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Page\s*(?:<font[^>]*>)?\s*1(?:&nbsp;|\s)+of(?:&nbsp;|\s)+(\d+)")
        .expect("page marker pattern")
});

/// Query fragment identifying one school's detail page, relative to the search root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SchoolLink(String);

impl SchoolLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Number of school-list pages announced on page 1. Always at least 1.
pub fn page_count(first_page: &str) -> u32 {
    PAGE_MARKER
        .captures(first_page)
        .and_then(|c| c[1].parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

/// Every distinct school link in `document`, in order of first appearance.
pub fn school_links(document: &str, district: &DistrictId) -> Vec<SchoolLink> {
    let page = regex::escape(DETAIL_PAGE);
    let id = regex::escape(district.as_str());
    let amp = "(?:&amp;|&)";
    // The district id must end at a parameter boundary: 250279 is not 2502790.
    let pattern = format!(
        r#"{page}\?Search=1{amp}DistrictID={id}(?:{amp}[^"'<>\s]*?)?{amp}ID={id}\d*"#
    );
    // Digits-only id, so the pattern is always valid.
    let re = Regex::new(&pattern).expect("school link pattern");

    let mut seen = HashSet::new();
    re.find_iter(document)
        .map(|m| SchoolLink(normalize_entities(m.as_str())))
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
