// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction rules for the NCES school search. Each spec covers a
//! single page kind and encodes *where the numbers live in the HTML* and *which
//! pattern wins* when several could match.
//!
//! ## What lives here
//! - **Pure text → value functions** over already-fetched page text
//!   (`school::eligibility`, `district::school_links`, …).
//! - **Match precedence** (large-magnitude before small, "Total" before
//!   "Direct Certification").
//! - **URL shapes** for the two endpoints the scraper visits.
//!
//! ## What does **not** live here
//! - **Networking**: callers fetch through `core::net::Fetch`.
//! - **Aggregation or persistence**: `scrape`, `stats` and `store` own those.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::run_district → scrape::district::assemble → specs::district::*
//!                            ↘ scrape::schools::aggregate → specs::school::*
//!                            ↘ stats::from_records
//! ```
//!
//! Specs are testable offline against captured page fragments.
pub mod district;
pub mod school;

use crate::config::consts::{BASE_URL, LIST_PAGE, PAGE_PARAM};
use crate::config::options::DistrictId;
use district::SchoolLink;

/// School-list URL for one page of a district. Page 1 carries no page parameter.
pub fn list_url(district: &DistrictId, page: u32) -> String {
    let mut url = join!(BASE_URL, LIST_PAGE, "?Search=1&DistrictID=", district.as_str());
    if page > 1 {
        url.push_str(&format!("&{PAGE_PARAM}={page}"));
    }
    url
}

/// Detail-page URL for a school link lifted from the list page.
pub fn detail_url(link: &SchoolLink) -> String {
    join!(BASE_URL, link.as_str())
}
