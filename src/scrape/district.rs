// src/scrape/district.rs
use tracing::{debug, info};

use crate::{
    config::options::DistrictId,
    core::net::Fetch,
    error::Result,
    progress::Progress,
    specs::{self, district::{self as spec, SchoolLink}},
};

/// The school list of one district: every fetched page, in page order.
///
/// Built fresh for each district; nothing carries over between runs.
#[derive(Debug)]
pub struct DistrictDocument {
    district: DistrictId,
    pages: Vec<String>,
}

impl DistrictDocument {
    pub fn new(district: DistrictId) -> Self {
        Self { district, pages: Vec::new() }
    }

    pub fn push_page(&mut self, text: String) {
        self.pages.push(text);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages concatenated.
    pub fn text(&self) -> String {
        self.pages.concat()
    }

    /// Distinct school links across all pages, in on-page order.
    pub fn links(&self) -> Vec<SchoolLink> {
        spec::school_links(&self.text(), &self.district)
    }
}

/// Fetch page 1 of the district's school list, read its pager, then fetch
/// pages 2..=N in order. Any failed fetch aborts the district.
pub fn assemble(
    fetcher: &dyn Fetch,
    district: &DistrictId,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DistrictDocument> {
    let mut doc = DistrictDocument::new(district.clone());

    let first = fetcher.get(&specs::list_url(district, 1))?;
    let pages = spec::page_count(&first);
    doc.push_page(first);
    info!(district = %district, pages, "school list page 1 fetched");

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching school list for district {district} ({pages} page(s))..."));
    }

    for page in 2..=pages {
        let text = fetcher.get(&specs::list_url(district, page))?;
        debug!(district = %district, page, bytes = text.len(), "school list page fetched");
        doc.push_page(text);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetched page {page} of {pages}"));
        }
    }

    Ok(doc)
}
