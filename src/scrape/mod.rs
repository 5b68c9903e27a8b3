// src/scrape/mod.rs
pub mod district;
pub mod schools;

use tracing::info;

use crate::{
    config::options::{DistrictId, RunOptions},
    core::net::Fetch,
    error::Result,
    progress::Progress,
    stats::{self, DistrictStats, StatsError},
    store,
};

pub use district::{DistrictDocument, assemble};
pub use schools::{RecordStatus, SchoolRecord, SchoolSeries, aggregate};

/// Everything learned about one district in one run.
#[derive(Debug)]
pub struct DistrictReport {
    pub district: DistrictId,
    pub pages: usize,
    /// Distinct school links found on the list pages.
    pub school_count: usize,
    pub records: Vec<SchoolRecord>,
    pub stats: std::result::Result<DistrictStats, StatsError>,
}

/// Scrape one district end to end: list pages, school pages, percentage.
///
/// `Err` only for fetch or I/O failures. Missing school data shows up in
/// `stats` instead.
pub fn run_district(
    fetcher: &dyn Fetch,
    options: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DistrictReport> {
    // Reborrow with a short trait-object lifetime so `progress` stays usable.
    let doc = assemble(
        fetcher,
        &options.district,
        progress.as_deref_mut().map(|p| p as &mut dyn Progress),
    )?;

    if options.save_document {
        let path = store::save_document(&options.store_dir, &options.district, &doc.text())?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Saved school list to {}", path.display()));
        }
    }

    let links = doc.links();
    info!(district = %options.district, schools = links.len(), "school links found");
    if let Some(p) = progress.as_deref_mut() {
        p.log("Working...");
    }

    let records = aggregate(
        fetcher,
        &links,
        progress.as_deref_mut().map(|p| p as &mut dyn Progress),
    )?;
    let stats = stats::from_records(&records, options.threshold);

    Ok(DistrictReport {
        district: options.district.clone(),
        pages: doc.page_count(),
        school_count: links.len(),
        records,
        stats,
    })
}
