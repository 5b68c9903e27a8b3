// src/scrape/schools.rs
use tracing::{info, warn};

use crate::{
    core::net::Fetch,
    error::Result,
    progress::Progress,
    specs::{self, district::SchoolLink, school},
};

/// What one school's detail page yielded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolRecord {
    pub link: SchoolLink,
    pub eligible: Option<u32>,
    /// `None` when not found, and also when the site reports 0 students.
    pub enrollment: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordStatus {
    /// Both counts present.
    Complete,
    /// Exactly one count present; pairing the sequences would be wrong.
    Partial,
    /// Neither count present.
    Missing,
}

impl SchoolRecord {
    pub fn status(&self) -> RecordStatus {
        match (self.eligible, self.enrollment) {
            (Some(_), Some(_)) => RecordStatus::Complete,
            (None, None) => RecordStatus::Missing,
            _ => RecordStatus::Partial,
        }
    }

    fn gap(&self) -> Option<&'static str> {
        match (self.eligible, self.enrollment) {
            (Some(_), Some(_)) => None,
            (None, None) => Some("has not reported data"),
            (None, Some(_)) => Some("no lunch eligibility count"),
            (Some(_), None) => Some("no enrollment count"),
        }
    }
}

/// Eligible and enrollment counts, each appended independently in school order.
///
/// The two vectors line up only when every school reported both or neither.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolSeries {
    pub eligible: Vec<u32>,
    pub totals: Vec<u32>,
}

impl SchoolSeries {
    pub fn from_records(records: &[SchoolRecord]) -> Self {
        let mut series = Self::default();
        for r in records {
            if let Some(e) = r.eligible {
                series.eligible.push(e);
            }
            if let Some(t) = r.enrollment {
                series.totals.push(t);
            }
        }
        series
    }

    pub fn is_aligned(&self) -> bool {
        self.eligible.len() == self.totals.len()
    }
}

/// Extract both counts from one detail page.
pub fn read_school(link: SchoolLink, page: &str) -> SchoolRecord {
    SchoolRecord {
        link,
        eligible: school::eligibility(page),
        // A school cannot have zero students; 0 means the field was never filled in.
        enrollment: school::enrollment(page).filter(|&n| n > 0),
    }
}

/// Visit every school page in link order. A school with missing fields is
/// recorded and reported, never fatal; a failed fetch is.
pub fn aggregate(
    fetcher: &dyn Fetch,
    links: &[SchoolLink],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<SchoolRecord>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut records = Vec::with_capacity(links.len());
    for (i, link) in links.iter().enumerate() {
        let page = fetcher.get(&specs::detail_url(link))?;
        let record = read_school(link.clone(), &page);

        match record.gap() {
            None => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, link.as_str());
                }
            }
            Some(reason) => {
                warn!(link = link.as_str(), reason, "school data missing");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(i, link.as_str(), reason);
                }
            }
        }
        records.push(record);
    }

    let complete = records.iter().filter(|r| r.status() == RecordStatus::Complete).count();
    info!(schools = links.len(), complete, "schools aggregated");

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::DistrictId;
    use crate::specs::district::school_links;

    fn link(n: u32) -> SchoolLink {
        let id = DistrictId::parse("2502790").unwrap();
        let doc = format!("school_detail.asp?Search=1&DistrictID=2502790&ID=25027900{n:04}\"");
        school_links(&doc, &id).remove(0)
    }

    fn record(n: u32, eligible: Option<u32>, enrollment: Option<u32>) -> SchoolRecord {
        SchoolRecord { link: link(n), eligible, enrollment }
    }

    #[test]
    fn zero_enrollment_is_dropped() {
        let page = concat!(
            "<strong>Total<sup>1</sup>: </strong>12<br>",
            r#"<td align="left"><strong><font size="2">Total Students:</font></strong></td>"#,
            "\r\n\t\t",
            r#"<td><img border="0" src="/ccd/commonfiles/images/spacer.gif" width="4" height="10"></td>"#,
            "\r\n\t\t",
            r#"<td align="right"><font size="3">0</font></td>"#,
        );
        let r = read_school(link(1), page);
        assert_eq!(r.eligible, Some(12));
        assert_eq!(r.enrollment, None);
        assert_eq!(r.status(), RecordStatus::Partial);
    }

    #[test]
    fn series_append_independently() {
        let records = [
            record(1, Some(700), Some(1000)),
            record(2, Some(5), None),
            record(3, None, None),
            record(4, Some(100), Some(1000)),
        ];
        let s = SchoolSeries::from_records(&records);
        assert_eq!(s.eligible, [700, 5, 100]);
        assert_eq!(s.totals, [1000, 1000]);
        assert!(!s.is_aligned());
    }

    #[test]
    fn statuses() {
        assert_eq!(record(1, Some(1), Some(2)).status(), RecordStatus::Complete);
        assert_eq!(record(1, None, Some(2)).status(), RecordStatus::Partial);
        assert_eq!(record(1, None, None).status(), RecordStatus::Missing);
        assert_eq!(record(1, None, Some(2)).gap(), Some("no lunch eligibility count"));
    }
}
