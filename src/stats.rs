// src/stats.rs
//! Share of a district's schools at or above the lunch-eligibility threshold.

use std::fmt;

use crate::scrape::schools::{RecordStatus, SchoolRecord, SchoolSeries};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error(
        "Some school data is missing ({eligible} eligibility vs {totals} enrollment counts, \
         {partial} school(s) with only one). Operation cannot be completed at this time."
    )]
    IncompleteData {
        eligible: usize,
        totals: usize,
        partial: usize,
    },

    #[error("None of the {school_count} school(s) found reported both eligibility and enrollment.")]
    NoCompleteRecords { school_count: usize },
}

/// Result for one district.
///
/// The percentage is taken over `paired` schools, the ones that reported both
/// counts. `school_count` is every school linked from the list pages.
#[derive(Clone, Debug, PartialEq)]
pub struct DistrictStats {
    pub qualifying: usize,
    pub paired: usize,
    pub school_count: usize,
    pub threshold: f64,
}

impl DistrictStats {
    pub fn percent(&self) -> f64 {
        self.qualifying as f64 / self.paired as f64 * 100.0
    }

    /// Schools left out of the percentage for missing data.
    pub fn skipped(&self) -> usize {
        self.school_count.saturating_sub(self.paired)
    }
}

impl fmt::Display for DistrictStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% of schools in this district meet or exceed {}% of students \
             eligible for the National School Lunch Program.",
            self.percent(),
            threshold_percent(self.threshold)
        )
    }
}

/// Threshold as a percentage with up to two decimals and no trailing zeros: 70, 70.5.
fn threshold_percent(threshold: f64) -> String {
    let text = format!("{:.2}", threshold * 100.0);
    s!(text.trim_end_matches('0').trim_end_matches('.'))
}

/// Count schools whose `eligible[i] / totals[i]` meets `threshold`.
///
/// The sequences must be the same length; otherwise some school lost a field
/// and no percentage is produced. `school_count` is the number of schools
/// found, kept for the skipped-schools diagnostic.
pub fn compute(
    eligible: &[u32],
    totals: &[u32],
    school_count: usize,
    threshold: f64,
) -> Result<DistrictStats, StatsError> {
    if eligible.len() != totals.len() {
        return Err(StatsError::IncompleteData {
            eligible: eligible.len(),
            totals: totals.len(),
            partial: eligible.len().abs_diff(totals.len()),
        });
    }
    if eligible.is_empty() {
        return Err(StatsError::NoCompleteRecords { school_count });
    }

    let qualifying = eligible
        .iter()
        .zip(totals)
        // zero totals never reach here from `aggregate`; never count one as qualifying
        .filter(|&(&e, &t)| t > 0 && f64::from(e) / f64::from(t) >= threshold)
        .count();

    Ok(DistrictStats {
        qualifying,
        paired: eligible.len(),
        school_count,
        threshold,
    })
}

/// Build the sequences from per-school records and compute.
///
/// Equal lengths can still hide a misalignment (one school missing only
/// eligibility, another only enrollment), so any partial record is rejected.
pub fn from_records(records: &[SchoolRecord], threshold: f64) -> Result<DistrictStats, StatsError> {
    let series = SchoolSeries::from_records(records);
    let partial = records
        .iter()
        .filter(|r| r.status() == RecordStatus::Partial)
        .count();
    if partial > 0 {
        return Err(StatsError::IncompleteData {
            eligible: series.eligible.len(),
            totals: series.totals.len(),
            partial,
        });
    }
    compute(&series.eligible, &series.totals, records.len(), threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::DEFAULT_THRESHOLD;
    use crate::config::options::DistrictId;
    use crate::specs::district::school_links;

    fn records(values: &[(Option<u32>, Option<u32>)]) -> Vec<SchoolRecord> {
        let id = DistrictId::parse("2502790").unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &(eligible, enrollment))| {
                let doc = format!("school_detail.asp?Search=1&DistrictID=2502790&ID=2502790{i:05}\"");
                SchoolRecord { link: school_links(&doc, &id).remove(0), eligible, enrollment }
            })
            .collect()
    }

    #[test]
    fn boundary_ratio_qualifies() {
        let s = compute(&[700, 100], &[1000, 1000], 2, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(s.qualifying, 1);
        assert_eq!(s.paired, 2);
        assert_eq!(format!("{:.2}", s.percent()), "50.00");
        assert_eq!(s.skipped(), 0);
    }

    #[test]
    fn mismatched_lengths_give_no_percentage() {
        let err = compute(&[1, 2, 3], &[10, 10], 3, DEFAULT_THRESHOLD).unwrap_err();
        assert_eq!(err, StatsError::IncompleteData { eligible: 3, totals: 2, partial: 1 });
    }

    #[test]
    fn empty_sequences() {
        let err = compute(&[], &[], 4, DEFAULT_THRESHOLD).unwrap_err();
        assert_eq!(err, StatsError::NoCompleteRecords { school_count: 4 });
    }

    #[test]
    fn denominator_is_paired_schools() {
        let rs = records(&[
            (Some(900), Some(1000)),
            (None, None),
            (Some(10), Some(1000)),
            (Some(80), Some(100)),
        ]);
        let s = from_records(&rs, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(s.qualifying, 2);
        assert_eq!(s.paired, 3);
        assert_eq!(s.school_count, 4);
        assert_eq!(s.skipped(), 1);
        assert_eq!(format!("{:.2}", s.percent()), "66.67");
    }

    #[test]
    fn crossed_gaps_are_incomplete_even_with_equal_lengths() {
        let rs = records(&[
            (Some(900), None),
            (None, Some(1000)),
            (Some(10), Some(1000)),
        ]);
        let err = from_records(&rs, DEFAULT_THRESHOLD).unwrap_err();
        assert_eq!(err, StatsError::IncompleteData { eligible: 2, totals: 2, partial: 2 });
    }

    #[test]
    fn custom_threshold() {
        let s = compute(&[50, 49], &[100, 100], 2, 0.5).unwrap();
        assert_eq!(s.qualifying, 1);
    }

    #[test]
    fn report_line() {
        let s = compute(&[700, 100], &[1000, 1000], 2, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(
            s.to_string(),
            "50.00% of schools in this district meet or exceed 70% of students \
             eligible for the National School Lunch Program."
        );
    }

    #[test]
    fn report_line_keeps_fractional_threshold() {
        let s = compute(&[706, 100], &[1000, 1000], 2, 0.705).unwrap();
        assert!(s.to_string().contains("exceed 70.5% of students"));
        assert_eq!(threshold_percent(1.0), "100");
        assert_eq!(threshold_percent(0.7055), "70.55");
    }
}
