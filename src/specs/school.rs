// src/specs/school.rs
//! Scraping *spec* for a school detail page (`school_detail.asp`).
//!
//! Two counts are read from the page:
//! - **Eligibility**: free/reduced lunch eligible students, printed after a
//!   `Total¹` label, or after a `Free lunch eligible by Direct Certification²`
//!   label for schools that only report the latter.
//! - **Enrollment**: the `Total Students:` cell of the enrollment table.
//!
//! Each count is tried as a set of [`FieldRule`]s in fixed order; the first rule
//! whose pattern matches decides the result, even when that result is "absent".

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::core::sanitize::parse_count;

const TOTAL_LABEL: &str = "<strong>Total<sup>1</sup>: </strong>";
const DIRECT_CERT_LABEL: &str =
    "<strong>Free lunch eligible by Direct Certification<sup>2</sup>: </strong>";

// Site boilerplate; cells are separated by "\r\n\t\t" on the live page.
const ENROLLMENT_CELLS: [&str; 3] = [
    r#"<td align="left"><strong><font size="2">Total Students:</font></strong></td>"#,
    r#"<td><img border="0" src="/ccd/commonfiles/images/spacer.gif" width="4" height="10"></td>"#,
    r#"<td align="right"><font size="3">"#,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Eligibility,
    Enrollment,
}

/// How the number after a label is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Magnitude {
    /// Grouped with thousands separators: `1,234`, `12,345`.
    Large,
    /// Plain digits.
    Small,
}

impl Magnitude {
    fn pattern(self) -> &'static str {
        match self {
            Magnitude::Large => r"(\d{1,3}(?:,\d{3})+)",
            Magnitude::Small => r"(\d+)",
        }
    }
}

/// One named way of finding a count on the page.
#[derive(Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub field: Field,
    pub magnitude: Magnitude,
    /// A matched value of 0 means "not reported" rather than a true zero.
    pub zero_is_absent: bool,
    re: Regex,
}

impl FieldRule {
    fn new(
        name: &'static str,
        field: Field,
        label_pattern: &str,
        magnitude: Magnitude,
        zero_is_absent: bool,
    ) -> Self {
        let re = Regex::new(&join!(label_pattern, magnitude.pattern()))
            .expect("field rule pattern");
        Self { name, field, magnitude, zero_is_absent, re }
    }

    /// Raw number text following the label, if the label appears with this magnitude.
    pub fn find<'a>(&self, page: &'a str) -> Option<&'a str> {
        self.re.captures(page).and_then(|c| c.get(1)).map(|m| m.as_str())
    }

    /// Value this rule yields for a matched number.
    fn accept(&self, raw: &str) -> Option<u32> {
        parse_count(raw).filter(|&v| !(self.zero_is_absent && v == 0))
    }
}

static ELIGIBILITY_RULES: LazyLock<[FieldRule; 4]> = LazyLock::new(|| {
    use Magnitude::*;
    let total = regex::escape(TOTAL_LABEL);
    let direct = regex::escape(DIRECT_CERT_LABEL);
    [
        FieldRule::new("total-large", Field::Eligibility, &total, Large, false),
        FieldRule::new("direct-cert-large", Field::Eligibility, &direct, Large, false),
        FieldRule::new("total-small", Field::Eligibility, &total, Small, false),
        FieldRule::new("direct-cert-small", Field::Eligibility, &direct, Small, true),
    ]
});

static ENROLLMENT_RULES: LazyLock<[FieldRule; 2]> = LazyLock::new(|| {
    use Magnitude::*;
    let label = ENROLLMENT_CELLS
        .iter()
        .map(|cell| regex::escape(cell))
        .collect::<Vec<_>>()
        .join(r"\s*");
    [
        FieldRule::new("students-large", Field::Enrollment, &label, Large, false),
        FieldRule::new("students-small", Field::Enrollment, &label, Small, false),
    ]
});

/// Rules for `field`, in the order they are tried.
pub fn rules(field: Field) -> &'static [FieldRule] {
    match field {
        Field::Eligibility => &ELIGIBILITY_RULES[..],
        Field::Enrollment => &ENROLLMENT_RULES[..],
    }
}

/// Read `field` from a school page. `None` when no rule matches, or when the
/// first matching rule treats its value as unreported.
pub fn extract(page: &str, field: Field) -> Option<u32> {
    for rule in rules(field) {
        if let Some(raw) = rule.find(page) {
            let value = rule.accept(raw);
            debug!(rule = rule.name, raw, ?value, "field matched");
            return value;
        }
    }
    debug!(?field, "field not found");
    None
}

/// Students eligible for free/reduced lunch.
pub fn eligibility(page: &str) -> Option<u32> {
    extract(page, Field::Eligibility)
}

/// Total students enrolled. A reported 0 is returned as-is; callers decide
/// what an empty school means.
pub fn enrollment(page: &str) -> Option<u32> {
    extract(page, Field::Enrollment)
}
