// tests/common/mod.rs
//
// Canned pages standing in for the NCES site.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use lunch_scrape::core::net::Fetch;
use lunch_scrape::{Error, Result};

pub const DISTRICT: &str = "2502790";
pub const BASE: &str = "https://nces.ed.gov/ccd/schoolsearch/";

#[derive(Default)]
pub struct CannedFetcher {
    pages: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl CannedFetcher {
    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetch for CannedFetcher {
    fn get(&self, url: &str) -> Result<String> {
        self.calls.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| Error::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

pub fn list_url(page: u32) -> String {
    let mut url = format!("{BASE}school_list.asp?Search=1&DistrictID={DISTRICT}");
    if page > 1 {
        url.push_str(&format!("&SchoolPageNum={page}"));
    }
    url
}

pub fn link(school: u32) -> String {
    format!("school_detail.asp?Search=1&DistrictID={DISTRICT}&ID={DISTRICT}{school:05}")
}

pub fn detail_url(school: u32) -> String {
    format!("{BASE}{}", link(school))
}

/// A school-list page with optional pager and one anchor per school.
pub fn list_page(pager: Option<(u32, u32)>, schools: &[u32]) -> String {
    let mut html = String::from("<html><body><table>\r\n");
    if let Some((page, of)) = pager {
        html.push_str(&format!(
            "<tr><td><strong>&nbsp;&nbsp;Page <font color='#EDFFE8'>{page}&nbsp;of&nbsp;{of}</font></strong></td></tr>\r\n"
        ));
    }
    for s in schools {
        html.push_str(&format!(
            "<tr><td><a href=\"{}\">School {s}</a></td></tr>\r\n",
            link(*s)
        ));
    }
    html.push_str("</table></body></html>");
    html
}

/// A school detail page. `eligible` goes under the "Total" label unless
/// `direct_cert` is set.
pub fn school_page(eligible: Option<&str>, direct_cert: bool, enrollment: Option<&str>) -> String {
    let mut html = String::from("<html><body>\r\n");
    if let Some(e) = eligible {
        let label = if direct_cert {
            "Free lunch eligible by Direct Certification<sup>2</sup>"
        } else {
            "Total<sup>1</sup>"
        };
        html.push_str(&format!("<strong>{label}: </strong>{e}<br>\r\n"));
    }
    if let Some(n) = enrollment {
        html.push_str(&format!(
            "<td align=\"left\"><strong><font size=\"2\">Total Students:</font></strong></td>\r\n\t\t\
             <td><img border=\"0\" src=\"/ccd/commonfiles/images/spacer.gif\" width=\"4\" height=\"10\"></td>\r\n\t\t\
             <td align=\"right\"><font size=\"3\">{n}</font></td>\r\n"
        ));
    }
    html.push_str("</body></html>");
    html
}
