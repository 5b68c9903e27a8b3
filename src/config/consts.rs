// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://nces.ed.gov/ccd/schoolsearch/";
pub const LIST_PAGE: &str = "school_list.asp";
pub const DETAIL_PAGE: &str = "school_detail.asp";
pub const PAGE_PARAM: &str = "SchoolPageNum";
pub const USER_AGENT: &str = concat!("lunch_scrape/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';
pub const TALLY_FILE: &str = "county_tally.csv";
pub const LOG_FILE: &str = "debug.log";

// Stats
/// Share of eligible students at which a school qualifies (ratio >= threshold).
pub const DEFAULT_THRESHOLD: f64 = 0.70;
