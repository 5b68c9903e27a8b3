// src/error.rs
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop the current district from being processed.
///
/// Per-school gaps (a field that could not be found) are not errors; they are
/// carried on `SchoolRecord` and judged by `stats`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("invalid NCES district id {0:?}: expected digits only")]
    InvalidDistrictId(String),

    #[error("threshold {0} is out of range, expected a ratio in (0, 1]")]
    InvalidThreshold(f64),

    #[error("no answer given for: {0}")]
    NoAnswer(String),

    #[error("--{0} only applies to county mode")]
    CountyOnly(&'static str),

    #[error("corrupt tally line {line} in {}: {content:?}", path.display())]
    Tally {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Errors caused by what the user typed rather than by the site or disk.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidDistrictId(_)
                | Error::InvalidThreshold(_)
                | Error::NoAnswer(_)
                | Error::CountyOnly(_)
        )
    }
}
