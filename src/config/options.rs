// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AggregationMode {
    /// Append this district's counts to the persisted county tally.
    County,
    /// Report this district only.
    Single,
}

/// NCES district identifier: an opaque string of ASCII digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DistrictId(String);

impl DistrictId {
    pub fn parse(raw: &str) -> Result<Self> {
        let id = raw.trim();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDistrictId(s!(raw)));
        }
        Ok(Self(s!(id)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DistrictId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub mode: AggregationMode,
    pub fresh: bool,                 // reset the county tally before appending
    pub district: DistrictId,
    pub threshold: f64,
    pub store_dir: PathBuf,          // tally, debug log, saved documents
    pub save_document: bool,         // keep a copy of the concatenated school list
}

impl RunOptions {
    pub fn new(mode: AggregationMode, district: DistrictId) -> Self {
        Self {
            mode,
            fresh: false,
            district,
            threshold: DEFAULT_THRESHOLD,
            store_dir: PathBuf::from(STORE_DIR),
            save_document: false,
        }
    }

    pub fn tally_path(&self) -> PathBuf {
        self.store_dir.join(TALLY_FILE)
    }
}

pub fn check_threshold(t: f64) -> Result<f64> {
    if t > 0.0 && t <= 1.0 {
        Ok(t)
    } else {
        Err(Error::InvalidThreshold(t))
    }
}
