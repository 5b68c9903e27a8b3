// src/store.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::config::consts::{STORE_SEP, TALLY_FILE};
use crate::config::options::DistrictId;
use crate::error::{Error, Result};

/// One district run's contribution to the county figures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TallyEntry {
    pub qualifying: usize,
    pub total: usize,
}

impl TallyEntry {
    /// Qualifying share in percent; `None` when there is nothing to divide by.
    pub fn percent(&self) -> Option<f64> {
        (self.total > 0).then(|| self.qualifying as f64 / self.total as f64 * 100.0)
    }
}

/// Append-only record of per-district counts across program runs.
///
/// File format: one `qualifying,total` line per district, in run order.
pub struct CountyTally {
    path: PathBuf,
}

impl CountyTally {
    /// Tally kept in the default file under `store_dir`.
    pub fn open(store_dir: &Path) -> Self {
        Self::at(store_dir.join(TALLY_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a fresh county session: empty the tally.
    pub fn reset(&self) -> Result<()> {
        ensure_parent(&self.path)?;
        File::create(&self.path)?;
        info!(path = %self.path.display(), "county tally reset");
        Ok(())
    }

    pub fn append(&self, entry: TallyEntry) -> Result<()> {
        ensure_parent(&self.path)?;
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut out = BufWriter::new(file);
        writeln!(out, "{}{}{}", entry.qualifying, STORE_SEP, entry.total)?;
        out.flush()?;
        debug!(qualifying = entry.qualifying, total = entry.total, "county tally appended");
        Ok(())
    }

    /// Entries in run order. A missing file is an empty tally.
    pub fn load(&self) -> Result<Vec<TallyEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut out = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = parse_line(line).ok_or_else(|| Error::Tally {
                path: self.path.clone(),
                line: i + 1,
                content: s!(line),
            })?;
            out.push(entry);
        }
        Ok(out)
    }

    /// Sum of every entry: the county-wide figures so far.
    pub fn totals(&self) -> Result<TallyEntry> {
        Ok(self.load()?.into_iter().fold(TallyEntry::default(), |acc, e| TallyEntry {
            qualifying: acc.qualifying + e.qualifying,
            total: acc.total + e.total,
        }))
    }
}

fn parse_line(line: &str) -> Option<TallyEntry> {
    let (q, t) = line.trim().split_once(STORE_SEP)?;
    let qualifying = q.trim().parse().ok()?;
    let total = t.trim().parse().ok()?;
    (qualifying <= total).then_some(TallyEntry { qualifying, total })
}

/// Write the concatenated school list to `<store_dir>/district_<id>.html`,
/// replacing any copy from an earlier run.
pub fn save_document(store_dir: &Path, district: &DistrictId, text: &str) -> Result<PathBuf> {
    ensure_directory(store_dir)?;
    let path = store_dir.join(format!("district_{district}.html"));
    fs::write(&path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "district document saved");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}
