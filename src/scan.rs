use crate::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Order in which directory entries are tried against each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOrder {
    /// whatever `read_dir` returns, platform dependent
    Filesystem,
    /// entries sorted by file name
    Sorted,
}

impl Default for ListingOrder {
    fn default() -> Self {
        ListingOrder::Filesystem
    }
}

/// lists the file names in `directory`, in the requested order
pub fn list_entries(directory: &Path, order: ListingOrder) -> Result<Vec<String>> {
    let read_dir = fs::read_dir(directory).map_err(|source| Error::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;
    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: directory.to_path_buf(),
            source,
        })?;
        match entry.file_name().into_string() {
            Ok(name) => entries.push(name),
            Err(name) => debug!("skipping non utf-8 entry {:?}", name),
        }
    }
    if order == ListingOrder::Sorted {
        entries.sort();
    }
    Ok(entries)
}

/// For each label, in order, picks the first entry whose name contains it.
/// Labels without a match are skipped, and if any label is left unmatched
/// the whole scan fails: the result always has one path per label.
pub fn match_entries(
    directory: &Path,
    entries: &[String],
    labels: &[String],
) -> Result<Vec<PathBuf>> {
    let mut result = Vec::with_capacity(labels.len());
    for label in labels {
        match entries.iter().find(|e| e.contains(label.as_str())) {
            Some(e) => {
                info!("label '{}' matched {}", label, e);
                result.push(directory.join(e));
            }
            None => info!("label '{}' matched no file", label),
        }
    }
    if result.len() != labels.len() {
        return Err(Error::MatchCount {
            expected: labels.len(),
            found: result.len(),
        });
    }
    Ok(result)
}

/// Scans `directory` for one csv file per label.
pub fn scan_csv_files(
    directory: &Path,
    labels: &[String],
    order: ListingOrder,
) -> Result<Vec<PathBuf>> {
    let entries = list_entries(directory, order)?;
    debug!("{} entries in {}", entries.len(), directory.display());
    match_entries(directory, &entries, labels)
}
