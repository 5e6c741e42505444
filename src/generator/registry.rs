//! Listing of the day directories that the entry point is rendered from.

use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Provides the names of the day packages found in a year directory.
pub trait DayLister {
    /// Lists the subdirectories directly under `year_dir`, in scan order.
    fn list_days(&self, year_dir: &Path) -> Result<Vec<String>>;
}

/// Scans the filesystem, one level deep, sorted by file name.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDayLister;

impl DayLister for FsDayLister {
    fn list_days(&self, year_dir: &Path) -> Result<Vec<String>> {
        let mut days = Vec::new();
        for entry in WalkDir::new(year_dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                Error::io(format!("read directory '{}'", year_dir.display()), e.into())
            })?;
            if entry.file_type().is_dir() {
                days.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        log::debug!("Found {} day directories in {}", days.len(), year_dir.display());
        Ok(days)
    }
}

/// A fixed listing, for rendering without touching the filesystem.
#[derive(Debug, Default, Clone)]
pub struct StaticDayLister(pub Vec<String>);

impl DayLister for StaticDayLister {
    fn list_days(&self, _year_dir: &Path) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_directories_sorted() {
        let tmp = TempDir::new().unwrap();
        for dir in ["day10", "day02", "day01"] {
            std::fs::create_dir(tmp.path().join(dir)).unwrap();
        }
        std::fs::create_dir_all(tmp.path().join("day01").join("nested")).unwrap();
        std::fs::write(tmp.path().join("main.rs"), "").unwrap();

        let days = FsDayLister.list_days(tmp.path()).unwrap();
        assert_eq!(days, vec!["day01", "day02", "day10"]);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(FsDayLister.list_days(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_io_failure() {
        let tmp = TempDir::new().unwrap();
        let err = FsDayLister.list_days(&tmp.path().join("2030")).unwrap_err();
        assert!(matches!(err, Error::IoFailure { .. }));
    }

    #[test]
    fn static_lister_keeps_given_order() {
        let lister = StaticDayLister(vec!["day03".into(), "day01".into()]);
        assert_eq!(lister.list_days(Path::new("ignored")).unwrap(), vec!["day03", "day01"]);
    }
}
