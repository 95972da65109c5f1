// src/store.rs
//
// The persisted dataset: one JSON array of {"date": "YYYY-MM-DD",
// "rate": n} objects, newest first, at most one record per day. Read
// wholesale before a scrape, written wholesale after the merge.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ScrapeError;

/// One published daily value. chrono's default NaiveDate serde form is
/// the ISO calendar date, which is exactly the on-disk format.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Load the prior dataset. A missing, unreadable or malformed file is
/// "no existing data", never an error; the merge step re-grows the file.
pub fn load(path: &Path) -> Vec<RateRecord> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            if path.exists() {
                warn!(path = %path.display(), error = %e, "could not read dataset, starting empty");
            }
            return Vec::new();
        }
    };
    match serde_json::from_str(&text) {
        Ok(records) => records,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed dataset, starting empty");
            Vec::new()
        }
    }
}

/// Append records whose date is not yet present, then sort the union by
/// date descending. Returns the merged dataset and how many records were
/// actually new.
pub fn merge(existing: Vec<RateRecord>, fresh: Vec<RateRecord>) -> (Vec<RateRecord>, usize) {
    let mut seen: HashSet<NaiveDate> = existing.iter().map(|r| r.date).collect();
    let mut merged = existing;

    let mut added = 0usize;
    for record in fresh {
        if seen.insert(record.date) {
            merged.push(record);
            added += 1;
        }
    }

    merged.sort_by(|a, b| b.date.cmp(&a.date));
    (merged, added)
}

/// Overwrite the dataset file, creating parent directories if needed.
pub fn save(path: &Path, records: &[RateRecord]) -> Result<(), ScrapeError> {
    let write_err = |source| ScrapeError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    // Records are plain values; serialization cannot fail short of io.
    let json = serde_json::to_string(records).map_err(|e| ScrapeError::Write {
        path: path.display().to_string(),
        source: e.into(),
    })?;
    fs::write(path, json).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(y: i32, m: u32, d: u32, rate: f64) -> RateRecord {
        RateRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            rate,
        }
    }

    #[test]
    fn merge_dedupes_by_date_and_sorts_descending() {
        let existing = vec![rec(2025, 8, 1, 6.0)];
        let fresh = vec![rec(2025, 8, 1, 6.0), rec(2025, 8, 2, 5.9)];
        let (merged, added) = merge(existing, fresh);
        assert_eq!(added, 1);
        assert_eq!(merged, vec![rec(2025, 8, 2, 5.9), rec(2025, 8, 1, 6.0)]);
    }

    #[test]
    fn merge_into_empty_sorts_fresh_descending() {
        let fresh = vec![rec(2025, 7, 30, 5.95), rec(2025, 8, 1, 6.0), rec(2025, 7, 31, 5.97)];
        let (merged, added) = merge(Vec::new(), fresh);
        assert_eq!(added, 3);
        assert_eq!(
            merged,
            vec![rec(2025, 8, 1, 6.0), rec(2025, 7, 31, 5.97), rec(2025, 7, 30, 5.95)]
        );
    }

    #[test]
    fn existing_record_wins_over_fresh_same_day() {
        // Re-scraping a day must not replace what we already persisted.
        let existing = vec![rec(2025, 8, 1, 6.0)];
        let fresh = vec![rec(2025, 8, 1, 9.9)];
        let (merged, added) = merge(existing, fresh);
        assert_eq!(added, 0);
        assert_eq!(merged, vec![rec(2025, 8, 1, 6.0)]);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let path = Path::new("definitely/not/here/ircc.json");
        assert!(load(path).is_empty());
    }

    #[test]
    fn record_serializes_as_iso_date_and_rate() {
        let json = serde_json::to_string(&[rec(2025, 8, 1, 6.0)]).unwrap();
        assert_eq!(json, r#"[{"date":"2025-08-01","rate":6.0}]"#);
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        let dir = std::env::temp_dir().join(format!("ircc_store_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load(&path).is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
