//! Discover source note files in a configured directory.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

/// A discovered note file paired with the `note_num` parsed from its name.
#[derive(Debug, Clone)]
pub struct DiscoveredNote {
    pub note_num: u64,
    pub path: PathBuf,
}

/// Find every file directly under `dir` matching `^notes(\d*)\.json$`. The
/// captured digits define `note_num`; an empty capture is note 0. Not
/// recursive — only the configured directory itself is scanned.
///
/// An unreadable or missing `dir` is a fatal I/O error, surfaced
/// to the caller rather than silently treated as zero notes found.
pub fn discover(dir: &Path) -> anyhow::Result<Vec<DiscoveredNote>> {
    let pattern = Regex::new(r"^notes(\d*)\.json$").expect("static regex is valid");

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(caps) = pattern.captures(name) else {
            continue;
        };
        let digits = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let note_num: u64 = if digits.is_empty() {
            0
        } else {
            digits.parse().expect("regex guarantees digits")
        };
        found.push(DiscoveredNote {
            note_num,
            path: entry.path().to_path_buf(),
        });
    }

    found.sort_by_key(|n| n.note_num);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_and_orders_by_note_num() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes2.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.json"), "[]").unwrap();
        fs::write(dir.path().join("notes1.json"), "[]").unwrap();
        fs::write(dir.path().join("irrelevant.txt"), "ignored").unwrap();

        let found = discover(dir.path()).unwrap();
        let nums: Vec<u64> = found.iter().map(|n| n.note_num).collect();
        assert_eq!(nums, vec![0, 1, 2]);
    }

    #[test]
    fn empty_directory_yields_no_notes() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("notes3.json"), "[]").unwrap();
        let found = discover(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error_not_zero_notes() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(discover(&missing).is_err());
    }
}
