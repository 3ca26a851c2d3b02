//! Parse a discovered note file into an `IngestedNote`.

use std::path::Path;

use noteweld_merge::orchestrator::{IngestedHeader, IngestedNote};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(rename = "text")]
    header_name: Option<String>,
    #[serde(rename = "section-text")]
    section_text: Option<String>,
}

const DEFAULT_HEADER_NAME: &str = "Default Header";

/// Extract bullet lines from a section's raw text block: each kept line
/// begins with `-`, optionally followed by whitespace; every other line is
/// discarded.
fn extract_bullets(section_text: &str) -> Vec<String> {
    section_text
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            trimmed.strip_prefix('-').map(|rest| rest.trim_start().to_string())
        })
        .collect()
}

/// Read and parse `path` as a JSON array of sections, skipping any section
/// that is malformed or missing required fields: the run continues, the
/// skip is logged, and an empty file simply yields a note with no headers.
pub fn ingest_note_file(path: &Path, note_num: u64) -> anyhow::Result<IngestedNote> {
    let contents = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;

    let Some(sections) = raw.as_array() else {
        warn!(path = %path.display(), "note file is not a JSON array, skipping all sections");
        return Ok(IngestedNote {
            note_num,
            headers: Vec::new(),
        });
    };

    let mut headers = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        let parsed: RawSection = match serde_json::from_value(section.clone()) {
            Ok(p) => p,
            Err(err) => {
                warn!(path = %path.display(), section = i, error = %err, "skipping malformed section");
                continue;
            }
        };

        // Whitespace- and colon-trimmed at ingest, per original_source's
        // `header_name.strip().strip(':')` (merge_logic.py) — keeps the
        // emitted "{accepted_header}:" line from doubling a colon when a
        // source header was itself written as e.g. "Summary:".
        let header_name = parsed
            .header_name
            .unwrap_or_else(|| DEFAULT_HEADER_NAME.to_string());
        let header_name = header_name.trim().trim_matches(':').to_string();

        let bullets = parsed
            .section_text
            .map(|s| extract_bullets(&s))
            .unwrap_or_default();

        headers.push(IngestedHeader {
            header_name,
            bullets,
        });
    }

    Ok(IngestedNote { note_num, headers })
}
