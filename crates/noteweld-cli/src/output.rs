//! Write the merged document and provenance report.

use std::path::Path;

use noteweld_core::ProvenanceReport;

pub fn write_merged_text(path: &Path, merged_text: &str) -> anyhow::Result<()> {
    std::fs::write(path, merged_text)?;
    Ok(())
}

pub fn write_provenance_report(path: &Path, report: &ProvenanceReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
