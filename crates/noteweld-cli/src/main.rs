//! `noteweld`: CLI entry point for a single merge run over a directory of
//! source notes.

mod discovery;
mod ingest;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use noteweld_core::MergeConfig;
use noteweld_embed::{DefaultNormalizer, TfIdfEmbeddingProvider};
use noteweld_merge::MergeOrchestrator;
use tracing::info;

const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;

#[derive(Parser)]
#[command(name = "noteweld", about = "Merge overlapping headered notes into one deduplicated document")]
struct Cli {
    /// Directory to discover notes(\d*).json files in.
    #[arg(long)]
    notes_dir: Option<PathBuf>,

    /// Cosine-similarity threshold for bullet deduplication.
    #[arg(long)]
    similarity_threshold: Option<f64>,

    /// Lexical-overlap threshold for bullet deduplication.
    #[arg(long)]
    overlap_threshold: Option<f64>,

    /// Cosine-similarity threshold for header clustering.
    #[arg(long)]
    header_similarity_threshold: Option<f64>,

    /// Where to write the merged plain-text document.
    #[arg(long, default_value = "merged.txt")]
    output: PathBuf,

    /// Where to write the structured provenance report.
    #[arg(long, default_value = "provenance.json")]
    provenance_output: PathBuf,
}

impl Cli {
    fn into_config(self) -> (MergeConfig, PathBuf, PathBuf) {
        let defaults = MergeConfig::default();
        let config = MergeConfig {
            similarity_threshold: self.similarity_threshold.unwrap_or(defaults.similarity_threshold),
            overlap_threshold: self.overlap_threshold.unwrap_or(defaults.overlap_threshold),
            header_similarity_threshold: self
                .header_similarity_threshold
                .unwrap_or(defaults.header_similarity_threshold),
            notes_dir: self.notes_dir.unwrap_or(defaults.notes_dir),
        };
        (config, self.output, self.provenance_output)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (config, output_path, provenance_path) = cli.into_config();

    let discovered = discovery::discover(&config.notes_dir)
        .with_context(|| format!("discovering notes in {}", config.notes_dir.display()))?;
    info!(count = discovered.len(), dir = %config.notes_dir.display(), "discovered note files");

    let mut notes = Vec::with_capacity(discovered.len());
    for entry in &discovered {
        let note = ingest::ingest_note_file(&entry.path, entry.note_num)
            .with_context(|| format!("reading {}", entry.path.display()))?;
        notes.push(note);
    }

    if notes.is_empty() {
        info!(dir = %config.notes_dir.display(), "no note files discovered, emitting empty output");
    }

    let normalizer = DefaultNormalizer::new();
    let embedder = TfIdfEmbeddingProvider::new(DEFAULT_EMBEDDING_DIMENSIONS);
    let orchestrator = MergeOrchestrator::with_config(&normalizer, &embedder, &config);

    let result = orchestrator.run(&notes)?;
    info!(
        headers = result.provenance.headers.len(),
        "merge complete"
    );

    output::write_merged_text(&output_path, &result.merged_text)
        .with_context(|| format!("writing {}", output_path.display()))?;
    output::write_provenance_report(&provenance_path, &result.provenance)
        .with_context(|| format!("writing {}", provenance_path.display()))?;

    Ok(())
}
