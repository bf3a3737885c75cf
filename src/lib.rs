//! # Tweet Sentiment
//!
//! Lexicon-based sentiment scoring for corpora of short text records, with
//! every record scored concurrently and folded into one aggregate total.
//!
//! ## Features
//!
//! - **Lexicon Store**: immutable `word,score` lookup, loaded once and shared by reference
//! - **Tokenization**: whitespace split, ASCII-letter filter, lowercase
//! - **Concurrent Aggregation**: rayon worker pool with atomic, mutex, or channel fold
//! - **Reports**: polarity classification plus run metadata
//!
//! ## Quick Start
//!
//! ```no_run
//! use tweet_sentiment::{analyze_corpus, ScoringConfig};
//!
//! let report = analyze_corpus("lexicon.csv", "tweets.txt", &ScoringConfig::default())?;
//!
//! println!("Score: {:.4} ({})", report.total_score, report.polarity);
//! # Ok::<(), tweet_sentiment::SentimentError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Lexicon file → Lexicon ─┐
//!                         ├→ Aggregator (per-record tasks → fold) → total → Report
//! Record file  → records ─┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod scoring;

use std::path::Path;

// Re-export main types
pub use analysis::metadata::ReportMetadata;
pub use analysis::result::{Polarity, SentimentReport};
pub use config::{FoldStrategy, ScoringConfig};
pub use error::{LoadError, Result, SentimentError};
pub use lexicon::Lexicon;
pub use scoring::{Aggregator, RunStats};

/// Main analysis function
///
/// Loads the lexicon, scores every line of the record file, and returns the
/// aggregate score with its polarity and run metadata.
///
/// # Arguments
///
/// * `lexicon_path` - File of `word,score` lines
/// * `records_path` - File with one record per line
/// * `config` - Scoring configuration
///
/// # Errors
///
/// * `SentimentError::Load` if the lexicon cannot be read or has a malformed line
/// * `SentimentError::RecordSource` if the record file cannot be read
/// * `SentimentError::InvalidInput` for an unusable configuration
///
/// No partial report is returned on error.
pub fn analyze_corpus(
    lexicon_path: impl AsRef<Path>,
    records_path: impl AsRef<Path>,
    config: &ScoringConfig,
) -> Result<SentimentReport> {
    use std::time::Instant;
    let start_time = Instant::now();

    let lexicon_path = lexicon_path.as_ref();
    let records_path = records_path.as_ref();

    let lexicon = Lexicon::load(lexicon_path)?;
    if lexicon.is_empty() {
        log::warn!("Lexicon {} has no entries; every record will score 0", lexicon_path.display());
    }

    let stats = Aggregator::new(config.clone()).run_with_stats(&lexicon, records_path)?;

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::debug!(
        "Analysis complete: total={} over {} records in {:.2}ms",
        stats.total,
        stats.record_count,
        processing_time_ms
    );

    Ok(SentimentReport {
        total_score: stats.total,
        polarity: Polarity::from_score(stats.total),
        metadata: ReportMetadata {
            lexicon_source: lexicon_path.display().to_string(),
            records_source: records_path.display().to_string(),
            lexicon_entries: lexicon.len(),
            record_count: stats.record_count,
            token_count: stats.token_count,
            matched_tokens: stats.matched_tokens,
            workers: stats.workers,
            fold: config.fold,
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
