//! Report metadata structures

use serde::{Deserialize, Serialize};

use crate::config::FoldStrategy;

/// Metadata describing how a report was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Lexicon path as given by the caller
    pub lexicon_source: String,

    /// Record source path as given by the caller
    pub records_source: String,

    /// Number of distinct words in the lexicon
    pub lexicon_entries: usize,

    /// Number of records scored
    pub record_count: usize,

    /// Number of tokens across all records
    pub token_count: usize,

    /// Tokens that had a lexicon entry
    pub matched_tokens: usize,

    /// Worker threads used
    pub workers: usize,

    /// Fold strategy used for the running total
    pub fold: FoldStrategy,

    /// Wall-clock time for load + scoring, in milliseconds
    pub processing_time_ms: f32,

    /// Crate version that produced the report
    pub algorithm_version: String,
}

impl ReportMetadata {
    /// Fraction of tokens that matched a lexicon entry (0.0 when there are no tokens)
    pub fn coverage(&self) -> f64 {
        if self.token_count == 0 {
            0.0
        } else {
            self.matched_tokens as f64 / self.token_count as f64
        }
    }
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            lexicon_source: String::new(),
            records_source: String::new(),
            lexicon_entries: 0,
            record_count: 0,
            token_count: 0,
            matched_tokens: 0,
            workers: 0,
            fold: FoldStrategy::Atomic,
            processing_time_ms: 0.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage() {
        let mut meta = ReportMetadata::default();
        assert_eq!(meta.coverage(), 0.0);

        meta.token_count = 8;
        meta.matched_tokens = 2;
        assert_eq!(meta.coverage(), 0.25);
    }

    #[test]
    fn test_default_version() {
        assert_eq!(ReportMetadata::default().algorithm_version, env!("CARGO_PKG_VERSION"));
    }
}
