//! Report result types

use serde::{Deserialize, Serialize};

use super::metadata::ReportMetadata;

/// Overall direction of an aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Score above zero
    Positive,
    /// Score below zero
    Negative,
    /// Score exactly zero
    Neutral,
}

impl Polarity {
    /// Classify a score by its sign
    ///
    /// Only an exact zero is neutral; any non-zero total, however small, has a direction.
    ///
    /// # Example
    ///
    /// ```
    /// use tweet_sentiment::analysis::result::Polarity;
    ///
    /// assert_eq!(Polarity::from_score(4.5), Polarity::Positive);
    /// assert_eq!(Polarity::from_score(-0.1), Polarity::Negative);
    /// assert_eq!(Polarity::from_score(0.0), Polarity::Neutral);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Upper-case label, e.g. `"POSITIVE"`
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Positive => "POSITIVE",
            Polarity::Negative => "NEGATIVE",
            Polarity::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete report for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Sum of every record's score
    pub total_score: f64,

    /// Sign of `total_score`
    pub polarity: Polarity,

    /// Run metadata
    pub metadata: ReportMetadata,
}

impl SentimentReport {
    /// Mean score per record (0.0 for an empty corpus)
    pub fn mean_score(&self) -> f64 {
        if self.metadata.record_count == 0 {
            0.0
        } else {
            self.total_score / self.metadata.record_count as f64
        }
    }
}
