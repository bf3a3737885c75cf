//! Record scoring and aggregation
//!
//! Scoring is split into independent steps:
//! - Tokenization and normalization of a record
//! - Per-record scoring against a [`Lexicon`](crate::Lexicon)
//! - Race-free folding of per-record subtotals into a running total
//! - The aggregator that fans records out over a worker pool and joins them

pub mod accumulator;
pub mod aggregator;
pub mod record;
pub mod tokenize;

pub use aggregator::{Aggregator, RunStats};
pub use record::{score_record, RecordScore};
pub use tokenize::{normalize_token, tokenize};
