//! Concurrent scoring aggregator
//!
//! Each record is scored as an independent unit of work on a rayon pool and
//! its subtotal is folded into a single running total. The total is only read
//! after the parallel loop returns, which is the join point for every task.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::accumulator::{Accumulator, AtomicF64, MutexF64};
use super::record::{score_record, RecordScore};
use crate::config::{FoldStrategy, ScoringConfig};
use crate::error::{Result, SentimentError};
use crate::lexicon::Lexicon;

/// Outcome of one scoring run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Sum of every record's score
    pub total: f64,
    /// Number of records scored
    pub record_count: usize,
    /// Number of tokens across all records
    pub token_count: usize,
    /// Tokens that had a lexicon entry
    pub matched_tokens: usize,
    /// Worker threads the run executed on
    pub workers: usize,
}

/// Scores a record source against a lexicon
///
/// The aggregator holds configuration only; every run starts from a fresh
/// running total, so one aggregator can be reused across runs.
///
/// # Example
///
/// ```
/// use tweet_sentiment::{Aggregator, Lexicon, ScoringConfig};
///
/// let lexicon = Lexicon::from_entries([("happy", 2.0), ("sad", -1.5)]);
/// let records = ["I am happy", "so sad today", "happy happy"];
///
/// let stats = Aggregator::new(ScoringConfig::default()).run_records(&lexicon, &records)?;
/// assert!((stats.total - 4.5).abs() < 1e-9);
/// # Ok::<(), tweet_sentiment::SentimentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: ScoringConfig,
}

impl Aggregator {
    /// Create an aggregator with the given configuration
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Configuration used for every run
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score every line of the file at `path` and return the total
    ///
    /// # Errors
    ///
    /// `SentimentError::RecordSource` if the file cannot be read (no partial total
    /// is produced), `SentimentError::InvalidInput` for an unusable worker count.
    pub fn run(&self, lexicon: &Lexicon, path: impl AsRef<Path>) -> Result<f64> {
        self.run_with_stats(lexicon, path).map(|stats| stats.total)
    }

    /// Like [`Aggregator::run`] but returns the full [`RunStats`]
    pub fn run_with_stats(&self, lexicon: &Lexicon, path: impl AsRef<Path>) -> Result<RunStats> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| SentimentError::RecordSource {
            path: source.clone(),
            source: e,
        })?;
        let records = read_records(BufReader::new(file), &source)?;
        self.run_records(lexicon, &records)
    }

    /// Score every line read from `reader`
    pub fn run_reader<R: BufRead>(&self, lexicon: &Lexicon, reader: R) -> Result<RunStats> {
        let records = read_records(reader, "<reader>")?;
        self.run_records(lexicon, &records)
    }

    /// Score records that are already in memory
    ///
    /// Records are processed in no particular order. The returned total equals
    /// the sum of every record's score, up to floating-point reassociation.
    pub fn run_records<S>(&self, lexicon: &Lexicon, records: &[S]) -> Result<RunStats>
    where
        S: AsRef<str> + Sync,
    {
        let stats = match self.config.workers {
            Some(0) => {
                return Err(SentimentError::InvalidInput(
                    "worker count must be at least 1".to_string(),
                ))
            }
            Some(workers) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()
                    .map_err(|e| {
                        SentimentError::InvalidInput(format!("cannot build worker pool: {}", e))
                    })?;
                pool.install(|| self.fold_records(lexicon, records))
            }
            None => self.fold_records(lexicon, records),
        };

        log::debug!(
            "Scored {} records ({} tokens, {} matched) on {} workers using {} fold: total={}",
            stats.record_count,
            stats.token_count,
            stats.matched_tokens,
            stats.workers,
            self.config.fold.name(),
            stats.total
        );
        Ok(stats)
    }

    fn fold_records<S>(&self, lexicon: &Lexicon, records: &[S]) -> RunStats
    where
        S: AsRef<str> + Sync,
    {
        log::debug!(
            "Scoring {} records on {} workers",
            records.len(),
            rayon::current_num_threads()
        );
        match self.config.fold {
            FoldStrategy::Atomic => fold_shared(lexicon, records, &AtomicF64::default()),
            FoldStrategy::Mutex => fold_shared(lexicon, records, &MutexF64::default()),
            FoldStrategy::Channel => fold_channel(lexicon, records),
        }
    }
}

fn read_records<R: BufRead>(reader: R, source: &str) -> Result<Vec<String>> {
    let records = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| SentimentError::RecordSource {
            path: source.to_string(),
            source: e,
        })?;
    log::debug!("Read {} records from {}", records.len(), source);
    Ok(records)
}

/// Every task folds straight into `total`
fn fold_shared<S, A>(lexicon: &Lexicon, records: &[S], total: &A) -> RunStats
where
    S: AsRef<str> + Sync,
    A: Accumulator,
{
    let tokens = AtomicUsize::new(0);
    let matched = AtomicUsize::new(0);

    records.par_iter().for_each(|record| {
        let scored = score_record(lexicon, record.as_ref());
        total.fold(scored.score);
        tokens.fetch_add(scored.tokens, Ordering::Relaxed);
        matched.fetch_add(scored.matched, Ordering::Relaxed);
    });

    RunStats {
        total: total.total(),
        record_count: records.len(),
        token_count: tokens.into_inner(),
        matched_tokens: matched.into_inner(),
        workers: rayon::current_num_threads(),
    }
}

/// Tasks send their subtotals to one collector thread, which sums them in arrival order
fn fold_channel<S>(lexicon: &Lexicon, records: &[S]) -> RunStats
where
    S: AsRef<str> + Sync,
{
    let (tx, rx) = mpsc::channel::<RecordScore>();
    let workers = rayon::current_num_threads();

    thread::scope(|scope| {
        let collector = scope.spawn(move || {
            rx.into_iter().fold(
                RunStats {
                    total: 0.0,
                    record_count: 0,
                    token_count: 0,
                    matched_tokens: 0,
                    workers,
                },
                |mut stats, scored| {
                    stats.total += scored.score;
                    stats.record_count += 1;
                    stats.token_count += scored.tokens;
                    stats.matched_tokens += scored.matched;
                    stats
                },
            )
        });

        // All senders are dropped when this returns, which ends the collector loop
        records.par_iter().for_each_with(tx, |tx, record| {
            // The receiver lives until the scope ends, so send cannot fail here
            let _ = tx.send(score_record(lexicon, record.as_ref()));
        });

        collector
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
    })
}
