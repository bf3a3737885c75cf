//! Configuration parameters for a scoring run

use serde::{Deserialize, Serialize};

/// How per-record subtotals are folded into the running total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoldStrategy {
    /// Compare-and-swap loop over the bit pattern of an `f64`
    Atomic,
    /// Plain `f64` guarded by a mutex
    Mutex,
    /// Subtotals sent over a channel to a single collector that sums them
    Channel,
}

impl FoldStrategy {
    /// Short lowercase name, as accepted by [`FoldStrategy::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            FoldStrategy::Atomic => "atomic",
            FoldStrategy::Mutex => "mutex",
            FoldStrategy::Channel => "channel",
        }
    }

    /// Parse a strategy from its short name (case-insensitive)
    ///
    /// # Example
    ///
    /// ```
    /// use tweet_sentiment::FoldStrategy;
    ///
    /// assert_eq!(FoldStrategy::from_name("Mutex"), Some(FoldStrategy::Mutex));
    /// assert_eq!(FoldStrategy::from_name("spinlock"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "atomic" => Some(FoldStrategy::Atomic),
            "mutex" => Some(FoldStrategy::Mutex),
            "channel" => Some(FoldStrategy::Channel),
            _ => None,
        }
    }
}

/// Scoring run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Number of worker threads (default: None)
    /// `None` runs on the global rayon pool; `Some(n)` builds a dedicated pool of `n` threads.
    /// `Some(0)` is rejected when the run starts.
    pub workers: Option<usize>,

    /// Fold discipline for the shared running total (default: Atomic)
    pub fold: FoldStrategy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            workers: None,
            fold: FoldStrategy::Atomic,
        }
    }
}

impl ScoringConfig {
    /// Config with a dedicated pool of `workers` threads
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Config using the given fold strategy
    pub fn with_fold(mut self, fold: FoldStrategy) -> Self {
        self.fold = fold;
        self
    }
}
