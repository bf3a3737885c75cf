//! Report types for a completed scoring run
//!
//! - Polarity classification of the aggregate score
//! - The report returned by [`analyze_corpus`](crate::analyze_corpus)
//! - Run metadata

pub mod metadata;
pub mod result;
