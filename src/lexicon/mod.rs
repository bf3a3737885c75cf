//! Lexicon store
//!
//! Maps words to sentiment weights. A lexicon is filled exactly once by
//! one of the loaders and is read-only afterwards, so scoring threads share
//! it by plain reference.

pub mod parser;
pub mod store;

pub use parser::parse_line;
pub use store::Lexicon;
