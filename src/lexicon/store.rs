//! Immutable word → score lookup

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::parser::parse_line;
use crate::error::LoadError;

/// Word → sentiment weight mapping
///
/// Keys are stored exactly as they appear in the source; lookups are exact.
/// Words that are not present score `0.0`. Iteration is sorted by word.
///
/// # Example
///
/// ```
/// use tweet_sentiment::Lexicon;
///
/// let lexicon = Lexicon::from_reader("good,1.5\nbad,-2.0\n".as_bytes())?;
/// assert_eq!(lexicon.score("good"), 1.5);
/// assert_eq!(lexicon.score("bad"), -2.0);
/// assert_eq!(lexicon.score("unseen"), 0.0);
/// # Ok::<(), tweet_sentiment::LoadError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: BTreeMap<String, f64>,
}

impl Lexicon {
    /// Load a lexicon file of `word,score` lines
    ///
    /// Later duplicates overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read or any line is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        log::debug!("Loading lexicon from {}", source);

        let file = File::open(path).map_err(|e| LoadError::Io {
            path: source.clone(),
            source: e,
        })?;
        Self::read_entries(BufReader::new(file), &source)
    }

    /// Load a lexicon from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        Self::read_entries(reader, "<reader>")
    }

    /// Build a lexicon from `(word, score)` pairs, last write wins
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(w, s)| (w.into(), s)).collect(),
        }
    }

    fn read_entries<R: BufRead>(reader: R, source: &str) -> Result<Self, LoadError> {
        // Filled locally and only returned on success, so a failed load leaves nothing behind
        let mut entries = BTreeMap::new();
        let mut overwritten = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LoadError::Io {
                path: source.to_string(),
                source: e,
            })?;
            let (word, score) = parse_line(&line, idx + 1)?;
            if entries.insert(word.to_string(), score).is_some() {
                overwritten += 1;
            }
        }

        log::debug!(
            "Loaded {} lexicon entries from {} ({} duplicates overwritten)",
            entries.len(),
            source,
            overwritten
        );
        Ok(Self { entries })
    }

    /// Score for `word`, or `0.0` if absent
    #[inline]
    pub fn score(&self, word: &str) -> f64 {
        self.get(word).unwrap_or(0.0)
    }

    /// Stored score for `word`, if any
    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    /// True if `word` has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(w, s)| (w.as_str(), *s))
    }
}
