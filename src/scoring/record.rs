//! Per-record scoring

use super::tokenize::tokenize;
use crate::lexicon::Lexicon;

/// Score of a single record
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordScore {
    /// Sum of token scores
    pub score: f64,
    /// Number of whitespace-delimited tokens
    pub tokens: usize,
    /// Tokens whose normalized form has a lexicon entry
    pub matched: usize,
}

/// Sum the lexicon scores of every normalized token in `record`
///
/// Never fails: unknown and empty tokens contribute `0.0`.
///
/// # Example
///
/// ```
/// use tweet_sentiment::{scoring::score_record, Lexicon};
///
/// let lexicon = Lexicon::from_entries([("good", 1.0), ("bad", -1.0)]);
/// let result = score_record(&lexicon, "Good! BAD bad123");
/// assert_eq!(result.score, -1.0);
/// assert_eq!(result.tokens, 3);
/// ```
pub fn score_record(lexicon: &Lexicon, record: &str) -> RecordScore {
    tokenize(record).fold(RecordScore::default(), |mut acc, token| {
        acc.tokens += 1;
        if let Some(score) = lexicon.get(&token) {
            acc.matched += 1;
            acc.score += score;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_entries([("happy", 2.0), ("sad", -1.5), ("good", 1.0), ("bad", -1.0)])
    }

    #[test]
    fn test_punctuation_case_and_digits() {
        let result = score_record(&lexicon(), "Good! BAD bad123");
        assert_eq!(result.score, -1.0);
        assert_eq!(result.tokens, 3);
        assert_eq!(result.matched, 3);
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        assert_eq!(score_record(&lexicon(), "happy happy").score, 4.0);
        assert_eq!(score_record(&lexicon(), "so sad today").score, -1.5);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let result = score_record(&lexicon(), "the quick brown fox");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.tokens, 4);
        assert_eq!(result.matched, 0);
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(score_record(&lexicon(), ""), RecordScore::default());
    }

    #[test]
    fn test_tokens_that_normalize_to_empty() {
        let result = score_record(&lexicon(), "!!! 42 happy");
        assert_eq!(result.score, 2.0);
        assert_eq!(result.tokens, 3);
        assert_eq!(result.matched, 1);
    }

    #[test]
    fn test_empty_key_in_lexicon_matches_empty_tokens() {
        // Lookup is exact, so an entry for "" applies to tokens with no letters
        let lexicon = Lexicon::from_entries([("", 0.5)]);
        assert_eq!(score_record(&lexicon, "123 !!").score, 1.0);
    }
}
