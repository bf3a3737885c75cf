//! Lexicon line parsing
//!
//! Each lexicon line has the form `word,score`. The line is split on the
//! first comma only; everything after it must be a finite decimal number.

use crate::error::LoadError;

/// Parse one `word,score` line
///
/// The word is kept exactly as written (no case folding, no trimming).
/// Whitespace around the score is ignored.
///
/// # Arguments
///
/// * `line` - Raw line without its terminator
/// * `line_number` - 1-based line number, used in errors
///
/// # Errors
///
/// * `LoadError::MissingSeparator` if the line has no comma
/// * `LoadError::InvalidScore` if the score is not a finite number
///
/// # Example
///
/// ```
/// use tweet_sentiment::lexicon::parse_line;
///
/// let (word, score) = parse_line("good,1.5", 1)?;
/// assert_eq!(word, "good");
/// assert_eq!(score, 1.5);
/// # Ok::<(), tweet_sentiment::LoadError>(())
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<(&str, f64), LoadError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let (word, raw_score) = line.split_once(',').ok_or_else(|| LoadError::MissingSeparator {
        line_number,
        line: line.to_string(),
    })?;

    let score = parse_score(raw_score).ok_or_else(|| LoadError::InvalidScore {
        line_number,
        value: raw_score.to_string(),
    })?;

    Ok((word, score))
}

fn parse_score(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    // f64::from_str also accepts "inf" and "NaN"; only plain decimals are valid weights
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
