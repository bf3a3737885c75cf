//! Record tokenization: whitespace split, ASCII-letter filter, lowercase

/// Normalize a raw token
///
/// Drops every character that is not an ASCII letter and lowercases the rest.
/// The result may be empty; an empty token simply scores `0.0`.
///
/// # Example
///
/// ```
/// use tweet_sentiment::scoring::normalize_token;
///
/// assert_eq!(normalize_token("Good!"), "good");
/// assert_eq!(normalize_token("bad123"), "bad");
/// assert_eq!(normalize_token("#2024"), "");
/// ```
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split a record on whitespace and normalize every token
///
/// Tokens that normalize to an empty string are still yielded.
pub fn tokenize(record: &str) -> impl Iterator<Item = String> + '_ {
    record.split_whitespace().map(normalize_token)
}
