use crate::config::LineSeparator;

/// Split raw word-list text into candidate words.
///
/// Tokens are kept verbatim: no trimming, case folding or deduplication. A trailing
/// separator produces a trailing empty token, which the search never matches.
pub fn split_words(raw: &str, separator: LineSeparator) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(separator.as_str()).map(str::to_string).collect()
}
