use crate::types::WordFrequencyMap;
use crate::TaggedToken;

/// Counts the occurrences of each distinct token text in the given tokens.
///
/// The map is local to the call, and the counts do not depend on the order of
/// `tokens`.
///
/// # Example
/// ```
/// use word_profiler::{count_word_frequencies, TaggedToken};
///
/// let tokens = vec![
///     TaggedToken::new("quick", "a"),
///     TaggedToken::new("fox", "n"),
///     TaggedToken::new("quick", "a"),
/// ];
/// let frequencies = count_word_frequencies(&tokens);
/// assert_eq!(frequencies.get("quick"), Some(&2));
/// assert_eq!(frequencies.get("fox"), Some(&1));
/// ```
pub fn count_word_frequencies(tokens: &[TaggedToken]) -> WordFrequencyMap {
    let mut frequencies = WordFrequencyMap::new();

    for token in tokens {
        *frequencies.entry(token.text.clone()).or_insert(0) += 1;
    }

    frequencies
}
