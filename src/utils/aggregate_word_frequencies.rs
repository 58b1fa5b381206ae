use crate::utils::{count_word_frequencies, sort_word_frequencies};
use crate::{TaggedToken, WordFrequency};

/// Counts the given tokens and returns their frequency table, highest count first.
///
/// Tokens are counted as given; run them through a
/// [`TokenFilter`](crate::TokenFilter) first to drop noise.
pub fn aggregate_word_frequencies(tokens: &[TaggedToken]) -> Vec<WordFrequency> {
    sort_word_frequencies(count_word_frequencies(tokens))
}
