use crate::types::WordFrequencyMap;
use crate::WordFrequency;

/// Turns a word-to-count map into a frequency table sorted by count, descending.
///
/// The sort is stable and keyed on the count alone. Words with equal counts keep
/// the order in which the map yielded them, which is unspecified; callers that
/// need a fixed order for ties must impose it themselves.
///
/// # Example
/// ```
/// use word_profiler::{sort_word_frequencies, WordFrequencyMap};
///
/// let mut frequencies = WordFrequencyMap::new();
/// frequencies.insert("profile".to_string(), 3);
/// frequencies.insert("word".to_string(), 7);
///
/// let sorted = sort_word_frequencies(frequencies);
/// assert_eq!(sorted[0].word, "word");
/// assert_eq!(sorted[1].count, 3);
/// ```
pub fn sort_word_frequencies(frequencies: WordFrequencyMap) -> Vec<WordFrequency> {
    let mut sorted: Vec<WordFrequency> = frequencies
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();

    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending_by_count() {
        let frequencies: WordFrequencyMap = [("a", 1), ("b", 5), ("c", 3), ("d", 5)]
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();

        let sorted = sort_word_frequencies(frequencies);
        let counts: Vec<_> = sorted.iter().map(|entry| entry.count).collect();
        assert_eq!(counts, vec![5, 5, 3, 1]);
    }

    #[test]
    fn test_empty_map_yields_empty_table() {
        assert!(sort_word_frequencies(WordFrequencyMap::new()).is_empty());
    }
}
