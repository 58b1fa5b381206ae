use crate::types::{DocumentName, WordCount, WordFrequencyMap, WordRef};
use crate::utils::{aggregate_word_frequencies, cosine_similarity};
use crate::{TaggedToken, TokenFilter, WordFrequency};
use log::info;

/// A document reduced to its tokens and a ranked word-frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProfile {
    pub name: DocumentName,
    pub raw_text: String,
    /// Every token the segmenter produced, noise included.
    pub tokens: Vec<TaggedToken>,
    /// Frequencies of the tokens that survived filtering, highest count first.
    /// Equal counts are in no particular order.
    pub frequencies: Vec<WordFrequency>,
}

impl DocumentProfile {
    /// Filters `tokens`, counts what survives and assembles the profile.
    ///
    /// `tokens` is the unfiltered segmenter output and is stored as-is.
    pub fn build(
        name: impl Into<DocumentName>,
        raw_text: impl Into<String>,
        tokens: Vec<TaggedToken>,
        token_filter: &TokenFilter,
    ) -> Self {
        let name = name.into();

        let filtered_tokens = token_filter.filter(&tokens);
        let frequencies = aggregate_word_frequencies(&filtered_tokens);

        info!(
            "Built profile {:?}: {} tokens, {} kept, {} distinct words",
            name,
            tokens.len(),
            filtered_tokens.len(),
            frequencies.len()
        );

        DocumentProfile {
            name,
            raw_text: raw_text.into(),
            tokens,
            frequencies,
        }
    }

    /// The `n` most frequent words (fewer if the table is shorter).
    pub fn top_words(&self, n: usize) -> &[WordFrequency] {
        &self.frequencies[..n.min(self.frequencies.len())]
    }

    pub fn frequency_of(&self, word: &WordRef) -> Option<WordCount> {
        self.frequencies
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    /// Number of tokens that survived filtering.
    pub fn filtered_token_count(&self) -> usize {
        self.frequencies.iter().map(|entry| entry.count).sum()
    }

    pub fn frequency_map(&self) -> WordFrequencyMap {
        self.frequencies
            .iter()
            .map(|entry| (entry.word.clone(), entry.count))
            .collect()
    }

    /// Cosine similarity of the two profiles' frequency tables, in `[0, 1]`.
    pub fn similarity(&self, other: &DocumentProfile) -> f64 {
        cosine_similarity(&self.frequency_map(), &other.frequency_map())
    }
}
