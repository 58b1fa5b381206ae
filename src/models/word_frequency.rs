use crate::types::{Word, WordCount};

/// One entry of a frequency table: a distinct word and how many times it survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: Word,
    pub count: WordCount,
}

impl WordFrequency {
    pub fn new(word: impl Into<Word>, count: WordCount) -> Self {
        WordFrequency {
            word: word.into(),
            count,
        }
    }
}
