use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word as an owned `String`. Words are the text of tagged tokens.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// A linguistic category code attached to a token (e.g. `"n"`, `"w"`, `"nx"`).
pub type Tag = String;

/// Represents the total number of occurrences of a word within a text document.
pub type WordCount = usize;

/// Represents a map of words to their occurrence counts within a text document.
/// The key is the `Word`, and the value is the `WordCount`.
pub type WordFrequencyMap = HashMap<Word, WordCount>;

/// Name of a profiled document, typically its file name.
pub type DocumentName = String;
