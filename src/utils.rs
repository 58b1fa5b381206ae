pub mod aggregate_word_frequencies;
pub use aggregate_word_frequencies::aggregate_word_frequencies;

pub mod cosine_similarity;
pub use cosine_similarity::cosine_similarity;

pub mod count_word_frequencies;
pub use count_word_frequencies::count_word_frequencies;

pub mod longest_common_substring;
pub use longest_common_substring::{
    longest_common_substring, longest_common_substring_length, longest_common_substring_opt,
};

pub mod sort_word_frequencies;
pub use sort_word_frequencies::sort_word_frequencies;

pub mod write_word_frequencies_csv;
pub use write_word_frequencies_csv::write_word_frequencies_csv;
