mod constants;
pub use constants::{DEFAULT_MAX_EXTRACTED_BYTES, DEFAULT_TOKEN_FILTER_CONFIG};
pub mod models;
pub use models::{
    DocumentProfile, Error, NoiseReason, PlainTextExtractor, Segmenter, TaggedToken,
    TaggedTokenCsvSegmenter, TextExtractor, TokenFilter, TokenFilterConfig, WhitespaceSegmenter,
    WordFrequency,
};
pub mod types;
mod utils;
pub use types::{DocumentName, Tag, Word, WordCount, WordFrequencyMap, WordRef};
pub use utils::{
    aggregate_word_frequencies, cosine_similarity, count_word_frequencies,
    longest_common_substring, longest_common_substring_length, longest_common_substring_opt,
    sort_word_frequencies, write_word_frequencies_csv,
};

use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Extracts, segments and profiles the document at `path` using the default
/// token filter. The profile is named after the file name of `path`.
pub fn build_profile(
    path: &Path,
    text_extractor: &dyn TextExtractor,
    segmenter: &dyn Segmenter,
) -> Result<DocumentProfile, Error> {
    build_profile_with_custom_config(
        DEFAULT_TOKEN_FILTER_CONFIG,
        path,
        text_extractor,
        segmenter,
    )
}

pub fn build_profile_with_custom_config(
    token_filter_config: TokenFilterConfig,
    path: &Path,
    text_extractor: &dyn TextExtractor,
    segmenter: &dyn Segmenter,
) -> Result<DocumentProfile, Error> {
    let name = path
        .file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::ExtractionError(format!("{} does not name a file", path.display()))
        })?;

    // Extraction failures end profiling for this document; there is no retry
    let text = text_extractor.extract_text(path)?;

    build_profile_from_text_with_custom_config(token_filter_config, name, text, segmenter)
}

/// Profiles text that has already been extracted.
pub fn build_profile_from_text(
    name: impl Into<DocumentName>,
    text: impl Into<String>,
    segmenter: &dyn Segmenter,
) -> Result<DocumentProfile, Error> {
    build_profile_from_text_with_custom_config(DEFAULT_TOKEN_FILTER_CONFIG, name, text, segmenter)
}

pub fn build_profile_from_text_with_custom_config(
    token_filter_config: TokenFilterConfig,
    name: impl Into<DocumentName>,
    text: impl Into<String>,
    segmenter: &dyn Segmenter,
) -> Result<DocumentProfile, Error> {
    let text = text.into();
    let tokens = segmenter.segment(&text)?;
    let token_filter = TokenFilter::new(token_filter_config);

    Ok(DocumentProfile::build(name, text, tokens, &token_filter))
}
