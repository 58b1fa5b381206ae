pub mod document_profile;
pub use document_profile::DocumentProfile;

pub mod error;
pub use error::Error;

pub mod segmenter;
pub use segmenter::{Segmenter, TaggedTokenCsvSegmenter, WhitespaceSegmenter};

pub mod tagged_token;
pub use tagged_token::TaggedToken;

pub mod text_extractor;
pub use text_extractor::{PlainTextExtractor, TextExtractor};

pub mod token_filter;
pub use token_filter::{NoiseReason, TokenFilter, TokenFilterConfig};

pub mod word_frequency;
pub use word_frequency::WordFrequency;
