use crate::models::TokenFilterConfig;

pub const DEFAULT_TOKEN_FILTER_CONFIG: TokenFilterConfig<'static> = TokenFilterConfig {
    max_noise_length: 1,
    punctuation_tag_prefix: "w",
    generic_symbol_tag: "nx",
};

/// File extensions `PlainTextExtractor` reads as UTF-8 text. An empty entry
/// stands for files without an extension.
pub const PLAIN_TEXT_EXTENSIONS: &[&str] = &["", "txt", "text", "md"];

/// Extension marking a gzip-compressed wrapper around one of `PLAIN_TEXT_EXTENSIONS`.
pub const GZIP_EXTENSION: &str = "gz";

/// Upper bound on the text `PlainTextExtractor` produces from one document (64 MiB).
pub const DEFAULT_MAX_EXTRACTED_BYTES: u64 = 64 * 1024 * 1024;
