use crate::constants::DEFAULT_TOKEN_FILTER_CONFIG;
use crate::TaggedToken;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFilterConfig<'a> {
    /// Tokens whose trimmed text has at most this many characters are dropped.
    pub max_noise_length: usize,
    /// Any tag starting with this prefix marks a punctuation-class token.
    pub punctuation_tag_prefix: &'a str,
    /// Tag used by the segmenter for unrecognized letter/code sequences.
    pub generic_symbol_tag: &'a str,
}

/// Why a token was classified as noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseReason {
    TooShort,
    Punctuation,
    GenericSymbol,
}

type NoiseRule = (NoiseReason, fn(&TokenFilterConfig<'_>, &TaggedToken) -> bool);

// Evaluated in order; the first matching rule names the reason.
const NOISE_RULES: [NoiseRule; 3] = [
    (NoiseReason::TooShort, is_too_short),
    (NoiseReason::Punctuation, is_punctuation),
    (NoiseReason::GenericSymbol, is_generic_symbol),
];

// Only ASCII control characters and the space are trimmed; U+3000 and other
// Unicode whitespace count toward the length.
fn is_too_short(config: &TokenFilterConfig<'_>, token: &TaggedToken) -> bool {
    token
        .text
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .count()
        <= config.max_noise_length
}

fn is_punctuation(config: &TokenFilterConfig<'_>, token: &TaggedToken) -> bool {
    token.tag.starts_with(config.punctuation_tag_prefix)
}

fn is_generic_symbol(config: &TokenFilterConfig<'_>, token: &TaggedToken) -> bool {
    token.tag == config.generic_symbol_tag
}

/// Removes noise tokens (single characters, punctuation, generic symbols) from
/// a tagged token sequence.
#[derive(Debug, Clone, Copy)]
pub struct TokenFilter<'a> {
    config: TokenFilterConfig<'a>,
}

impl<'a> TokenFilter<'a> {
    pub fn new(config: TokenFilterConfig<'a>) -> Self {
        TokenFilter { config }
    }

    /// Tag conventions of HanLP-style taggers: `w*` for punctuation, `nx` for
    /// letter/code sequences.
    pub fn hanlp_defaults() -> TokenFilter<'static> {
        TokenFilter::new(DEFAULT_TOKEN_FILTER_CONFIG)
    }

    pub fn config(&self) -> &TokenFilterConfig<'a> {
        &self.config
    }

    /// Returns the first rule the token trips, or `None` if the token is kept.
    pub fn noise_reason(&self, token: &TaggedToken) -> Option<NoiseReason> {
        NOISE_RULES
            .iter()
            .find(|(_, is_noise)| is_noise(&self.config, token))
            .map(|(reason, _)| *reason)
    }

    pub fn is_noise(&self, token: &TaggedToken) -> bool {
        self.noise_reason(token).is_some()
    }

    /// Returns the tokens which are not noise, preserving their relative order.
    pub fn filter(&self, tokens: &[TaggedToken]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .filter(|token| match self.noise_reason(token) {
                Some(reason) => {
                    debug!("Dropping token {:?} ({:?})", token.text, reason);
                    false
                }
                None => true,
            })
            .cloned()
            .collect()
    }
}

impl Default for TokenFilter<'static> {
    fn default() -> Self {
        TokenFilter::hanlp_defaults()
    }
}
