use crate::types::{Tag, Word};

/// A unit of segmented text together with its linguistic category code.
///
/// Produced by a [`Segmenter`](crate::Segmenter) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    pub text: Word,
    pub tag: Tag,
}

impl TaggedToken {
    pub fn new(text: impl Into<Word>, tag: impl Into<Tag>) -> Self {
        TaggedToken {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

impl<W: Into<Word>, T: Into<Tag>> From<(W, T)> for TaggedToken {
    fn from((text, tag): (W, T)) -> Self {
        TaggedToken::new(text, tag)
    }
}
