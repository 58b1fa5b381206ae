use crate::{Error, TaggedToken};
use csv::ReaderBuilder;

/// Splits plain text into tagged tokens.
///
/// The profile pipeline treats segmentation as total; a failing implementation
/// must report it here, as [`Error::SegmentationError`], before any filtering
/// happens.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<TaggedToken>, Error>;
}

/// Reads tokens already tagged by an external tagger, one `word,tag` record per
/// line.
#[derive(Debug, Clone, Copy)]
pub struct TaggedTokenCsvSegmenter {
    pub has_headers: bool,
}

impl TaggedTokenCsvSegmenter {
    pub fn new(has_headers: bool) -> Self {
        TaggedTokenCsvSegmenter { has_headers }
    }
}

impl Default for TaggedTokenCsvSegmenter {
    fn default() -> Self {
        TaggedTokenCsvSegmenter::new(false)
    }
}

impl Segmenter for TaggedTokenCsvSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<TaggedToken>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut tokens = Vec::new();

        for record in reader.records() {
            let record = record
                .map_err(|e| Error::SegmentationError(format!("Failed to read record: {}", e)))?;

            let word = record
                .get(0)
                .ok_or_else(|| Error::SegmentationError("Missing 'word' field".to_string()))?;

            let tag = record.get(1).ok_or_else(|| {
                Error::SegmentationError(format!("Missing 'tag' field for word {:?}", word))
            })?;

            tokens.push(TaggedToken::new(word, tag));
        }

        Ok(tokens)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Number,
    Punctuation,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_numeric() {
            CharClass::Number
        } else if c.is_alphanumeric() {
            CharClass::Word
        } else {
            CharClass::Punctuation
        }
    }

    fn tag(self) -> &'static str {
        match self {
            CharClass::Word => "n",
            CharClass::Number => "m",
            CharClass::Punctuation => "w",
        }
    }
}

/// Coarse character-class segmenter for space-delimited text.
///
/// Runs of letters are tagged `n`, runs of digits `m`, and every other
/// non-whitespace character becomes its own `w` token. It knows nothing about
/// words that are not separated by spaces or punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl WhitespaceSegmenter {
    pub fn new() -> Self {
        WhitespaceSegmenter
    }
}

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<TaggedToken>, Error> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let mut run = String::new();
            let mut run_class: Option<CharClass> = None;

            for c in chunk.chars() {
                let class = CharClass::of(c);

                // Punctuation never merges, not even with itself
                if run_class != Some(class) || class == CharClass::Punctuation {
                    if let Some(previous) = run_class {
                        tokens.push(TaggedToken::new(std::mem::take(&mut run), previous.tag()));
                    }
                    run_class = Some(class);
                }

                run.push(c);
            }

            if let Some(class) = run_class {
                tokens.push(TaggedToken::new(run, class.tag()));
            }
        }

        Ok(tokens)
    }
}
