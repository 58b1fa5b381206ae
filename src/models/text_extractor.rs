use crate::constants::{DEFAULT_MAX_EXTRACTED_BYTES, GZIP_EXTENSION, PLAIN_TEXT_EXTENSIONS};
use crate::Error;
use flate2::read::GzDecoder;
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Turns a document on disk into plain text.
///
/// Implementations fail with [`Error::ExtractionError`] when the file cannot be
/// read, its format is not supported, or its content is corrupted.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String, Error>;
}

/// Reads UTF-8 text files, optionally wrapped in gzip (`notes.txt.gz`).
///
/// Plain files are read up to their size on disk; decompressed gzip content is
/// read up to `max_extracted_bytes`. Anything longer is rejected as an
/// extraction error.
#[derive(Debug, Clone, Copy)]
pub struct PlainTextExtractor {
    pub max_extracted_bytes: u64,
}

impl PlainTextExtractor {
    pub fn new() -> Self {
        PlainTextExtractor::with_max_extracted_bytes(DEFAULT_MAX_EXTRACTED_BYTES)
    }

    pub fn with_max_extracted_bytes(max_extracted_bytes: u64) -> Self {
        PlainTextExtractor {
            max_extracted_bytes,
        }
    }

    pub fn supports(path: &Path) -> bool {
        let extension = lowercase_extension(path);

        if extension == GZIP_EXTENSION {
            // Look at the extension underneath the gzip wrapper
            path.file_stem()
                .map(|stem| is_plain_text_extension(&lowercase_extension(Path::new(stem))))
                .unwrap_or(false)
        } else {
            is_plain_text_extension(&extension)
        }
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        PlainTextExtractor::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, Error> {
        if !Self::supports(path) {
            warn!("Unsupported document format: {:?}", path);
            return Err(Error::ExtractionError(format!(
                "Unsupported document format: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            Error::ExtractionError(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let file_length = file
            .metadata()
            .map_err(|e| {
                Error::ExtractionError(format!("Failed to stat {}: {}", path.display(), e))
            })?
            .len();

        let mut bytes = Vec::new();

        // One byte past the limit is read so oversized content can be detected
        let read_result = if lowercase_extension(path) == GZIP_EXTENSION {
            GzDecoder::new(file)
                .take(self.max_extracted_bytes.saturating_add(1))
                .read_to_end(&mut bytes)
        } else {
            // Never read past the size the file had when opened
            let limit = file_length.min(self.max_extracted_bytes.saturating_add(1));
            bytes.reserve(limit as usize);
            file.take(limit).read_to_end(&mut bytes)
        };

        read_result.map_err(|e| {
            Error::ExtractionError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if bytes.len() as u64 > self.max_extracted_bytes {
            warn!(
                "Extracted text of {:?} exceeds {} bytes",
                path, self.max_extracted_bytes
            );
            return Err(Error::ExtractionError(format!(
                "{} extracts to more than {} bytes",
                path.display(),
                self.max_extracted_bytes
            )));
        }

        debug!("Read {} bytes from {:?}", bytes.len(), path);

        String::from_utf8(bytes).map_err(|e| {
            Error::ExtractionError(format!(
                "{} is not valid UTF-8 text: {}",
                path.display(),
                e
            ))
        })
    }
}

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .map(|extension| extension.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn is_plain_text_extension(extension: &str) -> bool {
    PLAIN_TEXT_EXTENSIONS.contains(&extension)
}
