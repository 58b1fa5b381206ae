use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use word_profiler::{
    build_profile_from_text, DocumentProfile, Error as LibError, TaggedTokenCsvSegmenter, Word,
    WordCount,
};
pub mod constants;

const EXPECTED_PREFIX: &str = "EXPECTED:";
const COMMENT_PREFIX: &str = "COMMENT:";

/// Initializes `env_logger` for tests; safe to call from every test.
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper function to get the expected `word,count` pairs from a fixture file
pub fn get_expected_frequencies(file_path: &Path) -> Vec<(Word, WordCount)> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let expected_csv: String = content
        .lines()
        .filter_map(|line| line.trim().strip_prefix(EXPECTED_PREFIX))
        .map(|line| format!("{}\n", line.trim()))
        .collect();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(expected_csv.as_bytes());

    reader
        .records()
        .map(|record| {
            let record = record.expect("Failed to parse EXPECTED line");
            let word = record.get(0).expect("Missing expected word").to_string();
            let count = record
                .get(1)
                .expect("Missing expected count")
                .trim()
                .parse()
                .expect("Expected count is not a number");
            (word, count)
        })
        .collect()
}

// Strips `EXPECTED:` and `COMMENT:` lines, leaving the tagged token CSV
pub fn get_fixture_tokens_csv(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with(EXPECTED_PREFIX)
                && !line.trim_start().starts_with(COMMENT_PREFIX)
        })
        .map(|line| format!("{}\n", line))
        .collect()
}

// Helper function to profile a fixture file with the default token filter
pub fn run_test_for_file(test_file_path: &Path) -> Result<DocumentProfile, LibError> {
    let tokens_csv = get_fixture_tokens_csv(test_file_path);

    let name = test_file_path
        .file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_default();

    build_profile_from_text(name, tokens_csv, &TaggedTokenCsvSegmenter::default())
}
