use crate::{Error, WordFrequency};
use csv::WriterBuilder;
use std::io::Write;

/// Writes a frequency table as `word,count` CSV, with a header row, preserving
/// the table's order.
pub fn write_word_frequencies_csv<W: Write>(
    frequencies: &[WordFrequency],
    writer: W,
) -> Result<(), Error> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    csv_writer.write_record(["word", "count"])?;

    for entry in frequencies {
        let count = entry.count.to_string();
        csv_writer.write_record([entry.word.as_str(), count.as_str()])?;
    }

    csv_writer.flush()?;

    Ok(())
}
