use crate::crawler::ArticleRecord;
use crate::output::OutputResult;
use std::path::Path;

/// CSV column headers, in output order
const HEADERS: [&str; 4] = ["Url", "Language", "Title", "Abstract"];

/// Writes all records to a CSV file at the given path
///
/// One row per record in accumulation order, with a `Url,Language,Title,
/// Abstract` header row and standard CSV quoting. There is no index
/// column.
///
/// # Arguments
///
/// * `records` - The accumulated article records
/// * `path` - Destination file path; an existing file is overwritten
pub fn write_csv(records: &[ArticleRecord], path: &Path) -> OutputResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if records.is_empty() {
        // serialize only emits the header row alongside the first record
        writer.write_record(HEADERS)?;
    }

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}
