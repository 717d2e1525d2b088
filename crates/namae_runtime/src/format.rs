//! Rendering parse results for terminals and pipelines.

use std::fmt::Write as _;
use std::str::FromStr;

use namae_foundation::{Error, NameRecord, Result};

/// Output format for parsed names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per name: rendering, then the populated fields
    #[default]
    Text,
    /// A JSON array of records with every key present
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::invalid_argument(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Formats one record as a single text line.
///
/// ```text
/// Ludwig Beethoven  family="Beethoven" given="Ludwig" particle="van"
/// ```
#[must_use]
pub fn format_record_text(record: &NameRecord) -> String {
    let mut line = record.to_string();
    if line.is_empty() {
        line.push_str("(empty)");
    }
    line.push(' ');
    for (part, value) in record.populated() {
        let _ = write!(line, " {part}={value:?}");
    }
    line
}

/// Formats a list of records.
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails.
pub fn format_records(records: &[NameRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(format_record_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string(records).map_err(|e| Error::serialization(e.to_string()))
        }
    }
}

/// Formats the results of a batch, one block (or JSON array) per input.
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails.
pub fn format_batch(batches: &[Vec<NameRecord>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let blocks = batches
                .iter()
                .map(|records| format_records(records, OutputFormat::Text))
                .collect::<Result<Vec<_>>>()?;
            Ok(blocks.join("\n"))
        }
        OutputFormat::Json => {
            serde_json::to_string(batches).map_err(|e| Error::serialization(e.to_string()))
        }
    }
}
