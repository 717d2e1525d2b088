//! JSON batch input.
//!
//! Accepts either a single JSON string or an array of strings. This is the
//! one surface where input can arrive untyped, so it is where non-string
//! input is rejected with `InvalidArgument`.

use namae_foundation::{Error, NameRecord, Result};
use namae_parser::NameParser;
use serde::Serialize;
use serde_json::Value;

/// Records parsed from a JSON input document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedInput {
    /// The input was one string
    Single(Vec<NameRecord>),
    /// The input was an array of strings
    Batch(Vec<Vec<NameRecord>>),
}

impl ParsedInput {
    /// Number of records across all inputs.
    #[must_use]
    pub fn record_count(&self) -> usize {
        match self {
            Self::Single(records) => records.len(),
            Self::Batch(batches) => batches.iter().map(Vec::len).sum(),
        }
    }
}

/// Parses a decoded JSON value.
///
/// # Errors
///
/// Returns `InvalidArgument` if the value is neither a string nor an array
/// of strings.
pub fn parse_json_input(parser: &NameParser, input: &Value) -> Result<ParsedInput> {
    match input {
        Value::String(text) => Ok(ParsedInput::Single(parser.parse(text))),
        Value::Array(items) => {
            let texts = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_str().ok_or_else(|| {
                        Error::invalid_argument(format!(
                            "element {i} must be a string, got {}",
                            json_type(item)
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ParsedInput::Batch(parser.parse_list(texts.as_slice())))
        }
        other => Err(Error::invalid_argument(format!(
            "expected a string or an array of strings, got {}",
            json_type(other)
        ))),
    }
}

/// Decodes JSON text and parses it.
///
/// # Errors
///
/// Returns a serialization error for malformed JSON and `InvalidArgument`
/// for well-formed JSON of the wrong shape.
pub fn parse_json_str(parser: &NameParser, source: &str) -> Result<ParsedInput> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| Error::serialization(e.to_string()))?;
    parse_json_input(parser, &value)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
