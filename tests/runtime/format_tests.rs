//! Output format integration tests.

use namae_parser::{NameParser, ParserConfig};
use namae_runtime::{OutputFormat, format_batch, format_records};

fn parser() -> NameParser {
    NameParser::with_config(&ParserConfig::builtin())
}

#[test]
fn text_output_one_line_per_record() {
    let records = parser().parse("Dr. John Doe Jr.; Plato");
    let text = format_records(&records, OutputFormat::Text).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        r#"John Doe jr  family="Doe" given="John" suffix="jr" prefix="dr""#
    );
    assert_eq!(lines[1], r#"Plato  family="Plato""#);
}

#[test]
fn json_output_round_trips_records() {
    let records = parser().parse("Jean de la Fontaine");
    let json = format_records(&records, OutputFormat::Json).unwrap();
    let decoded: Vec<namae_foundation::NameRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, records);
}

#[test]
fn empty_record_list() {
    assert_eq!(format_records(&[], OutputFormat::Text).unwrap(), "");
    assert_eq!(format_records(&[], OutputFormat::Json).unwrap(), "[]");
}

#[test]
fn batch_text_concatenates_blocks() {
    let batches = parser().parse_list(&["John Doe", "A B and C D"]);
    let text = format_batch(&batches, OutputFormat::Text).unwrap();
    assert_eq!(text.lines().count(), 3);
}
