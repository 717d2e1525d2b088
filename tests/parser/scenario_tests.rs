//! End-to-end parsing scenarios.

use namae_foundation::{NamePart, NameRecord};
use namae_parser::{NameParser, ParserConfig, SuffixKind};

fn parser() -> NameParser {
    NameParser::with_config(&ParserConfig::builtin())
}

fn parse_one(input: &str) -> NameRecord {
    let records = parser().parse(input);
    assert_eq!(records.len(), 1, "expected one record for {input:?}");
    records.into_iter().next().unwrap()
}

fn only(record: &NameRecord, expected: &[(NamePart, &str)]) {
    let populated: Vec<(NamePart, &str)> = record.populated().collect();
    assert_eq!(populated, expected);
}

// =============================================================================
// Basic Forms
// =============================================================================

#[test]
fn given_then_family() {
    only(
        &parse_one("John Doe"),
        &[(NamePart::Family, "Doe"), (NamePart::Given, "John")],
    );
}

#[test]
fn family_comma_given() {
    only(
        &parse_one("Doe, John"),
        &[(NamePart::Family, "Doe"), (NamePart::Given, "John")],
    );
}

#[test]
fn generational_suffix() {
    only(
        &parse_one("John Doe Jr."),
        &[
            (NamePart::Family, "Doe"),
            (NamePart::Given, "John"),
            (NamePart::Suffix, "jr"),
        ],
    );
}

#[test]
fn honorific_prefix() {
    only(
        &parse_one("Dr. John Doe"),
        &[
            (NamePart::Family, "Doe"),
            (NamePart::Given, "John"),
            (NamePart::Prefix, "dr"),
        ],
    );
}

#[test]
fn particle_before_family() {
    only(
        &parse_one("Ludwig van Beethoven"),
        &[
            (NamePart::Family, "Beethoven"),
            (NamePart::Given, "Ludwig"),
            (NamePart::Particle, "van"),
        ],
    );
}

#[test]
fn two_names_joined_by_and() {
    let records = parser().parse("John Doe and Jane Smith");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].given(), Some("John"));
    assert_eq!(records[0].family(), Some("Doe"));
    assert_eq!(records[1].given(), Some("Jane"));
    assert_eq!(records[1].family(), Some("Smith"));
}

#[test]
fn empty_and_blank_input() {
    let parser = parser();
    assert!(parser.parse("").is_empty());
    assert!(parser.parse("   \t\n ").is_empty());
}

// =============================================================================
// Prefixes and Suffixes
// =============================================================================

#[test]
fn everything_at_once() {
    let record = parse_one("Dr. John Michael Doe Jr.");
    assert_eq!(record.prefix(), Some("dr"));
    assert_eq!(record.given(), Some("John Michael"));
    assert_eq!(record.family(), Some("Doe"));
    assert_eq!(record.suffix(), Some("jr"));
}

#[test]
fn prefix_case_and_period_are_normalized() {
    assert_eq!(parse_one("PROF Jane Roe").prefix(), Some("prof"));
    assert_eq!(parse_one("mrs. Jane Roe").prefix(), Some("mrs"));
}

#[test]
fn multi_word_prefix_wins_over_single_word() {
    let record = parse_one("Vice President Jane Roe");
    assert_eq!(record.prefix(), Some("vice president"));
    assert_eq!(record.given(), Some("Jane"));
}

#[test]
fn title_alone_stays_a_name() {
    let record = parse_one("Dr.");
    assert_eq!(record.prefix(), None);
    assert_eq!(record.family(), Some("Dr."));
}

#[test]
fn credential_suffix_with_internal_periods() {
    let record = parse_one("Jane Smith Ph.D.");
    assert_eq!(record.suffix(), Some("phd"));
    assert_eq!(record.family(), Some("Smith"));
}

#[test]
fn roman_numeral_suffix() {
    let record = parse_one("Henry Ford III");
    assert_eq!(record.suffix(), Some("iii"));
    assert_eq!(record.given(), Some("Henry"));
    assert_eq!(record.family(), Some("Ford"));
}

#[test]
fn roman_numeral_one_is_a_suffix() {
    only(
        &parse_one("John Doe I"),
        &[
            (NamePart::Family, "Doe"),
            (NamePart::Given, "John"),
            (NamePart::Suffix, "i"),
        ],
    );
}

#[test]
fn comma_suffix_form() {
    let record = parse_one("Doe, John Jr.");
    assert_eq!(record.family(), Some("Doe"));
    assert_eq!(record.given(), Some("John"));
    assert_eq!(record.suffix(), Some("jr"));
}

#[test]
fn comma_before_suffix_stays_in_given() {
    let record = parse_one("Doe, John, Jr.");
    assert_eq!(record.family(), Some("Doe"));
    assert_eq!(record.given(), Some("John,"));
    assert_eq!(record.suffix(), Some("jr"));
}

#[test]
fn suffix_after_bare_comma_leaves_degenerate_form() {
    for input in ["Doe, Jr.", "Doe,Jr."] {
        only(&parse_one(input), &[(NamePart::Suffix, "jr")]);
    }
}

#[test]
fn configured_suffix_and_prefix() {
    let config = ParserConfig::builtin()
        .with_prefixes(["Dame"])
        .with_suffixes(SuffixKind::Credential, ["OBE"]);
    let parser = NameParser::with_config(&config);
    let records = parser.parse("Dame Judi Dench OBE");
    assert_eq!(records[0].prefix(), Some("dame"));
    assert_eq!(records[0].suffix(), Some("obe"));
    assert_eq!(records[0].given(), Some("Judi"));
    assert_eq!(records[0].family(), Some("Dench"));
}

// =============================================================================
// Particles
// =============================================================================

#[test]
fn several_particles_are_joined() {
    let record = parse_one("Jean de la Fontaine");
    assert_eq!(record.given(), Some("Jean"));
    assert_eq!(record.family(), Some("Fontaine"));
    assert_eq!(record.particle(), Some("de la"));
}

#[test]
fn particle_keeps_source_casing() {
    let record = parse_one("Vincent Van Gogh");
    assert_eq!(record.particle(), Some("Van"));
    assert_eq!(record.family(), Some("Gogh"));
}

#[test]
fn leading_particle_stays_given() {
    let record = parse_one("Van Morrison");
    assert_eq!(record.given(), Some("Van"));
    assert_eq!(record.family(), Some("Morrison"));
    assert_eq!(record.particle(), None);
}

#[test]
fn particles_in_comma_form() {
    let record = parse_one("van Beethoven, Ludwig");
    assert_eq!(record.family(), Some("Beethoven"));
    assert_eq!(record.given(), Some("Ludwig"));
    assert_eq!(record.particle(), Some("van"));
}

#[test]
fn all_particle_family_moves_to_particle() {
    only(
        &parse_one("de la, Maria"),
        &[(NamePart::Given, "Maria"), (NamePart::Particle, "de la")],
    );
    only(
        &parse_one("John Van"),
        &[(NamePart::Given, "John"), (NamePart::Particle, "Van")],
    );
}

#[test]
fn single_token_is_family() {
    only(&parse_one("Plato"), &[(NamePart::Family, "Plato")]);
}

#[test]
fn degenerate_comma_sets_nothing() {
    assert!(parse_one(", John").is_empty());
    assert!(parse_one("Doe ,").is_empty());
}

// =============================================================================
// Lists and Entry Points
// =============================================================================

#[test]
fn semicolon_list_keeps_order() {
    let records = parser().parse("Doe, John; Ludwig van Beethoven; Plato");
    let families: Vec<_> = records.iter().map(NameRecord::family).collect();
    assert_eq!(families, [Some("Doe"), Some("Beethoven"), Some("Plato")]);
}

#[test]
fn parse_list_is_per_input() {
    let batches = parser().parse_list(&["John Doe", "", "A B and C D"]);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 1);
    assert!(batches[1].is_empty());
    assert_eq!(batches[2].len(), 2);
}

#[test]
fn free_functions_use_default_parser() {
    let records = namae_parser::parse_name("Ludwig van Beethoven");
    assert_eq!(records[0].particle(), Some("van"));

    let batches = namae_parser::parse_names(&["John Doe", "Doe, Jane"]);
    assert_eq!(batches[1][0].given(), Some("Jane"));
}

#[test]
fn root_crate_reexports() {
    let records = namae::parse_name("Dr. John Doe");
    assert_eq!(records[0].prefix(), Some("dr"));
    let parser = namae::NameParser::with_config(&namae::ParserConfig::builtin());
    assert_eq!(parser.parse("John Doe"), records_without_prefix());
}

fn records_without_prefix() -> Vec<NameRecord> {
    vec![NameRecord::builder().given("John").family("Doe").build()]
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(parser());
    let handles: Vec<_> = ["John Doe", "Doe, Jane", "Ludwig van Beethoven"]
        .into_iter()
        .map(|input| {
            let parser = std::sync::Arc::clone(&parser);
            std::thread::spawn(move || parser.parse(input))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 1);
    }
}
