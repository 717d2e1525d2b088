//! Property-based tests for the parser.
//!
//! These hold for any input, not just well-formed names.

use namae_parser::{Lexicon, NameParser, ParserConfig, Vocabulary};
use proptest::prelude::*;

fn parser() -> NameParser {
    NameParser::with_config(&ParserConfig::builtin())
}

/// A capitalized word that is not a prefix, suffix, particle or separator.
fn plain_word() -> impl Strategy<Value = String> {
    let vocabulary = Vocabulary::standard();
    let lexicon = Lexicon::builtin();
    "[B-Z][a-z]{2,8}".prop_filter("reserved word", move |word| {
        let lower = word.to_lowercase();
        !vocabulary.is_prefix(&lower)
            && vocabulary.lookup_suffix(&lower).is_none()
            && !lexicon.contains(&lower)
            && lower != "and"
    })
}

fn plain_name() -> impl Strategy<Value = String> {
    prop::collection::vec(plain_word(), 1..5).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,60}") {
        let _ = parser().parse(&input);
    }

    #[test]
    fn punctuation_heavy_input_never_panics(input in "[ ,;.&'a-zA-Z]{0,40}") {
        let _ = parser().parse(&input);
    }

    #[test]
    fn one_record_per_unit(input in "[ ,;a-zA-Z]{0,40}") {
        let parser = parser();
        prop_assert_eq!(parser.parse(&input).len(), parser.split(&input).len());
    }

    #[test]
    fn no_empty_fields(input in "\\PC{0,60}") {
        for record in parser().parse(&input) {
            for (part, value) in record.populated() {
                prop_assert!(!value.is_empty(), "{} is empty", part);
            }
        }
    }

    #[test]
    fn reserved_parts_stay_absent(input in "\\PC{0,60}") {
        for record in parser().parse(&input) {
            prop_assert!(record.dropping_particle().is_none());
            prop_assert!(record.non_dropping_particle().is_none());
            prop_assert!(record.appendix().is_none());
        }
    }

    #[test]
    fn particles_come_with_a_family(
        given in plain_word(),
        particles in prop::collection::vec(prop::sample::select(vec!["van", "de", "von", "della"]), 0..3),
        family in plain_word(),
    ) {
        let mut words = vec![given.clone()];
        words.extend(particles.iter().map(|p| (*p).to_string()));
        words.push(family.clone());
        let records = parser().parse(&words.join(" "));

        prop_assert_eq!(records.len(), 1);
        let record = &records[0];
        prop_assert_eq!(record.given(), Some(given.as_str()));
        prop_assert_eq!(record.family(), Some(family.as_str()));
        if particles.is_empty() {
            prop_assert_eq!(record.particle(), None);
        } else {
            let joined = particles.join(" ");
            prop_assert_eq!(record.particle(), Some(joined.as_str()));
        }
    }

    #[test]
    fn plain_names_reparse_identically(name in plain_name()) {
        let parser = parser();
        let first = parser.parse(&name);
        prop_assert_eq!(first.len(), 1);

        let rendered = first[0].to_string();
        prop_assert_eq!(&rendered, &name);
        prop_assert_eq!(parser.parse(&rendered), first);
    }

    #[test]
    fn comma_form_matches_natural_order(given in plain_name(), family in plain_word()) {
        let parser = parser();
        let inverted = parser.parse(&format!("{family}, {given}"));
        let natural = parser.parse(&format!("{given} {family}"));
        prop_assert_eq!(inverted, natural);
    }
}
