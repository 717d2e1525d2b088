//! Main parser pipeline.
//!
//! Orchestrates the flow from raw input to name records: split the input
//! into units, then classify each unit independently.

use namae_foundation::{NameRecord, Result};

use crate::config::ParserConfig;
use crate::lexicon::Lexicon;
use crate::matcher::CompiledMatchers;
use crate::splitter::NameSplitter;
use crate::unit::UnitParser;
use crate::vocabulary::Vocabulary;

/// The main name parser.
///
/// Holds the lexicon and compiled matchers. Parsing never mutates the
/// parser, so one instance can serve many threads.
#[derive(Clone, Debug)]
pub struct NameParser {
    matchers: CompiledMatchers,
    splitter: NameSplitter,
}

impl NameParser {
    /// Creates a parser with the default configuration.
    ///
    /// Reads the shipped particle resource; falls back to the built-in set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ParserConfig::default())
    }

    /// Creates a parser from a configuration.
    #[must_use]
    pub fn with_config(config: &ParserConfig) -> Self {
        Self::assemble(config, config.lexicon())
    }

    /// Creates a parser, failing if an explicit lexicon file is unreadable.
    ///
    /// # Errors
    ///
    /// Returns `LexiconRead` when the configured lexicon path cannot be read.
    pub fn try_with_config(config: &ParserConfig) -> Result<Self> {
        Ok(Self::assemble(config, config.try_lexicon()?))
    }

    /// Creates a parser with the standard vocabulary and the given lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self::assemble(&ParserConfig::default(), lexicon)
    }

    fn assemble(config: &ParserConfig, lexicon: Lexicon) -> Self {
        let vocabulary = config.vocabulary();
        tracing::debug!(
            particles = lexicon.len(),
            prefixes = vocabulary.prefixes().count(),
            suffixes = vocabulary.suffixes().count(),
            "compiled name matchers"
        );
        Self {
            matchers: CompiledMatchers::compile(&vocabulary, lexicon),
            splitter: NameSplitter::new().with_ampersand(config.split_on_ampersand),
        }
    }

    /// Parses a string holding one or more names.
    ///
    /// Empty or whitespace-only input yields no records.
    #[must_use]
    pub fn parse(&self, input: &str) -> Vec<NameRecord> {
        if input.trim().is_empty() {
            return Vec::new();
        }

        let unit_parser = UnitParser::new(&self.matchers);
        self.splitter
            .split(input)
            .iter()
            .map(|unit| unit_parser.parse(unit))
            .collect()
    }

    /// Parses each input independently, preserving order.
    #[must_use]
    pub fn parse_list<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Vec<NameRecord>> {
        inputs.iter().map(|input| self.parse(input.as_ref())).collect()
    }

    /// Classifies a single, already split name unit.
    #[must_use]
    pub fn parse_unit(&self, unit: &str) -> NameRecord {
        UnitParser::new(&self.matchers).parse(unit)
    }

    /// Splits input into name units without classifying them.
    #[must_use]
    pub fn split(&self, input: &str) -> Vec<String> {
        self.splitter.split(input)
    }

    /// The particle lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        self.matchers.particle.lexicon()
    }

    /// The prefix and suffix vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        self.matchers.prefix.vocabulary()
    }
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a string holding one or more names with a fresh default parser.
#[must_use]
pub fn parse_name(text: &str) -> Vec<NameRecord> {
    NameParser::new().parse(text)
}

/// Parses a list of name strings with a fresh default parser.
#[must_use]
pub fn parse_names<S: AsRef<str>>(texts: &[S]) -> Vec<Vec<NameRecord>> {
    NameParser::new().parse_list(texts)
}
