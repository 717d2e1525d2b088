//! Name parser for bibliographic and citation data.
//!
//! This crate decomposes free-form person names like
//! "Dr. John Michael Doe Jr." into [`NameRecord`]s.
//!
//! # Architecture
//!
//! ```text
//! "Dr. John Doe Jr. and Ludwig van Beethoven"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SPLITTER      │  → ["Dr. John Doe Jr.", "Ludwig van Beethoven"]
//! └─────────────────┘
//!          │  (each unit independently)
//!          ▼
//! ┌─────────────────┐
//! │ PREFIX / SUFFIX │  → prefix "dr", suffix "jr"
//! │ MATCHERS        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GIVEN / FAMILY  │  → given "Ludwig", family side "van Beethoven"
//! │ SPLIT           │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PARTICLE        │  → particle "van", family "Beethoven"
//! │ LEXICON         │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lexicon`] - Particle set loading with built-in fallback
//! - [`vocabulary`] - Prefix and suffix word lists
//! - [`matcher`] - Compiled prefix, suffix and particle matchers
//! - [`tokenizer`] - Whitespace tokens with byte spans
//! - [`splitter`] - Multi-name input to name units
//! - [`unit`] - Classification of one name unit
//! - [`parser`] - Pipeline and public entry points
//! - [`config`] - Parser configuration
//! - [`stdlib`] - Standard word lists

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod lexicon;
pub mod matcher;
pub mod parser;
pub mod splitter;
pub mod stdlib;
pub mod tokenizer;
pub mod unit;
pub mod vocabulary;

// Re-export main types for convenience
pub use config::{LexiconSource, ParserConfig};
pub use lexicon::{Lexicon, load_particles};
pub use matcher::{AffixMatch, CompiledMatchers};
pub use namae_foundation::{NamePart, NameRecord};
pub use parser::{NameParser, parse_name, parse_names};
pub use splitter::NameSplitter;
pub use unit::UnitParser;
pub use vocabulary::{SuffixKind, Vocabulary};
