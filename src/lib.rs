//! namae - parse human names into their parts
//!
//! This crate re-exports all layers of the namae system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: namae_runtime      CLI, REPL, output formats, JSON batch input
//! Layer 1: namae_parser       Lexicon, matchers, splitter, unit parser
//! Layer 0: namae_foundation   NameRecord, NamePart, Error
//! ```
//!
//! # Example
//!
//! ```
//! let names = namae::parse_name("Dr. John Michael Doe Jr.");
//! assert_eq!(names[0].prefix(), Some("dr"));
//! assert_eq!(names[0].given(), Some("John Michael"));
//! assert_eq!(names[0].family(), Some("Doe"));
//! assert_eq!(names[0].suffix(), Some("jr"));
//! ```

pub use namae_foundation as foundation;
pub use namae_parser as parser;
pub use namae_runtime as runtime;

pub use namae_foundation::{Error, ErrorKind, NamePart, NameRecord, Result};
pub use namae_parser::{NameParser, ParserConfig, parse_name, parse_names};
