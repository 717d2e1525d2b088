//! CLI, REPL, and output formats for namae.
//!
//! This crate provides:
//! - [`Repl`] - Interactive name parsing
//! - [`cli`] - Argument parsing and batch execution for the `namae` binary
//! - [`format`] - Text and JSON rendering of records
//! - [`batch`] - JSON batch input
//! - [`logging`] - Diagnostic output setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod cli;
pub mod editor;
pub mod format;
pub mod logging;
pub mod repl;

pub use batch::{ParsedInput, parse_json_input, parse_json_str};
pub use cli::CliConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use format::{OutputFormat, format_batch, format_records};
pub use logging::{Verbosity, init_logging};
pub use repl::{Repl, ReplCommand};
