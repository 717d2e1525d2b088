//! Integration tests for Layer 2: Runtime
//!
//! Tests for the CLI batch path, JSON input and output formats.

mod cli_tests;
mod format_tests;
