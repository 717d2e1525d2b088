//! Integration tests for Layer 1: Parser
//!
//! Tests for splitting, unit classification, lexicon loading and the
//! properties every parse result holds.

mod property_tests;
mod scenario_tests;
