//! Core types for namae.
//!
//! This crate provides:
//! - [`NameRecord`] - The immutable parse result for one person's name
//! - [`NamePart`] - The keys of the record's mapping view
//! - [`Error`] - Error types shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod name;

pub use error::{Error, ErrorKind};
pub use name::{NamePart, NameRecord, NameRecordBuilder};

/// Result type alias using namae's Error.
pub type Result<T> = std::result::Result<T, Error>;
