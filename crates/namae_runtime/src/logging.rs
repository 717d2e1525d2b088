//! Logging setup for the command-line tools.
//!
//! Diagnostics go to stderr so stdout carries only parse results. The level
//! comes from command-line flags alone.

use std::io::stderr;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

/// How much diagnostic output to emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Debug output, including lexicon loading
    Verbose,
    /// Every classification step
    Trace,
}

impl Verbosity {
    /// Raises verbosity by one step, saturating at `Trace`.
    #[must_use]
    pub const fn increase(self) -> Self {
        match self {
            Self::Quiet => Self::Normal,
            Self::Normal => Self::Verbose,
            Self::Verbose | Self::Trace => Self::Trace,
        }
    }

    /// The tracing level filter for this verbosity.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// Installs a stderr subscriber at the given verbosity.
///
/// Returns false if a global subscriber was already installed, in which
/// case the existing one stays in effect.
pub fn init_logging(verbosity: Verbosity) -> bool {
    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(verbosity.level_filter()),
        )
        .try_init()
        .is_ok()
}
