//! Particle lexicon.
//!
//! The lexicon is the set of name particles ("van", "von", "de", ...) that
//! the unit parser pulls out of family names. It is loaded once per parser
//! and read-only afterwards.
//!
//! The resource format is line oriented: one particle per line, blank lines
//! and lines starting with `#` ignored. Entries are stored lowercase.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use namae_foundation::{Error, Result};

use crate::stdlib::DEFAULT_PARTICLES;

/// File name of the particle resource shipped with this crate.
pub const PARTICLES_FILE: &str = "particles.txt";

/// Returns the location of the particle resource shipped with this crate.
///
/// The path is fixed at compile time to this crate's source directory. A
/// binary run away from that tree will not find it and uses the built-in
/// set instead.
#[must_use]
pub fn default_resource_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(PARTICLES_FILE)
}

/// Loads the shipped particle resource, falling back to the built-in set.
#[must_use]
pub fn load_particles() -> Lexicon {
    Lexicon::load_default()
}

/// A read-only set of lowercase particle tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    particles: BTreeSet<String>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in particle set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut lexicon = Self::new();
        lexicon.extend(DEFAULT_PARTICLES.iter().copied());
        lexicon
    }

    /// Parses the line-oriented particle format.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let mut lexicon = Self::new();
        lexicon.extend(source.lines().map(str::trim).filter(|line| {
            !line.is_empty() && !line.starts_with('#')
        }));
        lexicon
    }

    /// Reads a particle file.
    ///
    /// # Errors
    ///
    /// Returns `LexiconRead` if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::lexicon_read(path, e))?;
        let lexicon = Self::from_source(&source);
        tracing::debug!(path = %path.display(), particles = lexicon.len(), "loaded particle lexicon");
        Ok(lexicon)
    }

    /// Reads a particle file, or returns the built-in set if it cannot be read.
    #[must_use]
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        match Self::from_path(path) {
            Ok(lexicon) => lexicon,
            Err(err) => {
                tracing::debug!(error = %err, "falling back to built-in particles");
                Self::builtin()
            }
        }
    }

    /// Loads the resource shipped with this crate, or the built-in set.
    #[must_use]
    pub fn load_default() -> Self {
        Self::load_or_builtin(default_resource_path())
    }

    /// Adds particles. Entries are lowercased; entries spanning more than
    /// one word can never match a single token and are skipped.
    pub fn extend<I, S>(&mut self, particles: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for particle in particles {
            let particle = particle.as_ref().trim();
            if particle.is_empty() {
                continue;
            }
            if particle.contains(char::is_whitespace) {
                tracing::warn!(particle, "skipping multi-word particle entry");
                continue;
            }
            self.particles.insert(particle.to_lowercase());
        }
    }

    /// Checks a token for membership, ignoring case.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        if self.particles.contains(token) {
            return true;
        }
        self.particles.contains(&token.to_lowercase())
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true if the lexicon holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterates particles in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.particles.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        lexicon.extend(iter);
        lexicon
    }
}
