//! Configuration for the name parser.

use std::path::PathBuf;

use namae_foundation::Result;

use crate::lexicon::Lexicon;
use crate::vocabulary::{SuffixKind, Vocabulary};

/// Where the particle lexicon comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LexiconSource {
    /// The resource shipped with the parser crate, or the built-in set.
    #[default]
    Default,
    /// The built-in set only; no file is read.
    Builtin,
    /// A particle file in the line-oriented format.
    Path(PathBuf),
    /// An explicit list of particles.
    Inline(Vec<String>),
}

/// Configuration for a [`crate::NameParser`].
///
/// The default configuration reproduces the standard behaviour. Extra
/// words are added to the standard vocabularies, never substituted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Particle lexicon source.
    pub lexicon: LexiconSource,

    /// Particles added on top of the lexicon.
    pub extra_particles: Vec<String>,

    /// Additional honorific prefixes.
    pub extra_prefixes: Vec<String>,

    /// Additional generational suffixes.
    pub extra_generational_suffixes: Vec<String>,

    /// Additional credential suffixes.
    pub extra_credential_suffixes: Vec<String>,

    /// Treat `&` as a name separator, like `;` and `and`.
    pub split_on_ampersand: bool,
}

impl ParserConfig {
    /// Creates a configuration that never touches the filesystem.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            lexicon: LexiconSource::Builtin,
            ..Self::default()
        }
    }

    /// Builder method to set the lexicon source.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: LexiconSource) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Builder method to read particles from a file.
    #[must_use]
    pub fn with_lexicon_path(self, path: impl Into<PathBuf>) -> Self {
        self.with_lexicon(LexiconSource::Path(path.into()))
    }

    /// Builder method to add particles.
    #[must_use]
    pub fn with_particles<I, S>(mut self, particles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_particles.extend(particles.into_iter().map(Into::into));
        self
    }

    /// Builder method to add prefixes.
    #[must_use]
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Builder method to add suffixes of the given kind.
    #[must_use]
    pub fn with_suffixes<I, S>(mut self, kind: SuffixKind, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = match kind {
            SuffixKind::Generational => &mut self.extra_generational_suffixes,
            SuffixKind::Credential => &mut self.extra_credential_suffixes,
        };
        target.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Builder method to enable `&` as a separator.
    #[must_use]
    pub fn with_ampersand_separator(mut self, enabled: bool) -> Self {
        self.split_on_ampersand = enabled;
        self
    }

    /// Builds the vocabulary: the standard lists plus any extras.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        let mut vocabulary = Vocabulary::standard();
        for prefix in &self.extra_prefixes {
            vocabulary.register_prefix(prefix);
        }
        for suffix in &self.extra_generational_suffixes {
            vocabulary.register_suffix(suffix, SuffixKind::Generational);
        }
        for suffix in &self.extra_credential_suffixes {
            vocabulary.register_suffix(suffix, SuffixKind::Credential);
        }
        vocabulary
    }

    /// Builds the lexicon. An unreadable file degrades to the built-in set.
    #[must_use]
    pub fn lexicon(&self) -> Lexicon {
        let mut lexicon = match &self.lexicon {
            LexiconSource::Default => Lexicon::load_default(),
            LexiconSource::Builtin => Lexicon::builtin(),
            LexiconSource::Path(path) => Lexicon::load_or_builtin(path),
            LexiconSource::Inline(particles) => particles.iter().collect(),
        };
        lexicon.extend(&self.extra_particles);
        lexicon
    }

    /// Builds the lexicon, failing if an explicit file cannot be read.
    ///
    /// # Errors
    ///
    /// Returns `LexiconRead` when the source is a path that cannot be read.
    pub fn try_lexicon(&self) -> Result<Lexicon> {
        let mut lexicon = match &self.lexicon {
            LexiconSource::Path(path) => Lexicon::from_path(path)?,
            _ => return Ok(self.lexicon()),
        };
        lexicon.extend(&self.extra_particles);
        Ok(lexicon)
    }
}
