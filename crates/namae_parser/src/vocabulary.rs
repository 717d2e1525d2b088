//! Vocabulary registry for prefixes and suffixes.
//!
//! Holds the closed honorific and suffix word lists. The defaults come from
//! [`crate::stdlib`]; configuration may add words but never removes them.

use std::collections::BTreeSet;

use crate::stdlib::{CREDENTIAL_SUFFIXES, GENERATIONAL_SUFFIXES, PREFIXES};

/// Which family a suffix belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuffixKind {
    /// `jr`, `sr`, roman numerals
    Generational,
    /// Degrees and post-nominal titles; may be written with periods
    Credential,
}

/// Runtime storage for prefix and suffix words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Prefixes, lowercase; entries may span several words
    prefixes: BTreeSet<String>,
    /// Generational suffixes, lowercase
    generational: BTreeSet<String>,
    /// Credential suffixes, lowercase, without periods
    credentials: BTreeSet<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocabulary = Self::new();
        for prefix in PREFIXES {
            vocabulary.register_prefix(prefix);
        }
        for suffix in GENERATIONAL_SUFFIXES {
            vocabulary.register_suffix(suffix, SuffixKind::Generational);
        }
        for suffix in CREDENTIAL_SUFFIXES {
            vocabulary.register_suffix(suffix, SuffixKind::Credential);
        }
        vocabulary
    }

    /// Registers a prefix. Words are normalized to single spaces and
    /// lowercase; a trailing period is dropped.
    pub fn register_prefix(&mut self, prefix: &str) {
        let normalized = normalize_entry(prefix);
        if !normalized.is_empty() {
            self.prefixes.insert(normalized);
        }
    }

    /// Registers a suffix.
    pub fn register_suffix(&mut self, suffix: &str, kind: SuffixKind) {
        let mut normalized = normalize_entry(suffix);
        if kind == SuffixKind::Credential {
            normalized.retain(|c| c != '.');
        }
        if normalized.is_empty() {
            return;
        }
        match kind {
            SuffixKind::Generational => self.generational.insert(normalized),
            SuffixKind::Credential => self.credentials.insert(normalized),
        };
    }

    /// Checks whether a normalized word sequence is a prefix.
    #[must_use]
    pub fn is_prefix(&self, word: &str) -> bool {
        self.prefixes.contains(word)
    }

    /// Looks up a normalized suffix word.
    #[must_use]
    pub fn lookup_suffix(&self, word: &str) -> Option<SuffixKind> {
        if self.generational.contains(word) {
            Some(SuffixKind::Generational)
        } else if self.credentials.contains(word) {
            Some(SuffixKind::Credential)
        } else {
            None
        }
    }

    /// The largest number of words in any prefix entry.
    #[must_use]
    pub fn max_prefix_words(&self) -> usize {
        self.prefixes
            .iter()
            .map(|p| p.split(' ').count())
            .max()
            .unwrap_or(0)
    }

    /// Iterates prefixes in sorted order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// Iterates all suffixes in sorted order, generational first.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.generational
            .iter()
            .chain(self.credentials.iter())
            .map(String::as_str)
    }
}

fn normalize_entry(entry: &str) -> String {
    let words: Vec<_> = entry.split_whitespace().collect();
    let joined = words.join(" ").to_lowercase();
    match joined.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => joined,
    }
}
