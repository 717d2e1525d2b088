//! Compiled prefix, suffix and particle matchers.
//!
//! Matchers are built once from a [`Vocabulary`] and a [`Lexicon`] when a
//! parser is constructed, then shared read-only by every parse call. Each
//! one works on tokens and closed-set lookups rather than patterns.

use crate::lexicon::Lexicon;
use crate::tokenizer::NameTokenizer;
use crate::vocabulary::{SuffixKind, Vocabulary};

/// A recognized prefix or suffix and the byte span it occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffixMatch {
    /// Canonical lowercase form, without periods
    pub value: String,
    /// Start of the span to remove
    pub start: usize,
    /// End of the span to remove
    pub end: usize,
}

/// Matches an honorific at the start of a name unit.
#[derive(Clone, Debug)]
pub struct PrefixMatcher {
    vocabulary: Vocabulary,
    max_words: usize,
}

impl PrefixMatcher {
    /// Compiles a prefix matcher.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        let max_words = vocabulary.max_prefix_words();
        Self {
            vocabulary,
            max_words,
        }
    }

    /// Matches the leading tokens of `input`.
    ///
    /// The longest entry wins. The last word may carry one period, and the
    /// prefix must be followed by more text: a unit that is only a title
    /// keeps it as a name. The returned span runs up to the next token, so
    /// it includes the separating whitespace.
    #[must_use]
    pub fn match_start(&self, input: &str) -> Option<AffixMatch> {
        let tokens = NameTokenizer::tokenize(input);

        for n in (1..=self.max_words).rev() {
            let Some(next) = tokens.get(n) else {
                continue;
            };
            let words = &tokens[..n];
            let mut candidate = words[..n - 1]
                .iter()
                .map(|t| t.lower())
                .collect::<Vec<_>>();
            let last = words[n - 1].lower();
            candidate.push(strip_period(&last).to_string());
            let candidate = candidate.join(" ");

            if self.vocabulary.is_prefix(&candidate) {
                return Some(AffixMatch {
                    value: candidate,
                    start: words[0].start,
                    end: next.start,
                });
            }
        }

        None
    }

    /// The vocabulary this matcher was compiled from.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

/// Matches a generational or credential suffix at the end of a name unit.
#[derive(Clone, Debug)]
pub struct SuffixMatcher {
    vocabulary: Vocabulary,
}

impl SuffixMatcher {
    /// Compiles a suffix matcher.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Matches the final token of `input`.
    ///
    /// The final token is the trailing run after the last whitespace or
    /// comma, so `Doe,Jr.` yields `jr`. One trailing period is allowed;
    /// credentials also match with internal periods (`Ph.D.`).
    #[must_use]
    pub fn match_end(&self, input: &str) -> Option<AffixMatch> {
        let end = input.trim_end().len();
        let head = &input[..end];
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace() || *c == ',')
            .map_or(0, |(i, c)| i + c.len_utf8());

        let token = &head[start..];
        if token.is_empty() {
            return None;
        }

        let lower = token.to_lowercase();
        let base = strip_period(&lower);
        if self.vocabulary.lookup_suffix(base).is_some() {
            return Some(AffixMatch {
                value: base.to_string(),
                start,
                end,
            });
        }

        let compact: String = lower.chars().filter(|&c| c != '.').collect();
        if self.vocabulary.lookup_suffix(&compact) == Some(SuffixKind::Credential) {
            return Some(AffixMatch {
                value: compact,
                start,
                end,
            });
        }

        None
    }

    /// The vocabulary this matcher was compiled from.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

/// Classifies single tokens as particles by lexicon membership.
#[derive(Clone, Debug)]
pub struct ParticleMatcher {
    lexicon: Lexicon,
}

impl ParticleMatcher {
    /// Compiles a particle matcher.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns true if `token` is a particle, ignoring case.
    #[must_use]
    pub fn is_particle(&self, token: &str) -> bool {
        self.lexicon.contains(token)
    }

    /// The lexicon this matcher was compiled from.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

/// The three matchers a parser needs, compiled together.
#[derive(Clone, Debug)]
pub struct CompiledMatchers {
    /// Leading honorifics
    pub prefix: PrefixMatcher,
    /// Trailing suffixes
    pub suffix: SuffixMatcher,
    /// Family-side particles
    pub particle: ParticleMatcher,
}

impl CompiledMatchers {
    /// Compiles all matchers from a vocabulary and a lexicon.
    #[must_use]
    pub fn compile(vocabulary: &Vocabulary, lexicon: Lexicon) -> Self {
        Self {
            prefix: PrefixMatcher::new(vocabulary.clone()),
            suffix: SuffixMatcher::new(vocabulary.clone()),
            particle: ParticleMatcher::new(lexicon),
        }
    }
}

fn strip_period(word: &str) -> &str {
    word.strip_suffix('.').unwrap_or(word)
}
