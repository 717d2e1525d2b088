//! Classification of a single name unit.
//!
//! A unit is one person's name after splitting. Classification runs four
//! steps in a fixed order, each consuming part of a working string:
//!
//! ```text
//! "Dr. Ludwig van Beethoven Jr."
//!          │
//!          ▼  prefix      → prefix = "dr"
//! "Ludwig van Beethoven Jr."
//!          │
//!          ▼  suffix      → suffix = "jr"
//! "Ludwig van Beethoven"
//!          │
//!          ▼  given/family → given = "Ludwig", family side = "van Beethoven"
//!          │
//!          ▼  particles   → particle = "van", family = "Beethoven"
//! ```
//!
//! No step can fail. Anything a step does not recognize simply leaves its
//! fields absent.

use namae_foundation::NameRecord;

use crate::matcher::{CompiledMatchers, ParticleMatcher};
use crate::tokenizer::NameTokenizer;

/// Given and family portions of a unit, before particle extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GivenFamily {
    /// Given name(s)
    pub given: Option<String>,
    /// Family side, still holding any particles
    pub family: Option<String>,
}

/// A family name split into particles and the remaining surname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilyParts {
    /// Family name without particles; absent if every token was a particle
    pub family: Option<String>,
    /// Space-joined particles, if any matched
    pub particle: Option<String>,
}

/// Parses name units against a set of compiled matchers.
#[derive(Clone, Copy, Debug)]
pub struct UnitParser<'m> {
    matchers: &'m CompiledMatchers,
}

impl<'m> UnitParser<'m> {
    /// Creates a unit parser over compiled matchers.
    #[must_use]
    pub const fn new(matchers: &'m CompiledMatchers) -> Self {
        Self { matchers }
    }

    /// Classifies one unit into a record.
    #[must_use]
    pub fn parse(&self, unit: &str) -> NameRecord {
        let mut builder = NameRecord::builder();
        let mut working = unit.trim();

        // 1. Prefix
        if let Some(m) = self.matchers.prefix.match_start(working) {
            tracing::trace!(unit, prefix = %m.value, "matched prefix");
            working = working[m.end..].trim();
            builder = builder.prefix(m.value);
        }

        // 2. Suffix
        if let Some(m) = self.matchers.suffix.match_end(working) {
            tracing::trace!(unit, suffix = %m.value, "matched suffix");
            working = working[..m.start].trim_end();
            builder = builder.suffix(m.value);
        }

        // 3. Given / family
        let GivenFamily { given, family } = self.split_given_family(working);
        if let Some(given) = given {
            builder = builder.given(given);
        }

        // 4. Particles
        if let Some(family) = family {
            let parts = extract_particles(&self.matchers.particle, &family);
            tracing::trace!(unit, family = ?parts.family, particle = ?parts.particle, "split family");
            if let Some(family) = parts.family {
                builder = builder.family(family);
            }
            if let Some(particle) = parts.particle {
                builder = builder.particle(particle);
            }
        }

        builder.build()
    }

    /// Splits the residual of a unit into given and family portions.
    ///
    /// With a comma the text before the first comma is the family and the
    /// rest is the given name; both must be non-empty or neither is set.
    /// Without a comma the last token is the family and the preceding ones
    /// are the given name. Particles directly before the last token go to
    /// the family side, except a leading token, which always stays given.
    #[must_use]
    pub fn split_given_family(&self, working: &str) -> GivenFamily {
        if let Some((family, given)) = working.split_once(',') {
            let (family, given) = (family.trim(), given.trim());
            if family.is_empty() || given.is_empty() {
                tracing::trace!(working, "degenerate comma form");
                return GivenFamily::default();
            }
            return GivenFamily {
                given: Some(given.to_string()),
                family: Some(family.to_string()),
            };
        }

        let tokens = NameTokenizer::words(working);
        match tokens.len() {
            0 => GivenFamily::default(),
            1 => GivenFamily {
                given: None,
                family: Some(tokens[0].to_string()),
            },
            n => {
                let mut family_start = n - 1;
                while family_start > 1 && self.matchers.particle.is_particle(tokens[family_start - 1])
                {
                    family_start -= 1;
                }
                GivenFamily {
                    given: Some(tokens[..family_start].join(" ")),
                    family: Some(tokens[family_start..].join(" ")),
                }
            }
        }
    }
}

/// Separates particle tokens from a family name.
///
/// Particles keep their order and casing. When every token is a particle
/// the family is absent and all of them land in `particle`.
#[must_use]
pub fn extract_particles(matcher: &ParticleMatcher, family: &str) -> FamilyParts {
    let (particles, rest): (Vec<&str>, Vec<&str>) = NameTokenizer::words(family)
        .into_iter()
        .partition(|token| matcher.is_particle(token));

    FamilyParts {
        family: (!rest.is_empty()).then(|| rest.join(" ")),
        particle: (!particles.is_empty()).then(|| particles.join(" ")),
    }
}
