//! The name record produced for each individual person in an input string.
//!
//! A [`NameRecord`] is immutable: it is assembled through a
//! [`NameRecordBuilder`] and only read afterwards. Every field is optional
//! and an absent field is `None`, never an empty string.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The keys of a record's mapping view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamePart {
    /// Surname with particles removed.
    Family,
    /// Given and middle names.
    Given,
    /// Generational or credential suffix, lowercase.
    Suffix,
    /// Reserved; never populated by extraction.
    DroppingParticle,
    /// Reserved; never populated by extraction.
    NonDroppingParticle,
    /// Honorific or title, lowercase.
    Prefix,
    /// Space-joined particle tokens taken from the family side.
    Particle,
    /// Reserved; never populated by extraction.
    Appendix,
}

impl NamePart {
    /// All parts in mapping order.
    pub const ALL: [NamePart; 8] = [
        NamePart::Family,
        NamePart::Given,
        NamePart::Suffix,
        NamePart::DroppingParticle,
        NamePart::NonDroppingParticle,
        NamePart::Prefix,
        NamePart::Particle,
        NamePart::Appendix,
    ];

    /// Returns the snake-case key used in the mapping view.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Given => "given",
            Self::Suffix => "suffix",
            Self::DroppingParticle => "dropping_particle",
            Self::NonDroppingParticle => "non_dropping_particle",
            Self::Prefix => "prefix",
            Self::Particle => "particle",
            Self::Appendix => "appendix",
        }
    }

    /// Looks up a part by its mapping key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.key() == key)
    }
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The structured parse result for one name unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NameRecord {
    family: Option<String>,
    given: Option<String>,
    suffix: Option<String>,
    dropping_particle: Option<String>,
    non_dropping_particle: Option<String>,
    prefix: Option<String>,
    particle: Option<String>,
    appendix: Option<String>,
}

impl NameRecord {
    /// Starts building a record.
    #[must_use]
    pub fn builder() -> NameRecordBuilder {
        NameRecordBuilder::default()
    }

    /// Family name, with particles removed.
    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Given name(s); may hold several space-separated tokens.
    #[must_use]
    pub fn given(&self) -> Option<&str> {
        self.given.as_deref()
    }

    /// Suffix such as `jr` or `phd`, lowercase.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Honorific prefix such as `dr`, lowercase.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Particles such as `van` or `von der`, in original casing.
    #[must_use]
    pub fn particle(&self) -> Option<&str> {
        self.particle.as_deref()
    }

    /// Always `None`; present for compatibility with citation schemas.
    #[must_use]
    pub fn dropping_particle(&self) -> Option<&str> {
        self.dropping_particle.as_deref()
    }

    /// Always `None`; present for compatibility with citation schemas.
    #[must_use]
    pub fn non_dropping_particle(&self) -> Option<&str> {
        self.non_dropping_particle.as_deref()
    }

    /// Always `None`; present for compatibility with citation schemas.
    #[must_use]
    pub fn appendix(&self) -> Option<&str> {
        self.appendix.as_deref()
    }

    /// Returns the value stored for `part`.
    #[must_use]
    pub fn get(&self, part: NamePart) -> Option<&str> {
        match part {
            NamePart::Family => self.family(),
            NamePart::Given => self.given(),
            NamePart::Suffix => self.suffix(),
            NamePart::DroppingParticle => self.dropping_particle(),
            NamePart::NonDroppingParticle => self.non_dropping_particle(),
            NamePart::Prefix => self.prefix(),
            NamePart::Particle => self.particle(),
            NamePart::Appendix => self.appendix(),
        }
    }

    /// All eight fields in mapping order.
    pub fn fields(&self) -> impl Iterator<Item = (NamePart, Option<&str>)> + '_ {
        NamePart::ALL.into_iter().map(|part| (part, self.get(part)))
    }

    /// Only the populated fields, in mapping order.
    pub fn populated(&self) -> impl Iterator<Item = (NamePart, &str)> + '_ {
        self.fields()
            .filter_map(|(part, value)| value.map(|v| (part, v)))
    }

    /// Mapping view keyed by field name; every key is present.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, Option<String>> {
        self.fields()
            .map(|(part, value)| (part.key(), value.map(str::to_owned)))
            .collect()
    }

    /// Returns true if no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated().next().is_none()
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in [self.given(), self.family(), self.suffix()]
            .into_iter()
            .flatten()
        {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(value)?;
            first = false;
        }
        Ok(())
    }
}

/// Assembles a [`NameRecord`].
///
/// Empty values are ignored so a finished record never stores `Some("")`.
#[derive(Clone, Debug, Default)]
pub struct NameRecordBuilder {
    record: NameRecord,
}

impl NameRecordBuilder {
    /// Sets the family name.
    #[must_use]
    pub fn family(self, value: impl Into<String>) -> Self {
        self.part(NamePart::Family, value)
    }

    /// Sets the given name.
    #[must_use]
    pub fn given(self, value: impl Into<String>) -> Self {
        self.part(NamePart::Given, value)
    }

    /// Sets the suffix.
    #[must_use]
    pub fn suffix(self, value: impl Into<String>) -> Self {
        self.part(NamePart::Suffix, value)
    }

    /// Sets the prefix.
    #[must_use]
    pub fn prefix(self, value: impl Into<String>) -> Self {
        self.part(NamePart::Prefix, value)
    }

    /// Sets the particle.
    #[must_use]
    pub fn particle(self, value: impl Into<String>) -> Self {
        self.part(NamePart::Particle, value)
    }

    /// Sets any part by key.
    #[must_use]
    pub fn part(mut self, part: NamePart, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            return self;
        }
        let slot = match part {
            NamePart::Family => &mut self.record.family,
            NamePart::Given => &mut self.record.given,
            NamePart::Suffix => &mut self.record.suffix,
            NamePart::DroppingParticle => &mut self.record.dropping_particle,
            NamePart::NonDroppingParticle => &mut self.record.non_dropping_particle,
            NamePart::Prefix => &mut self.record.prefix,
            NamePart::Particle => &mut self.record.particle,
            NamePart::Appendix => &mut self.record.appendix,
        };
        *slot = Some(value);
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(self) -> NameRecord {
        self.record
    }
}
