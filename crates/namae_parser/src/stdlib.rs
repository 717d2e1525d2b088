//! Standard vocabulary for Western names.
//!
//! Closed word lists used when no configuration extends them. All entries
//! are lowercase and carry no punctuation.

/// Particles used when the particle resource cannot be read.
pub const DEFAULT_PARTICLES: &[&str] = &[
    "de", "del", "della", "der", "des", "du", "van", "von", "vom", "zu", "zum", "zur", "af", "av",
    "da", "dal", "dall", "dalla", "dei", "dell", "delle", "di", "do", "dos", "la", "le", "los",
    "ter", "ten", "op", "'t", "al", "bin", "ibn",
];

/// Generational suffixes.
pub const GENERATIONAL_SUFFIXES: &[&str] = &[
    "jr", "sr", "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "junior", "senior",
];

/// Credential suffixes. These also match with internal periods (`Ph.D.`).
pub const CREDENTIAL_SUFFIXES: &[&str] = &["phd", "md", "dds", "dvm", "esq"];

/// Honorific and title prefixes.
pub const PREFIXES: &[&str] = &[
    // Academic and medical
    "dr",
    "prof",
    "professor",
    // Religious
    "rev",
    "reverend",
    "fr",
    "father",
    "brother",
    "sister",
    // Social
    "mr",
    "mrs",
    "ms",
    "miss",
    "madam",
    "sir",
    "lord",
    "lady",
    // Political
    "hon",
    "honorable",
    "rep",
    "representative",
    "sen",
    "senator",
    "gov",
    "governor",
    "pres",
    "president",
    "vp",
    "vice president",
    // Military and police
    "gen",
    "general",
    "adm",
    "admiral",
    "capt",
    "captain",
    "col",
    "colonel",
    "lt",
    "lieutenant",
    "sgt",
    "sergeant",
    "det",
    "detective",
    "insp",
    "inspector",
];
