//! Splitting multi-name input into name units.
//!
//! Separators are `;` and the standalone word `and` in any case. A word
//! boundary is any character that is not alphanumeric or `_`, so
//! "Anderson" and "Ferdinand" stay whole.
//!
//! A family name that is literally the word "and" is indistinguishable from
//! a separator and will be split. This is a known limitation of the
//! heuristic and is kept as-is.

/// Splits raw input into trimmed, non-empty name units.
#[derive(Clone, Copy, Debug, Default)]
pub struct NameSplitter {
    ampersand: bool,
}

impl NameSplitter {
    /// Creates a splitter that separates on `;` and `and`.
    #[must_use]
    pub const fn new() -> Self {
        Self { ampersand: false }
    }

    /// Also treats `&` as a separator.
    #[must_use]
    pub const fn with_ampersand(mut self, ampersand: bool) -> Self {
        self.ampersand = ampersand;
        self
    }

    /// Splits `raw` into name units in input order.
    #[must_use]
    pub fn split(&self, raw: &str) -> Vec<String> {
        let mut units = Vec::new();
        let mut fragment_start = 0;
        let mut i = 0;

        while i < raw.len() {
            let rest = &raw[i..];
            let Some(ch) = rest.chars().next() else {
                break;
            };

            let separator_len = match ch {
                ';' => Some(1),
                '&' if self.ampersand => Some(1),
                'a' | 'A' if is_standalone_and(raw, i) => Some(3),
                _ => None,
            };

            if let Some(len) = separator_len {
                push_fragment(&mut units, &raw[fragment_start..i]);
                i += len;
                fragment_start = i;
            } else {
                i += ch.len_utf8();
            }
        }

        push_fragment(&mut units, &raw[fragment_start..]);
        units
    }
}

/// Splits `raw` with the default separators.
#[must_use]
pub fn split(raw: &str) -> Vec<String> {
    NameSplitter::new().split(raw)
}

fn push_fragment(units: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        units.push(fragment.to_string());
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_standalone_and(raw: &str, at: usize) -> bool {
    let Some(word) = raw.get(at..at + 3) else {
        return false;
    };
    if !word.eq_ignore_ascii_case("and") {
        return false;
    }
    let before = raw[..at].chars().next_back();
    let after = raw[at + 3..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
