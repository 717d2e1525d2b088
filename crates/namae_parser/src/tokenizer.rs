//! Input tokenization.
//!
//! Splits a name unit into whitespace-delimited tokens, keeping the byte
//! span of each so matchers can strip exactly what they consumed.

/// A whitespace-delimited token borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text, casing untouched
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Token<'_> {
    /// Returns the token lowercased.
    #[must_use]
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Tokenizes name units.
pub struct NameTokenizer;

impl NameTokenizer {
    /// Tokenizes a string on Unicode whitespace.
    ///
    /// Punctuation stays attached to its token; callers decide what a
    /// trailing period or comma means.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token<'_>> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (i, ch) in input.char_indices() {
            if ch.is_whitespace() {
                if let Some(s) = start.take() {
                    tokens.push(Token {
                        text: &input[s..i],
                        start: s,
                        end: i,
                    });
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        // Flush final token
        if let Some(s) = start {
            tokens.push(Token {
                text: &input[s..],
                start: s,
                end: input.len(),
            });
        }

        tokens
    }

    /// Tokenizes and returns only the token texts.
    #[must_use]
    pub fn words(input: &str) -> Vec<&str> {
        input.split_whitespace().collect()
    }
}
