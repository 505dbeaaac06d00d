//! Name validation for flavor records.
//!
//! A name is a run of ASCII letters, 1 to 30 characters long. Deployments
//! may opt into multi-word names, where single spaces separate letter runs.

/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 30;

/// Rules a flavor name must satisfy on create and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRules {
    pub max_len: usize,
    /// Accept single spaces between letter runs ("bourbon vanilla").
    pub allow_word_spaces: bool,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            max_len: MAX_NAME_LEN,
            allow_word_spaces: false,
        }
    }
}

impl NameRules {
    /// Rules that additionally accept space-separated words.
    pub fn with_word_spaces() -> Self {
        Self {
            allow_word_spaces: true,
            ..Self::default()
        }
    }

    pub fn is_valid(&self, input: &str) -> bool {
        // Every accepted character is ASCII, so byte length == char count.
        if input.is_empty() || input.len() > self.max_len {
            return false;
        }

        if !self.allow_word_spaces {
            return input.bytes().all(|b| b.is_ascii_alphabetic());
        }

        input
            .split(' ')
            .all(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic()))
    }
}

/// Check `input` against the default rules: ASCII letters only, 1..=30 long.
pub fn is_valid_name(input: &str) -> bool {
    NameRules::default().is_valid(input)
}
