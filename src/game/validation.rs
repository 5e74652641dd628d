//! Validation of words entered into the catalog
//!
//! A new word is checked against:
//! - Emptiness (after trimming whitespace)
//! - Maximum length
//! - Case-insensitive duplicates already in the catalog

use super::Word;

/// Default maximum word length, in characters
pub const MAX_WORD_LENGTH: usize = 50;

/// Outcome of adding a word to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddWordResult {
    /// Word was added
    Success,
    /// Nothing left after trimming
    Empty,
    /// Longer than the configured limit
    TooLong,
    /// Same text (ignoring case) is already in the catalog
    Duplicate,
    /// The catalog is closed once a game has started
    GameInProgress,
}

impl AddWordResult {
    /// Returns true if the word was added
    pub fn is_success(&self) -> bool {
        matches!(self, AddWordResult::Success)
    }

    /// Returns a user-friendly message
    pub fn message(&self) -> &'static str {
        match self {
            AddWordResult::Success => "Added!",
            AddWordResult::Empty => "Type a word first",
            AddWordResult::TooLong => "Too long",
            AddWordResult::Duplicate => "Already in the bowl",
            AddWordResult::GameInProgress => "Game already started",
        }
    }
}

/// Validate already-trimmed text against the catalog
///
/// Checks in order:
/// 1. Not empty
/// 2. At most `max_len` characters
/// 3. Not a case-insensitive duplicate
pub fn validate_new_word(text: &str, max_len: usize, catalog: &[Word]) -> AddWordResult {
    if text.is_empty() {
        return AddWordResult::Empty;
    }

    if text.chars().count() > max_len {
        return AddWordResult::TooLong;
    }

    let lower = text.to_lowercase();
    if catalog.iter().any(|w| w.text.to_lowercase() == lower) {
        return AddWordResult::Duplicate;
    }

    AddWordResult::Success
}
