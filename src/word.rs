//! A single dictionary word with its cached letter summary.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::letters::LetterSet;

/// A validated lowercase dictionary word.
///
/// Caches the three facts the search engine asks for constantly: first
/// letter (the chain-join key), last letter (what the next word must start
/// with), and the set of unique letters (what the word contributes toward
/// covering the box). Immutable once created; equality and hashing are by
/// textual value.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    first_letter: char,
    last_letter: char,
    unique_letters: LetterSet,
}

impl Word {
    /// Build a word from a non-empty lowercase token. Returns `None` for an
    /// empty string, which has no first or last letter.
    pub fn new(text: &str) -> Option<Self> {
        let first_letter = text.chars().next()?;
        let last_letter = text.chars().next_back()?;
        Some(Self {
            text: text.to_string(),
            first_letter,
            last_letter,
            unique_letters: text.chars().collect(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn first_letter(&self) -> char {
        self.first_letter
    }

    pub fn last_letter(&self) -> char {
        self.last_letter
    }

    pub fn unique_letters(&self) -> LetterSet {
        self.unique_letters
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
