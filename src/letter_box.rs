//! The puzzle board: four sides of three letters each.
//!
//! A `LetterBox` answers the two questions the dictionary layer needs while
//! validating words: "which letters may legally follow this one?" (letters on
//! any *other* side) and "how many distinct letters are on the box?" (the
//! coverage target a finished solution must reach).

use crate::letters::LetterSet;

/// Number of sides on the box.
pub const SIDE_COUNT: usize = 4;

/// Number of letters on each side.
pub const SIDE_LENGTH: usize = 3;

/// Words shorter than this can never appear in a solution.
pub const MIN_LETTERS_IN_WORD: usize = 3;

/// Errors from constructing a `LetterBox` out of user-supplied groups.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LetterBoxError {
    #[error("expected {SIDE_COUNT} letter groups, got {0}")]
    WrongGroupCount(usize),

    #[error("letter group \"{0}\" should contain exactly {SIDE_LENGTH} letters")]
    WrongGroupSize(String),

    #[error("letter group character '{0}' is not a letter")]
    NotALetter(char),

    #[error("letter '{0}' appears on the box more than once")]
    DuplicateLetter(char),
}

/// The four sides of the puzzle, with every letter normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBox {
    sides: [[char; SIDE_LENGTH]; SIDE_COUNT],
    letters: LetterSet,
}

impl LetterBox {
    /// Build a box from four groups of three letters (e.g. `["abc", "def",
    /// "ghi", "jkl"]`). Letters are lowercased; non-letters and repeated
    /// letters are rejected.
    ///
    /// # Errors
    ///
    /// Returns a `LetterBoxError` describing the first malformed group or
    /// duplicated letter encountered.
    pub fn new<S: AsRef<str>>(groups: &[S]) -> Result<Self, LetterBoxError> {
        if groups.len() != SIDE_COUNT {
            return Err(LetterBoxError::WrongGroupCount(groups.len()));
        }

        let mut sides = [['\0'; SIDE_LENGTH]; SIDE_COUNT];
        let mut letters = LetterSet::empty();
        for (side, group) in sides.iter_mut().zip(groups) {
            let group = group.as_ref().trim();
            if group.chars().count() != SIDE_LENGTH {
                return Err(LetterBoxError::WrongGroupSize(group.to_string()));
            }
            for (slot, raw) in side.iter_mut().zip(group.chars()) {
                if !raw.is_ascii_alphabetic() {
                    return Err(LetterBoxError::NotALetter(raw));
                }
                let letter = raw.to_ascii_lowercase();
                if letters.contains(letter) {
                    return Err(LetterBoxError::DuplicateLetter(letter));
                }
                letters.insert(letter);
                *slot = letter;
            }
        }

        Ok(Self { sides, letters })
    }

    /// All letters on sides that do not contain `current`. With `None`,
    /// every letter on the box.
    pub fn letter_candidates(&self, current: Option<char>) -> Vec<char> {
        let mut candidates = Vec::with_capacity(SIDE_COUNT * SIDE_LENGTH);
        for side in &self.sides {
            if current.is_some_and(|letter| side.contains(&letter)) {
                continue;
            }
            candidates.extend_from_slice(side);
        }
        candidates
    }

    /// Test whether a (lowercase) word can be played on this box: at least
    /// [`MIN_LETTERS_IN_WORD`] letters, every letter on the box, and no two
    /// consecutive letters drawn from the same side.
    pub fn word_is_valid(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < MIN_LETTERS_IN_WORD {
            return false;
        }
        let mut prev_side = match self.side_of(chars[0]) {
            Some(side) => side,
            None => return false,
        };
        for &letter in &chars[1..] {
            match self.side_of(letter) {
                Some(side) if side != prev_side => prev_side = side,
                _ => return false,
            }
        }
        true
    }

    /// Number of distinct letters on the box — the coverage target a
    /// complete solution must reach.
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// The full set of letters on the box.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Index of the side holding `letter`, if it is on the box.
    fn side_of(&self, letter: char) -> Option<usize> {
        self.sides.iter().position(|side| side.contains(&letter))
    }
}
