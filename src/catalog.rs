//! `catalog` — Module to load and preprocess the game dictionary.
//!
//! This module is responsible for reading a word list (either from a file,
//! or from an in-memory string) and distilling it into the `WordCatalog`
//! the search engine runs against: only the words playable on the given
//! `LetterBox`, each wrapped in an `Arc<Word>` so that solution chains can
//! share them without copying text.
//!
//! The parsing logic:
//! - Each line in the input is expected to hold a single word.
//! - Lines are trimmed and normalized to lowercase.
//! - Blank lines are skipped silently; repeated words are kept once.
//! - Words that cannot be played on the box (too short, letters not on the
//!   box, two consecutive letters from one side) are counted as invalid
//!   and dropped.
//!
//! Valid words are stored in two groupings at once, because the engine
//! traverses them two ways:
//! - by first letter, then unique-letter count — the expansion join
//!   ("which words can follow a chain ending in X?");
//! - by unique-letter count, then first letter — seeding and the
//!   depth-first tiers ("most promising words first").
//!
//! Both groupings are `BTreeMap`-backed so every traversal order is
//! deterministic for a given input file.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::letter_box::LetterBox;
use crate::word::Word;

/// The dictionary of all valid words for one puzzle, in the two traversal
/// orders the search engine consumes.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    letter_box: LetterBox,
    by_first_letter: BTreeMap<char, BTreeMap<usize, Vec<Arc<Word>>>>,
    by_unique_count: BTreeMap<usize, BTreeMap<char, Vec<Arc<Word>>>>,
    valid_words: usize,
    invalid_words: usize,
}

impl WordCatalog {
    /// Build a catalog from an in-memory word list, one word per line.
    pub fn parse_from_str(contents: &str, letter_box: LetterBox) -> WordCatalog {
        let mut catalog = WordCatalog {
            letter_box,
            by_first_letter: BTreeMap::new(),
            by_unique_count: BTreeMap::new(),
            valid_words: 0,
            invalid_words: 0,
        };

        let mut seen: HashSet<String> = HashSet::new();
        for raw_line in contents.lines() {
            let word = raw_line.trim().to_lowercase();
            if word.is_empty() || seen.contains(&word) {
                continue;
            }
            seen.insert(word.clone());
            if !catalog.letter_box.word_is_valid(&word) {
                catalog.invalid_words += 1;
                continue;
            }
            // word_is_valid rejects empty input, so construction cannot miss
            if let Some(word) = Word::new(&word) {
                catalog.add(Arc::new(word));
            }
        }
        catalog
    }

    /// Read a word-list file from disk and parse it.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        letter_box: LetterBox,
    ) -> std::io::Result<WordCatalog> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_from_str(&data, letter_box))
    }

    fn add(&mut self, word: Arc<Word>) {
        self.by_first_letter
            .entry(word.first_letter())
            .or_default()
            .entry(word.unique_letters().len())
            .or_default()
            .push(Arc::clone(&word));

        self.by_unique_count
            .entry(word.unique_letters().len())
            .or_default()
            .entry(word.first_letter())
            .or_default()
            .push(word);

        self.valid_words += 1;
    }

    /// All words, grouped by first letter (ascending), then by
    /// unique-letter count.
    pub fn ordered_by_first_letter(&self) -> Vec<Arc<Word>> {
        self.by_first_letter
            .values()
            .flat_map(BTreeMap::values)
            .flatten()
            .cloned()
            .collect()
    }

    /// All words, grouped by unique-letter count (ascending), then by
    /// first letter.
    pub fn ordered_by_unique_count(&self) -> Vec<Arc<Word>> {
        self.by_unique_count
            .values()
            .flat_map(BTreeMap::values)
            .flatten()
            .cloned()
            .collect()
    }

    /// All words starting with the given letter.
    pub fn words_with_first_letter(&self, letter: char) -> Vec<Arc<Word>> {
        self.by_first_letter
            .get(&letter)
            .map(|by_uniques| by_uniques.values().flatten().cloned().collect())
            .unwrap_or_default()
    }

    /// All words with the given number of unique letters.
    pub fn words_with_unique_count(&self, count: usize) -> Vec<Arc<Word>> {
        self.by_unique_count
            .get(&count)
            .map(|by_letter| by_letter.values().flatten().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct letters on the box; a chain covering this many
    /// letters is a complete solution.
    pub fn box_letter_count(&self) -> usize {
        self.letter_box.letter_count()
    }

    /// The board this catalog was validated against.
    pub fn letter_box(&self) -> &LetterBox {
        &self.letter_box
    }

    /// Count of playable words in the catalog.
    pub fn len(&self) -> usize {
        self.valid_words
    }

    pub fn is_empty(&self) -> bool {
        self.valid_words == 0
    }

    /// Count of input words rejected as unplayable.
    pub fn invalid_words(&self) -> usize {
        self.invalid_words
    }
}
