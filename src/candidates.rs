//! The dual-keyed index of candidate chains.
//!
//! The expansion step must repeatedly answer "which candidates end in
//! letter X?" — once per dictionary word per generation — so candidates are
//! grouped by last letter up front. The symmetric grouping by unique-letter
//! count serves the depth-first traversal and progress reporting, and a
//! flat insertion-ordered list backs iteration and counting.
//!
//! All three views always describe the same multiset of candidates: every
//! insert updates each of them.

use std::collections::{BTreeMap, HashSet};

use crate::chain::PartialSolution;

/// Lookup key for a [`CandidateIndex`], one constructor per supported
/// shape. Every representable key is valid; a key that matches nothing
/// yields an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKey {
    /// All candidates whose chain ends in the given letter.
    LastLetter(char),
    /// All candidates covering the given number of unique letters.
    UniqueCount(usize),
    /// Candidates matching both, from the letter-major grouping.
    LastLetterThenCount(char, usize),
    /// Candidates matching both, from the count-major grouping.
    CountThenLastLetter(usize, char),
}

/// A collection of candidate chains indexed by last letter and by
/// unique-letter count simultaneously.
///
/// The grouped views hold positions into the flat list rather than chain
/// copies; the membership set enables O(1) duplicate detection during
/// [`merge`](CandidateIndex::merge).
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    by_last_letter: BTreeMap<char, BTreeMap<usize, Vec<usize>>>,
    by_unique_count: BTreeMap<usize, BTreeMap<char, Vec<usize>>>,
    linear: Vec<PartialSolution>,
    seen: HashSet<PartialSolution>,
}

impl CandidateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate to all three views.
    pub fn insert(&mut self, candidate: PartialSolution) {
        let position = self.linear.len();
        let uniques = candidate.unique_letters().len();

        self.by_last_letter
            .entry(candidate.last_letter())
            .or_default()
            .entry(uniques)
            .or_default()
            .push(position);

        self.by_unique_count
            .entry(uniques)
            .or_default()
            .entry(candidate.last_letter())
            .or_default()
            .push(position);

        self.seen.insert(candidate.clone());
        self.linear.push(candidate);
    }

    /// Candidates matching `key`, in grouped order. Empty when nothing
    /// matches.
    pub fn lookup(&self, key: CandidateKey) -> Vec<&PartialSolution> {
        let positions: Vec<usize> = match key {
            CandidateKey::LastLetter(letter) => self
                .by_last_letter
                .get(&letter)
                .map(|by_uniques| by_uniques.values().flatten().copied().collect())
                .unwrap_or_default(),
            CandidateKey::UniqueCount(count) => self
                .by_unique_count
                .get(&count)
                .map(|by_letter| by_letter.values().flatten().copied().collect())
                .unwrap_or_default(),
            CandidateKey::LastLetterThenCount(letter, count) => self
                .by_last_letter
                .get(&letter)
                .and_then(|by_uniques| by_uniques.get(&count))
                .cloned()
                .unwrap_or_default(),
            CandidateKey::CountThenLastLetter(count, letter) => self
                .by_unique_count
                .get(&count)
                .and_then(|by_letter| by_letter.get(&letter))
                .cloned()
                .unwrap_or_default(),
        };
        positions.into_iter().map(|p| &self.linear[p]).collect()
    }

    /// Structural membership test.
    pub fn contains(&self, candidate: &PartialSolution) -> bool {
        self.seen.contains(candidate)
    }

    /// Insert every candidate from `other`, skipping any already present.
    ///
    /// This is the dedup point that keeps one chain from being tracked
    /// twice across generations: re-deriving an already-indexed chain is
    /// routine (shorter candidates stay in the index and are re-extended
    /// every pass), and the skip here is what stops the duplicates.
    pub fn merge<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = PartialSolution>,
    {
        for candidate in other {
            if self.contains(&candidate) {
                continue;
            }
            self.insert(candidate);
        }
    }

    /// Candidates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PartialSolution> {
        self.linear.iter()
    }

    /// Total candidate count.
    pub fn len(&self) -> usize {
        self.linear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty()
    }
}

impl IntoIterator for CandidateIndex {
    type Item = PartialSolution;
    type IntoIter = std::vec::IntoIter<PartialSolution>;

    /// Consume the index, yielding candidates in insertion order.
    fn into_iter(self) -> Self::IntoIter {
        self.linear.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateIndex {
    type Item = &'a PartialSolution;
    type IntoIter = std::slice::Iter<'a, PartialSolution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
