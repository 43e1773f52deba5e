//! The ranked set of completed solutions.

use std::collections::BTreeMap;

use crate::chain::PartialSolution;

/// Completed solutions, grouped and iterated by ascending word count.
///
/// Solutions are ranked by fewest words, so iteration and [`flatten`]
/// always yield shorter chains before longer ones regardless of discovery
/// order; within one length, insertion order is preserved. The struct is
/// `Clone` because readers on other threads take snapshot copies rather
/// than holding references into the live set.
///
/// [`flatten`]: SolutionIndex::flatten
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionIndex {
    by_word_count: BTreeMap<usize, Vec<PartialSolution>>,
    count: usize,
}

impl SolutionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solution to its length group.
    pub fn insert(&mut self, solution: PartialSolution) {
        self.by_word_count
            .entry(solution.len())
            .or_default()
            .push(solution);
        self.count += 1;
    }

    /// Structural membership test across all groups.
    pub fn contains(&self, solution: &PartialSolution) -> bool {
        self.by_word_count
            .get(&solution.len())
            .is_some_and(|group| group.contains(solution))
    }

    /// All solutions in one flat list, ascending by word count.
    pub fn flatten(&self) -> Vec<&PartialSolution> {
        self.iter().collect()
    }

    /// Solutions with the given word count, if any have been found.
    pub fn get(&self, word_count: usize) -> Option<&[PartialSolution]> {
        self.by_word_count
            .get(&word_count)
            .map(Vec::as_slice)
    }

    /// The solution at `index` within the given word-count group.
    pub fn get_at(&self, word_count: usize, index: usize) -> Option<&PartialSolution> {
        self.by_word_count
            .get(&word_count)
            .and_then(|group| group.get(index))
    }

    /// The first solution of the shortest length found so far.
    pub fn shortest(&self) -> Option<&PartialSolution> {
        self.iter().next()
    }

    /// Iterate all solutions, ascending word count, insertion order within
    /// a group.
    pub fn iter(&self) -> impl Iterator<Item = &PartialSolution> {
        self.by_word_count.values().flatten()
    }

    /// Total number of solutions.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<'a> IntoIterator for &'a SolutionIndex {
    type Item = &'a PartialSolution;
    type IntoIter = std::iter::Flatten<
        std::collections::btree_map::Values<'a, usize, Vec<PartialSolution>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.by_word_count.values().flatten()
    }
}
