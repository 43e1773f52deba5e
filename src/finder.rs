//! The search engine: runs the candidate-expansion loop on a background
//! thread.
//!
//! # Structure
//!
//! [`SolutionFinder`] is the caller-facing state machine (idle → running →
//! stopped). It owns the shared result set and the cooperative stop flag;
//! `start()` hands both to a private [`Search`] worker on a dedicated
//! thread and all further interaction goes through thread-safe reads
//! (`running`, `solutions_count`, `get_solutions`, `closest_attempt`) and
//! the `stop` request.
//!
//! # Sharing model
//!
//! The candidate index is search scratch space: it lives on the worker and
//! is never shared, so it needs no synchronization. The only shared
//! mutable state is the [`SolutionIndex`] (plus the small closest-attempt
//! slot), each behind a `Mutex`. The worker is the sole writer and
//! publishes solutions one at a time as they are promoted; readers take a
//! deep copy under the lock and release it immediately, so a slow caller
//! never blocks the search.
//!
//! # Cancellation
//!
//! Cooperative only. The worker checks the flag once per generation
//! (breadth-first) or once per tier (depth-first); stop latency is bounded
//! by the remainder of the pass in progress.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::candidates::{CandidateIndex, CandidateKey};
use crate::catalog::WordCatalog;
use crate::chain::PartialSolution;
use crate::errors::SolverError;
use crate::solutions::SolutionIndex;
use crate::word::Word;

/// How long `stop(join = true)` waits for the search thread to exit.
const STOP_JOIN_TIMEOUT: Duration = Duration::from_secs(10);
/// Poll interval while waiting for the search thread to exit.
const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Traversal order for the candidate search.
///
/// Both strategies run over the same data structures and promote by the
/// same rule; they differ only in the order solutions are discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Expand every candidate against the whole catalog each generation.
    /// Finds minimum-word solutions first and stops once an extra
    /// generation adds nothing.
    #[default]
    BreadthFirst,
    /// Work through unique-letter-count tiers in descending order,
    /// chasing high-coverage chains first.
    DepthFirst,
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth-first" | "bfs" => Ok(Self::BreadthFirst),
            "depth-first" | "dfs" => Ok(Self::DepthFirst),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'breadth-first' or 'depth-first')"
            )),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BreadthFirst => f.write_str("breadth-first"),
            Self::DepthFirst => f.write_str("depth-first"),
        }
    }
}

/// Lock a mutex, recovering the guard if a previous holder panicked.
/// The worker only ever publishes complete values, so the data behind a
/// poisoned lock is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs solution search on a background thread.
pub struct SolutionFinder {
    catalog: Arc<WordCatalog>,
    max_depth: Option<usize>,
    strategy: SearchStrategy,
    solutions: Arc<Mutex<SolutionIndex>>,
    closest: Arc<Mutex<Option<PartialSolution>>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SolutionFinder {
    /// Create an idle finder over `catalog`.
    ///
    /// `max_depth` bounds the number of breadth-first generations (and so
    /// the maximum words per chain); `None` searches to convergence.
    pub fn new(
        catalog: WordCatalog,
        max_depth: Option<usize>,
        strategy: SearchStrategy,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            max_depth,
            strategy,
            solutions: Arc::new(Mutex::new(SolutionIndex::new())),
            closest: Arc::new(Mutex::new(None)),
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start the search thread. A repeated start request is ignored with a
    /// warning.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            log::warn!("search already started; ignoring repeated start request");
            return;
        }
        let search = Search {
            catalog: Arc::clone(&self.catalog),
            solutions: Arc::clone(&self.solutions),
            closest: Arc::clone(&self.closest),
            stop: Arc::clone(&self.stop),
            max_depth: self.max_depth,
            target_letters: self.catalog.box_letter_count(),
            candidates: CandidateIndex::new(),
            best_coverage: 0,
        };
        let strategy = self.strategy;
        self.handle = Some(thread::spawn(move || {
            if let Err(e) = search.run(strategy) {
                log::error!("search thread aborted: {}", e.display_detailed());
            }
        }));
    }

    /// Request a cooperative halt.
    ///
    /// With `join`, additionally blocks until the search thread exits or
    /// a bounded timeout elapses. The thread notices the request at its
    /// next generation (or tier) boundary.
    pub fn stop(&mut self, join: bool) {
        self.stop.store(true, Ordering::Relaxed);
        if !join {
            return;
        }
        let deadline = Instant::now() + STOP_JOIN_TIMEOUT;
        while self
            .handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
            && Instant::now() < deadline
        {
            thread::sleep(JOIN_POLL_INTERVAL);
        }
        if self
            .handle
            .as_ref()
            .is_some_and(|handle| handle.is_finished())
        {
            if let Some(handle) = self.handle.take() {
                if handle.join().is_err() {
                    log::error!("search thread panicked");
                }
            }
        } else if self.handle.is_some() {
            log::warn!("search thread did not exit within {STOP_JOIN_TIMEOUT:?}");
        }
    }

    /// Whether the search thread is currently running.
    pub fn running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Current number of discovered solutions.
    pub fn solutions_count(&self) -> usize {
        lock(&self.solutions).len()
    }

    /// A point-in-time copy of all discovered solutions. The copy is
    /// independent: mutating it does not affect the engine.
    pub fn get_solutions(&self) -> SolutionIndex {
        lock(&self.solutions).clone()
    }

    /// The incomplete chain with the best letter coverage seen so far.
    /// Useful for reporting when a puzzle turns out to have no solutions.
    pub fn closest_attempt(&self) -> Option<PartialSolution> {
        lock(&self.closest).clone()
    }
}

/// Stats for one breadth-first generation.
#[derive(Debug, Clone, Copy)]
struct GenerationStats {
    new_candidates: usize,
    promoted: usize,
}

/// The search worker. Owns the candidate index; lives entirely on the
/// background thread.
struct Search {
    catalog: Arc<WordCatalog>,
    solutions: Arc<Mutex<SolutionIndex>>,
    closest: Arc<Mutex<Option<PartialSolution>>>,
    stop: Arc<AtomicBool>,
    max_depth: Option<usize>,
    target_letters: usize,
    candidates: CandidateIndex,
    best_coverage: usize,
}

impl Search {
    fn run(mut self, strategy: SearchStrategy) -> Result<(), SolverError> {
        let result = match strategy {
            SearchStrategy::BreadthFirst => self.run_breadth_first(),
            SearchStrategy::DepthFirst => self.run_depth_first(),
        };
        log::info!("search has ended");
        result
    }

    /// Expand every candidate against the whole catalog, one generation at
    /// a time, until a generation stops paying off.
    fn run_breadth_first(&mut self) -> Result<(), SolverError> {
        log::info!("seeding candidates");
        self.candidates = self.seed_candidates();
        let mut have_solutions = false;
        let mut depth = 0;
        while !self.stop.load(Ordering::Relaxed) {
            depth += 1;
            let started = Instant::now();
            let stats = self.run_generation()?;
            log::debug!(
                "generation {depth}: {} new candidates, {} promoted, {} tracked, {:.3}s",
                stats.new_candidates,
                stats.promoted,
                self.candidates.len(),
                started.elapsed().as_secs_f64()
            );
            if stats.promoted > 0 {
                have_solutions = true;
            }
            if have_solutions && stats.promoted == 0 {
                // adding more words didn't help, so we can stop looking
                log::info!("stopping search because no more solutions were found");
                break;
            }
            if stats.new_candidates == 0 {
                log::info!("stopping search because no chain can be extended further");
                break;
            }
            if self.max_depth.is_some_and(|limit| depth >= limit) {
                log::info!("stopping search because max depth has been reached");
                break;
            }
        }
        Ok(())
    }

    /// Work through unique-count tiers in descending order, repeatedly,
    /// chasing high-coverage chains before broad ones.
    fn run_depth_first(&mut self) -> Result<(), SolverError> {
        // a single word can already cover the whole box
        let mut one_word = CandidateIndex::new();
        for word in self.catalog.words_with_unique_count(self.target_letters) {
            one_word.insert(PartialSolution::seed(word));
        }
        self.promote(one_word);

        for pass in 0..self.target_letters {
            log::debug!("running meta pass {pass}");
            for tier in (1..self.target_letters).rev() {
                if self.stop.load(Ordering::Relaxed) {
                    log::info!("stopping search because stop was requested");
                    return Ok(());
                }
                let tier_words = self.catalog.words_with_unique_count(tier);
                if tier_words.is_empty() {
                    continue;
                }
                log::debug!("processing words with {tier} unique letters");
                let seeds: Vec<PartialSolution> = tier_words
                    .iter()
                    .map(|word| PartialSolution::seed(Arc::clone(word)))
                    .collect();
                self.note_coverage_of(&seeds);
                self.candidates.merge(seeds);

                let candidates_before = self.candidates.len();
                let solutions_before = lock(&self.solutions).len();
                for word in &tier_words {
                    let fresh = self.extend_with(word)?;
                    let (_, survivors) = self.promote(fresh);
                    self.candidates.merge(survivors);
                }
                log::debug!(
                    "tier {tier}: {} new candidates, {} new solutions",
                    self.candidates.len() - candidates_before,
                    lock(&self.solutions).len() - solutions_before
                );
            }
        }
        Ok(())
    }

    /// One-word chains for every catalog word, in unique-count order.
    fn seed_candidates(&mut self) -> CandidateIndex {
        let mut seeds = CandidateIndex::new();
        for word in self.catalog.ordered_by_unique_count() {
            let seed = PartialSolution::seed(word);
            self.note_coverage(&seed);
            seeds.insert(seed);
        }
        seeds
    }

    /// One full expansion of the index against the catalog, plus promotion
    /// and survivor merging.
    fn run_generation(&mut self) -> Result<GenerationStats, SolverError> {
        let mut fresh = CandidateIndex::new();
        for word in self.catalog.ordered_by_first_letter() {
            let extended = self.extend_with(&word)?;
            fresh.merge(extended);
        }
        let new_candidates = fresh.len();
        let (promoted, survivors) = self.promote(fresh);
        self.candidates.merge(survivors);
        Ok(GenerationStats {
            new_candidates,
            promoted,
        })
    }

    /// All extensions of indexed candidates by `word`.
    ///
    /// The index lookup keys on the word's first letter, so every returned
    /// chain satisfies the link constraint by construction; candidates
    /// already containing the word are skipped here, which is what lets
    /// `extend` omit that check.
    fn extend_with(&self, word: &Arc<Word>) -> Result<CandidateIndex, SolverError> {
        let mut extended = CandidateIndex::new();
        for candidate in self
            .candidates
            .lookup(CandidateKey::LastLetter(word.first_letter()))
        {
            if candidate.contains(word) {
                continue;
            }
            extended.insert(candidate.extend(word)?);
        }
        Ok(extended)
    }

    /// Partition freshly formed chains into published solutions and
    /// surviving candidates.
    ///
    /// A chain covering every box letter is complete: it is published into
    /// the shared index immediately (under the lock, skipping chains
    /// already known) and never returns to the expansion index. Everything
    /// else survives for the next pass.
    fn promote(&mut self, fresh: CandidateIndex) -> (usize, Vec<PartialSolution>) {
        let mut promoted = 0;
        let mut survivors = Vec::new();
        for candidate in fresh {
            if candidate.unique_letters().len() == self.target_letters {
                let mut solutions = lock(&self.solutions);
                if !solutions.contains(&candidate) {
                    log::info!("found new solution: {candidate}");
                    solutions.insert(candidate);
                    promoted += 1;
                }
                continue;
            }
            self.note_coverage(&candidate);
            survivors.push(candidate);
        }
        (promoted, survivors)
    }

    /// Keep the shared closest-attempt slot pointing at the chain with the
    /// best letter coverage seen so far.
    fn note_coverage(&mut self, candidate: &PartialSolution) {
        let coverage = candidate.unique_letters().len();
        if coverage > self.best_coverage {
            self.best_coverage = coverage;
            *lock(&self.closest) = Some(candidate.clone());
        }
    }

    fn note_coverage_of(&mut self, candidates: &[PartialSolution]) {
        for candidate in candidates {
            self.note_coverage(candidate);
        }
    }
}
