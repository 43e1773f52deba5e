//! Solver for "letter box" word puzzles.
//!
//! Given four groups of three letters (the sides of the box) and a
//! dictionary, finds chains of words where each word starts with the
//! letter the previous one ended on, no word uses two consecutive letters
//! from the same side, and the chain as a whole uses every letter on the
//! box. Solutions are ranked by fewest words.
//!
//! The search runs on a background thread ([`finder::SolutionFinder`]) and
//! publishes solutions incrementally, so a caller can poll progress while
//! the engine works.

pub mod candidates;
pub mod catalog;
pub mod chain;
pub mod errors;
pub mod finder;
pub mod letter_box;
pub mod letters;
pub mod log;
pub mod solutions;
pub mod word;
