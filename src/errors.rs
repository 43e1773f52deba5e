//! Error types for solution-chain construction, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - L001: `EmptySequence` (A chain must hold at least one word)
//! - L002: `ChainViolation` (New word does not continue the chain)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()`
//! method.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use letterbox::chain::PartialSolution;
//! use letterbox::word::Word;
//!
//! let rear = Arc::new(Word::new("rear").unwrap());
//! let chain = PartialSolution::seed(rear);
//!
//! let driver = Arc::new(Word::new("driver").unwrap());
//! match chain.extend(&driver) {
//!     Ok(longer) => println!("extended to {longer}"),
//!     Err(e) => eprintln!("{}", e.display_detailed()),
//! }
//! ```

/// Errors raised while building or extending solution chains.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SolverError {
    /// A chain was constructed from an empty word sequence.
    #[error("one or more word expected")]
    EmptySequence,

    /// `extend` was called with a word whose first letter does not match the
    /// chain's last letter. Inside the engine this is a programmer error:
    /// the expansion join filters by last letter before extending, so this
    /// variant surfacing means that filter is defective.
    #[error("first letter of new word ('{found}') does not match last letter of chain ('{expected}')")]
    ChainViolation { expected: char, found: char },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::EmptySequence => "L001",
            SolverError::ChainViolation { .. } => "L002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::EmptySequence => "A chain must hold at least one word",
            SolverError::ChainViolation { .. } => "New word does not continue the chain",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::EmptySequence => {
                Some("Construct chains with at least one word, or use seed() for one-word chains")
            }
            SolverError::ChainViolation { .. } => Some(
                "Filter candidate words by first letter before extending; \
                 this error inside the engine indicates a defective join filter",
            ),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Render "[code] message" with an optional indented help line.
pub(crate) fn format_error_with_code_and_help(
    message: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    match help {
        Some(help) => format!("[{code}] {message}\n  help: {help}"),
        None => format!("[{code}] {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let violation = SolverError::ChainViolation {
            expected: 'r',
            found: 'd',
        };
        assert_ne!(SolverError::EmptySequence.code(), violation.code());
    }

    #[test]
    fn test_chain_violation_message() {
        let err = SolverError::ChainViolation {
            expected: 'r',
            found: 'd',
        };
        assert_eq!(
            err.to_string(),
            "first letter of new word ('d') does not match last letter of chain ('r')"
        );
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let detailed = SolverError::EmptySequence.display_detailed();
        assert!(detailed.contains("L001"));
        assert!(detailed.contains("help:"));
    }

    #[test]
    fn test_format_without_help() {
        let formatted = format_error_with_code_and_help("boom", "L999", None);
        assert_eq!(formatted, "[L999] boom");
    }
}
