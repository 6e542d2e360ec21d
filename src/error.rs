//! Error types for automaton construction.

use thiserror::Error;

/// Errors that can occur while feeding input into an automaton.
///
/// Queries never error: an out-of-alphabet character in a query simply
/// fails to match. Mutating operations reject invalid input up front so
/// an automaton is never left holding a partially indexed string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// The input contained a character outside the `a`..=`z` alphabet.
    #[error("character {0:?} is outside the a-z alphabet")]
    InvalidSymbol(char),

    /// An empty pattern was pushed into a pattern index.
    ///
    /// Empty patterns can never be reported by a scan, so indexing one
    /// is always a caller bug.
    #[error("empty patterns cannot be indexed")]
    EmptyPattern,
}

/// A specialized `Result` type for automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;
