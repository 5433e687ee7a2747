//! Structured failures reported by the maze core.
//!
//! Every fallible operation of the library returns a [`MazeError`]. None of them terminate the
//! process; the caller decides whether to retry, prompt again or give up.

use std::io;

use crate::types::{Endpoint, Position};

/// Enumeration of the failures the maze core can report.
///
/// This enumeration separates parse-time failures, which leave no maze behind, from query-time
/// failures, which leave the maze intact and only reject the specific request.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// The character stream does not describe a rectangular maze.
    ///
    /// This variant covers a malformed header, a row of the wrong length, an unknown cell
    /// character and a stream that ends before all rows were read. The line number is one-based.
    #[error("malformed maze input on line {line}: {reason}")]
    MalformedInput {
        /// One-based line of the input where parsing stopped.
        line: usize,
        /// Human readable description of what was wrong with the line.
        reason: String,
    },
    /// The character stream could not be read.
    #[error("failed to read maze input")]
    Read(#[from] io::Error),
    /// A start or exit coordinate lies outside the grid.
    ///
    /// This variant is recoverable: the maze is untouched and the query may be repeated with
    /// different coordinates.
    #[error("invalid {endpoint} spot {position}")]
    InvalidSpot {
        /// Which coordinate of the query was rejected.
        endpoint: Endpoint,
        /// The rejected coordinate.
        position: Position,
    },
    /// The exit has no predecessor chain leading back to the start.
    #[error("exit {exit} cannot be reached from {start}")]
    Unreachable {
        /// Start of the search.
        start: Position,
        /// Requested exit.
        exit: Position,
    },
    /// No exit cell at all can be reached from the start.
    #[error("no exit can be reached from {start}")]
    NoReachableExit {
        /// Start of the search.
        start: Position,
    },
    /// A query was made on a session that holds no maze.
    #[error("a maze must be loaded before finding exits")]
    NoMazeLoaded,
    /// A coordinate pair could not be parsed from text.
    #[error("invalid coordinates {input:?}, expected X,Y")]
    InvalidPosition {
        /// The offending text.
        input: String,
    },
}
