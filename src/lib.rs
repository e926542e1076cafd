//! Sliding tile puzzle (N-puzzle) solver.
//!
//! [`puzzle`] holds the board model, goal construction, the parity test and
//! the Manhattan heuristic. [`search`] runs breadth-first or best-first
//! graph search over it.

pub mod config;
pub mod error;
pub mod input;
pub mod puzzle;
pub mod report;
pub mod search;

pub use error::{InputError, SearchError};
pub use puzzle::{Board, Move};
pub use search::{Outcome, SearchState, SearchStats, Solution, Solver, Strategy};
