//! Longest connected chain solver for a match-line ball puzzle.
//!
//! Given an N×N grid of colored balls, [`find_longest_chain`] returns the
//! longest simple path of 8-adjacent same-colored cells, the line a player
//! would drag to clear the most balls in one move. The [`session`] module
//! wires the solver between a capture source and a gesture executor.

pub mod grid;
pub mod neighbors;
pub mod region;
pub mod search;
pub mod session;
pub mod solver;

pub use grid::{Cell, Color, Grid, GridError};
pub use session::{run_session, ChainExecutor, GridSource, SessionStats};
pub use solver::{find_longest_chain, is_valid_chain, MIN_CHAIN};
