//! # wordgrid
//!
//! Find every dictionary word hidden in a rectangular grid of letters. Words run in a
//! straight line in any of the eight compass directions, read forwards from their first
//! cell, and never reuse a cell.
//!
//! ```
//! use std::collections::HashSet;
//!
//! let grid = [["C", "A", "T", "S"], ["X", "X", "X", "X"]];
//! let dictionary: HashSet<String> = ["CAT", "CATS", "SAT"].map(String::from).into();
//!
//! let found = wordgrid::solver::find_words(grid, &dictionary)?;
//! assert_eq!(found, HashSet::from(["CAT", "CATS"].map(String::from)));
//! # Ok::<(), wordgrid::solver::SolverError>(())
//! ```

pub mod dictionary;
pub mod errors;
pub mod grid;
pub mod log;
pub mod prefix_index;
pub mod puzzle;
pub mod solver;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use solver::{find_words, SolverError};
