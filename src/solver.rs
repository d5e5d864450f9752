//! The word-search solver: find every dictionary word spelled along a straight line of grid cells.
//!
//! # Algorithm
//!
//! 1. Validate the input (see [`validate`]). Nothing is searched if validation fails.
//! 2. Return an empty set straight away for an empty grid or an empty dictionary.
//! 3. Build a fresh [`PrefixIndex`] from the dictionary.
//! 4. From every cell whose letter starts some dictionary word, run a depth-first walk. The
//!    first step fans out into all eight directions, and after that each branch keeps going
//!    in its own direction only.
//! 5. A branch stops as soon as its letters are no longer a dictionary prefix. Every complete
//!    word met along the way is collected, so both `CAT` and `CATS` are found on one branch.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with a single variant:
//!
//! - S001: `InvalidInput` (Input validation failed (wraps [`InputError`]))
//!
//! Nothing else in the search can fail: leaving the grid or reaching an already visited cell
//! just ends that branch.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//! use wordgrid::solver;
//!
//! let grid = [["C", "C", "C"], ["C", "A", "A"], ["C", "C", "T"], ["D", "O", "G"]];
//! let dictionary: HashSet<String> = ["CAT", "DOG", "BIRD", "PLANE"].map(String::from).into();
//!
//! let found = solver::find_words(grid, &dictionary)?;
//! assert_eq!(found, HashSet::from(["CAT", "DOG"].map(String::from)));
//! # Ok::<(), solver::SolverError>(())
//! ```
//!
//! ## Stopping after a time budget
//!
//! ```
//! use std::time::Duration;
//! use wordgrid::puzzle::Puzzle;
//! use wordgrid::solver::{self, SearchOptions, SolveStatus};
//!
//! let puzzle = Puzzle::from_json_str(r#"{"grid": [["C", "A", "T"]], "dictionary": ["CAT"]}"#)?;
//! let options = SearchOptions { time_budget: Some(Duration::from_secs(5)) };
//! let result = solver::solve_puzzle(&puzzle, options);
//!
//! match result.status {
//!     SolveStatus::Complete => println!("found {:?}", result.sorted_words()),
//!     SolveStatus::TimedOut { elapsed } => println!("gave up after {:?}", elapsed),
//! }
//! # Ok::<(), wordgrid::errors::InputError>(())
//! ```

use crate::dictionary::Dictionary;
use crate::errors::InputError;
use crate::grid::{Direction, Grid, Position};
use crate::prefix_index::{PrefixIndex, PrefixNode};
use crate::puzzle::Puzzle;
use instant::Instant;
use log::{debug, warn};
use std::collections::HashSet;
use std::time::Duration;

/// Knobs for a single search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Wall-clock limit for the traversal. `None` searches until done.
    pub time_budget: Option<Duration>,
}

/// Status of the solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every start cell and direction was explored.
    Complete,

    /// The time budget expired first. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Words found by one search call, and whether the search ran to completion.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Distinct dictionary words found in the grid.
    pub words: HashSet<String>,
    pub status: SolveStatus,
}

impl SolveResult {
    fn empty() -> Self {
        SolveResult { words: HashSet::new(), status: SolveStatus::Complete }
    }

    /// Found words in lexicographic order.
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Error type for the solver entry point.
///
/// Validation errors are re-wrapped so that their message reads `Invalid input: <violation>`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "S001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "Input validation failed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "The grid or the dictionary broke one of the input rules, so no search was run. This wraps an underlying InputError (see Input Errors section for specific error codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidInput(_) => None, // InputError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidInput(ie) => {
                // delegate to InputError's detailed display
                format!("Invalid input ({})\n  caused by: {}", self.code(), ie.display_detailed())
            }
        }
    }
}

/// Tracks the time spent by a search so it can stop once `limit` has passed.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Cells on the path currently being extended, same shape as the grid.
///
/// A cell is marked only while it is part of that path, and is released on backtrack.
struct VisitedMask {
    marked: Vec<bool>,
}

impl VisitedMask {
    fn new(grid: &Grid) -> Self {
        VisitedMask { marked: vec![false; grid.num_rows() * grid.num_cols()] }
    }

    fn is_marked(&self, idx: usize) -> bool {
        self.marked[idx]
    }

    fn mark(&mut self, idx: usize) {
        self.marked[idx] = true;
    }

    fn unmark(&mut self, idx: usize) {
        self.marked[idx] = false;
    }
}

/// Per-call traversal state. Nothing here outlives a single search.
struct Searcher<'g> {
    grid: &'g Grid,
    visited: VisitedMask,
    /// Letters along the current path.
    word: String,
    found: HashSet<String>,
    budget: Option<TimeBudget>,
    timed_out: bool,
}

impl<'g> Searcher<'g> {
    fn new(grid: &'g Grid, options: SearchOptions) -> Self {
        Searcher {
            grid,
            visited: VisitedMask::new(grid),
            word: String::new(),
            found: HashSet::new(),
            budget: options.time_budget.map(TimeBudget::new),
            timed_out: false,
        }
    }

    fn run(mut self, index: &PrefixIndex) -> SolveResult {
        let grid = self.grid;
        let root = index.root();

        for pos in grid.positions() {
            if self.timed_out {
                break;
            }
            if root.has_child(grid[pos]) {
                self.explore(pos, root, None);
            }
        }

        debug_assert!(self.word.is_empty(), "path buffer must be empty after the search");
        debug_assert!(!self.visited.marked.contains(&true), "every visited cell must be released");

        let status = match (&self.budget, self.timed_out) {
            (Some(budget), true) => SolveStatus::TimedOut { elapsed: budget.elapsed() },
            _ => SolveStatus::Complete,
        };
        SolveResult { words: self.found, status }
    }

    fn out_of_time(&mut self) -> bool {
        if !self.timed_out && self.budget.as_ref().is_some_and(TimeBudget::expired) {
            warn!("search time budget expired; returning {} words found so far", self.found.len());
            self.timed_out = true;
        }
        self.timed_out
    }

    /// One depth-first step onto `pos`, arriving from `node`.
    ///
    /// `heading` is `None` only on a start cell; each child call then commits to one direction.
    fn explore(&mut self, pos: Position, node: &PrefixNode, heading: Option<Direction>) {
        if self.out_of_time() {
            return;
        }

        let idx = self.grid.cell_index(pos);
        if self.visited.is_marked(idx) {
            return;
        }

        let ch = self.grid[pos];
        let Some(node) = node.child(ch) else {
            // nothing in the dictionary continues this way
            return;
        };

        self.visited.mark(idx);
        self.word.push(ch);

        if node.is_word() && !self.found.contains(&self.word) {
            self.found.insert(self.word.clone());
        }

        let grid = self.grid;
        match heading {
            None => {
                for direction in Direction::ALL {
                    if let Some(next) = grid.step(pos, direction) {
                        self.explore(next, node, Some(direction));
                    }
                }
            }
            Some(direction) => {
                if let Some(next) = grid.step(pos, direction) {
                    self.explore(next, node, Some(direction));
                }
            }
        }

        self.word.pop();
        self.visited.unmark(idx);
    }
}

/// Check that `rows` form a valid grid.
///
/// The dictionary needs no runtime check here: its set type is enforced by the signature of
/// [`find_words`]. Loosely typed input (JSON, JavaScript values) goes through
/// [`Puzzle::from_values`], which checks the dictionary too.
///
/// # Errors
///
/// Returns the first violated [`InputError`]; inputs are never modified.
pub fn validate<R, Row, S>(rows: R) -> Result<Grid, InputError>
where
    R: IntoIterator<Item = Row>,
    Row: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Grid::from_rows(rows)
}

/// Find every word of `dictionary` that appears in the grid given by `rows`.
///
/// Words may run in any of the eight directions, read forwards from their first cell, and
/// never reuse a cell. The result holds each found word once, no matter how often it occurs.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if `rows` is not a valid grid. No search is run in
/// that case, so there are no partial results.
pub fn find_words<R, Row, S>(rows: R, dictionary: &HashSet<String>) -> Result<HashSet<String>, SolverError>
where
    R: IntoIterator<Item = Row>,
    Row: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let grid = validate(rows)?;
    let result = search_words(&grid, dictionary.iter().map(String::as_str), SearchOptions::default());
    Ok(result.words)
}

/// Search an already validated grid for the words of `dictionary`.
#[must_use]
pub fn search(grid: &Grid, dictionary: &Dictionary) -> HashSet<String> {
    search_with_options(grid, dictionary, SearchOptions::default()).words
}

/// Like [`search`], with an optional time budget.
#[must_use]
pub fn search_with_options(grid: &Grid, dictionary: &Dictionary, options: SearchOptions) -> SolveResult {
    search_words(grid, dictionary.iter(), options)
}

/// Solve a validated [`Puzzle`].
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle, options: SearchOptions) -> SolveResult {
    search_with_options(&puzzle.grid, &puzzle.dictionary, options)
}

fn search_words<'w, I>(grid: &Grid, words: I, options: SearchOptions) -> SolveResult
where
    I: ExactSizeIterator<Item = &'w str>,
{
    if grid.num_rows() == 0 || words.len() == 0 {
        debug!("empty grid or dictionary; nothing to search");
        return SolveResult::empty();
    }

    let t_start = Instant::now();
    let index: PrefixIndex = words.collect();
    debug!("built prefix index over {} words", index.len());

    let result = Searcher::new(grid, options).run(&index);

    debug!(
        "searched {}x{} grid: {} words found in {:.3}s",
        grid.num_rows(),
        grid.num_cols(),
        result.words.len(),
        t_start.elapsed().as_secs_f64()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|row| row.chars().map(String::from))).unwrap()
    }

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from(set(words))
    }

    #[test]
    fn test_given_example() {
        let rows = [["C", "C", "C"], ["C", "A", "A"], ["C", "C", "T"], ["D", "O", "G"]];
        let found = find_words(rows, &set(&["CAT", "DOG", "BIRD", "PLANE"])).unwrap();
        assert_eq!(found, set(&["CAT", "DOG"]));
    }

    #[test]
    fn test_every_direction() {
        // each grid spells CAT from a corner or an edge, in a different direction
        let cases = [
            (vec!["CAT", "XXX", "XXX"], "right"),
            (vec!["TAC", "XXX", "XXX"], "left"),
            (vec!["CXX", "AXX", "TXX"], "down"),
            (vec!["TXX", "AXX", "CXX"], "up"),
            (vec!["CXX", "XAX", "XXT"], "down-right"),
            (vec!["TXX", "XAX", "XXC"], "up-left"),
            (vec!["XXC", "XAX", "TXX"], "down-left"),
            (vec!["XXT", "XAX", "CXX"], "up-right"),
        ];
        for (rows, name) in cases {
            assert_eq!(search(&grid(&rows), &dict(&["CAT"])), set(&["CAT"]), "direction {name}");
        }
    }

    #[test]
    fn test_no_bending_paths() {
        // C-A-T exists only by turning a corner
        let g = grid(&["CA", "XT"]);
        assert!(search(&g, &dict(&["CAT"])).is_empty());
    }

    #[test]
    fn test_no_cell_reuse() {
        assert!(search(&grid(&["A"]), &dict(&["AA"])).is_empty());
        assert!(search(&grid(&["AB"]), &dict(&["ABA"])).is_empty());
    }

    #[test]
    fn test_prefix_words_both_found() {
        let g = grid(&["CATS", "XXXX", "XXXX", "XXXX"]);
        assert_eq!(search(&g, &dict(&["CAT", "CATS"])), set(&["CAT", "CATS"]));
    }

    #[test]
    fn test_single_cell_grid() {
        assert_eq!(search(&grid(&["C"]), &dict(&["C", "A"])), set(&["C"]));
    }

    #[test]
    fn test_empty_grid_or_dictionary() {
        let empty_rows: Vec<Vec<&str>> = Vec::new();
        assert!(find_words(empty_rows, &set(&["CAT", "DOG"])).unwrap().is_empty());
        assert!(find_words([["C", "A", "T"]], &HashSet::new()).unwrap().is_empty());
    }

    #[test]
    fn test_zero_width_rows() {
        let rows: Vec<Vec<&str>> = vec![vec![], vec![]];
        assert!(find_words(rows, &set(&["A"])).unwrap().is_empty());
    }

    #[test]
    fn test_word_found_many_times_reported_once() {
        let g = grid(&["ABA", "BAB", "ABA"]);
        assert_eq!(search(&g, &dict(&["AB", "ABA", "BAB"])), set(&["AB", "ABA", "BAB"]));
    }

    #[test]
    fn test_palindrome_both_ways() {
        let g = grid(&["XNOONX"]);
        assert_eq!(search(&g, &dict(&["NOON", "ON", "NO"])), set(&["NOON", "ON", "NO"]));
    }

    #[test]
    fn test_exact_character_equality() {
        let g = grid(&["cat"]);
        assert!(search(&g, &dict(&["CAT"])).is_empty());
        assert_eq!(search(&g, &dict(&["cat"])), set(&["cat"]));
    }

    #[test]
    fn test_empty_word_never_reported() {
        assert_eq!(search(&grid(&["AB"]), &dict(&["", "A"])), set(&["A"]));
    }

    #[test]
    fn test_invalid_input_is_wrapped() {
        let err = find_words([["AB", "C"]], &set(&["CAT"])).unwrap_err();
        assert_eq!(err.code(), "S001");
        assert_eq!(
            err.to_string(),
            "Invalid input: grid must contain only single-character strings (row 0, column 0: \"AB\")"
        );
        assert!(matches!(err, SolverError::InvalidInput(InputError::InvalidCell { .. })));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let rows = vec![vec!["C", "A", "T"], vec!["D", "O"]];
        let err = find_words(rows, &set(&["CAT"])).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput(InputError::RaggedGrid { .. })));
    }

    #[test]
    fn test_display_detailed_chains_input_error() {
        let err = SolverError::from(InputError::NotASet { reason: "found an array".to_string() });
        let detailed = err.display_detailed();
        assert!(detailed.contains("S001"));
        assert!(detailed.contains("E004"));
        assert!(detailed.contains("dictionary must be a set"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let g = grid(&["CATS", "DOGX", "PLAN", "XETS"]);
        let d = dict(&["CAT", "DOG", "PLAN", "SETS"]);
        let first = search(&g, &d);
        let second = search(&g, &d);
        assert_eq!(first, second);
        assert_eq!(first, set(&["CAT", "DOG", "PLAN"]));
    }

    #[test]
    fn test_concurrent_calls() {
        let g = grid(&["CATS", "DOGX", "PLAN", "XETS"]);
        let d = dict(&["CAT", "DOG", "PLAN", "SETS"]);
        let expected = set(&["CAT", "DOG", "PLAN"]);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| search(&g, &d))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_zero_time_budget_times_out() {
        let g = grid(&["CAT"]);
        let options = SearchOptions { time_budget: Some(Duration::ZERO) };
        let result = search_with_options(&g, &dict(&["CAT"]), options);
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
        assert!(result.words.is_empty());
    }

    #[test]
    fn test_generous_time_budget_completes() {
        let g = grid(&["CAT"]);
        let options = SearchOptions { time_budget: Some(Duration::from_secs(60)) };
        let result = search_with_options(&g, &dict(&["CAT", "TA"]), options);
        assert_eq!(result.status, SolveStatus::Complete);
        assert_eq!(result.sorted_words(), vec!["CAT", "TA"]);
    }

    #[test]
    fn test_empty_input_skips_time_budget() {
        let options = SearchOptions { time_budget: Some(Duration::ZERO) };
        let result = search_with_options(&Grid::default(), &dict(&["CAT"]), options);
        assert_eq!(result.status, SolveStatus::Complete);
    }

    #[test]
    fn test_larger_grid() {
        let g = grid(&["CATS", "DOGX", "PLAN", "XETS"]);
        let d = dict(&["CAT", "DOG", "PLAN", "SETS", "CAP", "TOP", "STAX"]);
        // TOP runs down-left from the T in the top row
        assert_eq!(search(&g, &d), set(&["CAT", "DOG", "PLAN", "TOP"]));
    }
}
