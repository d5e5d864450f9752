//! Error types for input validation, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E006) for documentation lookup:
//!
//! - E001: `NotAGrid` (Grid is not an array of arrays)
//! - E002: `InvalidCell` (Grid cell is not a single-character string)
//! - E003: `RaggedGrid` (Grid rows have different lengths)
//! - E004: `NotASet` (Dictionary is not a set)
//! - E005: `InvalidWord` (Dictionary entry is not a string)
//! - E006: `MalformedJson` (Puzzle document could not be parsed)
//!
//! # Examples
//!
//! ```
//! use wordgrid::grid::Grid;
//!
//! match Grid::from_rows([["C", "AT"]]) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E002");
//!         println!("Error: {}", e);
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

/// A violated input constraint, raised before any search work starts.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("grid must be an array of arrays (found {found})")]
    NotAGrid { found: String },

    #[error("grid must contain only single-character strings (row {row}, column {col}: {cell})")]
    InvalidCell { row: usize, col: usize, cell: String },

    #[error("grid must be rectangular (row {row} has {found} cells, expected {expected})")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("dictionary must be a set ({reason})")]
    NotASet { reason: String },

    #[error("dictionary must contain only strings (entry {index}: {found})")]
    InvalidWord { index: usize, found: String },

    #[error("malformed puzzle document: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

impl From<InputError> for io::Error {
    fn from(e: InputError) -> Self {
        // keep the InputError itself as the source so callers can downcast for its code
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::NotAGrid { .. } => "E001",
            InputError::InvalidCell { .. } => "E002",
            InputError::RaggedGrid { .. } => "E003",
            InputError::NotASet { .. } => "E004",
            InputError::InvalidWord { .. } => "E005",
            InputError::MalformedJson(_) => "E006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::NotAGrid { .. } => "Grid is not an array of arrays",
            InputError::InvalidCell { .. } => "Grid cell is not a single-character string",
            InputError::RaggedGrid { .. } => "Grid rows have different lengths",
            InputError::NotASet { .. } => "Dictionary is not a set",
            InputError::InvalidWord { .. } => "Dictionary entry is not a string",
            InputError::MalformedJson(_) => "Puzzle document could not be parsed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::NotAGrid { .. } => "The grid must be an ordered sequence of rows, and every row must itself be an ordered sequence of cells.",
            InputError::InvalidCell { .. } => "Every grid cell must be a string holding exactly one character. Numbers, empty strings and multi-character strings are rejected.",
            InputError::RaggedGrid { .. } => "Every row must have as many cells as the first row. Ragged grids are rejected rather than truncated.",
            InputError::NotASet { .. } => "The dictionary must be a set of words. Lists are only accepted where they carry set semantics, so a repeated word is rejected.",
            InputError::InvalidWord { .. } => "Every dictionary entry must be a string.",
            InputError::MalformedJson(_) => "The puzzle document is not valid JSON, or it lacks the \"grid\" or \"dictionary\" field.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::NotAGrid { .. } => Some("Example: [[\"C\", \"A\", \"T\"], [\"D\", \"O\", \"G\"]]"),
            InputError::InvalidCell { .. } => Some("Split multi-letter cells into one letter per cell"),
            InputError::RaggedGrid { .. } => Some("Pad or trim rows so that all of them have the same length"),
            InputError::NotASet { .. } => Some("Pass a Set, or a list without repeated words"),
            InputError::MalformedJson(_) => Some("Expected format: {\"grid\": [[\"C\", \"A\", \"T\"]], \"dictionary\": [\"CAT\"]}"),
            InputError::InvalidWord { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
