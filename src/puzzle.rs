//! `puzzle` — validation of loosely typed input (JSON documents and JavaScript values).
//!
//! The typed API in [`crate::solver`] gets its shape guarantees from Rust's types. Input that
//! arrives as JSON has no such guarantees, so it is checked here, in this order:
//!
//! 1. the grid is an array, and every row is an array (`NotAGrid`),
//! 2. every cell is a string of exactly one character (`InvalidCell`),
//! 3. every row has the same length (`RaggedGrid`),
//! 4. the dictionary is an array (`NotASet`),
//! 5. every dictionary entry is a string (`InvalidWord`),
//! 6. no dictionary entry repeats (`NotASet`). JSON has no set type, so an array with
//!    distinct members is how a set is written.
//!
//! Document format:
//!
//! ```json
//! {
//!   "grid": [["C", "A", "T"], ["D", "O", "G"]],
//!   "dictionary": ["CAT", "DOG"]
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::dictionary::Dictionary;
use crate::errors::InputError;
use crate::grid::Grid;

/// A validated grid together with its dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub dictionary: Dictionary,
}

#[derive(Deserialize)]
struct PuzzleDocument {
    grid: Value,
    dictionary: Value,
}

impl Puzzle {
    /// Validate an untyped grid and dictionary.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in the order listed in the module docs.
    pub fn from_values(grid: &Value, dictionary: &Value) -> Result<Puzzle, InputError> {
        let rows = grid_rows(grid)?;

        let mut cell_rows: Vec<Vec<&str>> = Vec::with_capacity(rows.len());
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    cell.as_str().ok_or_else(|| InputError::InvalidCell { row, col, cell: cell.to_string() })
                })
                .collect::<Result<Vec<_>, _>>()?;
            cell_rows.push(cells);
        }
        let grid = Grid::from_rows(cell_rows)?;

        let entries = dictionary.as_array().ok_or_else(|| InputError::NotASet {
            reason: format!("found {}", describe(dictionary)),
        })?;
        let words = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.as_str().ok_or_else(|| InputError::InvalidWord { index, found: entry.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let dictionary = Dictionary::try_from_list(words)?;

        Ok(Puzzle { grid, dictionary })
    }

    /// Parse and validate a puzzle document.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedJson`] for invalid JSON or a missing field, otherwise
    /// whatever [`Puzzle::from_values`] reports.
    pub fn from_json_str(text: &str) -> Result<Puzzle, InputError> {
        let doc: PuzzleDocument = serde_json::from_str(text)?;
        Self::from_values(&doc.grid, &doc.dictionary)
    }

    /// Native-only convenience method: read a puzzle document from a file path.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if the file cannot be read or the puzzle is invalid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Puzzle> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::from_json_str(&data)?)
    }
}

/// Check the outer shape only: an array whose members are all arrays.
fn grid_rows(grid: &Value) -> Result<Vec<&Vec<Value>>, InputError> {
    let rows = grid.as_array().ok_or_else(|| InputError::NotAGrid { found: describe(grid) })?;
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.as_array()
                .ok_or_else(|| InputError::NotAGrid { found: format!("row {i} is {}", describe(row)) })
        })
        .collect()
}

/// Short human description of a JSON value, for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("an array of {} items", items.len()),
        Value::Object(_) => "an object".to_string(),
    }
}
