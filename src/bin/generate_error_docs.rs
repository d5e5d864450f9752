//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the `code()`,
//! `description()`, `details()` and `help()` methods of `InputError` and `SolverError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordgrid::errors::InputError;
use wordgrid::solver::SolverError;

/// Print one section per error, for any type with `code()`, `description()`, `details()`,
/// `help()` and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One sample of every `InputError` variant
fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::NotAGrid { found: "string \"Invalid\"".to_string() },
        InputError::InvalidCell { row: 0, col: 0, cell: "\"AB\"".to_string() },
        InputError::RaggedGrid { row: 1, expected: 3, found: 2 },
        InputError::NotASet { reason: "found an array".to_string() },
        InputError::InvalidWord { index: 2, found: "7".to_string() },
        // MalformedJson--create by parsing a truncated document
        InputError::MalformedJson(
            serde_json::from_str::<serde_json::Value>("{\"grid\": [").unwrap_err(),
        ),
    ]
}

/// One sample of every `SolverError` variant
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![SolverError::InvalidInput(InputError::InvalidCell {
        row: 0,
        col: 0,
        cell: "\"AB\"".to_string(),
    })]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001)](#solver-errors)");
    println!("- [Input Errors (E001–E006)](#input-errors)\n");

    println!("## Solver Errors\n");
    println!("Top-level errors from the solver. These wrap an input error.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Input Errors\n");
    println!("Errors raised while validating the grid or the dictionary, before any search runs.\n");
    generate_error_docs!(all_input_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_input_error_code_is_documented_once() {
        let codes: Vec<_> = all_input_error_variants().iter().map(InputError::code).collect();
        let unique: HashSet<_> = codes.iter().copied().collect();
        assert_eq!(codes.len(), unique.len());
        assert_eq!(unique, HashSet::from(["E001", "E002", "E003", "E004", "E005", "E006"]));
    }

    #[test]
    fn test_every_solver_error_code_is_documented() {
        let codes: HashSet<_> = all_solver_error_variants().iter().map(SolverError::code).collect();
        assert_eq!(codes, HashSet::from(["S001"]));
    }
}
