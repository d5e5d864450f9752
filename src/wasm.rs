use std::time::Duration;

use crate::errors::InputError;
use crate::log::init_logger;
use crate::puzzle::Puzzle;
use crate::solver::{solve_puzzle, SearchOptions, SolveStatus, SolverError};
use js_sys::{Array, Set};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use serde_wasm_bindgen::{from_value, to_value};

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E002", "S001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // Report the nested InputError's code, keeping the "Invalid input: " message
        match &e {
            SolverError::InvalidInput(ie) => WasmError {
                code: ie.code().to_string(),
                message: e.to_string(),
                description: ie.description().to_string(),
                details: ie.details().to_string(),
                help: ie.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn invalid(e: InputError) -> JsValue {
    WasmError::from(SolverError::from(e)).into()
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized (version {})", version());
}

/// Crate version and the git commit it was built from.
#[wasm_bindgen]
pub fn version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"))
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    words: Vec<String>,
    status: String,
}

/// JS entry: (grid: string[][], dictionary: Set<string>, time_budget_ms?: number)
/// returns { words: string[], status: "complete" | "timed out after Ns" }
///
/// The dictionary must be a real `Set`; arrays are rejected.
#[wasm_bindgen]
pub fn find_words(grid: JsValue, dictionary: JsValue, time_budget_ms: Option<u32>) -> Result<JsValue, JsValue> {
    if !Array::is_array(&grid) {
        let found = grid.as_string().map_or_else(|| format!("{grid:?}"), |s| format!("string {s:?}"));
        return Err(invalid(InputError::NotAGrid { found }));
    }
    let grid_value: Value = from_value(grid).map_err(|e| invalid(InputError::NotAGrid { found: e.to_string() }))?;

    let Some(set) = dictionary.dyn_ref::<Set>() else {
        let kind = if Array::is_array(&dictionary) { "an array" } else { "a non-Set value" };
        return Err(invalid(InputError::NotASet { reason: format!("found {kind}") }));
    };
    // Set members in insertion order; distinct by construction
    let members = Array::from(set.as_ref());
    let dictionary_value: Value = from_value(members.into())
        .map_err(|e| invalid(InputError::NotASet { reason: e.to_string() }))?;

    let puzzle = Puzzle::from_values(&grid_value, &dictionary_value).map_err(invalid)?;

    let options = SearchOptions {
        time_budget: time_budget_ms.map(|ms| Duration::from_millis(u64::from(ms))),
    };
    let result = solve_puzzle(&puzzle, options);

    let status = match result.status {
        SolveStatus::Complete => "complete".to_string(),
        SolveStatus::TimedOut { elapsed } => format!("timed out after {:.1}s", elapsed.as_secs_f64()),
    };
    let words = result.sorted_words().into_iter().map(str::to_string).collect();

    to_value(&WasmSolveResult { words, status }).map_err(|e| JsValue::from_str(&e.to_string()))
}
