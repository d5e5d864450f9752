use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Serialize;

use wordgrid::dictionary::Dictionary;
use wordgrid::errors::InputError;
use wordgrid::grid::Grid;
use wordgrid::puzzle::Puzzle;
use wordgrid::solver::{self, SearchOptions, SolveStatus, SolverError};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Find every dictionary word hidden in a grid of letters
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// JSON puzzle file: {"grid": [["C", "A", "T"], ...], "dictionary": ["CAT", ...]}
    #[arg(required_unless_present = "grid", conflicts_with_all = ["grid", "dictionary"])]
    puzzle: Option<PathBuf>,

    /// Grid text file (one row per line, cells separated by whitespace)
    #[arg(short, long, requires = "dictionary")]
    grid: Option<PathBuf>,

    /// Dictionary file (one word per line, '#' starts a comment line)
    #[arg(short, long, requires = "grid")]
    dictionary: Option<PathBuf>,

    /// Stop searching after this many seconds (0 = no limit)
    #[arg(short = 't', long, default_value_t = 30)]
    time_budget: u64,

    /// Print the result as JSON instead of one word per line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    words: Vec<&'a str>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_secs: Option<f64>,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {}", detailed_message(e.as_ref()));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the puzzle, either from one JSON file or from a grid file and a dictionary file.
/// 3. Search the grid.
/// 4. Print the found words on stdout, and timings on stderr.
fn try_main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let puzzle = load_puzzle(&cli)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let options = SearchOptions {
        time_budget: (cli.time_budget > 0).then(|| Duration::from_secs(cli.time_budget)),
    };

    let t_search = Instant::now();
    let result = solver::solve_puzzle(&puzzle, options);
    let search_secs = t_search.elapsed().as_secs_f64();

    let words = result.sorted_words();
    if cli.json {
        let (status, elapsed_secs) = match result.status {
            SolveStatus::Complete => ("complete", None),
            SolveStatus::TimedOut { elapsed } => ("timed_out", Some(elapsed.as_secs_f64())),
        };
        let report = Report { words, status, elapsed_secs };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for word in &words {
            println!("{word}");
        }
    }

    if let SolveStatus::TimedOut { elapsed } = result.status {
        eprintln!(
            "⚠️  Timed out after {:.1}s; some words may not have been found",
            elapsed.as_secs_f64()
        );
    }

    eprintln!(
        "Loaded {}x{} grid and {} words in {:.3}s; searched in {:.3}s ({} found).",
        puzzle.grid.num_rows(),
        puzzle.grid.num_cols(),
        puzzle.dictionary.len(),
        load_secs,
        search_secs,
        result.words.len()
    );

    Ok(())
}

fn load_puzzle(cli: &Cli) -> io::Result<Puzzle> {
    match (&cli.puzzle, &cli.grid, &cli.dictionary) {
        (Some(path), _, _) => Puzzle::load_from_path(path),
        (None, Some(grid), Some(dictionary)) => Ok(Puzzle {
            grid: Grid::load_from_path(grid)?,
            dictionary: Dictionary::load_from_path(dictionary)?,
        }),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "pass either a puzzle file or both --grid and --dictionary",
        )),
    }
}

/// Prefer the coded, detailed form for our own error types.
fn detailed_message(e: &(dyn Error + 'static)) -> String {
    if let Some(solver_err) = e.downcast_ref::<SolverError>() {
        return solver_err.display_detailed();
    }
    let input_err = e
        .downcast_ref::<InputError>()
        .or_else(|| {
            e.downcast_ref::<io::Error>()
                .and_then(io::Error::get_ref)
                .and_then(|inner| inner.downcast_ref::<InputError>())
        });
    match input_err {
        Some(ie) => format!("Invalid input: {}", ie.display_detailed()),
        None => e.to_string(),
    }
}
