//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the grid search on *your* machine.
//! - Loads each grid and the dictionary once, then searches several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:      `cargo run --bin bench_local --release -- -d words.txt grid1.txt grid2.txt`
//! - Multiple repeats:     `cargo run --bin bench_local --release -- -d words.txt -r 5 grid.txt`
//! - Print found words:    `cargo run --bin bench_local --release -- -d words.txt -p 10 grid.txt`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - One warm-up run per grid is done (not included in timing).
//! - I/O (loading, printing) is kept outside the timed section.

use clap::Parser;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;
use wordgrid::dictionary::Dictionary;
use wordgrid::grid::Grid;
use wordgrid::solver;

/// Simple local benchmark runner: load a dictionary once, time the search over several grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid files to search (one row per line, cells separated by whitespace)
    #[arg(required = true)]
    grids: Vec<PathBuf>,

    /// Dictionary file (one word per line)
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Number of repeats per grid (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print up to this many found words per grid (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary.display());
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(cli.grids.len());

    for (idx, path) in cli.grids.iter().enumerate() {
        let grid = Grid::load_from_path(path)?;
        eprintln!("\n[{:02}] {} ({}x{})", idx + 1, path.display(), grid.num_rows(), grid.num_cols());

        // warm-up, not timed
        let _warmup = solver::search(&grid, &dictionary);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_found = Default::default();
        for rep in 0..cli.num_repeats {
            let t_search = Instant::now();
            let found = solver::search(black_box(&grid), &dictionary);
            times.push(t_search.elapsed().as_secs_f64());
            eprintln!("  run {:>2}/{:>2}: {:.4}s ({} found)", rep + 1, cli.num_repeats, times[rep], found.len());
            last_found = found;
        }

        let med = median(times);
        let num_found = last_found.len();
        eprintln!("  → median {med:.4}s; {num_found} {}", pluralize(num_found, "word"));

        if cli.print_limit > 0 {
            let mut words: Vec<_> = last_found.into_iter().collect();
            words.sort();
            for word in words.iter().take(cli.print_limit) {
                println!("{word}");
            }
        }

        summary.push((path.display().to_string(), med, num_found));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<40} | {:>10} | {:>7}", "grid", "median (s)", "# found");
    eprintln!("{:-<40}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (name, med, num_found) in &summary {
        eprintln!("{name:<40} | {med:>10.4} | {num_found:>7}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "word"), "words");
        assert_eq!(pluralize(1, "word"), "word");
        assert_eq!(pluralize(2, "word"), "words");
    }
}
