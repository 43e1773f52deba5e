use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use letterbox::catalog::WordCatalog;
use letterbox::finder::{SearchStrategy, SolutionFinder};
use letterbox::letter_box::LetterBox;

/// How often the main thread samples search progress.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Letter-box puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The four letter groups, given as 'abc def ghi jkl'
    #[arg(short, long, num_args = 4, required = true)]
    letter_groups: Vec<String>,

    /// Path to a dictionary file, one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    word_file: PathBuf,

    /// Max consecutive words in a solution. 0 for any.
    #[arg(short, long, default_value_t = 0)]
    max_depth: usize,

    /// Candidate traversal order (breadth-first or depth-first)
    #[arg(short, long, default_value_t = SearchStrategy::BreadthFirst)]
    strategy: SearchStrategy,
}

/// Entry point of the letterbox CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them before
/// exiting with a nonzero code.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("LETTERBOX_DEBUG").is_ok();
    letterbox::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap and build the letter box.
/// 2. Load the dictionary, keeping only words playable on the box.
/// 3. Run the solution finder on its background thread, reporting
///    progress from this thread while it works.
/// 4. Print the solutions (fewest words first), or the closest attempt
///    when the puzzle has none.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let letter_box = LetterBox::new(&cli.letter_groups)?;

    // 1. Build the game dictionary, filtering out unplayable words
    let t_load = Instant::now();
    let catalog = WordCatalog::load_from_path(&cli.word_file, letter_box)?;
    log::info!(
        "from {} input words kept {} playable words in {:.3}s",
        catalog.len() + catalog.invalid_words(),
        catalog.len(),
        t_load.elapsed().as_secs_f64()
    );

    // 2. Run the search, polling progress until the engine stops on its own
    let max_depth = (cli.max_depth > 0).then_some(cli.max_depth);
    let mut finder = SolutionFinder::new(catalog, max_depth, cli.strategy);
    let t_solve = Instant::now();
    finder.start();

    let mut last_reported = 0;
    while finder.running() {
        std::thread::sleep(POLL_INTERVAL);
        let count = finder.solutions_count();
        if count != last_reported {
            last_reported = count;
            let snapshot = finder.get_solutions();
            if let Some(best) = snapshot.shortest() {
                log::info!("found {count} solutions; current best is {best}");
            }
        }
    }
    finder.stop(true);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Report
    let solutions = finder.get_solutions();
    for solution in solutions.iter() {
        println!("{solution}");
    }
    if solutions.is_empty() {
        println!("No solutions found!");
        if let Some(closest) = finder.closest_attempt() {
            println!(
                "closest attempt: {closest} (covered {} letters)",
                closest.unique_letters().len()
            );
        }
    }
    log::info!(
        "search finished in {solve_secs:.3}s with {} solutions",
        solutions.len()
    );

    Ok(())
}
