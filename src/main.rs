use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crossfill::error::Result;
use crossfill::grid::Grid;
use crossfill::render::{render_text, FilledGrid};
use crossfill::solver::engine::SolverEngine;
use crossfill::solver::heuristics::value::{LeastConstrainingValueHeuristic, ShuffledValueHeuristic};
use crossfill::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
use crossfill::solver::stats::render_stats_table;
use crossfill::words::WordList;

/// Fill a crossword grid with words from a dictionary.
#[derive(Debug, Parser)]
#[command(name = "crossfill", version, about)]
struct Args {
    /// Structure file: `_` for open cells, anything else blocked.
    structure: PathBuf,
    /// Word list file, one candidate per line.
    words: PathBuf,
    /// Also write the filled grid to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print solver statistics after solving.
    #[arg(long)]
    stats: bool,
    /// Shuffle candidate ordering with this seed instead of using the
    /// least-constraining-value order, for varied (but reproducible) fills.
    #[arg(long)]
    seed: Option<u64>,
    /// Emit the solution as JSON instead of a character grid.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let structure = std::fs::read_to_string(&args.structure)?;
    let grid = Grid::parse(&structure)?;
    let words = WordList::load(&args.words)?;

    let engine = match args.seed {
        Some(seed) => SolverEngine::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(ShuffledValueHeuristic::new(seed)),
        ),
        None => SolverEngine::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        ),
    };

    let (assignment, stats) = engine.solve(&grid, &words);
    if args.stats {
        eprintln!("{}", render_stats_table(&stats));
    }

    let Some(assignment) = assignment else {
        println!("No solution.");
        return Ok(ExitCode::FAILURE);
    };

    let rendered = if args.json {
        let filled = FilledGrid::new(&grid, &assignment);
        serde_json::to_string_pretty(&filled).expect("solution serializes") + "\n"
    } else {
        render_text(&grid, &assignment)
    };
    print!("{rendered}");
    if let Some(path) = &args.output {
        std::fs::write(path, &rendered)?;
    }

    Ok(ExitCode::SUCCESS)
}
