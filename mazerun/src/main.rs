//! mazerun — compare BFS, DFS, greedy best-first and A* on a maze file.

mod render;
mod report;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use maze_core::{Grid, Maze};
use maze_search::{ExperimentReport, Strategy, run_batch, run_experiment};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run every search strategy on a maze and report comparative statistics.
#[derive(Parser, Debug)]
#[command(name = "mazerun", version, about)]
struct Cli {
    /// Maze file: comma-separated rows of 0 (free), 1 (wall), 2 (start), 3 (goal).
    maze: PathBuf,

    /// Which start marker to use, 0-based in row-major order.
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Run from N randomly chosen free cells instead of a start marker.
    #[arg(long, value_name = "N")]
    batch: Option<usize>,

    /// Seed for --batch sampling. A random seed is used (and logged) if absent.
    #[arg(long, requires = "batch")]
    seed: Option<u64>,

    /// Draw the path found by the strategy with this label, e.g. "A*_Manhattan".
    #[arg(long, value_name = "LABEL")]
    show: Option<String>,

    /// Print results as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let show = match cli.show.as_deref() {
        Some(label) => Some(
            Strategy::from_label(label).ok_or_else(|| format!("unknown strategy `{label}`"))?,
        ),
        None => None,
    };

    let grid = Grid::from_reader(BufReader::new(File::open(&cli.maze)?))?;
    let maze = Maze::from_grid(grid)?;
    log::info!(
        "loaded {}: {}x{}, {} start(s), {} goal(s)",
        cli.maze.display(),
        maze.grid().rows(),
        maze.grid().cols(),
        maze.starts().len(),
        maze.goals().len()
    );

    let runs: Vec<ExperimentReport> = match cli.batch {
        Some(count) => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            log::info!("batch seed {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            run_batch(&maze, count, &mut rng)?
                .into_iter()
                .map(|b| b.report)
                .collect()
        }
        None => {
            let start = *maze.starts().get(cli.start).ok_or_else(|| {
                format!(
                    "start index {} out of range ({} start(s))",
                    cli.start,
                    maze.starts().len()
                )
            })?;
            vec![run_experiment(maze.grid(), start, maze.goals())?]
        }
    };

    if cli.json {
        println!("{}", report::to_json(&runs)?);
    } else {
        for r in &runs {
            print!("{}", report::table(r));
        }
    }

    if let Some(strategy) = show {
        for r in &runs {
            match r.get_strategy(strategy).and_then(|rec| rec.path.as_deref()) {
                Some(path) => {
                    println!("\n{strategy} from {}:", r.start);
                    print!("{}", render::overlay(maze.grid(), path));
                }
                None => println!("\n{strategy} found no solution from {}.", r.start),
            }
        }
    }

    Ok(())
}
