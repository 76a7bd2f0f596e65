//! Headless grid explorer: runs one or more search strategies on a grid and
//! prints what each one found.
//!
//! ```text
//! explore --map maze --seed 3 --algorithm bfs,dls:25 --show
//! RUST_LOG=debug explore --layout room.txt --start 0,0 --target 7,7
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use gridsearch_core::Coord;
use gridsearch_demos::{MapMode, Session, load_config};
use gridsearch_env::Grid;
use gridsearch_paths::{Algorithm, ParseAlgorithmError};
use tracing_subscriber::EnvFilter;

/// explore: uninformed search on a direction-restricted grid.
#[derive(Parser)]
#[command(name = "explore", version, about)]
struct Cli {
    /// Strategies to run, by name or menu number (e.g. "bfs,dls:12,6").
    /// A depth-bounded strategy without ":N" uses --dls-limit or
    /// --max-depth. Default: all six.
    #[arg(long, short, value_delimiter = ',')]
    algorithm: Vec<String>,
    /// Obstacle layout: custom, maze or trap.
    #[arg(long, default_value = "custom")]
    map: MapMode,
    /// JSON environment config; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Text layout file ('#' wall, '.' free) replacing the generated map.
    #[arg(long, conflicts_with = "map")]
    layout: Option<PathBuf>,
    /// Grid side length.
    #[arg(long)]
    size: Option<i32>,
    /// Start cell as "row,col".
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,
    /// Target cell as "row,col".
    #[arg(long, value_parser = parse_coord)]
    target: Option<Coord>,
    /// Depth limit for depth-limited search.
    #[arg(long)]
    dls_limit: Option<u32>,
    /// Iteration bound for iterative deepening.
    #[arg(long)]
    max_depth: Option<u32>,
    /// Skip the initial wall from the config.
    #[arg(long)]
    no_wall: bool,
    /// Maze seed. Default: derived from the clock.
    #[arg(long)]
    seed: Option<u64>,
    /// Print every discovered cell.
    #[arg(long)]
    trace: bool,
    /// Draw the grid after each run.
    #[arg(long)]
    show: bool,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got \"{s}\""))?;
    let r = r.trim().parse().map_err(|e| format!("row: {e}"))?;
    let c = c.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok(Coord::new(r, c))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(&std::fs::read_to_string(path)?)?,
        None => Default::default(),
    };
    let layout = match &cli.layout {
        Some(path) => Some(Grid::from_ascii(&std::fs::read_to_string(path)?)?),
        None => None,
    };
    if let Some(grid) = &layout {
        config.size = grid.size();
    }
    if let Some(n) = cli.size {
        config.size = n;
    }
    if let Some(p) = cli.start {
        config.start = p;
    }
    if let Some(p) = cli.target {
        config.target = p;
    }
    if let Some(n) = cli.dls_limit {
        config.dls_limit = n;
    }
    if let Some(n) = cli.max_depth {
        config.max_depth = n;
    }
    if cli.no_wall {
        config.wall = None;
    }

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::info!("seed {seed}, {}x{} grid", config.size, config.size);
    let mut session = Session::with_seed(config, seed)?;
    if let Some(grid) = layout {
        session.set_grid(grid)?;
    }
    while session.map_mode() != cli.map {
        session.cycle_map();
    }

    let algorithms: Vec<Algorithm> = if cli.algorithm.is_empty() {
        Algorithm::ALL
            .iter()
            .map(|&a| session.config().bounded(a))
            .collect()
    } else {
        cli.algorithm
            .iter()
            .map(|s| {
                let a: Algorithm = s.parse()?;
                Ok(if s.contains(':') { a } else { session.config().bounded(a) })
            })
            .collect::<Result<Vec<_>, ParseAlgorithmError>>()?
    };

    println!(
        "{}x{} grid, map {}, {} -> {}",
        session.grid().size(),
        session.grid().size(),
        session.map_mode().label(),
        session.start(),
        session.target()
    );
    for algorithm in algorithms {
        let trace = cli.trace;
        let report = session.run(algorithm, |step| {
            if trace {
                println!(
                    "  {} frontier={} explored={}",
                    step.discovered,
                    step.frontier.len(),
                    step.explored.len()
                );
            }
        });
        let outcome = match report.moves() {
            Some(n) => format!("{n} moves"),
            None => "no path".to_string(),
        };
        println!(
            "{:<22} {:<10} explored {:>4}  expanded {:>4}",
            algorithm.label(),
            outcome,
            report.explored.len(),
            report.stats.expanded
        );
        if cli.show {
            println!("{}\n", session.render());
        }
    }
    Ok(())
}
