use docopt::Docopt;
use error_chain::ChainedError;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_derive::Deserialize;
use life::{
    generators,
    grid::Grid,
    history::GenerationHistory,
    patterns,
    reader,
    simulation::SimulationBuilder,
    units::{Height, Width},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
    process,
    thread,
    time::Duration,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Life

Usage:
    life_driver -h | --help
    life_driver list-patterns
    life_driver run (file <path> | pattern <name> | random) [--grid-width=<w>] [--grid-height=<h>] [--density=<d>] [--seed=<s>] [--generations=<n>] [--delay-ms=<ms>] [--stop-on-repeat] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --grid-width=<w>       Width of a pattern or random grid [default: 25].
    --grid-height=<h>      Height of a pattern or random grid [default: 25].
    --density=<d>          Chance of each cell being alive in a random grid, 0.0 to 1.0 [default: 0.3].
    --seed=<s>             Seed for a reproducible random grid.
    --generations=<n>      Stop after stepping n generations. Runs until interrupted if not given.
    --delay-ms=<ms>        Pause between generations in milliseconds [default: 2000].
    --stop-on-repeat       Stop once a generation repeats an earlier one (still life or oscillator).
    --text-out=<path>      Write the last generation to a text file, in the same format a grid file is read.
";

const GENERATION_SEPARATOR: &str = "==================";

#[derive(Debug, Deserialize)]
struct LifeArgs {
    cmd_list_patterns: bool,
    cmd_run: bool,
    cmd_file: bool,
    cmd_pattern: bool,
    cmd_random: bool,
    arg_path: Option<String>,
    arg_name: Option<String>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_density: f64,
    flag_seed: Option<u64>,
    flag_generations: Option<usize>,
    flag_delay_ms: u64,
    flag_stop_on_repeat: bool,
    flag_text_out: String,
}

// `error_chain!` creates the Error, ErrorKind, ResultExt and Result types for the driver,
// linking in the library's errors so `?` works on library calls.
mod errors {
    #![allow(deprecated)]

    use error_chain::*;
    error_chain! {

        links {
            Life(::life::errors::Error, ::life::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                             .unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: LifeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if let Err(ref e) = run(&args) {
        eprintln!("{}", e.display_chain());
        process::exit(1);
    }
}

fn run(args: &LifeArgs) -> Result<()> {

    if args.cmd_list_patterns {
        return list_patterns();
    }

    let grid = initial_grid(args)?;
    info!(height = grid.height().0,
          width = grid.width().0,
          population = grid.live_cells_count().0,
          "initial grid ready");

    let mut simulation = SimulationBuilder::new().grid(grid).build()?;
    let mut history = GenerationHistory::new();
    let delay = Duration::from_millis(args.flag_delay_ms);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        writeln!(out, "{}", simulation.render())?;
        writeln!(out, "{}", GENERATION_SEPARATOR)?;
        out.flush()?;

        let generation = simulation.generation();
        debug!(generation = generation.0,
               population = simulation.grid().live_cells_count().0,
               "generation rendered");

        if args.flag_stop_on_repeat {
            if let Some(cycle) = history.record(generation, simulation.grid()) {
                info!(generation = generation.0,
                      first_seen = cycle.first_seen.0,
                      period = cycle.period,
                      "generation repeats an earlier one, stopping");
                break;
            }
        }

        if let Some(limit) = args.flag_generations {
            if generation.0 >= limit {
                info!(generations = limit, "generation limit reached");
                break;
            }
        }

        if args.flag_delay_ms > 0 {
            thread::sleep(delay);
        }
        let _ = simulation.step();
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&simulation.render(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write grid to text file {}", args.flag_text_out))?;
        info!(path = %args.flag_text_out, "last generation written");
    }

    Ok(())
}

/// Load, stamp or randomly generate the first generation, depending on the run command.
fn initial_grid(args: &LifeArgs) -> Result<Grid> {
    let (height, width) = (Height(args.flag_grid_height), Width(args.flag_grid_width));

    if args.cmd_file {
        let path = args.arg_path.as_ref().ok_or("A grid file path is required.")?;
        info!(path = %path, "loading grid file");
        Ok(reader::load_grid(path)?)

    } else if args.cmd_pattern {
        let name = args.arg_name.as_ref().ok_or("A pattern name is required.")?;
        let pattern = patterns::find_pattern(name)?;
        info!(pattern = pattern.name, "stamping pattern");
        Ok(pattern.centred_on(height, width)
            .chain_err(|| format!("Pattern {} does not fit a {}x{} grid",
                                  pattern.name, height.0, width.0))?)

    } else {
        let mut rng = match args.flag_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        info!(density = args.flag_density, seed = ?args.flag_seed, "generating random grid");
        Ok(generators::random_soup(height, width, args.flag_density, &mut rng)?)
    }
}

fn list_patterns() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for pattern in patterns::PATTERNS {
        writeln!(out, "{:<10} {}x{}", pattern.name, pattern.height().0, pattern.width().0)?;
    }
    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    f.write_all(b"\n")?;
    Ok(())
}
