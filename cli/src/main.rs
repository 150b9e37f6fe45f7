use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use apagon_core::{BoardState, Coord, Coord2, GameConfig, Grid, RandomGridGenerator};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of board rows
    #[arg(long, default_value_t = 3)]
    rows: Coord,

    /// Number of board columns
    #[arg(long, default_value_t = 3)]
    cols: Coord,

    /// Chance that any cell starts lit
    #[arg(long, default_value_t = 0.25)]
    lit_chance: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.rows, args.cols, args.lit_chance)?;
    let seed = args.seed.unwrap_or_else(entropy_seed);
    log::debug!("seed: {seed}");

    let mut board = BoardState::from_config(config, RandomGridGenerator::new(seed));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !board.has_won() {
        println!("{}", render_grid(board.grid()));
        print!("toggle (row col): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            log::info!("input closed, leaving the game unfinished");
            return Ok(());
        };
        let line = line.context("could not read move")?;

        match parse_move(&line) {
            Some(coords) => {
                let outcome = board.toggle(coords);
                log::debug!("toggle at {coords:?}: {outcome:?}");
                if !outcome.has_update() {
                    println!("that cell is off the board");
                }
            }
            None => println!("expected two numbers, e.g. `1 2`"),
        }
    }

    println!("{}", render_grid(board.grid()));
    println!("All lights are out, you win!");
    Ok(())
}

/// Renders lit cells as `O` and unlit cells as `.`, one row per line.
fn render_grid(grid: &Grid) -> String {
    let (rows, cols) = grid.size();
    let mut out = String::with_capacity(rows as usize * (cols as usize * 2 + 1));
    for row in 0..rows {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..cols {
            if col > 0 {
                out.push(' ');
            }
            out.push(if grid.is_lit((row, col)) { 'O' } else { '.' });
        }
    }
    out
}

fn parse_move(line: &str) -> Option<Coord2> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
