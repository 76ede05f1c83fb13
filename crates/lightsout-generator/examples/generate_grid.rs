//! Example demonstrating solvable grid generation.
//!
//! This example shows how to:
//! - Create a `GridGenerator` for a chosen size
//! - Generate a random grid, or reproduce one from a seed or phrase
//! - Display the seed, the scramble sequence, and the grid
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_grid
//! ```
//!
//! Reproduce a puzzle from its printed seed:
//!
//! ```sh
//! cargo run --example generate_grid -- --seed <64-hex-digits>
//! ```
//!
//! Derive the seed from a phrase (same phrase, same puzzle):
//!
//! ```sh
//! cargo run --example generate_grid -- --phrase "2026-08-06"
//! ```
//!
//! Tune size and difficulty:
//!
//! ```sh
//! cargo run --example generate_grid -- --size 7 --min-moves 8 --max-moves 14
//! ```

use std::process;

use clap::Parser;
use lightsout_generator::{GridGenerator, GridSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "SIZE", default_value_t = 5)]
    size: usize,

    /// Seed for reproducible generation (64 hex digits).
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<GridSeed>,

    /// Derive the seed from a phrase instead of randomizing it.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Minimum number of scramble moves.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    min_moves: usize,

    /// Maximum number of scramble moves.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    max_moves: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.min_moves > args.max_moves {
        eprintln!("--min-moves must not exceed --max-moves.");
        process::exit(1);
    }

    let generator = match GridGenerator::new(args.size) {
        Ok(generator) => generator.scramble_moves(args.min_moves..=args.max_moves),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let seed = args
        .phrase
        .map(|phrase| GridSeed::from_phrase(&phrase))
        .or(args.seed)
        .unwrap_or_else(GridSeed::random);
    let generated = generator.generate_with_seed(seed);

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Scramble ({} moves):", generated.scramble.len());
    for pos in &generated.scramble {
        println!("  {pos}");
    }
    println!();

    println!("Grid ({} lit):", generated.grid.lit_count());
    for line in generated.grid.to_string().lines() {
        println!("  {line}");
    }
}
