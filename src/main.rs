use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use magus::emit::{MagicFormat, PythonLists, RustArrays};
use magus::magic::search::{find_all_magics, CandidateGen};

#[derive(clap::Parser)]
/// Search for the 128 magic multipliers (64 rook, 64 bishop) that
/// perfect-hash blocker occupancies to attack-table indices, and print
/// them as literal data.
struct Args {
    /// Seed for the candidate generator. Unseeded runs draw from OS
    /// entropy and produce a different, equally valid set each time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output syntax for the generated tables.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Python)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Python,
    Rust,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut gen = CandidateGen::new(rng);

    let found = find_all_magics(&mut gen, None)?;

    let format: &dyn MagicFormat = match args.format {
        OutputFormat::Python => &PythonLists,
        OutputFormat::Rust => &RustArrays,
    };

    format
        .render(&found, &mut io::stdout().lock())
        .context("Failed to render the magic tables")?;

    Ok(())
}
