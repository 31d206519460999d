use anyhow::{Context, Result};
use clap::Parser;
use sweeper_core::{CellCount, Coord, Game, GameConfig, RandomLayoutGenerator};

mod input;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Reveal every safe cell without hitting a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Side length of the square board
    #[arg(short = 'n', long, default_value_t = 5)]
    size: Coord,

    /// Number of mines to place
    #[arg(short, long, default_value_t = 1)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::new(args.size, args.mines).context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut game = Game::new(config, RandomLayoutGenerator::new(seed));
    let state = session::play(&mut game, std::io::stdin().lock(), std::io::stdout().lock())?;
    log::debug!("Game finished in state {:?}", state);

    Ok(())
}
