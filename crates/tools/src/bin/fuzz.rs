use std::io;

use anyhow::{Result, bail};
use cavern_core::{ActionError, Game, GameConfig, Intent};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
    /// One in how many steps descends instead of acting
    #[arg(long, default_value_t = 40)]
    descend_one_in: u64,
}

const INTENTS: [Intent; 8] = [
    Intent::MOVE_NORTH,
    Intent::MOVE_SOUTH,
    Intent::MOVE_EAST,
    Intent::MOVE_WEST,
    Intent::Mine,
    Intent::Attack,
    Intent::OpenChest,
    Intent::Help,
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    info!(seed = args.seed, turns = args.turns, "starting fuzz run");

    let mut game = Game::new(args.seed, &GameConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let descend_one_in = args.descend_one_in.max(1);

    for step in 0..args.turns {
        let result = if rng.next_u64() % descend_one_in == 0 {
            game.descend()
        } else {
            let intent = choose(&mut rng, &INTENTS);
            debug!(step, ?intent, "applying");
            game.apply(intent)
        };

        match result {
            Ok(_) => {}
            Err(ActionError::RunFinished(outcome)) => {
                println!("Finished with outcome {outcome:?} after {} turns", game.current_turn());
                break;
            }
        }

        if let Err(broken) = game.check_invariants() {
            bail!("Invariant failed at step {step} (seed {}): {broken}", args.seed);
        }
    }

    println!("Fuzz complete.");
    println!("Depth: {}", game.depth());
    println!("Turns: {}", game.current_turn());
    println!("Inventory items: {}", game.player().inventory.total());
    println!("Snapshot Hash: {}", game.snapshot_hash());
    Ok(())
}
