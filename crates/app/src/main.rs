use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use cavern_app::app_loop::{AppMode, AppState};
use cavern_app::render::{finished_recap_lines, screen_text};
use cavern_app::seed::{generate_runtime_seed, resolve_seed};
use cavern_core::{Game, GameConfig};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Dig down through a procedurally carved cave", long_about = None)]
struct Args {
    /// Run seed; a fresh one is generated when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Depth to start at
    #[arg(short, long, default_value_t = 0)]
    depth: u32,
    /// TOML file overriding cave and survival parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let seed = resolve_seed(args.seed, generate_runtime_seed());
    info!(?seed, depth = args.depth, "starting run");

    let mut game = Game::with_depth(seed.value(), args.depth, &config)
        .wrap_err("failed to generate the starting level")?;
    let mut app = AppState::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Seed: {} (h for help)", seed.value())?;
    write!(out, "{}", screen_text(&game, &[]))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.wrap_err("failed to read input")?;
        let keep_going = app.handle_line(&mut game, &line);
        write!(out, "{}", screen_text(&game, &app.messages))?;
        out.flush()?;
        if !keep_going {
            break;
        }
    }

    if let AppMode::Finished(outcome) = app.mode {
        for line in finished_recap_lines(&game, seed.value(), &outcome) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
