use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cavern_core::mapgen::generate_level;
use cavern_core::{GameConfig, GeneratedLevel, cell_info};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Print a generated cave level", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 0)]
    depth: u32,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// TOML file overriding the default cave parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct LevelDump<'a> {
    seed: u64,
    level: &'a GeneratedLevel,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => GameConfig::default(),
    };

    let level = generate_level(args.seed, args.depth, &config.cave)
        .with_context(|| format!("Cannot generate depth {} for seed {}", args.depth, args.seed))?;
    info!(seed = args.seed, depth = args.depth, band = level.band, "level generated");

    match args.format {
        Format::Text => print!("{}", level_text(args.seed, &level)),
        Format::Json => {
            let dump = LevelDump { seed: args.seed, level: &level };
            let json = serde_json::to_string_pretty(&dump)
                .with_context(|| "Failed to serialize level as JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn level_text(seed: u64, level: &GeneratedLevel) -> String {
    let mut out = format!(
        "seed {seed} depth {} band {} hazard_active {} repairs {}\n",
        level.depth, level.band, level.hazard_active, level.repairs
    );
    for (y, row) in level.grid.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let at_entry = level.entry.y as usize == y && level.entry.x as usize == x;
            out.push(if at_entry { '>' } else { cell_info(cell).glyph });
        }
        out.push('\n');
    }
    out.push_str(&format!("entry ({}, {})\n", level.entry.x, level.entry.y));
    if let Some(chest) = level.chest {
        out.push_str(&format!("chest ({}, {})\n", chest.x, chest.y));
    }
    if let Some(hazard) = level.hazard {
        out.push_str(&format!("serpent ({}, {})\n", hazard.x, hazard.y));
    }
    out
}

#[cfg(test)]
mod tests {
    use cavern_core::CaveConfig;

    use super::*;

    #[test]
    fn text_dump_has_one_line_per_row_and_marks_the_entry() {
        let level = generate_level(5, 1, &CaveConfig::default()).expect("valid");
        let text = level_text(5, &level);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("seed 5 depth 1 band shallow"));
        let grid_lines = &lines[1..=level.size()];
        assert!(grid_lines.iter().all(|line| line.chars().count() == level.size()));
        assert_eq!(grid_lines.iter().map(|line| line.matches('>').count()).sum::<usize>(), 1);
    }

    #[test]
    fn json_dump_round_trips_through_serde_json() {
        let level = generate_level(5, 10, &CaveConfig::default()).expect("valid");
        let json = serde_json::to_value(LevelDump { seed: 5, level: &level }).expect("serialize");
        assert_eq!(json["seed"], 5);
        assert_eq!(json["level"]["depth"], 10);
        assert_eq!(json["level"]["hazard_active"], true);
    }
}
