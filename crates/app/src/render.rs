//! Plain-text rendering of the cave, the status block and event messages.

use cavern_core::{Game, LogEvent, RunOutcome, cell_info};

use crate::{format_seed, format_snapshot_hash, reason_code};

pub const PLAYER_GLYPH: char = '@';

pub const HELP_LINES: [&str; 6] = [
    "n/s/e/w  move north, south, east or west",
    "m        mine every block around you",
    "o        open an adjacent chest",
    "a        attack",
    "d        descend to the next depth",
    "h help, q quit; several commands may share one line",
];

/// One string per grid row, with the player drawn over its cell.
pub fn grid_lines(game: &Game) -> Vec<String> {
    let player = game.player().pos;
    game.grid()
        .rows()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &cell)| {
                    if player.y as usize == y && player.x as usize == x {
                        PLAYER_GLYPH
                    } else {
                        cell_info(cell).glyph
                    }
                })
                .collect()
        })
        .collect()
}

pub fn status_lines(game: &Game) -> Vec<String> {
    let player = game.player();
    let survival = &game.config().survival;
    let mut lines = vec![
        format!("Health: {}/{}", player.health, survival.max_health),
        format!("Hunger: {}/{}", player.hunger, survival.max_hunger),
        format!("Depth: {}", game.depth()),
    ];
    if game.hazard_active() {
        lines.push("A serpent stirs somewhere in this cave.".to_string());
    }
    lines.extend(inventory_lines(game));
    lines
}

pub fn inventory_lines(game: &Game) -> Vec<String> {
    let inventory = &game.player().inventory;
    if inventory.is_empty() {
        return vec!["Inventory: empty".to_string()];
    }
    let mut lines = vec!["Inventory:".to_string()];
    lines.extend(
        inventory.iter().map(|(cell, count)| format!("  {} x{count}", cell_info(cell).name)),
    );
    lines
}

/// Player-facing message for an event, or `None` for events that need no comment.
pub fn event_text(event: &LogEvent) -> Option<String> {
    let text = match event {
        LogEvent::Moved { .. } => return None,
        LogEvent::Blocked { .. } => "Something blocks your way.".to_string(),
        LogEvent::Mined { cell, count } => format!("Mined {} x{count}", cell_info(*cell).name),
        LogEvent::ChestOpened { reward } => {
            format!("The chest held: {}", cell_info(*reward).name)
        }
        LogEvent::HungerDropped { hunger } => format!("You grow hungrier ({hunger})."),
        LogEvent::HealthDropped { health } => format!("Starving! Health {health}."),
        LogEvent::Descended { depth } => format!("You descend to depth {depth}."),
        LogEvent::RunEnded { outcome } => format!("Run over: {}", reason_code(outcome)),
    };
    Some(text)
}

pub fn finished_recap_lines(game: &Game, run_seed: u64, outcome: &RunOutcome) -> Vec<String> {
    vec![
        "Run recap:".to_string(),
        format!("Reason: {}", reason_code(outcome)),
        format!("Seed: {}", format_seed(run_seed)),
        format!("Snapshot: {}", format_snapshot_hash(game.snapshot_hash())),
        format!("Depth: {}", game.depth()),
        format!("Turns: {}", game.current_turn()),
        format!("Items carried: {}", game.player().inventory.total()),
    ]
}

/// Full screen for the current state: grid, status block, then any pending messages.
pub fn screen_text(game: &Game, messages: &[String]) -> String {
    let grid = grid_lines(game);
    let status = status_lines(game);
    let mut out = String::new();
    for line in grid.iter().chain(&status).chain(messages) {
        out.push_str(line);
        out.push('\n');
    }
    out
}
