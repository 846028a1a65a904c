use cavern_core::{ActionError, Game, Intent, RunOutcome, TurnReport};
use tracing::debug;

use crate::input::{Command, parse_line};
use crate::render::{HELP_LINES, event_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    Finished(RunOutcome),
    Quit,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Messages produced by the last handled line. `handle_line` clears them before it starts.
    pub messages: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every command on `line` in order and returns whether the loop should keep
    /// reading input. Commands after a quit or the end of the run are dropped.
    pub fn handle_line(&mut self, game: &mut Game, line: &str) -> bool {
        self.messages.clear();
        let parsed = parse_line(line);
        if !parsed.unknown.is_empty() {
            let unknown: String = parsed.unknown.iter().collect();
            self.messages.push(format!("Unknown command(s) ignored: {unknown} (h for help)"));
        }

        for command in parsed.commands {
            if self.mode != AppMode::Playing {
                break;
            }
            debug!(?command, "handling command");
            match command {
                Command::Quit => self.mode = AppMode::Quit,
                Command::Act(Intent::Help) => {
                    self.messages.extend(HELP_LINES.iter().map(|line| line.to_string()));
                }
                Command::Act(intent) => {
                    let result = game.apply(intent);
                    self.absorb(result);
                }
                Command::Descend => {
                    let result = game.descend();
                    self.absorb(result);
                }
            }
        }

        self.mode == AppMode::Playing
    }

    fn absorb(&mut self, result: Result<TurnReport, ActionError>) {
        match result {
            Ok(report) => {
                self.messages.extend(report.events.iter().filter_map(event_text));
                if let Some(outcome) = report.outcome {
                    self.mode = AppMode::Finished(outcome);
                }
            }
            Err(ActionError::RunFinished(outcome)) => self.mode = AppMode::Finished(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use cavern_core::GameConfig;

    use super::*;

    fn game() -> Game {
        Game::new(12345, &GameConfig::default()).expect("default config is valid")
    }

    #[test]
    fn help_prints_the_command_list_without_a_turn() {
        let mut game = game();
        let mut app = AppState::new();

        assert!(app.handle_line(&mut game, "h"));
        assert_eq!(app.messages.len(), HELP_LINES.len());
        assert_eq!(game.current_turn(), 0);
    }

    #[test]
    fn unknown_characters_are_reported_once() {
        let mut game = game();
        let mut app = AppState::new();

        assert!(app.handle_line(&mut game, "zzm"));
        let reports = app.messages.iter().filter(|msg| msg.starts_with("Unknown")).count();
        assert_eq!(reports, 1);
        assert_eq!(game.current_turn(), 1);
    }

    #[test]
    fn quit_stops_the_rest_of_the_line() {
        let mut game = game();
        let mut app = AppState::new();

        assert!(!app.handle_line(&mut game, "mqmm"));
        assert_eq!(app.mode, AppMode::Quit);
        assert_eq!(game.current_turn(), 1);
    }
}
