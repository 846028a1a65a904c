//! Line-oriented command parsing: every character of a line is one command.

use cavern_core::Intent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Intent),
    Descend,
    Quit,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedLine {
    pub commands: Vec<Command>,
    /// Unrecognised characters, each listed once in first-seen order.
    pub unknown: Vec<char>,
}

pub fn parse_command(ch: char) -> Option<Command> {
    let command = match ch.to_ascii_lowercase() {
        'n' => Command::Act(Intent::MOVE_NORTH),
        's' => Command::Act(Intent::MOVE_SOUTH),
        'e' => Command::Act(Intent::MOVE_EAST),
        'w' => Command::Act(Intent::MOVE_WEST),
        'm' => Command::Act(Intent::Mine),
        'a' => Command::Act(Intent::Attack),
        'o' => Command::Act(Intent::OpenChest),
        'h' => Command::Act(Intent::Help),
        'd' => Command::Descend,
        'q' => Command::Quit,
        _ => return None,
    };
    Some(command)
}

pub fn parse_line(line: &str) -> ParsedLine {
    let mut parsed = ParsedLine::default();
    for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
        match parse_command(ch) {
            Some(command) => parsed.commands.push(command),
            None if !parsed.unknown.contains(&ch) => parsed.unknown.push(ch),
            None => {}
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn several_commands_per_line_keep_their_order() {
        let parsed = parse_line("nnEm");
        assert_eq!(
            parsed.commands,
            vec![
                Command::Act(Intent::MOVE_NORTH),
                Command::Act(Intent::MOVE_NORTH),
                Command::Act(Intent::MOVE_EAST),
                Command::Act(Intent::Mine),
            ]
        );
        assert!(parsed.unknown.is_empty());
    }

    #[test]
    fn whitespace_is_skipped_and_unknowns_are_reported_once() {
        let parsed = parse_line(" x s x ?d ");
        assert_eq!(parsed.commands, vec![Command::Act(Intent::MOVE_SOUTH), Command::Descend]);
        assert_eq!(parsed.unknown, vec!['x', '?']);
    }

    #[test]
    fn quit_and_help_are_recognised() {
        assert_eq!(parse_command('Q'), Some(Command::Quit));
        assert_eq!(parse_command('h'), Some(Command::Act(Intent::Help)));
        assert_eq!(parse_command('z'), None);
    }
}
