use std::str::{FromStr, SplitWhitespace};

use countdown::{GameConfig, Operator, SlotId};
use thiserror::Error;

/// Something the player typed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Move(Move),
    /// Print the settings used for the next deal
    ShowConfig,
    /// Change the settings used for the next deal
    Configure(GameConfig),
    NewGame,
    Help,
    Quit,
}

/// A command played on the current puzzle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Move {
    /// Toggle selection of a slot (0-based)
    Select(SlotId),
    Operate(Operator),
    Deselect,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ParseCommandError {
    #[error("Unrecognized command: \"{0}\" (type h for help)")]
    Unknown(String),
    #[error("Usage: c <min target> <max target> <max small number> <count>")]
    ConfigUsage,
}

pub(crate) const HELP: &str = "\
Commands:
  1, 2, ...          select or deselect a number
  + - * /            combine the two selected numbers
  d, deselect        clear the selection
  n, new             start a new game
  c, config          show the settings for the next game
  c MIN MAX MAX-SMALL COUNT
                     change the settings for the next game
  h, help            show this help
  q, quit            quit
Several commands can be given on one line, e.g. \"1 3 +\".";

/// Parses a line of input. Every token must be valid for any command to be returned.
pub(crate) fn parse_line(line: &str) -> Result<Vec<Command>, ParseCommandError> {
    let mut tokens = line.split_whitespace();
    let mut commands = Vec::new();
    while let Some(token) = tokens.next() {
        let command = match token.to_ascii_lowercase().as_str() {
            "c" | "config" => parse_config(&mut tokens)?,
            _ => parse_token(token)?,
        };
        commands.push(command);
    }
    Ok(commands)
}

fn parse_token(token: &str) -> Result<Command, ParseCommandError> {
    let command = match token.to_ascii_lowercase().as_str() {
        "d" | "deselect" => Command::Move(Move::Deselect),
        "n" | "new" => Command::NewGame,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        s => {
            if let Ok(n) = s.parse::<SlotId>() {
                // slots are numbered from 1
                return n
                    .checked_sub(1)
                    .map(|slot| Command::Move(Move::Select(slot)))
                    .ok_or_else(|| unknown(token));
            }
            let operator = s.parse().map_err(|_| unknown(token))?;
            Command::Move(Move::Operate(operator))
        }
    };
    Ok(command)
}

/// `c` alone shows the settings, `c` with four numbers changes them
fn parse_config(tokens: &mut SplitWhitespace<'_>) -> Result<Command, ParseCommandError> {
    let values = tokens.by_ref().take(4).collect::<Vec<_>>();
    match values[..] {
        [] => Ok(Command::ShowConfig),
        [min_target, max_target, max_small_number, num_small_numbers] => {
            Ok(Command::Configure(GameConfig {
                min_target: config_value(min_target)?,
                max_target: config_value(max_target)?,
                max_small_number: config_value(max_small_number)?,
                num_small_numbers: config_value(num_small_numbers)?,
            }))
        }
        _ => Err(ParseCommandError::ConfigUsage),
    }
}

fn config_value<T: FromStr>(s: &str) -> Result<T, ParseCommandError> {
    s.parse().map_err(|_| ParseCommandError::ConfigUsage)
}

fn unknown(token: &str) -> ParseCommandError {
    ParseCommandError::Unknown(token.to_string())
}
