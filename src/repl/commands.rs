//! REPL Commands
//!
//! Input normalization and the command table.

use thiserror::Error;

/// Static description of a REPL command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub takes_arg: bool,
}

/// Every command, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
        takes_arg: false,
    },
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
        takes_arg: false,
    },
    CommandSpec {
        name: "map",
        description: "Display the next 20 location areas",
        takes_arg: false,
    },
    CommandSpec {
        name: "mapb",
        description: "Display the previous 20 location areas",
        takes_arg: false,
    },
    CommandSpec {
        name: "explore",
        description: "List the pokemon found in a location area: explore <area>",
        takes_arg: true,
    },
    CommandSpec {
        name: "catch",
        description: "Try to catch a pokemon: catch <name>",
        takes_arg: true,
    },
    CommandSpec {
        name: "inspect",
        description: "Show details of a caught pokemon: inspect <name>",
        takes_arg: true,
    },
    CommandSpec {
        name: "pokedex",
        description: "List every pokemon you have caught",
        takes_arg: false,
    },
    CommandSpec {
        name: "cache",
        description: "Show response cache statistics",
        takes_arg: false,
    },
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    Unknown(String),

    #[error("Command '{0}' requires an argument")]
    MissingArgument(String),

    #[error("Command '{0}' doesn't accept arguments")]
    UnexpectedArgument(String),
}

/// Splits a line into lowercase words with surrounding commas removed.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase().trim_matches(',').to_string())
        .collect()
}

/// Parses cleaned words into a command.
///
/// Words beyond the first argument are ignored.
pub fn parse_command(words: &[String]) -> Result<Option<Command>, ParseError> {
    let Some((name, rest)) = words.split_first() else {
        return Ok(None);
    };

    let spec = COMMANDS
        .iter()
        .find(|spec| spec.name == name.as_str())
        .ok_or_else(|| ParseError::Unknown(name.clone()))?;

    let arg = rest.first().filter(|arg| !arg.is_empty()).cloned();
    let command = match (spec.name, arg) {
        (_, None) if spec.takes_arg => return Err(ParseError::MissingArgument(name.clone())),
        (_, Some(_)) if !spec.takes_arg => {
            return Err(ParseError::UnexpectedArgument(name.clone()))
        }
        ("explore", Some(arg)) => Command::Explore(arg),
        ("catch", Some(arg)) => Command::Catch(arg),
        ("inspect", Some(arg)) => Command::Inspect(arg),
        ("help", _) => Command::Help,
        ("exit", _) => Command::Exit,
        ("map", _) => Command::Map,
        ("mapb", _) => Command::MapBack,
        ("pokedex", _) => Command::Pokedex,
        ("cache", _) => Command::Cache,
        _ => return Err(ParseError::Unknown(name.clone())),
    };

    Ok(Some(command))
}
