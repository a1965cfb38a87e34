//! Command registry and input parsing

use crate::error::CommandError;

/// Static description of a REPL command, used by `help`.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "map",
        usage: "map",
        description: "Lists the next 20 location areas",
    },
    CommandSpec {
        name: "mapb",
        usage: "mapb",
        description: "Lists the previous 20 location areas",
    },
    CommandSpec {
        name: "explore",
        usage: "explore <area>",
        description: "Lists the pokemon found in a location area",
    },
    CommandSpec {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throws a pokeball at a pokemon",
    },
    CommandSpec {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught pokemon",
    },
    CommandSpec {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists every pokemon you have caught",
    },
    CommandSpec {
        name: "cache",
        usage: "cache",
        description: "Shows response cache statistics",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Exits the Pokedex",
    },
];

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
    Exit,
}

impl Command {
    /// Parses a line that has already been through [`clean_input`].
    ///
    /// Only the first argument is used; any further words are ignored.
    pub fn parse(words: &[String]) -> Result<Self, CommandError> {
        let (name, args) = words.split_first().ok_or(CommandError::Empty)?;
        let arg = |command: &'static str, argument: &'static str| {
            args.first()
                .cloned()
                .ok_or(CommandError::MissingArgument { command, argument })
        };

        match name.as_str() {
            "help" => Ok(Self::Help),
            "map" => Ok(Self::Map),
            "mapb" => Ok(Self::MapBack),
            "explore" => arg("explore", "area").map(Self::Explore),
            "catch" => arg("catch", "pokemon").map(Self::Catch),
            "inspect" => arg("inspect", "pokemon").map(Self::Inspect),
            "pokedex" => Ok(Self::Pokedex),
            "cache" => Ok(Self::Cache),
            "exit" => Ok(Self::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Lowercases `input` and splits it on whitespace.
pub fn clean_input(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
