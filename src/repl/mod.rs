//! Interactive REPL
//!
//! Line-oriented front end over [`PokeApiClient`]. Each line is cleaned,
//! parsed into a [`Command`] and executed; command failures are printed and
//! the loop carries on.

mod commands;

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::{Direction, PokeApiClient, Session};
use crate::cache::CacheStats;
use crate::error::Result;
use crate::models::{CaughtPokemon, LocationArea, LocationPage, Pokedex};

pub use commands::{clean_input, parse_command, Command, CommandSpec, ParseError, COMMANDS};

/// Prompt printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the REPL until `exit` or end of input.
///
/// Only I/O errors on `input` or `out` end the loop early.
pub async fn run<R, W>(client: &PokeApiClient, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new();
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out, "No more input to scan. Exiting REPL...")?;
            break;
        };

        let command = match parse_command(&clean_input(&line)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Executing command");

        if command == Command::Exit {
            writeln!(out, "Closing the Pokedex... Goodbye!")?;
            break;
        }

        match execute(client, &mut session, command).await {
            Ok(text) => write!(out, "{}", text)?,
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
    }

    out.flush()
}

/// Executes one command and returns the text to print.
pub async fn execute(
    client: &PokeApiClient,
    session: &mut Session,
    command: Command,
) -> Result<String> {
    let text = match command {
        Command::Help => render_help(),
        Command::Exit => String::new(),
        Command::Map => render_page(&client.list_locations(session, Direction::Forward).await?),
        Command::MapBack => {
            render_page(&client.list_locations(session, Direction::Backward).await?)
        }
        Command::Explore(area) => render_area(&client.explore(&area).await?),
        Command::Catch(name) => {
            let outcome = if client.catch_pokemon(&name).await? {
                format!(
                    "{} was caught!\nYou may now inspect it with the inspect command.\n",
                    name
                )
            } else {
                format!("{} escaped!\n", name)
            };
            format!("Throwing a Pokeball at {}...\n{}", name, outcome)
        }
        Command::Inspect(name) => render_pokemon(&client.inspect_pokemon(&name)?),
        Command::Pokedex => render_pokedex(&client.pokedex()),
        Command::Cache => render_stats(&client.cache_stats()),
    };

    Ok(text)
}

fn render_help() -> String {
    let usage: String = COMMANDS
        .iter()
        .map(|spec| format!("{}: {}\n", spec.name, spec.description))
        .collect();
    format!("Welcome to the Pokedex!\nUsage:\n\n{}", usage)
}

fn render_page(page: &LocationPage) -> String {
    let mut text = String::from("Location areas:\n");
    for location in &page.results {
        text.push_str(&format!("- {}\n", location.name));
    }
    text
}

fn render_area(area: &LocationArea) -> String {
    let mut text = format!("Exploring {}...\nFound Pokemon:\n", area.name);
    for name in area.pokemon_names() {
        text.push_str(&format!(" - {}\n", name));
    }
    text
}

fn render_pokemon(caught: &CaughtPokemon) -> String {
    let pokemon = &caught.pokemon;
    let mut text = format!(
        "Name: {}\nHeight: {}\nWeight: {}\nCaught: {}\nStats:\n",
        pokemon.name,
        pokemon.height,
        pokemon.weight,
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for stat in &pokemon.stats {
        text.push_str(&format!("  -{}: {}\n", stat.stat.name, stat.base_stat));
    }
    text.push_str("Types:\n");
    for kind in &pokemon.types {
        text.push_str(&format!("  - {}\n", kind.kind.name));
    }
    text
}

fn render_pokedex(pokedex: &Pokedex) -> String {
    if pokedex.is_empty() {
        return "Your Pokedex is empty. Go catch some pokemon!\n".to_string();
    }

    let mut text = String::from("Your Pokedex:\n");
    for caught in &pokedex.pokemon {
        text.push_str(&format!(" - {}\n", caught.pokemon.name));
    }
    text
}

fn render_stats(stats: &CacheStats) -> String {
    format!(
        "Cache entries: {}\nHits: {}\nMisses: {}\nEvictions: {}\nHit rate: {:.1}%\n",
        stats.total_entries,
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.hit_rate() * 100.0
    )
}
