//! Interactive Pokedex REPL
//!
//! Reads one command per line, dispatches it and prints the result. All
//! PokeAPI traffic goes through [`PokeApiClient`], and so through the cache.

mod catch;
mod commands;

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::models::{LocationAreaPage, Pokemon};

pub use catch::{attempt_catch, catch_chance, MAX_CATCH_CHANCE, MIN_CATCH_CHANCE};
pub use commands::{clean_input, Command, CommandSpec, COMMANDS};

/// Prompt printed before each line is read.
pub const PROMPT: &str = "Pokedex > ";

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// Per-user state carried between commands.
#[derive(Debug, Default)]
pub struct Session {
    /// Next page of location areas, if any
    pub next_page: Option<String>,
    /// Previous page of location areas, if any
    pub previous_page: Option<String>,
    /// Whether `map` has been run at least once
    pub has_paged: bool,
    /// Caught pokemon by name
    pub pokedex: BTreeMap<String, Pokemon>,
}

impl Session {
    fn apply_page(&mut self, page: &LocationAreaPage) {
        self.next_page = page.next.clone();
        self.previous_page = page.previous.clone();
        self.has_paged = true;
    }
}

// == Repl ==
/// The command loop, generic over its output and randomness.
pub struct Repl<W, R> {
    client: PokeApiClient,
    session: Session,
    out: W,
    rng: R,
}

impl<W: Write, R: Rng> Repl<W, R> {
    pub fn new(client: PokeApiClient, out: W, rng: R) -> Self {
        Self {
            client,
            session: Session::default(),
            out,
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Consumes the REPL and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    // == Run ==
    /// Reads lines from `input` until `exit` or end of input.
    ///
    /// Command failures are printed and the loop carries on; only output
    /// and input errors end it early.
    pub async fn run<I>(&mut self, input: I) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(self.out, "No more input. Exiting.")?;
                return Ok(());
            };

            match self.execute(&line).await {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => {
                    debug!(error = %err, line, "command failed");
                    writeln!(self.out, "Error: {err}")?;
                }
            }
        }
    }

    /// Parses and runs a single input line.
    pub async fn execute(&mut self, line: &str) -> Result<Flow> {
        let words = clean_input(line);
        let command = Command::parse(&words)?;
        self.dispatch(command).await
    }

    /// Runs an already-parsed command.
    pub async fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Help => self.help()?,
            Command::Map => self.map_forward().await?,
            Command::MapBack => self.map_back().await?,
            Command::Explore(area) => self.explore(&area).await?,
            Command::Catch(name) => self.catch(&name).await?,
            Command::Inspect(name) => self.inspect(&name)?,
            Command::Pokedex => self.pokedex()?,
            Command::Cache => self.cache_stats().await?,
            Command::Exit => {
                writeln!(self.out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the Pokedex!")?;
        writeln!(self.out, "Usage:")?;
        writeln!(self.out)?;
        for spec in COMMANDS {
            writeln!(self.out, "{}: {}", spec.usage, spec.description)?;
        }
        Ok(())
    }

    async fn map_forward(&mut self) -> Result<()> {
        let url = match (&self.session.next_page, self.session.has_paged) {
            (Some(url), _) => Some(url.clone()),
            (None, false) => None,
            (None, true) => {
                writeln!(self.out, "you're on the last page")?;
                return Ok(());
            }
        };

        let page = self.client.location_areas(url.as_deref()).await?;
        self.show_page(&page)
    }

    async fn map_back(&mut self) -> Result<()> {
        let Some(url) = self.session.previous_page.clone() else {
            writeln!(self.out, "you're on the first page")?;
            return Ok(());
        };

        let page = self.client.location_areas(Some(&url)).await?;
        self.show_page(&page)
    }

    fn show_page(&mut self, page: &LocationAreaPage) -> Result<()> {
        self.session.apply_page(page);
        for area in &page.results {
            writeln!(self.out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore(&mut self, area: &str) -> Result<()> {
        writeln!(self.out, "Exploring {area}...")?;
        let location = self.client.location_area(area).await?;

        writeln!(self.out, "Found Pokemon:")?;
        for encounter in &location.pokemon_encounters {
            writeln!(self.out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch(&mut self, name: &str) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;

        writeln!(self.out, "Throwing a Pokeball at {name}...")?;
        if attempt_catch(&mut self.rng, pokemon.base_experience) {
            writeln!(self.out, "{name} was caught!")?;
            writeln!(self.out, "You may now inspect it with the inspect command.")?;
            self.session.pokedex.insert(name.to_string(), pokemon);
        } else {
            writeln!(self.out, "{name} escaped!")?;
        }
        Ok(())
    }

    fn inspect(&mut self, name: &str) -> Result<()> {
        let Some(pokemon) = self.session.pokedex.get(name) else {
            writeln!(self.out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(self.out, "Name: {}", pokemon.name)?;
        writeln!(self.out, "Height: {}", pokemon.height)?;
        writeln!(self.out, "Weight: {}", pokemon.weight)?;
        writeln!(self.out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(self.out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(self.out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(self.out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn pokedex(&mut self) -> Result<()> {
        if self.session.pokedex.is_empty() {
            writeln!(self.out, "Your Pokedex is empty.")?;
            return Ok(());
        }

        writeln!(self.out, "Your Pokedex:")?;
        for name in self.session.pokedex.keys() {
            writeln!(self.out, " - {name}")?;
        }
        Ok(())
    }

    async fn cache_stats(&mut self) -> Result<()> {
        let cache = self.client.cache();
        let stats = cache.stats().await;

        writeln!(
            self.out,
            "Cache: {} entries, TTL {}s",
            stats.total_entries,
            cache.ttl().as_secs()
        )?;
        writeln!(
            self.out,
            "Hits: {}, Misses: {} (hit rate {:.1}%)",
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0
        )?;
        match stats.last_sweep_at {
            Some(at) => writeln!(
                self.out,
                "Expired: {} over {} sweeps, last at {}",
                stats.expired,
                stats.sweeps,
                at.to_rfc3339()
            )?,
            None => writeln!(self.out, "No sweeps yet")?,
        }
        Ok(())
    }
}
