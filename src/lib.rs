use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub mod config;
pub mod display;
pub mod launch;
pub mod locate;
pub mod selection;

pub use config::Config;
pub use launch::{build_command, Launcher, ProcessLauncher};
pub use locate::{LocateCommand, Locator};
pub use selection::{parse_selection, SelectionError};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The launcher was invoked with this argv.
    Launched(Vec<String>),
    /// The input did not name a listed match.
    Aborted(SelectionError),
    NoMatches,
}

/// Finds files matching `pattern`, lists them, reads a choice from `input`
/// and hands the chosen path to `command` (or the configured opener).
pub fn run<L, X, R, W>(
    pattern: &str,
    command: &[String],
    config: &Config,
    locator: &L,
    launcher: &X,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome>
where
    L: Locator + ?Sized,
    X: Launcher + ?Sized,
    R: BufRead,
    W: Write,
{
    let matches = locator.locate(pattern)?;
    if matches.is_empty() {
        writeln!(out, "No matches for \"{}\".", pattern)?;
        return Ok(Outcome::NoMatches);
    }

    display::render_listing(out, &matches, config.home.as_deref(), config.max_shown)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read selection")? == 0 {
        debug!("End of input before a selection was made");
    }
    let raw = selection::strip_line_ending(&line);

    let index = match parse_selection(raw, matches.len()) {
        Ok(index) => index,
        Err(err) => {
            writeln!(out, "{}", err)?;
            return Ok(Outcome::Aborted(err));
        }
    };

    let argv = build_command(command, &config.opener, &matches[index]);
    out.flush()?;
    launcher.launch(&argv)?;
    Ok(Outcome::Launched(argv))
}
