//! Interactive match setup: player names and the score store location.

use std::path::{Path, PathBuf};
use tictactoe_core::Console;
use tracing::{debug, instrument};

/// Setup could not complete.
#[derive(Debug, derive_more::Display)]
pub enum SetupError {
    /// Input ended before a required answer was given.
    #[display("Input closed while waiting for {}", _0)]
    InputClosed(String),
    /// The console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Io(e) => Some(e),
            SetupError::InputClosed(_) => None,
        }
    }
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::Io(err)
    }
}

/// Asks for a name until a non-empty one is given. Surrounding whitespace is dropped.
#[instrument(skip(console))]
pub fn prompt_name<C>(console: &mut C, label: &str) -> Result<String, SetupError>
where
    C: Console + ?Sized,
{
    let prompt = format!("Enter the name for {}: ", label);
    loop {
        let Some(line) = console.read_line(&prompt)? else {
            return Err(SetupError::InputClosed(format!("the name of {}", label)));
        };
        let name = line.trim();
        if !name.is_empty() {
            debug!(%name, "Name accepted");
            return Ok(name.to_string());
        }
        console.show("Name cannot be empty.")?;
    }
}

/// Asks for the score store location; an empty answer or closed input picks `default`.
#[instrument(skip(console))]
pub fn prompt_stats_file<C>(console: &mut C, default: &Path) -> Result<PathBuf, SetupError>
where
    C: Console + ?Sized,
{
    let prompt = format!("Enter the stats file name (default: {}): ", default.display());
    let answer = console.read_line(&prompt)?.unwrap_or_default();
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_path_buf())
    } else {
        Ok(PathBuf::from(answer))
    }
}

/// Uses `configured` when it is a usable name, otherwise prompts.
#[instrument(skip(console))]
pub fn resolve_name<C>(
    console: &mut C,
    label: &str,
    configured: Option<&str>,
) -> Result<String, SetupError>
where
    C: Console + ?Sized,
{
    match configured.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => prompt_name(console, label),
    }
}
