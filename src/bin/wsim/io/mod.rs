use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result, bail};

use waldo_sim::Reactor;
use waldo_sim::io::{Format, read_reactor};

use crate::cli::IoOptions;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Picks the explicit `--format`, falling back to the file extension.
pub fn resolve_format(opts: &IoOptions) -> Result<Format> {
    if let Some(format) = opts.format {
        return Ok(format.into());
    }

    match Format::from_path(&opts.reactor) {
        Some(format) => Ok(format),
        None => bail!(
            "Cannot infer reactor format from '{}'.\n\nUse a .json or .toml extension, or pass --format.",
            opts.reactor.display()
        ),
    }
}

pub fn open_reactor(path: &Path, format: Format) -> Result<Reactor> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open reactor file: {}", path.display()))?;

    read_reactor(BufReader::new(file), format)
        .with_context(|| format!("Failed to load reactor from {}", path.display()))
}
