//! Maze loading from a named file or from standard input.

use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use color_eyre::eyre::{Result, WrapErr as _};
use tracing::info;

use crate::{maze::Maze, parser};

/// Reads a maze from `input`, or from standard input when no path is given.
///
/// This function opens the file, hands a buffered reader to [`parser::parse`] and attaches the file
/// name to any failure, so the caller can report which input was rejected.
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be opened
/// - The contents are not a valid maze (see [`parser::parse`])
pub fn load(input: Option<&Path>) -> Result<Maze> {
    let Some(path) = input else {
        info!("reading maze from standard input");
        return parser::parse(io::stdin().lock())
            .wrap_err("failed to read maze from standard input");
    };

    info!(path = %path.display(), "reading maze file");
    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;

    parser::parse(BufReader::new(file))
        .wrap_err_with(|| format!("failed to read maze from {}", path.display()))
}
