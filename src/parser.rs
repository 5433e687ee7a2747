//! Maze parsing from a line-oriented character stream.
//!
//! The accepted format is a `width,height` header followed by `height` rows of exactly `width`
//! characters each, drawn from `'X'` (wall), `'E'` (exit) and `' '` (space). Anything past the last
//! row is ignored. A failure anywhere leaves no maze behind.

use std::{
    io::{self, BufRead},
    str::FromStr,
};

use tracing::debug;

use crate::{
    errors::MazeError,
    maze::Maze,
    types::{parse_pair, CellKind},
};

/// Reads a maze from a buffered character stream.
///
/// This function consumes the header line and then exactly as many rows as the header
/// announces. Lines may end in `"\n"` or `"\r\n"`.
///
/// # Errors
///
/// This function returns [`MazeError::MalformedInput`] if:
/// - The header is missing, is not a `width,height` pair or names a zero dimension
/// - The stream ends before all rows were read
/// - A row is not exactly `width` characters long
/// - A row contains a character other than `'X'`, `'E'` or `' '`
/// - A line is not valid UTF-8
///
/// It returns [`MazeError::Read`] if the underlying stream fails.
pub fn parse<R: BufRead>(reader: R) -> Result<Maze, MazeError> {
    let mut lines = reader.lines();

    let header = next_line(&mut lines, 1)?
        .ok_or_else(|| malformed(1, "missing width,height header".to_owned()))?;
    let (width, height) = parse_pair(strip_carriage_return(&header)).ok_or_else(|| {
        malformed(1, format!("expected width,height header, found {header:?}"))
    })?;
    if width == 0 || height == 0 {
        return Err(malformed(
            1,
            format!("maze dimensions must be positive, found {width},{height}"),
        ));
    }

    // Sized by the rows actually read, never by the header.
    let mut rows = Vec::new();
    for index in 0..height {
        // The header occupies line one.
        let line_number = index + 2;
        let line = next_line(&mut lines, line_number)?.ok_or_else(|| {
            malformed(
                line_number,
                format!("expected {height} rows, found {index}"),
            )
        })?;
        rows.push(parse_row(
            strip_carriage_return(&line),
            width,
            line_number,
        )?);
    }

    debug!(width, height, "parsed maze");

    Ok(Maze::from_rows(width, rows))
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse(input.as_bytes())
    }
}

/// Reads the next line, reporting undecodable bytes as malformed input at `line_number`.
fn next_line<I>(lines: &mut I, line_number: usize) -> Result<Option<String>, MazeError>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => Err(malformed(
            line_number,
            "line is not valid UTF-8".to_owned(),
        )),
        other => Ok(other.transpose()?),
    }
}

/// Converts one row of the input into cell kinds.
fn parse_row(line: &str, width: usize, line_number: usize) -> Result<Vec<CellKind>, MazeError> {
    let length = line.chars().count();
    if length != width {
        return Err(malformed(
            line_number,
            format!("expected {width} cells, found {length}"),
        ));
    }

    line.chars()
        .enumerate()
        .map(|(column, glyph)| {
            CellKind::from_char(glyph).ok_or_else(|| {
                malformed(
                    line_number,
                    format!("unknown cell {glyph:?} at column {column}"),
                )
            })
        })
        .collect()
}

/// Drops the `'\r'` left behind by `"\r\n"` line endings.
fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Builds a [`MazeError::MalformedInput`] for `line`.
const fn malformed(line: usize, reason: String) -> MazeError {
    MazeError::MalformedInput { line, reason }
}
