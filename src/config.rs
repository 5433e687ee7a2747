//! Command line configuration for the solver binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::types::{Overlay, Position};

/// Command line arguments of the solver.
///
/// Reads a maze, prints it, then prints the shortest path from the start to an exit.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Maze file to read; standard input is read when omitted.
    pub input: Option<PathBuf>,
    /// Cell the search starts from, as X,Y.
    #[arg(short, long, value_name = "X,Y")]
    pub start: Position,
    /// Exit to find a path to, as X,Y; the nearest reachable exit when omitted.
    #[arg(short, long, value_name = "X,Y")]
    pub exit: Option<Position>,
    /// How path cells map onto the rendered maze.
    #[arg(long, value_enum, default_value_t)]
    pub overlay: Overlay,
    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
