//! Shortest paths through text mazes.
//!
//! A maze is read from a `width,height` header followed by rows of `'X'` (wall), `'E'` (exit) and
//! `' '` (space). A breadth-first search over the eight-connected grid then labels every reachable
//! cell with its distance and predecessor, from which the shortest path to any exit is rebuilt and
//! drawn over the maze.
//!
//! ```
//! use mazeroute::{pathfinding, render, Maze, Overlay, Position};
//!
//! let mut maze: Maze = "5,3\nXXXXX\nX   E\nXXXXX".parse()?;
//! let path = pathfinding::path_to_exit(&mut maze, Position::new(1, 1), Position::new(4, 1))?;
//!
//! assert_eq!(path.len(), 3);
//! assert_eq!(
//!     render::with_path(&maze, &path, Overlay::RowMajor),
//!     "XXXXX\nX S**\nXXXXX\n"
//! );
//! # Ok::<(), mazeroute::MazeError>(())
//! ```

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod cell;
pub mod config;
mod errors;
pub mod file_loader;
pub mod logging;
mod maze;
pub mod neighbors;
pub mod parser;
pub mod pathfinding;
pub mod render;
mod session;
mod types;

pub use cell::Cell;
pub use errors::MazeError;
pub use maze::Maze;
pub use session::{Session, NO_MAZE_MESSAGE};
pub use types::{CellKind, Endpoint, Overlay, Position};
