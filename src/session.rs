//! Caller-held state around the currently selected maze.

use crate::{
    errors::MazeError,
    maze::Maze,
    pathfinding, render,
    types::{Overlay, Position},
};

/// Message shown when no maze has been loaded yet.
pub const NO_MAZE_MESSAGE: &str = "No maze is currently selected.";

/// Maze selection owned by a caller.
///
/// This structure holds the maze a front end is working on. It replaces any process-wide "current
/// maze": each front end creates its own session and passes it wherever a maze is needed.
#[derive(Debug, Default)]
pub struct Session {
    /// Currently selected maze, if one was loaded.
    maze: Option<Maze>,
}

impl Session {
    /// Creates a session with no maze selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { maze: None }
    }

    /// Replaces the current maze with `maze`.
    pub fn load(&mut self, maze: Maze) {
        self.maze = Some(maze);
    }

    /// Returns the current maze, if any.
    #[must_use]
    pub const fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Renders the current maze, or [`NO_MAZE_MESSAGE`] when none is loaded.
    #[must_use]
    pub fn describe(&self) -> String {
        self.maze
            .as_ref()
            .map_or_else(|| NO_MAZE_MESSAGE.to_owned(), ToString::to_string)
    }

    /// Renders the shortest path from `start` to `exit` over the current maze.
    ///
    /// When `exit` is `None`, the exit closest to `start` is used.
    ///
    /// # Errors
    ///
    /// This function returns:
    /// - [`MazeError::NoMazeLoaded`] if no maze was loaded
    /// - [`MazeError::NoReachableExit`] if `exit` is `None` and no exit can be reached
    /// - Any error of [`path_to_exit`](pathfinding::path_to_exit)
    pub fn path_report(
        &mut self,
        start: Position,
        exit: Option<Position>,
        overlay: Overlay,
    ) -> Result<String, MazeError> {
        let maze = self.maze.as_mut().ok_or(MazeError::NoMazeLoaded)?;

        let exit = match exit {
            Some(exit) => exit,
            None => pathfinding::nearest_exit(maze, start)?
                .ok_or(MazeError::NoReachableExit { start })?,
        };
        let path = pathfinding::path_to_exit(maze, start, exit)?;

        Ok(render::with_path(maze, &path, overlay))
    }
}
