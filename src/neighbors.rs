//! Eight-way neighbor resolution clipped to the grid.

use crate::{cell::Cell, maze::Maze, types::Position};

/// Offsets of the eight compass neighbors, in the fixed order they are emitted.
///
/// West, northwest, southwest, east, northeast, southeast, north, south.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (1, -1),
    (1, 1),
    (0, -1),
    (0, 1),
];

/// Returns the coordinates one step away from `position` in each compass direction.
///
/// Coordinates falling outside the grid are skipped. Diagonal steps are returned even when both
/// orthogonal cells they cut between are walls.
#[must_use]
pub fn resolve(maze: &Maze, position: Position) -> Vec<Position> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dx, dy)| {
            let x = position.x.checked_add_signed(dx)?;
            let y = position.y.checked_add_signed(dy)?;
            let neighbor = Position::new(x, y);

            maze.contains(neighbor).then_some(neighbor)
        })
        .collect()
}

/// Returns the cells one step away from `position`, in the order of [`resolve`].
#[must_use]
pub fn cells(maze: &Maze, position: Position) -> Vec<&Cell> {
    resolve(maze, position)
        .into_iter()
        .filter_map(|neighbor| maze.cell(neighbor))
        .collect()
}
