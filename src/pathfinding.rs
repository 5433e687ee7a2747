//! Breadth-first search and path reconstruction.
//!
//! This module contains the search that labels every reachable cell with its hop count and
//! predecessor, and the queries built on top of it. Every query starts a fresh search; nothing is
//! cached between calls.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    cell::Cell,
    errors::MazeError,
    maze::Maze,
    neighbors,
    types::{CellKind, Endpoint, Position},
};

/// Labels every cell reachable from `start` with its distance and predecessor.
///
/// This function clears the traversal state of the whole grid, then runs a breadth-first search
/// over the eight-connected grid. Walls are never entered, although the start itself is explored
/// whatever its kind. Cells that cannot be reached are left unvisited.
///
/// # Errors
///
/// This function returns [`MazeError::InvalidSpot`] if `start` lies outside the grid.
#[tracing::instrument(level = "debug", skip_all, fields(start = %start))]
pub fn find_exits(maze: &mut Maze, start: Position) -> Result<(), MazeError> {
    if !maze.contains(start) {
        return Err(MazeError::InvalidSpot {
            endpoint: Endpoint::Start,
            position: start,
        });
    }

    maze.cells_mut().for_each(Cell::reset);
    if let Some(cell) = maze.cell_mut(start) {
        cell.mark_start();
    }

    let mut queue = VecDeque::from([start]);
    let mut reached = 1_usize;

    while let Some(current) = queue.pop_front() {
        let Some(distance) = maze.cell(current).and_then(Cell::distance) else {
            continue;
        };
        trace!(position = %current, distance, "visiting");

        for neighbor in neighbors::resolve(maze, current) {
            let Some(cell) = maze.cell_mut(neighbor) else {
                continue;
            };
            if cell.kind().is_passable() && !cell.is_visited() {
                cell.visit(distance + 1, current);
                queue.push_back(neighbor);
                reached += 1;
            }
        }
    }

    debug!(reached, "search finished");

    Ok(())
}

/// Returns the shortest path from `start` to `exit`.
///
/// This function runs [`find_exits`] from `start` and walks the predecessor chain back from
/// `exit`. The returned cells are ordered from `exit` towards `start`, with `start` itself left
/// out, so a path from a cell to itself is empty.
///
/// # Errors
///
/// This function returns:
/// - [`MazeError::InvalidSpot`] if `start` or `exit` lies outside the grid
/// - [`MazeError::Unreachable`] if no sequence of passable steps leads from `start` to `exit`
pub fn path_to_exit(
    maze: &mut Maze,
    start: Position,
    exit: Position,
) -> Result<Vec<Cell>, MazeError> {
    find_exits(maze, start)?;

    let mut current = *maze.cell(exit).ok_or(MazeError::InvalidSpot {
        endpoint: Endpoint::Exit,
        position: exit,
    })?;
    if !current.is_visited() {
        return Err(MazeError::Unreachable { start, exit });
    }

    let mut path = Vec::new();
    while let Some(previous) = current.predecessor() {
        path.push(current);
        current = *maze
            .cell(previous)
            .ok_or(MazeError::Unreachable { start, exit })?;
    }

    debug!(start = %start, exit = %exit, steps = path.len(), "path reconstructed");

    Ok(path)
}

/// Returns the exit cell closest to `start`.
///
/// This function runs [`find_exits`] from `start` and picks the reached exit with the smallest
/// distance, the first one in row-major order on ties. It returns `None` when no exit is
/// reachable.
///
/// # Errors
///
/// This function returns [`MazeError::InvalidSpot`] if `start` lies outside the grid.
pub fn nearest_exit(maze: &mut Maze, start: Position) -> Result<Option<Position>, MazeError> {
    find_exits(maze, start)?;

    Ok(maze
        .cells()
        .iter()
        .filter(|cell| cell.kind() == CellKind::Exit)
        .filter_map(|cell| cell.distance().map(|distance| (distance, cell.position())))
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, position)| position))
}
