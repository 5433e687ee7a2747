//! Maze grid data and lookups.
//!
//! This module contains the [`Maze`] struct, which owns every cell of a parsed maze in row-major
//! order, and the coordinate lookups the search and the renderer are built on.

use crate::{
    cell::Cell,
    types::{CellKind, Position},
};

/// Rectangular maze grid.
///
/// This structure exclusively owns all of its cells. Cells refer to each other only through
/// [`Position`] values, so the grid can be searched any number of times without any cell holding
/// on to another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cells in row-major order, `width * height` of them.
    cells: Vec<Cell>,
}

impl Maze {
    /// Builds a maze from already validated rows of cell kinds.
    ///
    /// Every row must hold exactly `width` kinds; the parser guarantees it before calling.
    pub(crate) fn from_rows(width: usize, rows: Vec<Vec<CellKind>>) -> Self {
        let height = rows.len();
        let cells = rows
            .into_iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(move |(x, kind)| Cell::new(kind, Position::new(x, y)))
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns whether `position` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Returns the cell at `position`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|index| self.cells.get(index))
    }

    /// Returns every cell in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` only guards the chunk size; a parsed maze is never zero wide.
        self.cells.chunks(self.width.max(1))
    }

    /// Returns the coordinates of every exit cell in row-major order.
    #[must_use]
    pub fn exits(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.kind() == CellKind::Exit)
            .map(Cell::position)
            .collect()
    }

    /// Returns a mutable reference to the cell at `position`.
    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Returns a mutable iterator over every cell.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Converts a coordinate into an offset of the row-major cell storage.
    const fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-row fixture: a wall row above an open row ending in an exit.
    fn corridor() -> Maze {
        Maze::from_rows(
            3,
            vec![
                vec![CellKind::Wall, CellKind::Wall, CellKind::Wall],
                vec![CellKind::Space, CellKind::Space, CellKind::Exit],
            ],
        )
    }

    #[test]
    fn test_from_rows_dimensions() {
        let maze = corridor();

        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 2);
        assert_eq!(maze.cells().len(), 6);
    }

    #[test]
    fn test_cells_are_positioned_row_major() {
        let maze = corridor();

        for (index, cell) in maze.cells().iter().enumerate() {
            assert_eq!(cell.position(), Position::new(index % 3, index / 3));
        }
    }

    #[test]
    fn test_cell_lookup() {
        let maze = corridor();

        let exit = maze
            .cell(Position::new(2, 1))
            .expect("Exit cell should exist");
        assert_eq!(exit.kind(), CellKind::Exit);
        assert!(maze.cell(Position::new(3, 1)).is_none());
        assert!(maze.cell(Position::new(0, 2)).is_none());
    }

    #[test]
    fn test_contains() {
        let maze = corridor();

        assert!(maze.contains(Position::new(0, 0)));
        assert!(maze.contains(Position::new(2, 1)));
        assert!(!maze.contains(Position::new(3, 0)));
        assert!(!maze.contains(Position::new(0, 2)));
    }

    #[test]
    fn test_rows() {
        let maze = corridor();
        let rows: Vec<&[Cell]> = maze.rows().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(
            rows.last()
                .and_then(|row| row.last())
                .map(Cell::kind),
            Some(CellKind::Exit)
        );
    }

    #[test]
    fn test_exits() {
        let maze = Maze::from_rows(
            2,
            vec![
                vec![CellKind::Exit, CellKind::Wall],
                vec![CellKind::Space, CellKind::Exit],
            ],
        );

        assert_eq!(
            maze.exits(),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
    }
}
