//! Per-cell identity and traversal state.

use crate::types::{CellKind, Position};

/// Single position of the maze grid.
///
/// This structure pairs the immutable identity of a cell (its kind and coordinates) with the state
/// written by the last search: the hop count from the start and the cell it was first reached
/// from. The predecessor is a coordinate into the owning maze, never a reference to another cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Kind of the cell, set at parse time.
    kind: CellKind,
    /// Coordinates of the cell, set at parse time.
    position: Position,
    /// Hop count from the start of the last search, `None` while unvisited.
    distance: Option<usize>,
    /// Coordinates of the cell this one was first reached from.
    predecessor: Option<Position>,
}

impl Cell {
    /// Creates an unvisited cell.
    pub(crate) const fn new(kind: CellKind, position: Position) -> Self {
        Self {
            kind,
            position,
            distance: None,
            predecessor: None,
        }
    }

    /// Returns the kind of the cell.
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns the coordinates of the cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the hop count from the start of the last search.
    ///
    /// `None` means the cell was not reached, either because no search ran yet or because no
    /// sequence of passable steps leads to it.
    #[must_use]
    pub const fn distance(&self) -> Option<usize> {
        self.distance
    }

    /// Returns the coordinates of the cell this one was first reached from.
    ///
    /// The start of a search and every unreached cell have no predecessor.
    #[must_use]
    pub const fn predecessor(&self) -> Option<Position> {
        self.predecessor
    }

    /// Returns whether the last search reached this cell.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.distance.is_some()
    }

    /// Clears the traversal state back to unvisited.
    pub(crate) const fn reset(&mut self) {
        self.distance = None;
        self.predecessor = None;
    }

    /// Marks the cell as the start of a search.
    pub(crate) const fn mark_start(&mut self) {
        self.distance = Some(0);
        self.predecessor = None;
    }

    /// Records that the cell was first reached from `from` after `distance` steps.
    pub(crate) const fn visit(&mut self, distance: usize, from: Position) {
        self.distance = Some(distance);
        self.predecessor = Some(from);
    }
}
