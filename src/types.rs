//! Small value types shared by the maze core and its callers.

use std::{fmt, str::FromStr};

use crate::errors::MazeError;

/// Grid coordinate of a cell.
///
/// This structure holds a column (`x`) and a row (`y`), both zero-based, counted from the top-left
/// corner of the maze. It parses from the `x,y` pair syntax of the maze header and displays as
/// `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based column.
    pub x: usize,
    /// Zero-based row.
    pub y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_pair(input)
            .map(|(x, y)| Self::new(x, y))
            .ok_or_else(|| MazeError::InvalidPosition {
                input: input.to_owned(),
            })
    }
}

/// Parses a `first,second` pair of unsigned integers.
///
/// No whitespace is tolerated around either number or the comma.
pub(crate) fn parse_pair(input: &str) -> Option<(usize, usize)> {
    let (first, second) = input.split_once(',')?;

    Some((first.parse().ok()?, second.parse().ok()?))
}

/// Enumeration of the kinds of cell a maze is made of.
///
/// This enumeration is the closed set of cell kinds. The kind of a cell is fixed once the maze is
/// parsed; [`Start`](CellKind::Start) is never produced by the parser and only exists as a glyph
/// for callers that want to mark the start of a search themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Impassable cell.
    ///
    /// This variant represents a wall, which the search never enqueues even when it is adjacent to
    /// an open cell.
    Wall,
    /// Open cell.
    Space,
    /// Start marker.
    Start,
    /// Goal cell.
    ///
    /// This variant represents an exit of the maze, open like a space but recognised as a target.
    Exit,
}

impl CellKind {
    /// Maps an input character onto a cell kind.
    ///
    /// Only `'X'`, `'E'` and `' '` are accepted; any other character, `'S'` included, yields
    /// `None`.
    pub(crate) const fn from_char(glyph: char) -> Option<Self> {
        match glyph {
            'X' => Some(Self::Wall),
            'E' => Some(Self::Exit),
            ' ' => Some(Self::Space),
            _ => None,
        }
    }

    /// Returns the one character representation of the kind.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => 'X',
            Self::Space => ' ',
            Self::Start => 'S',
            Self::Exit => 'E',
        }
    }

    /// Returns whether a search may step onto a cell of this kind.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Role of a coordinate in a path query.
///
/// This enumeration names which of the two coordinates of a query was rejected, so that the
/// caller can ask for the right one again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The cell the search starts from.
    Start,
    /// The cell the path should lead to.
    Exit,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Start => "starting",
            Self::Exit => "exit",
        })
    }
}

/// Indexing used when marking a path over the rendered maze.
///
/// The rendered maze is a flat character buffer where every row is followed by a newline. This
/// enumeration selects how a cell coordinate maps onto an offset of that buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Overlay {
    /// Offset `y * (width + 1) + x`, the cell's own character.
    #[default]
    RowMajor,
    /// Offset `x * y`, kept for output compatible with older renderings.
    ///
    /// Distinct cells collide under this indexing and every cell on the first row or column maps
    /// onto offset zero.
    Product,
}

impl Overlay {
    /// Returns the buffer offset of `position` in a rendering of a maze `width` cells wide.
    pub(crate) const fn offset(self, position: Position, width: usize) -> usize {
        match self {
            Self::RowMajor => position.y * (width + 1) + position.x,
            Self::Product => position.x * position.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_str() {
        let position: Position = "4,12".parse().expect("Failed to parse position");

        assert_eq!(position, Position::new(4, 12));
    }

    #[test]
    fn test_position_from_str_rejects_whitespace() {
        assert!("4, 12".parse::<Position>().is_err());
        assert!(" 4,12".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_from_str_rejects_garbage() {
        assert!("".parse::<Position>().is_err());
        assert!("4".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
        assert!("-1,2".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(0, 7).to_string(), "(0, 7)");
    }

    #[test]
    fn test_parse_pair_extra_comma() {
        assert_eq!(parse_pair("1,2,3"), None);
    }

    #[test]
    fn test_cell_kind_from_char() {
        assert_eq!(CellKind::from_char('X'), Some(CellKind::Wall));
        assert_eq!(CellKind::from_char('E'), Some(CellKind::Exit));
        assert_eq!(CellKind::from_char(' '), Some(CellKind::Space));
    }

    #[test]
    fn test_cell_kind_from_char_rejects_start_and_others() {
        assert_eq!(CellKind::from_char('S'), None);
        assert_eq!(CellKind::from_char('x'), None);
        assert_eq!(CellKind::from_char('\t'), None);
    }

    #[test]
    fn test_cell_kind_glyph() {
        assert_eq!(CellKind::Wall.glyph(), 'X');
        assert_eq!(CellKind::Space.glyph(), ' ');
        assert_eq!(CellKind::Start.glyph(), 'S');
        assert_eq!(CellKind::Exit.glyph(), 'E');
    }

    #[test]
    fn test_cell_kind_passable() {
        assert!(!CellKind::Wall.is_passable());
        assert!(CellKind::Space.is_passable());
        assert!(CellKind::Start.is_passable());
        assert!(CellKind::Exit.is_passable());
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::Start.to_string(), "starting");
        assert_eq!(Endpoint::Exit.to_string(), "exit");
    }

    #[test]
    fn test_overlay_row_major_offset() {
        // Five cells plus a newline per row.
        assert_eq!(Overlay::RowMajor.offset(Position::new(4, 1), 5), 10);
        assert_eq!(Overlay::RowMajor.offset(Position::new(0, 0), 5), 0);
    }

    #[test]
    fn test_overlay_product_offset_collides() {
        let first = Overlay::Product.offset(Position::new(1, 4), 5);
        let second = Overlay::Product.offset(Position::new(4, 1), 5);
        let third = Overlay::Product.offset(Position::new(2, 2), 5);

        assert_eq!(first, 4);
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(Overlay::Product.offset(Position::new(3, 0), 5), 0);
    }
}
