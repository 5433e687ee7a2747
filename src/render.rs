//! Text rendering of mazes and path overlays.

use std::fmt;

use crate::{
    cell::Cell,
    maze::Maze,
    types::{CellKind, Overlay},
};

/// Glyph marking a cell along a path.
const PATH_GLYPH: char = '*';

impl fmt::Display for Maze {
    /// Writes one line per row, each cell as its glyph, every row terminated by a newline.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(formatter, "{}", cell.kind().glyph())?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}

/// Renders `maze` with `path` marked over it.
///
/// This function starts from the plain rendering of the maze and writes `'*'` over every cell of
/// `path`, then the [`CellKind::Start`] glyph over its last element, the cell nearest the start
/// when the path comes from [`path_to_exit`](crate::pathfinding::path_to_exit). `overlay` decides which character of the
/// rendering a cell maps onto; offsets falling outside the rendering are skipped. An empty path
/// renders the bare maze.
#[must_use]
pub fn with_path(maze: &Maze, path: &[Cell], overlay: Overlay) -> String {
    let mut buffer: Vec<char> = maze.to_string().chars().collect();

    for cell in path {
        mark(&mut buffer, overlay.offset(cell.position(), maze.width()), PATH_GLYPH);
    }
    if let Some(start) = path.last() {
        mark(
            &mut buffer,
            overlay.offset(start.position(), maze.width()),
            CellKind::Start.glyph(),
        );
    }

    buffer.into_iter().collect()
}

/// Overwrites the character at `offset`, if any.
fn mark(buffer: &mut [char], offset: usize, glyph: char) {
    if let Some(slot) = buffer.get_mut(offset) {
        *slot = glyph;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pathfinding, types::Position};

    /// Straight corridor with the exit at its east end.
    const CORRIDOR: &str = "5,3\nXXXXX\nX   E\nXXXXX";

    /// Parses a maze fixture.
    fn maze(input: &str) -> Maze {
        input.parse().expect("Failed to parse maze")
    }

    #[test]
    fn test_render_round_trip() {
        for input in [
            CORRIDOR,
            "1,1\nE",
            "6,4\n  X   \n X  X \n   XX \nX    E",
            "3,2\n   \n   ",
        ] {
            let (_, body) = input.split_once('\n').expect("Input should have a header");

            assert_eq!(maze(input).to_string(), format!("{body}\n"));
        }
    }

    #[test]
    fn test_render_unaffected_by_search() {
        let mut maze = maze(CORRIDOR);
        let before = maze.to_string();

        pathfinding::find_exits(&mut maze, Position::new(1, 1))
            .expect("Search from an open cell should succeed");

        assert_eq!(maze.to_string(), before);
    }

    #[test]
    fn test_render_path_row_major() {
        let mut maze = maze(CORRIDOR);
        let path =
            pathfinding::path_to_exit(&mut maze, Position::new(1, 1), Position::new(4, 1))
            .expect("Exit should be reachable");

        assert_eq!(
            with_path(&maze, &path, Overlay::RowMajor),
            "XXXXX\nX S**\nXXXXX\n"
        );
    }

    #[test]
    fn test_render_path_row_major_diagonal() {
        let mut maze = maze("4,3\n X  \n  X \nX  E");
        let path =
            pathfinding::path_to_exit(&mut maze, Position::new(0, 0), Position::new(3, 2))
            .expect("Exit should be reachable");

        assert_eq!(path.len(), 3);
        let rendered = with_path(&maze, &path, Overlay::RowMajor);
        let lines: Vec<&str> = rendered.lines().collect();
        for cell in &path {
            let position = cell.position();
            let glyph = lines
                .get(position.y)
                .and_then(|line| line.chars().nth(position.x))
                .expect("Path cell should be rendered");
            assert!(matches!(glyph, '*' | 'S'), "{position} rendered as {glyph:?}");
        }
        assert_eq!(rendered.matches('S').count(), 1);
        assert_eq!(rendered.matches('*').count(), path.len() - 1);
    }

    #[test]
    fn test_render_path_product_indexing() {
        let mut maze = maze(CORRIDOR);
        let path =
            pathfinding::path_to_exit(&mut maze, Position::new(1, 1), Position::new(4, 1))
            .expect("Exit should be reachable");

        // Cells (4,1), (3,1), (2,1) land on offsets 4, 3 and 2 of the first row.
        assert_eq!(
            with_path(&maze, &path, Overlay::Product),
            "XXS**\nX   E\nXXXXX\n"
        );
    }

    #[test]
    fn test_render_path_marks_start_kind() {
        let mut maze = maze(CORRIDOR);
        let path =
            pathfinding::path_to_exit(&mut maze, Position::new(1, 1), Position::new(4, 1))
            .expect("Exit should be reachable");

        let rendered = with_path(&maze, &path, Overlay::RowMajor);
        let marked = rendered
            .lines()
            .nth(1)
            .and_then(|line| line.chars().nth(2))
            .expect("Nearest path cell should be rendered");

        assert_eq!(marked, CellKind::Start.glyph());
    }

    #[test]
    fn test_render_path_empty() {
        let maze = maze(CORRIDOR);

        assert_eq!(
            with_path(&maze, &[], Overlay::RowMajor),
            "XXXXX\nX   E\nXXXXX\n"
        );
    }

    #[test]
    fn test_render_path_does_not_change_maze() {
        let mut maze = maze(CORRIDOR);
        let path =
            pathfinding::path_to_exit(&mut maze, Position::new(1, 1), Position::new(4, 1))
            .expect("Exit should be reachable");

        let rendered = with_path(&maze, &path, Overlay::RowMajor);

        assert_ne!(rendered, maze.to_string());
        assert_eq!(maze.to_string(), "XXXXX\nX   E\nXXXXX\n");
    }
}
