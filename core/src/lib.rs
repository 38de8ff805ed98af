#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Navigator workspace.
//!
//! This crate defines the vocabulary that connects the loader, the
//! authoritative world, and the presentation adapters. The loader produces a
//! validated [`Grid`], adapters submit [`Command`] values describing desired
//! mutations, the world executes those commands via its `apply` entry point
//! and broadcasts [`Event`] values for adapters to present.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Maze Navigator.";

/// Symbol occupying a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Open corridor the goose may walk through.
    Path,
    /// Decorative corridor marker, traversable like [`Cell::Path`].
    Dot,
    /// Solid wall that blocks traversal.
    Wall,
    /// Cell the goose occupies when a session begins.
    Start,
    /// Exit cell that ends the session when reached.
    End,
}

impl Cell {
    /// Maps a maze file character onto its cell symbol.
    ///
    /// Returns `None` for any character outside the five recognized symbols.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Path),
            '.' => Some(Self::Dot),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    /// Character that represents the cell in the maze file format.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Path => ' ',
            Self::Dot => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Reports whether the cell blocks traversal.
    #[must_use]
    pub const fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }
}

/// Cardinal movement directions available to the goose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Maps a keyboard character onto its direction.
    ///
    /// Returns `None` for keys outside the `w`/`s`/`a`/`d` set.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Up),
            's' => Some(Self::Down),
            'a' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }

    /// Keyboard character associated with the direction.
    #[must_use]
    pub const fn key(&self) -> char {
        match self {
            Self::Up => 'w',
            Self::Down => 's',
            Self::Left => 'a',
            Self::Right => 'd',
        }
    }

    /// Row offset applied when stepping in this direction.
    #[must_use]
    pub const fn row_delta(&self) -> i32 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::Left | Self::Right => 0,
        }
    }

    /// Column offset applied when stepping in this direction.
    #[must_use]
    pub const fn column_delta(&self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Up | Self::Down => 0,
        }
    }
}

/// Location within a maze expressed as row and column indices.
///
/// Construction performs no validation; negative and out-of-range
/// coordinates are legal values. Validity only exists relative to a grid and
/// is established through [`Position::is_traversable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    /// Creates a new position at the provided row and column.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the position.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column index of the position.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Returns the neighboring position one step in the provided direction.
    ///
    /// The receiver is left untouched; stepping off the grid is legal and
    /// yields a position that simply fails [`Position::is_traversable`].
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        Self {
            row: self.row + direction.row_delta(),
            column: self.column + direction.column_delta(),
        }
    }

    /// Reports whether the position lies within the grid on a non-wall cell.
    ///
    /// Out-of-bounds positions, including negative coordinates, are never
    /// traversable.
    #[must_use]
    pub fn is_traversable(&self, grid: &Grid) -> bool {
        grid.cell(*self).is_some_and(|cell| !cell.is_wall())
    }
}

/// Validated rectangular maze layout, immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: u32,
    columns: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from row-major cell data, validating its shape.
    ///
    /// Both dimensions must be odd (which also rules out empty grids) and
    /// every row must carry the same number of cells. The presence of a
    /// [`Cell::Start`] is deliberately not checked here; it is established
    /// lazily when a session is constructed.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        if row_count % 2 == 0 {
            return Err(GridError::EvenRowCount { rows: row_count });
        }

        let column_count = rows[0].len();
        if column_count % 2 == 0 {
            return Err(GridError::EvenColumnCount {
                columns: column_count,
            });
        }

        let mut cells = Vec::with_capacity(row_count * column_count);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != column_count {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: column_count,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count as u32,
            columns: column_count as u32,
            cells,
        })
    }

    /// Number of rows contained in the grid. Always odd.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns contained in the grid. Always odd.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the cell at the provided position, or `None` out of bounds.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Iterates the cells of a single row, left to right.
    ///
    /// Rows outside the grid yield an empty iterator.
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = Cell> + '_ {
        let width = self.columns as usize;
        let start = (row as usize).saturating_mul(width).min(self.cells.len());
        let end = start.saturating_add(width).min(self.cells.len());
        self.cells[start..end].iter().copied()
    }

    fn index(&self, position: Position) -> Option<usize> {
        let row = u32::try_from(position.row()).ok()?;
        let column = u32::try_from(position.column()).ok()?;
        if row < self.rows && column < self.columns {
            Some(row as usize * self.columns as usize + column as usize)
        } else {
            None
        }
    }
}

/// Shape violations rejected by [`Grid::from_rows`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid declares an even number of rows.
    #[error("grid has an even row count of {rows}; row counts must be odd")]
    EvenRowCount {
        /// Number of rows supplied to the constructor.
        rows: usize,
    },
    /// The grid declares an even number of columns.
    #[error("grid has an even column count of {columns}; column counts must be odd")]
    EvenColumnCount {
        /// Number of columns in the first supplied row.
        columns: usize,
    },
    /// A row disagrees with the column count established by the first row.
    #[error("row {row} holds {actual} cells where {expected} were expected")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Number of cells actually present in the row.
        actual: usize,
    },
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that the goose advance a single step in the given direction.
    MoveGoose {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Explicitly overrides the session's game-over flag.
    SetGameOver {
        /// Desired flag value; `true` ends the session.
        over: bool,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the goose moved between two traversable cells.
    GooseMoved {
        /// Cell the goose occupied before moving.
        from: Position,
        /// Cell the goose occupies after completing the move.
        to: Position,
        /// Visit count of the destination cell after the move.
        visits: u32,
    },
    /// Reports that a requested step targeted a non-traversable cell.
    ///
    /// Rejections are a normal outcome, not errors; no state changed.
    MoveRejected {
        /// Cell the goose still occupies.
        at: Position,
        /// Direction of the rejected step.
        direction: Direction,
    },
    /// Announces that the goose occupies the exit and the session is over.
    ExitReached {
        /// The exit cell the goose stands on.
        at: Position,
    },
    /// Confirms an explicit game-over override.
    GameOverSet {
        /// Flag value that is now in effect.
        over: bool,
    },
}
