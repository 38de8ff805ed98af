#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation logic for Maze Navigator adapters.
//!
//! Classifies every grid coordinate into a presentation [`Tile`] and builds
//! complete text frames from it, either as plain glyphs for tests and dumb
//! terminals or as ANSI-colored block characters for interactive play. The
//! crate only reads world state through [`query`]; it never mutates anything.

use maze_nav_core::{Cell, Position};
use maze_nav_world::{query, World};

const ANSI_GREEN: &str = "\u{1b}[32m";
const ANSI_CYAN: &str = "\u{1b}[36m";
const ANSI_BLUE: &str = "\u{1b}[34m";
const ANSI_GREY: &str = "\u{1b}[90m";
const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_RESET: &str = "\u{1b}[0m";
const BLOCK: char = '\u{2588}';

/// Presentation classification of a single grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    /// The cell the goose currently occupies.
    Goose,
    /// The maze's start marker.
    Start,
    /// A cell the goose has moved into more than once.
    Backtracked,
    /// A cell the goose has moved into exactly once.
    Visited,
    /// A wall cell.
    Wall,
    /// The exit cell.
    Exit,
    /// An untouched open cell, carrying its raw maze symbol.
    Open(char),
}

impl Tile {
    /// Single plain-text glyph representing the tile.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Goose => 'G',
            Self::Start => 'S',
            Self::Backtracked => '+',
            Self::Visited => '*',
            Self::Wall => '#',
            Self::Exit => 'E',
            Self::Open(symbol) => *symbol,
        }
    }

    /// ANSI escape prefix used when coloring the tile, if any.
    #[must_use]
    const fn ansi_color(&self) -> Option<&'static str> {
        match self {
            Self::Goose | Self::Start => Some(ANSI_GREEN),
            Self::Backtracked => Some(ANSI_BLUE),
            Self::Visited => Some(ANSI_CYAN),
            Self::Wall => Some(ANSI_GREY),
            Self::Exit => Some(ANSI_RED),
            Self::Open(_) => None,
        }
    }
}

/// Classifies the tile shown at the provided coordinate.
///
/// The goose takes precedence over everything, then the start marker, then
/// visit history, then the static maze symbols. Out-of-bounds coordinates
/// render as open space.
#[must_use]
pub fn tile_at(world: &World, position: Position) -> Tile {
    if position == query::goose_position(world) {
        return Tile::Goose;
    }

    let cell = query::grid(world).cell(position);
    if cell == Some(Cell::Start) {
        return Tile::Start;
    }

    let visits = query::visit_view(world).count(position);
    if visits > 1 {
        return Tile::Backtracked;
    }
    if visits > 0 {
        return Tile::Visited;
    }

    match cell {
        Some(Cell::Wall) => Tile::Wall,
        Some(Cell::End) => Tile::Exit,
        Some(other) => Tile::Open(other.symbol()),
        None => Tile::Open(' '),
    }
}

/// Builds a plain-glyph frame, one string per maze row.
#[must_use]
pub fn frame_lines(world: &World) -> Vec<String> {
    let grid = query::grid(world);
    (0..grid.rows())
        .map(|row| {
            (0..grid.columns())
                .map(|column| tile_at(world, Position::new(row as i32, column as i32)).glyph())
                .collect()
        })
        .collect()
}

/// Builds a complete ANSI-colored frame ready to print to a terminal.
///
/// Colored tiles render as solid blocks; uncolored ones fall back to their
/// plain glyph.
#[must_use]
pub fn ansi_frame(world: &World) -> String {
    let grid = query::grid(world);
    let mut frame = String::new();

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let tile = tile_at(world, Position::new(row as i32, column as i32));
            match tile.ansi_color() {
                Some(color) => {
                    frame.push_str(color);
                    frame.push(BLOCK);
                    frame.push_str(ANSI_RESET);
                }
                None => frame.push(tile.glyph()),
            }
        }
        frame.push('\n');
    }

    frame
}
