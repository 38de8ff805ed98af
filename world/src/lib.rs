#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Maze Navigator.
//!
//! A [`World`] owns one validated grid for its whole lifetime together with
//! the per-cell visit counts, the goose's position, and the game-over flag.
//! Adapters mutate the world exclusively through [`apply`] and observe it
//! through the read-only accessors in [`query`].

use maze_nav_core::{Cell, Command, Event, Grid, Position};
use thiserror::Error;

/// Raised when a grid contains no [`Cell::Start`] anywhere.
///
/// Surfaced at session construction rather than at parse time because the
/// absence of a start is a property of grid content, not of file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("start cell 'S' not found in the maze")]
pub struct StartNotFound;

/// Represents the authoritative state of a single maze session.
#[derive(Debug)]
pub struct World {
    maze: Maze,
    goose: Position,
    game_over: bool,
}

impl World {
    /// Creates a new session for the provided grid.
    ///
    /// Locates the start cell by scanning in row-major order, places the
    /// goose there, and resets the game-over flag. The start cell's visit
    /// count stays at zero; only cells actually moved into are counted.
    pub fn new(grid: Grid) -> Result<Self, StartNotFound> {
        let maze = Maze::new(grid);
        let goose = maze.find_start()?;
        Ok(Self {
            maze,
            goose,
            game_over: false,
        })
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::MoveGoose { direction } => {
            let from = world.goose;
            let candidate = from.step(direction);

            if candidate.is_traversable(world.maze.grid()) {
                world.goose = candidate;
                let visits = world.maze.increment_visit(candidate);
                out_events.push(Event::GooseMoved {
                    from,
                    to: candidate,
                    visits,
                });
            } else {
                out_events.push(Event::MoveRejected { at: from, direction });
            }

            // The exit check runs on every attempt, rejected ones included,
            // so standing on the exit always ends the session.
            if world.maze.grid().cell(world.goose) == Some(Cell::End) && !world.game_over {
                world.game_over = true;
                out_events.push(Event::ExitReached { at: world.goose });
            }
        }
        Command::SetGameOver { over } => {
            world.game_over = over;
            out_events.push(Event::GameOverSet { over });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use maze_nav_core::{Grid, Position};

    /// Provides read-only access to the session's maze layout.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        world.maze.grid()
    }

    /// Current position of the goose within the maze.
    #[must_use]
    pub fn goose_position(world: &World) -> Position {
        world.goose
    }

    /// Reports whether the session has ended.
    #[must_use]
    pub fn is_game_over(world: &World) -> bool {
        world.game_over
    }

    /// Captures a read-only view of the per-cell visit counts.
    #[must_use]
    pub fn visit_view(world: &World) -> VisitView<'_> {
        VisitView {
            counts: world.maze.visit_counts(),
            columns: world.maze.grid().columns(),
            rows: world.maze.grid().rows(),
        }
    }

    /// Read-only view into the dense visit-count grid.
    #[derive(Clone, Copy, Debug)]
    pub struct VisitView<'a> {
        counts: &'a [u32],
        columns: u32,
        rows: u32,
    }

    impl<'a> VisitView<'a> {
        /// Number of times the goose has moved into the provided cell.
        ///
        /// Out-of-bounds positions report zero.
        #[must_use]
        pub fn count(&self, position: Position) -> u32 {
            self.index(position)
                .and_then(|index| self.counts.get(index).copied())
                .unwrap_or(0)
        }

        /// Returns an iterator over all counts in row-major order.
        pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
            self.counts.iter().copied()
        }

        /// Provides the dimensions of the underlying visit-count grid.
        #[must_use]
        pub const fn dimensions(&self) -> (u32, u32) {
            (self.columns, self.rows)
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
}

/// Owns the immutable grid and the mutable visit counts that shadow it.
#[derive(Debug)]
struct Maze {
    grid: Grid,
    visits: Vec<u32>,
}

impl Maze {
    fn new(grid: Grid) -> Self {
        let capacity = grid.rows() as usize * grid.columns() as usize;
        Self {
            grid,
            visits: vec![0; capacity],
        }
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn visit_counts(&self) -> &[u32] {
        &self.visits
    }

    /// Scans in row-major order; the first start cell wins when a malformed
    /// maze carries several.
    fn find_start(&self) -> Result<Position, StartNotFound> {
        for row in 0..self.grid.rows() {
            for column in 0..self.grid.columns() {
                let position = Position::new(row as i32, column as i32);
                if self.grid.cell(position) == Some(Cell::Start) {
                    return Ok(position);
                }
            }
        }
        Err(StartNotFound)
    }

    /// Increments the cell's visit counter, returning the new count.
    ///
    /// Panics when the position is not traversable. Callers resolve
    /// traversability before committing a move, so a violation here is a
    /// programming error rather than a recoverable input condition.
    fn increment_visit(&mut self, position: Position) -> u32 {
        assert!(
            position.is_traversable(&self.grid),
            "visit count increment at non-traversable position ({}, {})",
            position.row(),
            position.column(),
        );

        let index = position.row() as usize * self.grid.columns() as usize
            + position.column() as usize;
        self.visits[index] += 1;
        self.visits[index]
    }
}
