#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Maze Navigator in the terminal.
//!
//! Loads the maze named on the command line, then loops: render a frame,
//! read one key from stdin, translate it into a world command, apply it, and
//! surface notices for the resulting events. The loop ends when the session
//! is over or stdin is exhausted.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use maze_nav_core::{Command, Direction, Event, WELCOME_BANNER};
use maze_nav_rendering::{ansi_frame, frame_lines};
use maze_nav_world::{self as world, query, World};

/// Command-line arguments accepted by the maze-nav binary.
#[derive(Debug, Parser)]
#[command(name = "maze-nav", about = "Navigate a goose through a maze")]
struct Args {
    /// Path to the maze file to load.
    maze: PathBuf,
    /// Render plain glyphs instead of ANSI-colored tiles.
    #[arg(long)]
    plain: bool,
}

/// Entry point for the Maze Navigator command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    let grid = maze_nav_system_loader::load(&args.maze)
        .with_context(|| format!("failed to load maze from `{}`", args.maze.display()))?;
    let session = World::new(grid).context("maze cannot host a session")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(session, stdin.lock(), &mut stdout.lock(), args.plain)
}

fn run(
    mut session: World,
    mut input: impl BufRead,
    output: &mut impl Write,
    plain: bool,
) -> Result<()> {
    writeln!(output, "{WELCOME_BANNER}")?;

    let mut events = Vec::new();
    while !query::is_game_over(&session) {
        render(&session, output, plain)?;
        writeln!(output, "Enter a move (w/a/s/d) or q to quit: ")?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed; treat it like quitting.
            break;
        }

        let Some(command) = command_for(line.trim()) else {
            writeln!(output, "please enter a valid move")?;
            continue;
        };

        events.clear();
        world::apply(&mut session, command, &mut events);
        for event in &events {
            match event {
                Event::MoveRejected { .. } => writeln!(output, "Invalid move!")?,
                Event::ExitReached { .. } => {
                    render(&session, output, plain)?;
                    writeln!(output, "Congratulations! You've reached the exit!")?;
                }
                Event::GooseMoved { .. } | Event::GameOverSet { .. } => {}
            }
        }
    }

    Ok(())
}

fn render(session: &World, output: &mut impl Write, plain: bool) -> Result<()> {
    if plain {
        for line in frame_lines(session) {
            writeln!(output, "{line}")?;
        }
    } else {
        write!(output, "{}", ansi_frame(session))?;
    }
    Ok(())
}

/// Translates one trimmed input line into a world command.
///
/// Exactly one character is accepted: `w`/`a`/`s`/`d` move the goose and `q`
/// ends the session. Anything else yields no command and earns the caller a
/// prompt to try again.
fn command_for(input: &str) -> Option<Command> {
    let mut chars = input.chars();
    let key = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if key == 'q' {
        return Some(Command::SetGameOver { over: true });
    }
    Direction::from_key(key).map(|direction| Command::MoveGoose { direction })
}

#[cfg(test)]
mod tests {
    use super::{command_for, run};
    use maze_nav_core::{Cell, Command, Direction, Grid};
    use maze_nav_world::World;
    use std::io::Cursor;

    fn session(rows: &[&str]) -> World {
        let cells = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|symbol| Cell::from_symbol(symbol).expect("recognized symbol"))
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(cells).expect("valid grid shape");
        World::new(grid).expect("grid contains a start cell")
    }

    #[test]
    fn keys_translate_to_commands() {
        assert_eq!(
            command_for("w"),
            Some(Command::MoveGoose {
                direction: Direction::Up,
            })
        );
        assert_eq!(
            command_for("s"),
            Some(Command::MoveGoose {
                direction: Direction::Down,
            })
        );
        assert_eq!(
            command_for("a"),
            Some(Command::MoveGoose {
                direction: Direction::Left,
            })
        );
        assert_eq!(
            command_for("d"),
            Some(Command::MoveGoose {
                direction: Direction::Right,
            })
        );
        assert_eq!(command_for("q"), Some(Command::SetGameOver { over: true }));
        assert_eq!(command_for(""), None);
        assert_eq!(command_for("x"), None);
        assert_eq!(command_for("ws"), None);
    }

    #[test]
    fn session_plays_through_to_the_exit() {
        let world = session(&["#####", "#S  #", "#   #", "#  E#", "#####"]);
        let input = Cursor::new("s\ns\nd\nd\n");
        let mut output = Vec::new();

        run(world, input, &mut output, true).expect("session runs to completion");

        let transcript = String::from_utf8(output).expect("utf-8 output");
        assert!(transcript.contains("Welcome to Maze Navigator."));
        assert!(transcript.contains("Congratulations! You've reached the exit!"));
        assert!(!transcript.contains("Invalid move!"));
    }

    #[test]
    fn wall_bumps_and_bad_keys_earn_notices() {
        let world = session(&["#####", "#S  #", "#   #", "#  E#", "#####"]);
        let input = Cursor::new("w\nz\nq\n");
        let mut output = Vec::new();

        run(world, input, &mut output, true).expect("session runs to completion");

        let transcript = String::from_utf8(output).expect("utf-8 output");
        assert!(transcript.contains("Invalid move!"));
        assert!(transcript.contains("please enter a valid move"));
        assert!(!transcript.contains("Congratulations"));
    }

    #[test]
    fn exhausted_input_ends_the_loop() {
        let world = session(&["###", "#S#", "###"]);
        let input = Cursor::new("");
        let mut output = Vec::new();

        run(world, input, &mut output, true).expect("session tolerates closed stdin");
    }
}
