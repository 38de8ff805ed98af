#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Maze file loading system that turns raw text into validated grids.
//!
//! A maze file starts with a header of two whitespace-separated positive
//! integers, the declared row and column counts, followed by exactly that
//! many data lines of exactly that many recognized cell symbols. Validation
//! failures are classified so callers can distinguish a missing file, a
//! malformed header, dimension disagreements, and unknown characters. A
//! failed load never yields a partially constructed grid.

use std::{fs, path::Path};

use maze_nav_core::{Cell, Grid, GridError};
use thiserror::Error;

/// Classified failures raised while loading a maze file.
#[derive(Debug, Error)]
pub enum MazeFileError {
    /// The input source could not be located or opened.
    ///
    /// Recoverable by retrying with a different source.
    #[error("maze file `{path}` could not be opened")]
    SourceNotFound {
        /// Path the caller attempted to open.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The header is unreadable or declares even dimensions.
    #[error("malformed maze: {0}")]
    MalformedFormat(String),
    /// Declared and actual row or column counts disagree.
    #[error("maze size mismatch: {0}")]
    SizeMismatch(String),
    /// A data line carries a character outside the recognized symbols.
    #[error("invalid character {character:?} at line {line}, column {column}")]
    InvalidCharacter {
        /// The unrecognized character.
        character: char,
        /// One-based line within the file, header included.
        line: usize,
        /// One-based column within the line.
        column: usize,
    },
}

/// Loads and validates the maze file at the provided path.
///
/// The file handle is released on every exit path; success and each failure
/// alike.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, MazeFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MazeFileError::SourceNotFound {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}

/// Parses and validates maze text that has already been read into memory.
pub fn parse(text: &str) -> Result<Grid, MazeFileError> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| MazeFileError::MalformedFormat("missing header line".to_owned()))?;
    let (declared_rows, declared_columns) = parse_header(header)?;

    // Parity is rejected before any row data is touched.
    if declared_rows % 2 == 0 || declared_columns % 2 == 0 {
        return Err(MazeFileError::MalformedFormat(format!(
            "declared dimensions {declared_rows}x{declared_columns} must both be odd",
        )));
    }

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(declared_rows);
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        let length = line.chars().count();
        if length != declared_columns {
            return Err(MazeFileError::SizeMismatch(format!(
                "line {line_number} holds {length} characters where {declared_columns} were declared",
            )));
        }

        let mut cells = Vec::with_capacity(declared_columns);
        for (index, symbol) in line.chars().enumerate() {
            let cell =
                Cell::from_symbol(symbol).ok_or(MazeFileError::InvalidCharacter {
                    character: symbol,
                    line: line_number,
                    column: index + 1,
                })?;
            cells.push(cell);
        }
        rows.push(cells);
    }

    if rows.len() != declared_rows {
        return Err(MazeFileError::SizeMismatch(format!(
            "{} data rows read where {declared_rows} were declared",
            rows.len(),
        )));
    }

    Grid::from_rows(rows).map_err(|error| match error {
        GridError::RaggedRow { .. } => MazeFileError::SizeMismatch(error.to_string()),
        GridError::EvenRowCount { .. } | GridError::EvenColumnCount { .. } => {
            MazeFileError::MalformedFormat(error.to_string())
        }
    })
}

fn parse_header(header: &str) -> Result<(usize, usize), MazeFileError> {
    let mut tokens = header.split_whitespace();
    let rows = tokens
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .filter(|rows| *rows > 0);
    let columns = tokens
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .filter(|columns| *columns > 0);

    match (rows, columns, tokens.next()) {
        (Some(rows), Some(columns), None) => Ok((rows, columns)),
        _ => Err(MazeFileError::MalformedFormat(format!(
            "header `{header}` must hold exactly two positive integers",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, MazeFileError};
    use maze_nav_core::{Cell, Position};

    const VALID: &str = "5 5\n#####\n#S  #\n#   #\n#  E#\n#####";

    #[test]
    fn valid_maze_matches_its_declared_dimensions() {
        let grid = parse(VALID).expect("maze is valid");
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Start));
        assert_eq!(grid.cell(Position::new(3, 3)), Some(Cell::End));
        assert_eq!(grid.cell(Position::new(0, 0)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(1, 2)), Some(Cell::Path));
    }

    #[test]
    fn trailing_newline_is_tolerated() {
        let grid = parse("3 3\n###\n#S#\n###\n").expect("maze is valid");
        assert_eq!(grid.rows(), 3);
    }

    #[test]
    fn dot_cells_are_recognized() {
        let grid = parse("3 3\n###\n#.#\n###").expect("maze is valid");
        assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Dot));
    }

    #[test]
    fn even_row_count_is_malformed() {
        let result = parse("4 5\n#####\n#S  #\n#  E#\n#####");
        assert!(matches!(result, Err(MazeFileError::MalformedFormat(_))));
    }

    #[test]
    fn even_column_count_is_malformed() {
        let result = parse("5 4\n####\n#S #\n#  #\n# E#\n####");
        assert!(matches!(result, Err(MazeFileError::MalformedFormat(_))));
    }

    #[test]
    fn parity_is_checked_before_row_data() {
        // Rows full of garbage must not surface as InvalidCharacter.
        let result = parse("4 4\nzzzz\nzzzz\nzzzz\nzzzz");
        assert!(matches!(result, Err(MazeFileError::MalformedFormat(_))));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(
            parse(""),
            Err(MazeFileError::MalformedFormat(_))
        ));
    }

    #[test]
    fn header_must_hold_exactly_two_integers() {
        for header in ["5", "5 5 5", "five 5", "-5 5", "0 5", "5 0", ""] {
            let result = parse(&format!("{header}\n###\n#S#\n###"));
            assert!(
                matches!(result, Err(MazeFileError::MalformedFormat(_))),
                "header `{header}` should be rejected as malformed",
            );
        }
    }

    #[test]
    fn short_line_is_a_size_mismatch() {
        let result = parse("3 3\n###\n#S\n###");
        assert!(matches!(result, Err(MazeFileError::SizeMismatch(_))));
    }

    #[test]
    fn long_line_is_a_size_mismatch() {
        let result = parse("3 3\n###\n#S  #\n###");
        assert!(matches!(result, Err(MazeFileError::SizeMismatch(_))));
    }

    #[test]
    fn missing_rows_are_a_size_mismatch() {
        let result = parse("5 3\n###\n#S#\n###");
        assert!(matches!(result, Err(MazeFileError::SizeMismatch(_))));
    }

    #[test]
    fn extra_rows_are_a_size_mismatch() {
        let result = parse("3 3\n###\n#S#\n###\n###");
        assert!(matches!(result, Err(MazeFileError::SizeMismatch(_))));
    }

    #[test]
    fn unrecognized_character_is_reported_with_its_location() {
        let result = parse("3 3\n###\n#X#\n###");
        match result {
            Err(MazeFileError::InvalidCharacter {
                character,
                line,
                column,
            }) => {
                assert_eq!(character, 'X');
                assert_eq!(line, 3);
                assert_eq!(column, 2);
            }
            other => panic!("expected InvalidCharacter, got {other:?}"),
        }
    }

    #[test]
    fn line_length_is_checked_before_characters() {
        // A short line full of garbage is a size mismatch, not a character error.
        let result = parse("3 3\n###\nzz\n###");
        assert!(matches!(result, Err(MazeFileError::SizeMismatch(_))));
    }
}
