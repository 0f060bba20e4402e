//! The 5x5 Polybius square and its coordinate mapper
//!
//! A [`Square`] is validated once when it is built and never changes after
//! that: 5 rows of 5 single-character cells, every symbol distinct. The
//! [`SquareVariant`] decides whether `J` shares the `I` cell or is looked up
//! as a symbol of its own.

use crate::errors::CipherError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of rows and columns in a square.
pub const SQUARE_SIZE: usize = 5;

const STANDARD_LAYOUT: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareVariant {
    /// `I` and `J` share one cell; input `J` is looked up as `I`.
    #[default]
    Merged,
    /// Every symbol is looked up as-is.
    Strict,
}

impl SquareVariant {
    /// Folds a symbol into the form it is stored under in the square.
    pub fn normalize(&self, symbol: char) -> char {
        let upper = symbol.to_ascii_uppercase();
        match self {
            SquareVariant::Merged if upper == 'J' => 'I',
            _ => upper,
        }
    }

    /// Applies [`normalize`](Self::normalize) to every character of `text`.
    pub fn normalize_text(&self, text: &str) -> String {
        text.chars().map(|c| self.normalize(c)).collect()
    }
}

impl fmt::Display for SquareVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareVariant::Merged => write!(f, "merged"),
            SquareVariant::Strict => write!(f, "strict"),
        }
    }
}

/// A (row, column) position inside the square, both in `[0, 5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: usize,
    column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Result<Self, CipherError> {
        if row >= SQUARE_SIZE || column >= SQUARE_SIZE {
            return Err(CipherError::CoordinateOutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    cells: [[char; SQUARE_SIZE]; SQUARE_SIZE],
    variant: SquareVariant,
}

impl Square {
    /// Builds a square from a grid of symbols, upper-casing every cell.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidSquare`] when a symbol appears twice, or
    /// when a merged square holds a `J` cell (it could never be reached).
    pub fn new(
        cells: [[char; SQUARE_SIZE]; SQUARE_SIZE],
        variant: SquareVariant,
    ) -> Result<Self, CipherError> {
        let mut cells = cells;
        let mut seen = HashSet::with_capacity(SQUARE_SIZE * SQUARE_SIZE);

        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = cell.to_ascii_uppercase();
                if cell.is_whitespace() {
                    return Err(CipherError::InvalidSquare(format!(
                        "cell ({}, {}) is blank",
                        r, c
                    )));
                }
                if variant == SquareVariant::Merged && *cell == 'J' {
                    return Err(CipherError::InvalidSquare(format!(
                        "cell ({}, {}) holds 'J', which a merged square folds into 'I'",
                        r, c
                    )));
                }
                if !seen.insert(*cell) {
                    return Err(CipherError::InvalidSquare(format!(
                        "symbol '{}' appears more than once (again at ({}, {}))",
                        cell, r, c
                    )));
                }
            }
        }

        Ok(Self { cells, variant })
    }

    /// Builds a square from rows of one-character strings, the shape used by
    /// square files.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[Vec<S>],
        variant: SquareVariant,
    ) -> Result<Self, CipherError> {
        if rows.len() != SQUARE_SIZE {
            return Err(CipherError::InvalidSquare(format!(
                "expected {} rows, found {}",
                SQUARE_SIZE,
                rows.len()
            )));
        }

        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SQUARE_SIZE {
                return Err(CipherError::InvalidSquare(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    SQUARE_SIZE
                )));
            }
            for (c, cell) in row.iter().enumerate() {
                let mut chars = cell.as_ref().chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => cells[r][c] = symbol,
                    _ => {
                        return Err(CipherError::InvalidSquare(format!(
                            "cell ({}, {}) must hold exactly one character, found {:?}",
                            r,
                            c,
                            cell.as_ref()
                        )))
                    }
                }
            }
        }

        Self::new(cells, variant)
    }

    /// Builds a square by filling `layout` row-major.
    pub fn from_layout(layout: &str, variant: SquareVariant) -> Result<Self, CipherError> {
        let symbols: Vec<char> = layout.chars().collect();
        if symbols.len() != SQUARE_SIZE * SQUARE_SIZE {
            return Err(CipherError::InvalidSquare(format!(
                "layout must have {} symbols, found {}",
                SQUARE_SIZE * SQUARE_SIZE,
                symbols.len()
            )));
        }

        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        for (i, symbol) in symbols.into_iter().enumerate() {
            cells[i / SQUARE_SIZE][i % SQUARE_SIZE] = symbol;
        }
        Self::new(cells, variant)
    }

    /// The textbook merged square `ABCDE / FGHIK / LMNOP / QRSTU / VWXYZ`.
    pub fn standard() -> Self {
        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        for (i, symbol) in STANDARD_LAYOUT.chars().enumerate() {
            cells[i / SQUARE_SIZE][i % SQUARE_SIZE] = symbol;
        }
        Self {
            cells,
            variant: SquareVariant::Merged,
        }
    }

    pub fn variant(&self) -> SquareVariant {
        self.variant
    }

    /// Finds the cell holding `symbol`, after variant normalization.
    pub fn locate(&self, symbol: char) -> Option<Coordinate> {
        let target = self.variant.normalize(symbol);
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&cell| cell == target)
                .map(|column| Coordinate { row, column })
        })
    }

    /// Locates every character of `text` in order.
    ///
    /// # Errors
    /// Returns [`CipherError::NotRepresentable`] for the first character that
    /// has no cell, with its character position in `text`.
    pub fn locate_all(&self, text: &str) -> Result<Vec<Coordinate>, CipherError> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.locate(symbol)
                    .ok_or(CipherError::NotRepresentable { symbol, position })
            })
            .collect()
    }

    pub fn symbol_at(&self, coordinate: Coordinate) -> char {
        self.cells[coordinate.row][coordinate.column]
    }

    /// Rows of one-character strings, the shape written to square files.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_square_layout() {
        let square = Square::standard();
        assert_eq!(square.variant(), SquareVariant::Merged);
        assert_eq!(square.symbol_at(Coordinate::new(0, 0).unwrap()), 'A');
        assert_eq!(square.symbol_at(Coordinate::new(1, 3).unwrap()), 'I');
        assert_eq!(square.symbol_at(Coordinate::new(4, 4).unwrap()), 'Z');
    }

    #[test]
    fn test_locate_finds_row_and_column() {
        let square = Square::standard();
        assert_eq!(square.locate('H'), Some(Coordinate::new(1, 2).unwrap()));
        assert_eq!(square.locate('E'), Some(Coordinate::new(0, 4).unwrap()));
        assert_eq!(square.locate('O'), Some(Coordinate::new(2, 3).unwrap()));
    }

    #[test]
    fn test_locate_folds_j_into_i_when_merged() {
        let square = Square::standard();
        assert_eq!(square.locate('J'), square.locate('I'));
        assert_eq!(square.locate('j'), square.locate('I'));
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let square = Square::standard();
        assert_eq!(square.locate('h'), square.locate('H'));
    }

    #[test]
    fn test_locate_miss_returns_none() {
        let square = Square::standard();
        assert_eq!(square.locate('7'), None);
        assert_eq!(square.locate(' '), None);
    }

    #[test]
    fn test_strict_square_keeps_j_distinct() {
        let square = Square::from_layout("ABCDEFGHIJLMNOPQRSTUVWXYZ", SquareVariant::Strict).unwrap();
        assert_eq!(square.locate('J'), Some(Coordinate::new(1, 4).unwrap()));
        assert_eq!(square.locate('I'), Some(Coordinate::new(1, 3).unwrap()));
        assert_eq!(square.locate('K'), None);
    }

    #[test]
    fn test_locate_all_reports_position_of_miss() {
        let square = Square::standard();
        let err = square.locate_all("HEL1O").unwrap_err();
        assert_eq!(
            err,
            CipherError::NotRepresentable {
                symbol: '1',
                position: 3
            }
        );
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let result = Square::from_layout("ABCDEFGHIKLMNOPQRSTUVWXYA", SquareVariant::Merged);
        assert!(matches!(result, Err(CipherError::InvalidSquare(_))));
    }

    #[test]
    fn test_j_cell_rejected_in_merged_square() {
        let result = Square::from_layout("ABCDEFGHJKLMNOPQRSTUVWXYZ", SquareVariant::Merged);
        assert!(matches!(result, Err(CipherError::InvalidSquare(_))));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        let short: Vec<Vec<&str>> = vec![vec!["A", "B", "C", "D", "E"]; 4];
        assert!(Square::from_rows(&short, SquareVariant::Merged).is_err());

        let mut rows = Square::standard().to_rows();
        rows[2].pop();
        assert!(Square::from_rows(&rows, SquareVariant::Merged).is_err());

        let mut rows = Square::standard().to_rows();
        rows[0][0] = "AB".to_string();
        assert!(Square::from_rows(&rows, SquareVariant::Merged).is_err());

        let mut rows = Square::standard().to_rows();
        rows[0][0] = String::new();
        assert!(Square::from_rows(&rows, SquareVariant::Merged).is_err());
    }

    #[test]
    fn test_from_rows_uppercases_cells() {
        let rows: Vec<Vec<String>> = Square::standard()
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.to_lowercase()).collect())
            .collect();
        let square = Square::from_rows(&rows, SquareVariant::Merged).unwrap();
        assert_eq!(square, Square::standard());
    }

    #[test]
    fn test_coordinate_range_checked() {
        assert!(Coordinate::new(4, 4).is_ok());
        assert_eq!(
            Coordinate::new(5, 0),
            Err(CipherError::CoordinateOutOfRange { row: 5, column: 0 })
        );
    }

    #[test]
    fn test_display_renders_grid() {
        let rendered = Square::standard().to_string();
        assert_eq!(rendered.lines().next(), Some("A B C D E"));
        assert_eq!(rendered.lines().count(), 5);
    }
}
