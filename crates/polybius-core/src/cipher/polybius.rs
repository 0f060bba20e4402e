//! Plain Polybius substitution: every symbol becomes its 1-based row and
//! column digits, so `H` in the standard square is written `23`.

use crate::cipher::Cipher;
use crate::errors::CipherError;
use crate::square::{Coordinate, Square};

#[derive(Debug, Clone, Copy, Default)]
pub struct PolybiusCipher;

impl PolybiusCipher {
    fn digit_value(symbol: char, position: usize) -> Result<usize, CipherError> {
        match symbol.to_digit(10) {
            Some(d @ 1..=5) => Ok(d as usize - 1),
            _ => Err(CipherError::InvalidCoordinateDigit { symbol, position }),
        }
    }
}

impl Cipher for PolybiusCipher {
    fn name(&self) -> &'static str {
        "polybius"
    }

    fn encrypt(&self, plaintext: &str, square: &Square) -> Result<String, CipherError> {
        let coordinates = square.locate_all(plaintext)?;
        let mut out = String::with_capacity(coordinates.len() * 2);
        for c in coordinates {
            out.push_str(&format!("{}{}", c.row() + 1, c.column() + 1));
        }
        Ok(out)
    }

    /// Whitespace between digit pairs is ignored.
    fn decrypt(&self, ciphertext: &str, square: &Square) -> Result<String, CipherError> {
        let digits: Vec<(usize, char)> = ciphertext
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .collect();

        if digits.len() % 2 != 0 {
            return Err(CipherError::OddCoordinateCount(digits.len()));
        }

        digits
            .chunks_exact(2)
            .map(|pair| -> Result<char, CipherError> {
                let (row_pos, row_sym) = pair[0];
                let (col_pos, col_sym) = pair[1];
                let row = Self::digit_value(row_sym, row_pos)?;
                let column = Self::digit_value(col_sym, col_pos)?;
                Ok(square.symbol_at(Coordinate::new(row, column)?))
            })
            .collect()
    }
}
