//! Bifid fractionation over a 5x5 square
//!
//! Encryption collects every row index, then every column index, and reads
//! the combined stream back two at a time as new (row, column) pairs.
//! Decryption interleaves each ciphertext symbol's row and column and splits
//! that stream at its midpoint. The combined stream always has `2N` entries,
//! so the split is exact for every message length, odd lengths included.

use crate::cipher::Cipher;
use crate::errors::CipherError;
use crate::square::{Coordinate, Square};

#[derive(Debug, Clone, Copy, Default)]
pub struct BifidCipher;

impl BifidCipher {
    /// Rows of every coordinate followed by columns of every coordinate.
    fn fractionate(coordinates: &[Coordinate]) -> Vec<usize> {
        coordinates
            .iter()
            .map(Coordinate::row)
            .chain(coordinates.iter().map(Coordinate::column))
            .collect()
    }

    /// Reads consecutive entries of `stream` as (row, column) pairs.
    fn group_pairs(stream: &[usize]) -> Result<Vec<Coordinate>, CipherError> {
        stream
            .chunks_exact(2)
            .map(|pair| Coordinate::new(pair[0], pair[1]))
            .collect()
    }
}

impl Cipher for BifidCipher {
    fn name(&self) -> &'static str {
        "bifid"
    }

    fn encrypt(&self, plaintext: &str, square: &Square) -> Result<String, CipherError> {
        let coordinates = square.locate_all(plaintext)?;
        let stream = Self::fractionate(&coordinates);
        log::debug!("bifid encrypt: {} coordinates fractionated", stream.len());

        let pairs = Self::group_pairs(&stream)?;
        Ok(pairs.into_iter().map(|c| square.symbol_at(c)).collect())
    }

    fn decrypt(&self, ciphertext: &str, square: &Square) -> Result<String, CipherError> {
        let coordinates = square.locate_all(ciphertext)?;
        let combined: Vec<usize> = coordinates
            .iter()
            .flat_map(|c| [c.row(), c.column()])
            .collect();
        log::debug!("bifid decrypt: {} coordinates recombined", combined.len());

        let (rows, columns) = combined.split_at(coordinates.len());
        rows.iter()
            .zip(columns)
            .map(|(&row, &column)| Coordinate::new(row, column).map(|c| square.symbol_at(c)))
            .collect()
    }
}
