//! Error types for square loading, ciphering and square generation
//!
//! Failures are grouped by where they come from: configuration and square
//! files are fatal at startup, lookup and coordinate errors belong to a single
//! encrypt/decrypt call, and random-service errors abort square generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid square: {0}")]
    InvalidSquare(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Character '{symbol}' at position {position} is not representable in the square")]
    NotRepresentable { symbol: char, position: usize },
    #[error("Coordinate ({row}, {column}) is outside the 5x5 square")]
    CoordinateOutOfRange { row: usize, column: usize },
    #[error("Coordinate text must contain an even number of digits, got {0}")]
    OddCoordinateCount(usize),
    #[error("Invalid coordinate digit '{symbol}' at position {position}, expected 1-5")]
    InvalidCoordinateDigit { symbol: char, position: usize },
    #[error("Random service request failed: {0}")]
    RandomService(String),
    #[error("Square generation failed: {0}")]
    Generator(String),
}

impl CipherError {
    /// Whether the interactive loop can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CipherError::NotRepresentable { .. }
                | CipherError::OddCoordinateCount(_)
                | CipherError::InvalidCoordinateDigit { .. }
        )
    }
}

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        CipherError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for CipherError {
    fn from(err: reqwest::Error) -> Self {
        CipherError::RandomService(err.to_string())
    }
}
