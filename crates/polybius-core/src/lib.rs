//! Polybius square and Bifid field ciphers.
//!
//! This crate holds everything below the command line: the validated 5x5
//! [`Square`], the coordinate mapper on it, the two cipher engines, the
//! loaders for square and settings files, and random square generation
//! backed by the RANDOM.ORG JSON-RPC service.
//!
//! # Example
//!
//! ```
//! use polybius_core::{BifidCipher, Cipher, Square};
//!
//! let square = Square::standard();
//! let ciphertext = BifidCipher.encrypt("HELLO", &square).unwrap();
//! assert_eq!(ciphertext, "FNNVD");
//! assert_eq!(BifidCipher.decrypt(&ciphertext, &square).unwrap(), "HELLO");
//! ```

pub mod cipher;
pub mod config;
pub mod errors;
pub mod generator;
pub mod square;

pub use cipher::{BifidCipher, Cipher, CipherKind, PolybiusCipher};
pub use config::{ConfigLoader, GeneratorConfig, SquareLoader, ToolConfig};
pub use errors::CipherError;
pub use generator::{persist_square, RandomOrgClient, RandomSource, SquareGenerator};
pub use square::{Coordinate, Square, SquareVariant, SQUARE_SIZE};

#[cfg(test)]
pub mod test_utils;
