//! Cipher engines over a Polybius square
//!
//! Both engines take the square by reference on every call; nothing about a
//! square is cached between calls.

use crate::errors::CipherError;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod bifid;
pub mod polybius;

pub use bifid::BifidCipher;
pub use polybius::PolybiusCipher;

pub trait Cipher: Send + Sync {
    fn name(&self) -> &'static str;
    fn encrypt(&self, plaintext: &str, square: &Square) -> Result<String, CipherError>;
    fn decrypt(&self, ciphertext: &str, square: &Square) -> Result<String, CipherError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    #[default]
    Bifid,
    Polybius,
}

impl CipherKind {
    pub fn cipher(&self) -> Box<dyn Cipher> {
        match self {
            CipherKind::Bifid => Box::new(BifidCipher),
            CipherKind::Polybius => Box::new(PolybiusCipher),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cipher().name())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bifid" => Ok(CipherKind::Bifid),
            "polybius" => Ok(CipherKind::Polybius),
            other => Err(CipherError::ConfigError(format!(
                "Unknown cipher '{}', expected 'bifid' or 'polybius'",
                other
            ))),
        }
    }
}
