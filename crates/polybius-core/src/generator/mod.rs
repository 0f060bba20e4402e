//! Random square generation
//!
//! A fresh merged square is a random permutation of the 26 letter indices
//! with `J` dropped, laid out row-major. The permutation comes from a
//! [`RandomSource`]; any short, out-of-range or repeating answer aborts
//! generation instead of producing a broken square.

use crate::errors::CipherError;
use crate::square::{Square, SquareVariant, SQUARE_SIZE};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod random_org;

pub use random_org::RandomOrgClient;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Index of `J`, which shares the `I` cell.
const J_INDEX: i64 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerRequest {
    pub n: usize,
    pub min: i64,
    pub max: i64,
    pub replacement: bool,
}

#[async_trait]
pub trait RandomSource: Send + Sync {
    async fn generate_integers(&self, request: IntegerRequest) -> Result<Vec<i64>, CipherError>;
}

pub struct SquareGenerator {
    source: Box<dyn RandomSource>,
}

impl SquareGenerator {
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    pub async fn generate(&self) -> Result<Square, CipherError> {
        let alphabet: Vec<char> = ALPHABET.chars().collect();
        let request = IntegerRequest {
            n: alphabet.len(),
            min: 0,
            max: alphabet.len() as i64 - 1,
            replacement: false,
        };

        let drawn = self.source.generate_integers(request).await?;
        Self::check_permutation(&drawn, alphabet.len())?;

        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        for (i, index) in drawn.into_iter().filter(|&v| v != J_INDEX).enumerate() {
            cells[i / SQUARE_SIZE][i % SQUARE_SIZE] = alphabet[index as usize];
        }

        let square = Square::new(cells, SquareVariant::Merged)?;
        log::info!("Generated random square:\n{}", square);
        Ok(square)
    }

    fn check_permutation(drawn: &[i64], amount: usize) -> Result<(), CipherError> {
        if drawn.len() != amount {
            return Err(CipherError::Generator(format!(
                "expected {} random integers, received {}",
                amount,
                drawn.len()
            )));
        }

        let mut seen = HashSet::with_capacity(amount);
        for &value in drawn {
            if value < 0 || value >= amount as i64 {
                return Err(CipherError::Generator(format!(
                    "random integer {} is outside [0, {}]",
                    value,
                    amount - 1
                )));
            }
            if !seen.insert(value) {
                return Err(CipherError::Generator(format!(
                    "random integer {} was drawn twice",
                    value
                )));
            }
        }
        Ok(())
    }
}

/// Writes `square` to `dir/polybius_<unix-timestamp>.json` and returns the
/// path. The directory is created if missing; an existing file is never
/// overwritten.
pub async fn persist_square(square: &Square, dir: &Path) -> Result<PathBuf, CipherError> {
    fs::create_dir_all(dir).await?;

    let file_name = format!("polybius_{}.json", chrono::Utc::now().timestamp());
    let path = dir.join(file_name);
    let json = serde_json::to_string(&square.to_rows())
        .map_err(|e| CipherError::Generator(format!("Failed to encode square: {}", e)))?;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
        .map_err(|e| CipherError::Io(format!("{}: {}", path.display(), e)))?;
    file.write_all(json.as_bytes()).await?;
    file.flush().await?;

    log::info!("Wrote square to {}", path.display());
    Ok(path)
}
