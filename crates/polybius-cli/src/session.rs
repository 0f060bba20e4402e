//! Line-at-a-time encrypt/decrypt loop
//!
//! Each input line starts with `+` (encrypt) or `-` (decrypt) followed by
//! the message. Bad sigils and recoverable cipher errors are reported and the
//! loop keeps reading; end of input, an I/O failure or a cipher error that
//! is not recoverable ends it.

use anyhow::Result;
use polybius_core::{Cipher, Square};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const SEPARATOR: &str = "------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Encrypt(&'a str),
    Decrypt(&'a str),
    Invalid,
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(message) = line.strip_prefix('+') {
            Command::Encrypt(message)
        } else if let Some(message) = line.strip_prefix('-') {
            Command::Decrypt(message)
        } else {
            Command::Invalid
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub encrypted: usize,
    pub decrypted: usize,
    pub rejected: usize,
}

pub struct Session<'a> {
    square: &'a Square,
    cipher: Box<dyn Cipher>,
}

impl<'a> Session<'a> {
    pub fn new(square: &'a Square, cipher: Box<dyn Cipher>) -> Self {
        Self { square, cipher }
    }

    pub async fn run<R, W>(&self, mut reader: R, writer: &mut W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            writer
                .write_all(format!("{}\ninput  > ", SEPARATOR).as_bytes())
                .await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                writer.write_all(b"\n").await?;
                break;
            }
            // Invalid UTF-8 becomes U+FFFD, which no square can represent.
            let line = String::from_utf8_lossy(&buf);

            let result = match Command::parse(&line) {
                Command::Encrypt(message) => {
                    writer.write_all("🔐 Encrypting message...\n".as_bytes()).await?;
                    summary.encrypted += 1;
                    self.cipher.encrypt(message, self.square)
                }
                Command::Decrypt(message) => {
                    writer.write_all("🔓 Decrypting message...\n".as_bytes()).await?;
                    summary.decrypted += 1;
                    self.cipher.decrypt(message, self.square)
                }
                Command::Invalid => {
                    summary.rejected += 1;
                    writer
                        .write_all(
                            b"Missing operation. The very first character must be either '+' for encryption or '-' for decryption.\n\
                              Example: +HELLO or -YUOYO\n",
                        )
                        .await?;
                    continue;
                }
            };

            match result {
                Ok(output) => {
                    writer
                        .write_all(format!("output > {}\n", output).as_bytes())
                        .await?
                }
                Err(e) if e.is_recoverable() => {
                    log::warn!("{} rejected input: {}", self.cipher.name(), e);
                    writer
                        .write_all(format!("error  > {}\n", e).as_bytes())
                        .await?
                }
                Err(e) => {
                    log::error!("{} failed: {}", self.cipher.name(), e);
                    writer.flush().await?;
                    return Err(e.into());
                }
            }
            writer
                .write_all(format!("{}\n", SEPARATOR).as_bytes())
                .await?;
        }

        writer.flush().await?;
        log::info!(
            "Session ended: {} encrypted, {} decrypted, {} rejected",
            summary.encrypted,
            summary.decrypted,
            summary.rejected
        );
        Ok(summary)
    }
}
