//! Command-line front end for the Polybius and Bifid ciphers
//!
//! The binary either generates a fresh square and exits, or loads a square
//! and runs the interactive `+`/`-` prompt over standard input.

pub mod args;
pub mod generate;
pub mod session;
