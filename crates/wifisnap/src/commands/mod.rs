//! Subcommand handlers.

pub mod copy;
pub mod encode;
pub mod join;
pub mod qr;
pub mod scan;

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Read input text from a file argument or stdin.
pub fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
