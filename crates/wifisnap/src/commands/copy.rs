//! `wifisnap copy` -- fire-and-forget clipboard copy of extracted text.

use arboard::Clipboard;

use crate::cli::CopyArgs;
use crate::error::CliError;

pub fn handle(args: &CopyArgs) -> Result<(), CliError> {
    let text = super::read_input(args.file.as_deref())?;

    let mut clipboard = Clipboard::new().map_err(|err| CliError::Clipboard {
        reason: err.to_string(),
    })?;
    clipboard
        .set_text(text)
        .map_err(|err| CliError::Clipboard {
            reason: err.to_string(),
        })?;

    println!("Copied to clipboard");
    Ok(())
}
