//! `wifisnap scan` -- run the extraction heuristic over OCR text.

use owo_colors::OwoColorize;

use crate::cli::ScanArgs;
use crate::error::CliError;

pub fn handle(args: &ScanArgs) -> Result<(), CliError> {
    let text = super::read_input(args.file.as_deref())?;

    let Some(credentials) = wifisnap_extract::extract(&text) else {
        return Err(CliError::NothingExtracted);
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&credentials).map_err(std::io::Error::other)?
        );
    } else {
        println!("{} {}", "Network: ".bold(), credentials.ssid);
        println!("{} {}", "Password:".bold(), credentials.password);
    }
    Ok(())
}
