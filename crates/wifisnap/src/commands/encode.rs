//! `wifisnap uri` / `wifisnap payload` -- print the wire encodings.

use wifisnap_core::encode;

use crate::cli::CredentialArgs;
use crate::error::CliError;

pub fn uri(args: &CredentialArgs) -> Result<(), CliError> {
    let uri = encode::join_uri(&args.credentials())?;
    println!("{uri}");
    Ok(())
}

pub fn payload(args: &CredentialArgs) -> Result<(), CliError> {
    let payload = encode::qr_payload(&args.credentials())?;
    println!("{payload}");
    Ok(())
}
