//! Argument definitions for the `wifisnap` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use wifisnap_core::Credentials;

#[derive(Debug, Parser)]
#[command(
    name = "wifisnap",
    version,
    about = "Turn a photographed WiFi card into a join trigger and a scannable QR code",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract WiFi credentials from OCR text (file or stdin)
    Scan(ScanArgs),
    /// Print the platform join URI for a network
    Uri(CredentialArgs),
    /// Print the QR-for-WiFi payload text for a network
    Payload(CredentialArgs),
    /// Ask the OS to join the network and report the outcome
    Join(JoinArgs),
    /// Render the WiFi QR code to a PNG file
    Qr(QrArgs),
    /// Copy extracted text to the clipboard (file or stdin)
    Copy(CopyArgs),
}

/// The credential pair shared by every encoding command.
#[derive(Debug, Args)]
pub struct CredentialArgs {
    /// Network name (SSID)
    #[arg(long)]
    pub ssid: String,

    /// Network password; omit for an open network
    #[arg(long, default_value = "")]
    pub password: String,
}

impl CredentialArgs {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.ssid.clone(), self.password.clone())
    }
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// OCR text file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Emit the extracted credentials as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct JoinArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Exit right after dispatching instead of waiting for the fallback hint
    #[arg(long)]
    pub no_wait: bool,
}

#[derive(Debug, Args)]
pub struct QrArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Output path; defaults to the derived `wifi-<ssid>.png`
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Text file to copy; reads stdin when omitted
    pub file: Option<PathBuf>,
}
