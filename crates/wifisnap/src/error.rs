//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use wifisnap_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const ENCODING: i32 = 3;
    pub const NOTHING_EXTRACTED: i32 = 4;
    pub const JOIN_FAILED: i32 = 5;
    pub const CLIPBOARD: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Network name is required")]
    #[diagnostic(
        code(wifisnap::empty_ssid),
        help("Pass --ssid <NAME>, or fix the network name and try again.")
    )]
    EmptyNetworkName,

    #[error("Failed to generate QR code: {reason}")]
    #[diagnostic(
        code(wifisnap::encoding_failure),
        help("The payload was rejected by the QR encoder. Shorter credentials usually fix this.")
    )]
    Encoding { reason: String },

    #[error("No WiFi credentials found in the input")]
    #[diagnostic(
        code(wifisnap::nothing_extracted),
        help(
            "The text needs an SSID line (e.g. `Network: MyWifi`) or a printed WIFI: payload.\n\
             Re-run OCR on a sharper image, or pass --ssid/--password explicitly."
        )
    )]
    NothingExtracted,

    #[error("{reason}")]
    #[diagnostic(
        code(wifisnap::join_failed),
        help("Open your WiFi settings and join the network manually.")
    )]
    JoinFailed { reason: String },

    #[error("Clipboard unavailable: {reason}")]
    #[diagnostic(code(wifisnap::clipboard))]
    Clipboard { reason: String },

    #[error("Configuration error")]
    #[diagnostic(code(wifisnap::config))]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    #[diagnostic(code(wifisnap::io))]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyNetworkName => Self::EmptyNetworkName,
            CoreError::EncodingFailure { reason } => Self::Encoding { reason },
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyNetworkName | Self::Encoding { .. } => exit_code::ENCODING,
            Self::NothingExtracted => exit_code::NOTHING_EXTRACTED,
            Self::JoinFailed { .. } => exit_code::JOIN_FAILED,
            Self::Clipboard { .. } => exit_code::CLIPBOARD,
            Self::Config(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}
