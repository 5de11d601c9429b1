// ── Core error types ──
//
// User-facing errors from wifisnap-core. Consumers never see the raw
// rasterizer failure -- it is wrapped into `EncodingFailure` at the
// component boundary. Dispatch failures never surface here at all:
// the provisioner converts them into a `Failed` status instead.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Precondition failure: encoding requires a non-empty network name.
    ///
    /// Recoverable -- no state was mutated; the caller surfaces it inline
    /// and the user corrects the SSID field.
    #[error("Network name is required")]
    EmptyNetworkName,

    /// The external rasterizer rejected the payload.
    ///
    /// Surfaced as a blocking error; the artifact stays hidden.
    #[error("Failed to generate QR code: {reason}")]
    EncodingFailure { reason: String },
}
