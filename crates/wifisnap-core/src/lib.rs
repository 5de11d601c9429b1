//! Credential normalization, encoding, and provisioning-state engine.
//!
//! This crate owns everything between "a `{ssid, password}` guess exists" and
//! "the host OS was asked to join / a scannable artifact exists":
//!
//! - **[`CredentialEditor`]** — the editable copy of extracted credentials and
//!   its edit/lock lifecycle.
//! - **[`encode`]** — the two wire formats consumed outside the process: the
//!   platform join-URI scheme and the QR-for-WiFi payload grammar.
//! - **[`Provisioner`]** — dispatches a best-effort join request through a
//!   [`JoinDispatcher`] and narrates the attempt through a `watch` channel
//!   (`Attempting` → timed `AwaitingConfirmation` fallback).
//! - **[`QrManager`]** — orchestrates payload encoding, the asynchronous
//!   [`QrRasterizer`] call, and the artifact's show/download/close lifetime.
//! - **[`Session`]** — facade wiring the pieces together for one captured image.
//!
//! Image acquisition, OCR, the raster generator, and all presentation live
//! outside this crate, behind the trait seams.

pub mod editor;
pub mod encode;
pub mod error;
pub mod model;
pub mod provision;
pub mod qr;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use editor::CredentialEditor;
pub use error::CoreError;
pub use model::{
    CredentialField, Credentials, EditState, ProvisioningStatus, QrArtifact, QrDownload,
    RasterOptions,
};
pub use provision::{DispatchError, JoinDispatcher, Provisioner};
pub use qr::{GenerateOutcome, QrManager, QrRasterizer, RasterError};
pub use session::Session;
