// ── Domain model ──
//
// The canonical types shared by the editor, encoders, provisioner, and
// QR lifecycle. All state transitions go through the named operations on
// those components -- nothing here mutates itself.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An extracted or user-edited network/password pair.
///
/// An empty `ssid` is a valid value (the extraction may have found
/// nothing) but is rejected by both encoders. An empty `password`
/// means an open network -- the encoders still emit the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub ssid: String,
    pub password: String,
}

impl Credentials {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

/// Which credential field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CredentialField {
    Ssid,
    Password,
}

/// Whether the credential fields currently accept mutation.
///
/// Only two transitions exist: `Editing → Locked` via
/// [`save()`](crate::CredentialEditor::save) and `Locked → Editing` via
/// [`edit()`](crate::CredentialEditor::edit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, Serialize)]
pub enum EditState {
    #[default]
    Editing,
    Locked,
}

/// The outcome narrative of a join request.
///
/// Best-effort only: the host can be *asked* to join, never observed
/// joining, so this never reaches a "connected" terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason")]
pub enum ProvisioningStatus {
    #[default]
    Idle,
    Attempting,
    AwaitingConfirmation,
    Failed(String),
}

impl ProvisioningStatus {
    /// The user-facing status line, or `None` while idle.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Attempting => Some("Attempting to join network..."),
            Self::AwaitingConfirmation => {
                Some("If connection didn't start automatically, you may need to join manually")
            }
            Self::Failed(reason) => Some(reason),
        }
    }
}

impl std::fmt::Display for ProvisioningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message().unwrap_or("Idle"))
    }
}

/// The single QR artifact, observable through the manager's watch channel.
///
/// Invariant: `visible` implies `raster.is_some()`. `close()` clears both
/// in one write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrArtifact {
    /// The encoded `WIFI:` payload the raster represents.
    pub payload: String,
    /// SSID snapshot used to derive the download filename.
    pub ssid: String,
    /// PNG bytes from the rasterizer. Dropped on close/replacement.
    pub raster: Option<Bytes>,
    pub visible: bool,
}

/// A one-shot export of the visible artifact.
#[derive(Debug, Clone)]
pub struct QrDownload {
    /// `wifi-<ssid or "network">.png`
    pub filename: String,
    pub png: Bytes,
}

/// Fixed rasterization parameters handed to the external rasterizer.
///
/// Palette is fixed black-on-white; only geometry is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Requested total image width in pixels (modules are scaled to fit).
    pub width_px: u32,
    /// Quiet-zone width in modules on each side.
    pub margin_modules: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width_px: 320,
            margin_modules: 2,
        }
    }
}
