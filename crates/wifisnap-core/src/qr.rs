// ── QR artifact lifecycle ──
//
// Orchestrates payload encoding, the asynchronous raster request, and
// the artifact's visible lifetime. At most one artifact exists; a raster
// that arrives after a newer generate() or a close() is thrown away by
// generation-token comparison so late results never resurrect `visible`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

use crate::encode;
use crate::error::CoreError;
use crate::model::{Credentials, QrArtifact, QrDownload, RasterOptions};

/// Failure raised by a [`QrRasterizer`]. Wrapped into
/// [`CoreError::EncodingFailure`] at the manager boundary.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RasterError(pub String);

/// Seam to the external raster generator. Receives the already-encoded
/// payload text and the fixed geometry; returns PNG bytes.
pub trait QrRasterizer: Send + Sync {
    fn rasterize(
        &self,
        payload: &str,
        options: &RasterOptions,
    ) -> impl Future<Output = Result<Bytes, RasterError>> + Send;
}

/// What became of a `generate()` call that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The artifact was replaced and is visible.
    Generated,
    /// A newer request or a close() overtook this one while the raster
    /// was in flight; the result was discarded.
    Superseded,
}

/// Owns the single [`QrArtifact`] and its show/download/close lifetime.
///
/// Cheaply cloneable; the artifact is observable through a watch channel.
pub struct QrManager<R: QrRasterizer> {
    inner: Arc<Inner<R>>,
}

struct Inner<R> {
    rasterizer: R,
    options: RasterOptions,
    artifact: watch::Sender<QrArtifact>,
    /// Bumped by every generate() and close(); in-flight rasters compare
    /// against it before publishing.
    generation: AtomicU64,
}

impl<R: QrRasterizer> Clone for QrManager<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: QrRasterizer> QrManager<R> {
    pub fn new(rasterizer: R) -> Self {
        Self::with_options(rasterizer, RasterOptions::default())
    }

    pub fn with_options(rasterizer: R, options: RasterOptions) -> Self {
        let (artifact, _) = watch::channel(QrArtifact::default());
        Self {
            inner: Arc::new(Inner {
                rasterizer,
                options,
                artifact,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Subscribe to artifact changes.
    pub fn subscribe(&self) -> watch::Receiver<QrArtifact> {
        self.inner.artifact.subscribe()
    }

    /// Snapshot of the current artifact.
    pub fn artifact(&self) -> QrArtifact {
        self.inner.artifact.borrow().clone()
    }

    /// Encode the credentials and request a raster.
    ///
    /// Fails with [`CoreError::EmptyNetworkName`] before any state
    /// change, and with [`CoreError::EncodingFailure`] when the
    /// rasterizer rejects the payload -- `visible` stays untouched in
    /// both cases. On success the previous artifact (and its raster) is
    /// dropped and replaced by a visible one.
    pub async fn generate(&self, credentials: &Credentials) -> Result<GenerateOutcome, CoreError> {
        let payload = encode::qr_payload(credentials)?;
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let raster = self
            .inner
            .rasterizer
            .rasterize(&payload, &self.inner.options)
            .await
            .map_err(|error| CoreError::EncodingFailure {
                reason: error.to_string(),
            })?;

        // Publish only if nothing overtook us while awaiting. The check
        // runs inside the channel lock so a concurrent close() cannot
        // interleave between check and write.
        let mut published = false;
        self.inner.artifact.send_if_modified(|artifact| {
            if self.inner.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *artifact = QrArtifact {
                payload,
                ssid: credentials.ssid.clone(),
                raster: Some(raster),
                visible: true,
            };
            published = true;
            true
        });

        if published {
            Ok(GenerateOutcome::Generated)
        } else {
            debug!("discarding stale raster");
            Ok(GenerateOutcome::Superseded)
        }
    }

    /// Hide the artifact and release its raster in one write. Also
    /// supersedes any raster still in flight.
    pub fn close(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.artifact.send_modify(|artifact| {
            artifact.visible = false;
            artifact.raster = None;
        });
    }

    /// One-shot export of the visible artifact. `None` while hidden.
    ///
    /// The filename is derived from the SSID snapshot taken at generate
    /// time: `wifi-<ssid or "network">.png`.
    pub fn download(&self) -> Option<QrDownload> {
        let artifact = self.inner.artifact.borrow();
        if !artifact.visible {
            return None;
        }
        let png = artifact.raster.clone()?;
        let name = if artifact.ssid.is_empty() {
            "network"
        } else {
            artifact.ssid.as_str()
        };
        Some(QrDownload {
            filename: format!("wifi-{name}.png"),
            png,
        })
    }
}
