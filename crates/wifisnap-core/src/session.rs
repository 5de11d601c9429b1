// ── Capture session facade ──
//
// One session per captured image. Owns the editor, provisioner, and QR
// manager and wires the couplings between them: unlocking the editor
// clears the attempt narrative, and re-seeding starts a fresh slate.

use std::sync::Mutex;

use tokio::sync::watch;

use crate::editor::CredentialEditor;
use crate::error::CoreError;
use crate::model::{
    CredentialField, Credentials, EditState, ProvisioningStatus, QrArtifact, QrDownload,
    RasterOptions,
};
use crate::provision::{JoinDispatcher, Provisioner};
use crate::qr::{GenerateOutcome, QrManager, QrRasterizer};

/// The entry point for presentation layers.
///
/// Join and QR operations consume the current credential snapshot; the
/// session does not gate them on `Locked` -- presentation decides which
/// actions to offer in which state.
pub struct Session<D: JoinDispatcher, R: QrRasterizer> {
    editor: Mutex<CredentialEditor>,
    provisioner: Provisioner<D>,
    qr: QrManager<R>,
}

impl<D: JoinDispatcher, R: QrRasterizer> Session<D, R> {
    pub fn new(dispatcher: D, rasterizer: R) -> Self {
        Self {
            editor: Mutex::new(CredentialEditor::new(None)),
            provisioner: Provisioner::new(dispatcher),
            qr: QrManager::new(rasterizer),
        }
    }

    pub fn with_options(
        dispatcher: D,
        rasterizer: R,
        confirm_delay: std::time::Duration,
        raster_options: RasterOptions,
    ) -> Self {
        Self {
            editor: Mutex::new(CredentialEditor::new(None)),
            provisioner: Provisioner::with_confirm_delay(dispatcher, confirm_delay),
            qr: QrManager::with_options(rasterizer, raster_options),
        }
    }

    // ── Editing ──────────────────────────────────────────────────

    /// Seed the editor from a freshly processed image. Resets the
    /// attempt narrative and closes any artifact from the prior image.
    pub fn seed(&self, extracted: Option<Credentials>) {
        *self.lock_editor() = CredentialEditor::new(extracted);
        self.provisioner.reset();
        self.qr.close();
    }

    pub fn credentials(&self) -> Credentials {
        self.lock_editor().credentials().clone()
    }

    pub fn edit_state(&self) -> EditState {
        self.lock_editor().state()
    }

    /// Overwrite one field; no-op (returns `false`) while locked.
    pub fn update(&self, field: CredentialField, value: impl Into<String>) -> bool {
        self.lock_editor().update(field, value)
    }

    /// Lock the credentials for use.
    pub fn save(&self) {
        self.lock_editor().save();
    }

    /// Unlock for correction. Clears the provisioning status, so a stale
    /// "attempting" line never shows over an editable form.
    pub fn edit(&self) {
        if self.lock_editor().edit() {
            self.provisioner.reset();
        }
    }

    // ── Provisioning ─────────────────────────────────────────────

    /// Start a best-effort join attempt with the current snapshot.
    pub fn attempt_join(&self) {
        let credentials = self.credentials();
        self.provisioner.attempt_join(&credentials);
    }

    pub fn provisioning_status(&self) -> ProvisioningStatus {
        self.provisioner.status()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<ProvisioningStatus> {
        self.provisioner.subscribe()
    }

    // ── QR artifact ──────────────────────────────────────────────

    /// Generate (or regenerate) the QR artifact from the current snapshot.
    pub async fn generate_qr(&self) -> Result<GenerateOutcome, CoreError> {
        let credentials = self.credentials();
        self.qr.generate(&credentials).await
    }

    pub fn close_qr(&self) {
        self.qr.close();
    }

    pub fn qr_artifact(&self) -> QrArtifact {
        self.qr.artifact()
    }

    pub fn subscribe_qr(&self) -> watch::Receiver<QrArtifact> {
        self.qr.subscribe()
    }

    pub fn download_qr(&self) -> Option<QrDownload> {
        self.qr.download()
    }

    // ── Teardown ─────────────────────────────────────────────────

    /// Cancel pending deferred work and release the artifact.
    pub fn shutdown(&self) {
        self.provisioner.shutdown();
        self.qr.close();
    }

    fn lock_editor(&self) -> std::sync::MutexGuard<'_, CredentialEditor> {
        self.editor.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
