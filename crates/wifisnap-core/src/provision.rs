// ── Join provisioning ──
//
// Dispatches a best-effort join request through the host's URI handler
// and narrates the attempt through a watch channel. The host never
// reports back, so after a fixed delay the status falls forward to
// AwaitingConfirmation with a manual-join hint -- unless a newer attempt
// or a teardown cancels the deferred update first.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::encode;
use crate::model::{Credentials, ProvisioningStatus};

/// How long to wait before falling forward to `AwaitingConfirmation`.
pub const DEFAULT_CONFIRM_DELAY: Duration = Duration::from_secs(3);

const NO_NETWORK_NAME: &str = "No network name found";
const MANUAL_JOIN_HINT: &str = "Failed to join network automatically. Please join manually.";

/// Failure raised by a [`JoinDispatcher`]. Never propagated to callers --
/// the provisioner converts it into a `Failed` status.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DispatchError(pub String);

/// Seam to the platform-level URI opener (browser navigation, `open`,
/// a test recorder). Dispatch is fire-and-forget: success means the
/// request was handed off, not that the OS joined anything.
pub trait JoinDispatcher: Send + Sync + 'static {
    fn open_uri(&self, uri: &str) -> Result<(), DispatchError>;
}

/// Tracks one join attempt at a time over a [`JoinDispatcher`].
///
/// Cheaply cloneable. Each `attempt_join` supersedes the previous one:
/// the attempt generation is bumped and the prior deferred status task
/// is aborted, so a stale timer can never overwrite a newer attempt's
/// status.
pub struct Provisioner<D: JoinDispatcher> {
    inner: Arc<Inner<D>>,
}

struct Inner<D> {
    dispatcher: D,
    status: watch::Sender<ProvisioningStatus>,
    /// Monotonic attempt counter; deferred tasks compare against it
    /// before touching the status.
    generation: AtomicU64,
    /// Teardown token -- cancelled once, on shutdown/drop.
    cancel: CancellationToken,
    pending: Mutex<Option<JoinHandle<()>>>,
    confirm_delay: Duration,
}

impl<D: JoinDispatcher> Clone for Provisioner<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> Drop for Inner<D> {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl<D: JoinDispatcher> Provisioner<D> {
    pub fn new(dispatcher: D) -> Self {
        Self::with_confirm_delay(dispatcher, DEFAULT_CONFIRM_DELAY)
    }

    pub fn with_confirm_delay(dispatcher: D, confirm_delay: Duration) -> Self {
        let (status, _) = watch::channel(ProvisioningStatus::Idle);
        Self {
            inner: Arc::new(Inner {
                dispatcher,
                status,
                generation: AtomicU64::new(0),
                cancel: CancellationToken::new(),
                pending: Mutex::new(None),
                confirm_delay,
            }),
        }
    }

    /// Subscribe to status transitions.
    pub fn subscribe(&self) -> watch::Receiver<ProvisioningStatus> {
        self.inner.status.subscribe()
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> ProvisioningStatus {
        self.inner.status.borrow().clone()
    }

    /// Start a join attempt.
    ///
    /// Must be called within a Tokio runtime (the deferred status update
    /// is a spawned task). Never returns an error: every failure mode is
    /// converted into an observable `Failed` status.
    pub fn attempt_join(&self, credentials: &Credentials) {
        let generation = self.bump_generation();
        self.abort_pending();

        let Ok(uri) = encode::join_uri(credentials) else {
            self.inner
                .status
                .send_replace(ProvisioningStatus::Failed(NO_NETWORK_NAME.into()));
            return;
        };

        // Best-effort hand-off to the host. A throw here is terminal for
        // this attempt, not for the caller.
        if let Err(error) = self.inner.dispatcher.open_uri(&uri) {
            warn!(%error, "join dispatch failed");
            self.inner
                .status
                .send_replace(ProvisioningStatus::Failed(MANUAL_JOIN_HINT.into()));
            return;
        }

        debug!(%uri, "join URI dispatched");
        self.inner
            .status
            .send_replace(ProvisioningStatus::Attempting);

        self.schedule_confirmation_hint(generation);
    }

    /// Clear the attempt narrative (used when the editor unlocks).
    /// Aborts any pending deferred update.
    pub fn reset(&self) {
        self.bump_generation();
        self.abort_pending();
        self.inner.status.send_replace(ProvisioningStatus::Idle);
    }

    /// Tear down: no deferred update will ever fire again.
    pub fn shutdown(&self) {
        self.inner.cancel.cancel();
        self.abort_pending();
    }

    /// Schedule the single deferred fall-forward to
    /// `AwaitingConfirmation`. At most one such task is pending at a
    /// time; it only applies if its generation is still current and the
    /// status is still `Attempting`.
    fn schedule_confirmation_hint(&self, generation: u64) {
        // Weak so a pending timer never keeps the provisioner alive:
        // dropping the last handle drops Inner, which cancels the token.
        let weak = Arc::downgrade(&self.inner);
        let cancel = self.inner.cancel.clone();
        let delay = self.inner.confirm_delay;

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    let Some(inner) = weak.upgrade() else { return };
                    if inner.generation.load(Ordering::SeqCst) != generation {
                        return;
                    }
                    inner.status.send_if_modified(|status| {
                        if *status == ProvisioningStatus::Attempting {
                            *status = ProvisioningStatus::AwaitingConfirmation;
                            true
                        } else {
                            false
                        }
                    });
                }
            }
        });

        if let Ok(mut pending) = self.inner.pending.lock() {
            *pending = Some(handle);
        }
    }

    fn bump_generation(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn abort_pending(&self) {
        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}
