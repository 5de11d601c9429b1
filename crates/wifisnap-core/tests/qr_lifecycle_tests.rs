//! Lifecycle tests for the QR artifact: generate/close/download, error
//! surfacing, and stale-raster discard under concurrent supersession.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use bytes::Bytes;
use wifisnap_core::{
    CoreError, Credentials, GenerateOutcome, QrManager, QrRasterizer, RasterError, RasterOptions,
};

// ── Test rasterizer ─────────────────────────────────────────────────

/// Pretend rasterizer: returns the payload tagged as PNG bytes after an
/// optional delay; fails when told to.
#[derive(Clone, Default)]
struct StubRasterizer {
    delay: Option<Duration>,
    fail: bool,
}

impl QrRasterizer for StubRasterizer {
    async fn rasterize(
        &self,
        payload: &str,
        _options: &RasterOptions,
    ) -> Result<Bytes, RasterError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(RasterError("data too long".into()));
        }
        Ok(Bytes::from(format!("PNG:{payload}")))
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[tokio::test]
async fn generate_publishes_a_visible_artifact() {
    let manager = QrManager::new(StubRasterizer::default());

    let outcome = manager
        .generate(&Credentials::new("Home", "secret1"))
        .await
        .unwrap();
    assert_eq!(outcome, GenerateOutcome::Generated);

    let artifact = manager.artifact();
    assert_eq!(artifact.payload, "WIFI:S:Home;T:WPA;P:secret1;;");
    assert!(artifact.visible);
    assert_eq!(
        artifact.raster,
        Some(Bytes::from("PNG:WIFI:S:Home;T:WPA;P:secret1;;"))
    );
}

#[tokio::test]
async fn close_hides_and_releases_in_one_write() {
    let manager = QrManager::new(StubRasterizer::default());
    manager
        .generate(&Credentials::new("Home", "secret1"))
        .await
        .unwrap();

    manager.close();

    let artifact = manager.artifact();
    assert!(!artifact.visible);
    assert!(artifact.raster.is_none());
    assert!(manager.download().is_none());
}

#[tokio::test]
async fn empty_ssid_is_rejected_before_any_state_change() {
    let manager = QrManager::new(StubRasterizer::default());

    let err = manager
        .generate(&Credentials::new("", "secret1"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::EmptyNetworkName));
    assert_eq!(manager.artifact(), Default::default());
}

#[tokio::test]
async fn rasterizer_failure_surfaces_without_showing() {
    let manager = QrManager::new(StubRasterizer {
        fail: true,
        ..Default::default()
    });

    let err = manager
        .generate(&Credentials::new("Home", "secret1"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::EncodingFailure { .. }));
    assert!(!manager.artifact().visible);
}

#[tokio::test]
async fn download_exposes_derived_filename() {
    let manager = QrManager::new(StubRasterizer::default());
    manager
        .generate(&Credentials::new("Home", "secret1"))
        .await
        .unwrap();

    let download = manager.download().unwrap();
    assert_eq!(download.filename, "wifi-Home.png");
    assert!(!download.png.is_empty());
}

#[tokio::test(start_paused = true)]
async fn close_discards_a_raster_still_in_flight() {
    let manager = QrManager::new(StubRasterizer {
        delay: Some(Duration::from_secs(1)),
        ..Default::default()
    });

    let task = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.generate(&Credentials::new("Home", "secret1")).await })
    };

    // Let the generate task reach its await, then close underneath it.
    tokio::task::yield_now().await;
    manager.close();

    let outcome = task.await.unwrap().unwrap();
    assert_eq!(outcome, GenerateOutcome::Superseded);
    assert!(!manager.artifact().visible);
    assert!(manager.artifact().raster.is_none());
}

#[tokio::test(start_paused = true)]
async fn newer_generate_supersedes_older_one() {
    let manager = QrManager::new(StubRasterizer {
        delay: Some(Duration::from_secs(1)),
        ..Default::default()
    });

    let first = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.generate(&Credentials::new("First", "")).await })
    };
    tokio::task::yield_now().await;

    let second = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.generate(&Credentials::new("Second", "")).await })
    };

    assert_eq!(first.await.unwrap().unwrap(), GenerateOutcome::Superseded);
    assert_eq!(second.await.unwrap().unwrap(), GenerateOutcome::Generated);

    let artifact = manager.artifact();
    assert!(artifact.visible);
    assert_eq!(artifact.ssid, "Second");
}

#[tokio::test]
async fn regenerate_replaces_the_artifact() {
    let manager = QrManager::new(StubRasterizer::default());
    manager.generate(&Credentials::new("Old", "a")).await.unwrap();
    manager.generate(&Credentials::new("New", "b")).await.unwrap();

    let artifact = manager.artifact();
    assert_eq!(artifact.ssid, "New");
    assert_eq!(artifact.payload, "WIFI:S:New;T:WPA;P:b;;");
    assert!(artifact.visible);
}
