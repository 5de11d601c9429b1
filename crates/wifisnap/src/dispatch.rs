//! Platform join dispatch: hands the `wifi:` URI to the OS handler.

use wifisnap_core::{DispatchError, JoinDispatcher};

/// Opens the join URI with the system's default handler. Hand-off only:
/// whether the OS actually joins is never observable from here.
pub struct SystemDispatcher;

impl JoinDispatcher for SystemDispatcher {
    fn open_uri(&self, uri: &str) -> Result<(), DispatchError> {
        open::that(uri).map_err(|err| DispatchError(err.to_string()))
    }
}
