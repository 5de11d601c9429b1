//! `wifisnap qr` -- generate the artifact and export it as a PNG file.

use wifisnap_core::QrManager;

use crate::cli::QrArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::rasterize::PngRasterizer;

pub async fn handle(args: &QrArgs, config: &Config) -> Result<(), CliError> {
    let manager = QrManager::with_options(PngRasterizer, config.raster);

    manager.generate(&args.credentials.credentials()).await?;

    // Just generated and nothing else touches the manager, so the
    // artifact is visible and downloadable.
    let Some(download) = manager.download() else {
        return Err(CliError::Encoding {
            reason: "artifact vanished before export".into(),
        });
    };

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| download.filename.clone().into());
    std::fs::write(&path, &download.png)?;
    println!("Wrote {} ({} bytes)", path.display(), download.png.len());

    manager.close();
    Ok(())
}
