//! QR raster generation: payload text in, black-on-white PNG bytes out.

use bytes::Bytes;
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

use wifisnap_core::{QrRasterizer, RasterError, RasterOptions};

const DARK: Luma<u8> = Luma([0x00]);
const LIGHT: Luma<u8> = Luma([0xff]);

/// Rasterizer backed by the `qrcode` crate.
pub struct PngRasterizer;

impl QrRasterizer for PngRasterizer {
    async fn rasterize(&self, payload: &str, options: &RasterOptions) -> Result<Bytes, RasterError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
            .map_err(|err| RasterError(err.to_string()))?;
        let png = render_png(&code, options).map_err(|err| RasterError(err.to_string()))?;
        Ok(Bytes::from(png))
    }
}

/// Paint the module matrix into a grayscale PNG.
///
/// Modules are scaled by the largest integer factor that keeps the image
/// (including the quiet zone) within the requested width, floored at 1:1
/// so dense payloads still render.
fn render_png(code: &QrCode, options: &RasterOptions) -> Result<Vec<u8>, image::ImageError> {
    let modules = u32::try_from(code.width()).unwrap_or(u32::MAX);
    let colors = code.to_colors();

    let total_modules = modules + 2 * options.margin_modules;
    let scale = (options.width_px / total_modules).max(1);
    let size = total_modules * scale;

    let mut img = GrayImage::from_pixel(size, size, LIGHT);
    for (idx, color) in colors.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let idx = u32::try_from(idx).unwrap_or(u32::MAX);
        let module_x = (idx % modules + options.margin_modules) * scale;
        let module_y = (idx / modules + options.margin_modules) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(module_x + dx, module_y + dy, DARK);
            }
        }
    }

    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}
