//! Loading and saving the drawing canvas.
//!
//! The canvas is a `tiny_skia::Pixmap` (premultiplied RGBA). Files are
//! decoded and encoded with the `image` crate, format inferred from the
//! path extension. JPEG output is converted to RGB since the format carries
//! no alpha channel.

use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tiny_skia::{IntSize, Pixmap};

use inspect_common::{InspectError, InspectResult};

/// Read an image file into a drawing canvas.
pub fn load_canvas(path: &Path) -> InspectResult<Pixmap> {
    let img = image::open(path).map_err(|e| {
        InspectError::ImageIo(format!("failed to read {}: {}", path.display(), e))
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut data = rgba.into_raw();

    // Straight alpha to the premultiplied form tiny-skia expects
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a < 255 {
            px[0] = ((px[0] as u16 * a) / 255) as u8;
            px[1] = ((px[1] as u16 * a) / 255) as u8;
            px[2] = ((px[2] as u16 * a) / 255) as u8;
        }
    }

    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| InspectError::ImageIo(format!("empty image: {}", path.display())))?;

    Pixmap::from_vec(data, size).ok_or_else(|| {
        InspectError::ImageIo(format!("pixel buffer mismatch for {}", path.display()))
    })
}

/// Write a canvas to an image file, format inferred from the extension.
pub fn save_canvas(canvas: &Pixmap, path: &Path) -> InspectResult<()> {
    let mut data = Vec::with_capacity(canvas.data().len());
    for px in canvas.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let rgba = RgbaImage::from_raw(canvas.width(), canvas.height(), data)
        .ok_or_else(|| InspectError::ImageIo("canvas buffer size mismatch".to_string()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let result = if ext == "jpg" || ext == "jpeg" {
        DynamicImage::ImageRgba8(rgba).to_rgb8().save(path)
    } else {
        rgba.save(path)
    };

    result.map_err(|e| {
        InspectError::ImageIo(format!("failed to write {}: {}", path.display(), e))
    })
}
