use image::GrayImage;
use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};

use crate::error::Result;

const INCHES_PER_METRE: f64 = 1.0 / 0.0254;

/// Encodes a grayscale page as PNG with its print resolution stored in the
/// `pHYs` chunk, so printing at 100% reproduces A4.
pub fn encode_png(image: &GrayImage, dpi: u32) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = Encoder::new(&mut bytes, image.width(), image.height());
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Eight);

        let per_metre = (dpi as f64 * INCHES_PER_METRE).round() as u32;
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: per_metre,
            yppu: per_metre,
            unit: Unit::Meter,
        }));

        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
        writer.finish()?;
    }
    Ok(bytes)
}
