// Write a FrameBuffer out as a PNG.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Error;
use crate::types::FrameBuffer;

/// Unpack 0x00RRGGBB pixels into an RGB image.
pub fn to_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
    })
}

/// Save the frame as PNG, whatever extension `path` carries.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_image(fb).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
