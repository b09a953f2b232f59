//! Image output sinks.
//!
//! The renderer itself never touches the filesystem; these sinks take a
//! finished framebuffer and encode it. Channels are clamped to [0, 1]
//! and scaled linearly to a byte, the same conversion for every format.
//! No gamma ramp.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::Framebuffer;

/// Errors raised while encoding or writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encode error: {0}")]
    Encode(#[from] image::ImageError),
}

/// Convert a framebuffer to tightly packed RGB bytes.
pub fn to_rgb_bytes(image: &Framebuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.pixels.len() * 3);
    for color in &image.pixels {
        bytes.push((color.x.clamp(0.0, 1.0) * 255.0) as u8);
        bytes.push((color.y.clamp(0.0, 1.0) * 255.0) as u8);
        bytes.push((color.z.clamp(0.0, 1.0) * 255.0) as u8);
    }
    bytes
}

/// Encode a framebuffer as a binary PPM (P6) image.
pub fn ppm_bytes(image: &Framebuffer) -> Vec<u8> {
    let payload = to_rgb_bytes(image);
    let mut bytes = Vec::with_capacity(payload.len() + 32);
    // Header write into a Vec cannot fail
    let _ = write!(bytes, "P6\n{} {}\n255\n", image.width, image.height);
    bytes.extend_from_slice(&payload);
    bytes
}

/// Write a framebuffer to disk as binary PPM.
pub fn write_ppm<P: AsRef<Path>>(path: P, image: &Framebuffer) -> Result<(), OutputError> {
    std::fs::write(path.as_ref(), ppm_bytes(image))?;
    log::debug!("wrote {}", path.as_ref().display());
    Ok(())
}

/// Write a framebuffer to disk as PNG.
pub fn write_png<P: AsRef<Path>>(path: P, image: &Framebuffer) -> Result<(), OutputError> {
    image::save_buffer_with_format(
        path.as_ref(),
        &to_rgb_bytes(image),
        image.width,
        image.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    log::debug!("wrote {}", path.as_ref().display());
    Ok(())
}
