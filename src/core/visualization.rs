// src/core/visualization.rs
//
// Greyscale image encoding for rendered intensity buffers.

use anyhow::{Context, Result};
use image::GrayImage;
use std::path::Path;

/// Quantize a row-major `[0.0, 1.0]` intensity buffer into an 8-bit
/// greyscale image. Buffer row 0 becomes the top pixel row.
pub fn to_gray_image(buffer: &[f32], width: u32, height: u32) -> Result<GrayImage> {
    let pixels: Vec<u8> = buffer.iter().map(|&v| (v * 255.0) as u8).collect();

    GrayImage::from_raw(width, height, pixels)
        .context("Intensity buffer does not match image dimensions")
}

/// Encode the intensity buffer and write it to `path`. The container
/// format follows the file extension.
pub fn write_image(buffer: &[f32], width: u32, height: u32, path: &Path) -> Result<()> {
    let img = to_gray_image(buffer, width, height)?;

    img.save(path)
        .with_context(|| format!("Failed to write image: {}", path.display()))
}
