//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same buffer always encodes to
//! the same bytes.

use std::io::Write;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::maps::PixelBuffer;

/// Errors from PNG and file operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA pixel buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} image has no pixels",
            buffer.width, buffer.height
        )));
    }

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamps, so nothing variable ends up in the file.
    let mut png_writer = encoder.write_header()?;

    let data = buffer.to_rgba8();
    png_writer.write_image_data(&data)?;
    png_writer.finish()?;

    Ok(())
}

/// Encode an RGBA pixel buffer to PNG bytes.
pub fn encode_rgba(buffer: &PixelBuffer, config: &PngConfig) -> Result<Vec<u8>, PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    Ok(data)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
