//! Pixel grid types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// One 8-bit `[R, G, B]` sample
pub type Rgb = [u8; 3];

/// Random access to a rectangular RGB raster.
///
/// Row order (top-down or bottom-up) is whatever the container produced;
/// callers only rely on `(x, y)` addressing being stable between decode
/// and encode.
pub trait PixelGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixel(&self, x: usize, y: usize) -> Rgb;
    fn set_pixel(&mut self, x: usize, y: usize, rgb: Rgb);
}

/// Decoded RGB image, alpha already dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...], row-major
    pub data: Vec<u8>,
}

impl RgbImageData {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|area| area.checked_mul(3))
            .ok_or(ConversionError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(ConversionError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Image with every pixel set to `rgb`
    pub fn filled(width: usize, height: usize, rgb: Rgb) -> Self {
        Self {
            width,
            height,
            data: rgb.repeat(width * height),
        }
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * 3
    }
}

impl PixelGrid for RgbImageData {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    fn set_pixel(&mut self, x: usize, y: usize, rgb: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }
}

/// PNG output compression level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PngCompression {
    /// zlib default level
    #[default]
    Default,
    /// Fastest encode, larger files
    Fast,
    /// Smallest files, slowest encode
    Best,
}

impl From<PngCompression> for png::Compression {
    fn from(value: PngCompression) -> Self {
        match value {
            PngCompression::Default => png::Compression::Default,
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Best => png::Compression::Best,
        }
    }
}
