//! Raster container module
//!
//! This module provides PNG and BMP decoding/encoding to an interleaved RGB
//! pixel grid, and the extension-based dispatch between the two.

mod reader;
mod writer;
mod png_codec;
mod bmp_codec;
pub mod format;
pub mod types;

pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use png_codec::PngCodec;
pub use bmp_codec::BmpCodec;
pub use format::ImageFormat;
pub use types::{PixelGrid, PngCompression, Rgb, RgbImageData};
