//! Container format dispatch by file extension.

use std::path::Path;

use crate::image_pipeline::raster::bmp_codec::BmpCodec;
use crate::image_pipeline::raster::png_codec::PngCodec;
use crate::image_pipeline::raster::reader::ImageReader;
use crate::image_pipeline::raster::types::PngCompression;
use crate::image_pipeline::raster::writer::ImageWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    /// Anything that is not `.png`
    Bmp,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Self {
        if extension(path) == "png" {
            ImageFormat::Png
        } else {
            ImageFormat::Bmp
        }
    }

    pub fn reader(self) -> Box<dyn ImageReader> {
        match self {
            ImageFormat::Png => Box::new(PngCodec::default()),
            ImageFormat::Bmp => Box::new(BmpCodec),
        }
    }

    pub fn writer(self, compression: PngCompression) -> Box<dyn ImageWriter> {
        match self {
            ImageFormat::Png => Box::new(PngCodec::new(compression)),
            ImageFormat::Bmp => Box::new(BmpCodec),
        }
    }
}

/// Lowercased extension, empty when there is none.
///
/// Dotfiles such as `.png` have no extension and are read as BMP.
pub fn extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

pub fn extensions_match(a: &Path, b: &Path) -> bool {
    extension(a) == extension(b)
}
