use std::io::Write;

use image::codecs::bmp::BmpEncoder;
use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::RgbImageData;
use crate::image_pipeline::raster::reader::ImageReader;
use crate::image_pipeline::raster::writer::ImageWriter;

/// Uncompressed 24-bit BMP reader/writer backed by the `image` crate.
///
/// Any alpha channel in 32-bit input is dropped on decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpCodec;

impl ImageReader for BmpCodec {
    fn read_image(&self, data: &[u8]) -> Result<RgbImageData> {
        debug!("Decoding BMP image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, image::ImageFormat::Bmp)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?
            .into_rgb8();

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        debug!("Decoded image: {}x{}", width, height);

        RgbImageData::new(width, height, decoded.into_raw())
    }
}

impl ImageWriter for BmpCodec {
    fn write_image(&self, image: &RgbImageData, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding BMP image: {}x{}", image.width, image.height);

        let mut buffer = Vec::new();
        BmpEncoder::new(&mut buffer)
            .encode(
                &image.data,
                image.width as u32,
                image.height as u32,
                image::ColorType::Rgb8,
            )
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("BMP encoding complete");
        Ok(())
    }
}
