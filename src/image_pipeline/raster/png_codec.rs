//! PNG reader/writer built on the `png` crate.
//!
//! Decoding expands palettes and sub-byte grayscale, strips 16-bit samples to
//! 8 bits, and drops any alpha channel so every PNG arrives as 8-bit RGB.

use std::io::{Cursor, Write};

use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::{PngCompression, RgbImageData};
use crate::image_pipeline::raster::reader::ImageReader;
use crate::image_pipeline::raster::writer::ImageWriter;

#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec {
    pub compression: PngCompression,
}

impl PngCodec {
    pub fn new(compression: PngCompression) -> Self {
        Self { compression }
    }
}

impl ImageReader for PngCodec {
    fn read_image(&self, data: &[u8]) -> Result<RgbImageData> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder
            .read_info()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        let mut buffer = vec![0u8; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut buffer)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        buffer.truncate(frame.buffer_size());

        let width = frame.width as usize;
        let height = frame.height as usize;
        debug!("Decoded image: {}x{} {:?}", width, height, frame.color_type);

        let rgb: Vec<u8> = match frame.color_type {
            png::ColorType::Rgb => buffer,
            png::ColorType::Rgba => buffer
                .chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect(),
            png::ColorType::Grayscale => buffer.iter().flat_map(|&v| [v, v, v]).collect(),
            png::ColorType::GrayscaleAlpha => buffer
                .chunks_exact(2)
                .flat_map(|p| [p[0], p[0], p[0]])
                .collect(),
            png::ColorType::Indexed => {
                return Err(ConversionError::DecodeError(
                    "palette was not expanded to RGB".to_string(),
                ));
            }
        };

        RgbImageData::new(width, height, rgb)
    }
}

impl ImageWriter for PngCodec {
    fn write_image(&self, image: &RgbImageData, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, image.width as u32, image.height as u32);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(self.compression.into());

            let mut writer = encoder
                .write_header()
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            writer
                .write_image_data(&image.data)
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
