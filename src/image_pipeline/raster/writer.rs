use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RgbImageData;

pub trait ImageWriter {
    fn write_image(&self, image: &RgbImageData, output: &mut dyn Write) -> Result<()>;
}
