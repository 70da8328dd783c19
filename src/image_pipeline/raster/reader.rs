use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RgbImageData;

pub trait ImageReader {
    fn read_image(&self, data: &[u8]) -> Result<RgbImageData>;
}
