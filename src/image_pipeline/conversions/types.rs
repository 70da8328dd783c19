//! Deblocking configuration and result types

use crate::image_pipeline::engine::{BlockAlignment, ChromaSampling, PlaneSelection};
use crate::image_pipeline::raster::PngCompression;

/// Configuration for the deblocking pipeline
#[derive(Debug, Clone)]
pub struct DeblockConfig {
    /// Enforce `max_dimension`; zero-sized images are always rejected
    pub validate_dimensions: bool,
    /// Largest accepted width or height; bounds plane allocation
    pub max_dimension: Option<usize>,
    /// Handling of widths that are not a multiple of the engine block size
    pub alignment: BlockAlignment,
    /// Planes handed to the engine
    pub planes: PlaneSelection,
    /// Chroma subsampling of the JPEG the bitmap came from
    pub chroma_sampling: ChromaSampling,
    /// Compression level when the output is PNG
    pub png_compression: PngCompression,
}

impl Default for DeblockConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(65_535),
            alignment: BlockAlignment::Reject,
            planes: PlaneSelection::Color,
            chroma_sampling: ChromaSampling::default(),
            png_compression: PngCompression::Default,
        }
    }
}

impl DeblockConfig {
    pub fn builder() -> DeblockConfigBuilder {
        DeblockConfigBuilder::default()
    }
}

/// Builder for DeblockConfig
#[derive(Default)]
pub struct DeblockConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    alignment: Option<BlockAlignment>,
    planes: Option<PlaneSelection>,
    chroma_sampling: Option<ChromaSampling>,
    png_compression: Option<PngCompression>,
}

impl DeblockConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn alignment(mut self, alignment: BlockAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn planes(mut self, planes: PlaneSelection) -> Self {
        self.planes = Some(planes);
        self
    }

    pub fn chroma_sampling(mut self, sampling: ChromaSampling) -> Self {
        self.chroma_sampling = Some(sampling);
        self
    }

    pub fn png_compression(mut self, compression: PngCompression) -> Self {
        self.png_compression = Some(compression);
        self
    }

    pub fn build(self) -> DeblockConfig {
        let default = DeblockConfig::default();
        DeblockConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            alignment: self.alignment.unwrap_or(default.alignment),
            planes: self.planes.unwrap_or(default.planes),
            chroma_sampling: self.chroma_sampling.unwrap_or(default.chroma_sampling),
            png_compression: self.png_compression.unwrap_or(default.png_compression),
        }
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeblockReport {
    pub width: usize,
    pub height: usize,
    /// Columns appended to each plane row to reach the engine block size
    pub padded_columns: usize,
    /// False when the engine reported a failure; the pixels were still
    /// written back from whatever the planes held
    pub engine_succeeded: bool,
}

impl DeblockReport {
    pub fn is_deartifacted(&self) -> bool {
        self.engine_succeeded
    }
}
