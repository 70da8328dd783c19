//! Image processing pipeline module
//!
//! This module removes JPEG block artifacts from PNG and BMP images, with
//! separate modules for color conversion, container codecs, sample planes,
//! the external artifact removal engine, and conversion orchestration.

pub mod color;
pub mod raster;
pub mod planes;
pub mod engine;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use raster::{
    BmpCodec,
    ImageFormat,
    ImageReader,
    ImageWriter,
    PixelGrid,
    PngCodec,
    PngCompression,
    Rgb,
    RgbImageData,
};

pub use planes::SamplePlanes;

pub use engine::{
    BlockAlignment,
    ChromaSampling,
    DeblockEngine,
    LayoutDescriptor,
    PassthroughEngine,
    PlaneSelection,
    PlaneSet,
    ProcessingMode,
};

#[cfg(costella_unblock)]
pub use engine::CostellaEngine;

pub use conversions::{
    DeblockConfig,
    DeblockConfigBuilder,
    DeblockPipeline,
    DeblockReport,
};
