//! Color model conversion module
//!
//! Limited-range YCbCr conversion used to split an RGB raster into the
//! luma and chroma planes the artifact removal engine works on.

pub mod ycbcr;

pub use ycbcr::{clamp_to_byte, round_trip_error, to_luma_chroma, to_rgb};
