//! Sample plane module
//!
//! Three 8-bit Y/Cb/Cr planes and the forward/inverse marshalling between
//! them and an RGB pixel grid.

pub mod types;
mod marshal;

pub use types::SamplePlanes;
pub use marshal::{extract, forward, inverse, reinsert};
