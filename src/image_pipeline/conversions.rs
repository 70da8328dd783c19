//! Pipeline conversions module
//!
//! This module contains the orchestration of decode, plane extraction,
//! artifact removal, plane reinsertion and encode.

mod deblock;
pub mod types;


pub use deblock::DeblockPipeline;
pub use types::{DeblockConfig, DeblockConfigBuilder, DeblockReport};
