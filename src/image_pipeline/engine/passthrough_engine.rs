use std::io::Write;

use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::engine::deblock_engine::DeblockEngine;
use crate::image_pipeline::engine::types::{LayoutDescriptor, ProcessingMode};

/// Engine stand-in that leaves the planes untouched and always succeeds.
///
/// Used when the native engine is not linked; the output then only carries
/// the YCbCr round-trip.
#[derive(Debug, Clone, Copy)]
pub struct PassthroughEngine {
    block_size: usize,
}

impl PassthroughEngine {
    pub const DEFAULT_BLOCK_SIZE: usize = 16;

    pub fn new() -> Self {
        Self::with_block_size(Self::DEFAULT_BLOCK_SIZE)
    }

    pub fn with_block_size(block_size: usize) -> Self {
        Self { block_size }
    }
}

impl Default for PassthroughEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DeblockEngine for PassthroughEngine {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn initialize(&mut self, _log: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn invoke(&mut self, layout: &mut LayoutDescriptor<'_>, _mode: ProcessingMode) -> bool {
        debug!(
            width = layout.width,
            height = layout.height,
            color = layout.is_color(),
            "Passthrough engine, planes left unchanged"
        );
        true
    }

    fn finalize(&mut self, _log: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}
