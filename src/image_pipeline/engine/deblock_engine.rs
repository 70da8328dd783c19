use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::engine::types::{LayoutDescriptor, ProcessingMode};

pub trait DeblockEngine {
    /// Width granularity the engine needs; descriptor widths should be a multiple of it.
    fn block_size(&self) -> usize;

    fn initialize(&mut self, log: &mut dyn Write) -> Result<()>;

    /// Processes the described planes in place; source and destination are
    /// the same buffers. Returns `false` when the engine reports failure, in
    /// which case plane contents are unspecified.
    fn invoke(&mut self, layout: &mut LayoutDescriptor<'_>, mode: ProcessingMode) -> bool;

    fn finalize(&mut self, log: &mut dyn Write) -> Result<()>;
}
