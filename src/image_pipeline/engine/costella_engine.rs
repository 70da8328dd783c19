//! Native block artifact removal engine.
//!
//! Only built when `build.rs` found the library (`cfg(costella_unblock)`).
//! The library logs to a C `FILE*`; it gets a temp file, which is copied
//! into the Rust log sink at finalize.

use std::io::Write;
use std::ptr;

use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::engine::deblock_engine::DeblockEngine;
use crate::image_pipeline::engine::types::{LayoutDescriptor, PlaneSet, ProcessingMode};

#[allow(non_camel_case_types, non_snake_case, non_upper_case_globals, dead_code)]
mod ffi {
    include!(concat!(env!("OUT_DIR"), "/unblock_bindings.rs"));
}

pub struct CostellaEngine {
    log_stream: *mut ffi::FILE,
}

impl CostellaEngine {
    /// JPEG macroblock width with 2x2 subsampled chroma
    pub const BLOCK_SIZE: usize = 16;

    pub fn new() -> Self {
        Self { log_stream: ptr::null_mut() }
    }

    fn close_stream(&mut self) {
        if !self.log_stream.is_null() {
            unsafe { ffi::fclose(self.log_stream) };
            self.log_stream = ptr::null_mut();
        }
    }
}

impl Default for CostellaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DeblockEngine for CostellaEngine {
    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn initialize(&mut self, _log: &mut dyn Write) -> Result<()> {
        self.close_stream();
        let stream = unsafe { ffi::tmpfile() };
        if stream.is_null() {
            return Err(ConversionError::EngineError(
                "could not open engine log stream".to_string(),
            ));
        }
        self.log_stream = stream;
        unsafe { ffi::costella_unblock_initialize(stream) };
        Ok(())
    }

    fn invoke(&mut self, layout: &mut LayoutDescriptor<'_>, mode: ProcessingMode) -> bool {
        let downsampled = layout.downsampled_chrominance();
        let nonreplicated = layout.nonreplicated_downsampled_chrominance();

        let mut image: ffi::COSTELLA_IMAGE = unsafe { std::mem::zeroed() };
        image.bAlpha = layout.alpha as _;
        image.bRgb = false as _;
        image.udHeight = layout.height as _;
        image.udWidth = layout.width as _;
        image.sdRowStride = layout.row_stride as _;
        image.sdAlphaRowStride = 0 as _;

        match &mut layout.planes {
            PlaneSet::Color { luma, cb, cr } => {
                image.bColor = true as _;
                image.bDownsampledChrominance = downsampled as _;
                image.bNonreplicatedDownsampledChrominance = nonreplicated as _;
                image.ic.aubRY = luma.as_mut_ptr() as _;
                image.ic.aubGCb = cb.as_mut_ptr() as _;
                image.ic.aubBCr = cr.as_mut_ptr() as _;
            }
            PlaneSet::Gray(luma) => {
                image.bColor = false as _;
                image.bDownsampledChrominance = false as _;
                image.bNonreplicatedDownsampledChrominance = false as _;
                image.ig = luma.as_mut_ptr() as _;
            }
        }

        debug!(
            width = layout.width,
            height = layout.height,
            row_stride = layout.row_stride,
            photographic = mode.as_flag(),
            "Invoking native unblock"
        );

        // In place: the same image is both source and destination
        let image_ptr: *mut ffi::COSTELLA_IMAGE = &mut image;
        let ok = unsafe {
            ffi::costella_unblock(
                image_ptr,
                image_ptr,
                mode.as_flag() as _,
                0 as _,
                ptr::null_mut(),
                ptr::null_mut(),
                0 as _,
            )
        };
        ok != 0
    }

    fn finalize(&mut self, log: &mut dyn Write) -> Result<()> {
        if self.log_stream.is_null() {
            return Ok(());
        }
        let stream = self.log_stream;
        unsafe {
            ffi::costella_unblock_finalize(stream);
            ffi::fflush(stream);
            ffi::rewind(stream);
        }

        let mut chunk = [0u8; 4096];
        let copied = loop {
            let n = unsafe { ffi::fread(chunk.as_mut_ptr().cast(), 1, chunk.len() as _, stream) };
            if n == 0 {
                break Ok(());
            }
            if let Err(e) = log.write_all(&chunk[..n as usize]) {
                break Err(e);
            }
        };

        self.close_stream();
        copied?;
        Ok(())
    }
}

impl Drop for CostellaEngine {
    fn drop(&mut self) {
        self.close_stream();
    }
}
