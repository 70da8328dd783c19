use std::io::Write;

use tracing::{debug, error, warn};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::engine::deblock_engine::DeblockEngine;
use crate::image_pipeline::engine::session::EngineSession;
use crate::image_pipeline::engine::types::{
    BlockAlignment, ChromaSampling, LayoutDescriptor, PlaneSelection, PlaneSet, ProcessingMode,
};
use crate::image_pipeline::planes::SamplePlanes;

/// Photographic mode amplifies ringing around timestamps and window grids.
pub const PROCESSING_MODE: ProcessingMode = ProcessingMode::NonPhotographic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Plane row stride, also the width described to the engine
    pub row_stride: usize,
    pub padded_columns: usize,
}

/// Chooses the plane row stride for an image `width` pixels wide.
pub fn plan_layout(width: usize, block_size: usize, policy: BlockAlignment) -> Result<LayoutPlan> {
    let block_size = block_size.max(1);
    if width % block_size == 0 {
        return Ok(LayoutPlan { row_stride: width, padded_columns: 0 });
    }

    match policy {
        BlockAlignment::Reject => Err(ConversionError::BlockAlignment { width, block_size }),
        BlockAlignment::Pad => {
            let row_stride = width.div_ceil(block_size) * block_size;
            warn!(
                width,
                row_stride,
                block_size,
                "Width is not a multiple of the engine block size, padding planes"
            );
            Ok(LayoutPlan { row_stride, padded_columns: row_stride - width })
        }
        BlockAlignment::Permissive => {
            warn!(
                width,
                block_size,
                "Width is not a multiple of the engine block size, engine result is undefined"
            );
            Ok(LayoutPlan { row_stride: width, padded_columns: 0 })
        }
    }
}

/// Describes `planes` to the engine, padding columns included.
pub fn describe(
    planes: &mut SamplePlanes,
    selection: PlaneSelection,
    chroma: ChromaSampling,
) -> LayoutDescriptor<'_> {
    let row_stride = planes.row_stride();
    let height = planes.height();
    let (luma, cb, cr) = planes.planes_mut();
    let planes = match selection {
        PlaneSelection::Color => PlaneSet::Color { luma, cb, cr },
        PlaneSelection::LumaOnly => PlaneSet::Gray(luma),
    };

    LayoutDescriptor {
        width: row_stride,
        height,
        row_stride,
        planes,
        chroma,
        alpha: false,
    }
}

/// Runs one initialize/invoke/finalize cycle over `planes`.
///
/// Returns the engine's success flag. Only lifecycle failures are errors;
/// a failed invocation is logged and reported as `Ok(false)`.
pub fn run_engine<E: DeblockEngine + ?Sized>(
    engine: &mut E,
    log: &mut dyn Write,
    planes: &mut SamplePlanes,
    selection: PlaneSelection,
    chroma: ChromaSampling,
) -> Result<bool> {
    planes.validate()?;

    let mut session = EngineSession::begin(engine, log)?;

    let mut layout = describe(planes, selection, chroma);
    layout.validate()?;

    let succeeded = session.invoke(&mut layout, PROCESSING_MODE);
    if !succeeded {
        error!("Problem during artifact removal");
    }
    debug!(state = ?session.state(), "Engine invocation returned");

    session.finish()?;
    Ok(succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_width_needs_no_plan() {
        for policy in [BlockAlignment::Reject, BlockAlignment::Pad, BlockAlignment::Permissive] {
            let plan = plan_layout(32, 16, policy).unwrap();
            assert_eq!(plan, LayoutPlan { row_stride: 32, padded_columns: 0 });
        }
    }

    #[test]
    fn test_reject_unaligned_width() {
        let result = plan_layout(33, 16, BlockAlignment::Reject);
        assert!(matches!(
            result,
            Err(ConversionError::BlockAlignment { width: 33, block_size: 16 })
        ));
    }

    #[test]
    fn test_pad_rounds_up_to_block() {
        let plan = plan_layout(33, 16, BlockAlignment::Pad).unwrap();
        assert_eq!(plan, LayoutPlan { row_stride: 48, padded_columns: 15 });
    }

    #[test]
    fn test_permissive_keeps_width() {
        let plan = plan_layout(33, 16, BlockAlignment::Permissive).unwrap();
        assert_eq!(plan, LayoutPlan { row_stride: 33, padded_columns: 0 });
    }

    #[test]
    fn test_zero_block_size_is_unconstrained() {
        let plan = plan_layout(7, 0, BlockAlignment::Reject).unwrap();
        assert_eq!(plan.row_stride, 7);
    }

    #[test]
    fn test_describe_color_and_gray() {
        let mut planes = SamplePlanes::allocate(5, 3, 8).unwrap();

        let layout = describe(&mut planes, PlaneSelection::Color, ChromaSampling::default());
        assert_eq!((layout.width, layout.height, layout.row_stride), (8, 3, 8));
        assert!(layout.is_color());
        assert!(layout.nonreplicated_downsampled_chrominance());
        assert!(!layout.alpha);
        assert!(layout.validate().is_ok());

        let layout = describe(&mut planes, PlaneSelection::LumaOnly, ChromaSampling::default());
        assert!(!layout.is_color());
        assert!(!layout.downsampled_chrominance());
    }
}
