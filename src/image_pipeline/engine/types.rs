//! Engine layout and mode types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Processing mode flag handed to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    /// Tuned for camera content; boosts ringing around sharp synthetic edges
    Photographic,
    /// Conservative mode for text overlays, window grids and similar edges
    NonPhotographic,
}

impl ProcessingMode {
    pub fn as_flag(self) -> i32 {
        match self {
            ProcessingMode::Photographic => 1,
            ProcessingMode::NonPhotographic => 0,
        }
    }
}

/// Chroma subsampling of the JPEG the bitmap was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaSampling {
    Full,
    /// 2x2 subsampled chroma; `replicated` when the decoder duplicated
    /// samples rather than interpolating them
    Downsampled { replicated: bool },
}

impl Default for ChromaSampling {
    fn default() -> Self {
        ChromaSampling::Downsampled { replicated: false }
    }
}

/// Which planes are described to the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaneSelection {
    /// Luma, Cb and Cr
    #[default]
    Color,
    /// Luma only, in grayscale mode; chroma round-trips untouched
    LumaOnly,
}

/// What to do when the image width is not a multiple of the engine block size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockAlignment {
    /// Fail before any plane is allocated
    #[default]
    Reject,
    /// Widen the row stride to the next block multiple, replicating the edge column
    Pad,
    /// Hand the unaligned width to the engine as is
    Permissive,
}

pub enum PlaneSet<'a> {
    Color {
        luma: &'a mut [u8],
        cb: &'a mut [u8],
        cr: &'a mut [u8],
    },
    Gray(&'a mut [u8]),
}

/// Plane buffers, geometry and flags for one engine invocation.
pub struct LayoutDescriptor<'a> {
    pub width: usize,
    pub height: usize,
    pub row_stride: usize,
    pub planes: PlaneSet<'a>,
    pub chroma: ChromaSampling,
    /// Always false; no alpha plane is ever passed
    pub alpha: bool,
}

impl LayoutDescriptor<'_> {
    pub fn is_color(&self) -> bool {
        matches!(self.planes, PlaneSet::Color { .. })
    }

    pub fn downsampled_chrominance(&self) -> bool {
        self.is_color() && matches!(self.chroma, ChromaSampling::Downsampled { .. })
    }

    pub fn nonreplicated_downsampled_chrominance(&self) -> bool {
        self.is_color() && self.chroma == ChromaSampling::Downsampled { replicated: false }
    }

    /// Checks geometry against the buffers actually referenced.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.row_stride < self.width {
            return Err(ConversionError::InvalidDimensions(self.width, self.height));
        }
        let expected = self.row_stride * self.height;
        let lengths = match &self.planes {
            PlaneSet::Color { luma, cb, cr } => vec![luma.len(), cb.len(), cr.len()],
            PlaneSet::Gray(luma) => vec![luma.len()],
        };
        match lengths.into_iter().find(|&len| len != expected) {
            Some(actual) => Err(ConversionError::DimensionMismatch { expected, actual }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_follow_plane_set() {
        let mut luma = vec![0u8; 16];
        let layout = LayoutDescriptor {
            width: 4,
            height: 4,
            row_stride: 4,
            planes: PlaneSet::Gray(&mut luma),
            chroma: ChromaSampling::default(),
            alpha: false,
        };

        assert!(!layout.is_color());
        assert!(!layout.downsampled_chrominance());
        assert!(!layout.nonreplicated_downsampled_chrominance());
    }

    #[test]
    fn test_color_downsampled_flags() {
        let (mut y, mut cb, mut cr) = (vec![0u8; 16], vec![0u8; 16], vec![0u8; 16]);
        let mut layout = LayoutDescriptor {
            width: 4,
            height: 4,
            row_stride: 4,
            planes: PlaneSet::Color { luma: &mut y, cb: &mut cb, cr: &mut cr },
            chroma: ChromaSampling::Downsampled { replicated: false },
            alpha: false,
        };
        assert!(layout.downsampled_chrominance());
        assert!(layout.nonreplicated_downsampled_chrominance());

        layout.chroma = ChromaSampling::Downsampled { replicated: true };
        assert!(layout.downsampled_chrominance());
        assert!(!layout.nonreplicated_downsampled_chrominance());

        layout.chroma = ChromaSampling::Full;
        assert!(!layout.downsampled_chrominance());
    }

    #[test]
    fn test_validate_catches_short_plane() {
        let (mut y, mut cb, mut cr) = (vec![0u8; 32], vec![0u8; 32], vec![0u8; 31]);
        let layout = LayoutDescriptor {
            width: 6,
            height: 4,
            row_stride: 8,
            planes: PlaneSet::Color { luma: &mut y, cb: &mut cb, cr: &mut cr },
            chroma: ChromaSampling::Full,
            alpha: false,
        };

        assert!(matches!(
            layout.validate(),
            Err(ConversionError::DimensionMismatch { expected: 32, actual: 31 })
        ));
    }

    #[test]
    fn test_processing_mode_flags() {
        assert_eq!(ProcessingMode::NonPhotographic.as_flag(), 0);
        assert_eq!(ProcessingMode::Photographic.as_flag(), 1);
    }
}
