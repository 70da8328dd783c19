//! Sample plane storage

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Luma and two chroma planes for one image.
///
/// All three share `width`, `height` and `row_stride`; each holds exactly
/// `row_stride * height` samples. Columns `width..row_stride` are padding.
#[derive(Debug)]
pub struct SamplePlanes {
    width: usize,
    height: usize,
    row_stride: usize,
    luma: Vec<u8>,
    cb: Vec<u8>,
    cr: Vec<u8>,
}

fn allocate_plane(len: usize) -> Result<Vec<u8>> {
    let mut plane = Vec::new();
    plane
        .try_reserve_exact(len)
        .map_err(|_| ConversionError::AllocationError(len))?;
    plane.resize(len, 0);
    Ok(plane)
}

impl SamplePlanes {
    /// Allocates all three planes at once, zero filled.
    pub fn allocate(width: usize, height: usize, row_stride: usize) -> Result<Self> {
        if width == 0 || height == 0 || row_stride < width {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        let len = row_stride
            .checked_mul(height)
            .ok_or(ConversionError::InvalidDimensions(width, height))?;

        Ok(Self {
            width,
            height,
            row_stride,
            luma: allocate_plane(len)?,
            cb: allocate_plane(len)?,
            cr: allocate_plane(len)?,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Samples per plane, padding included
    pub fn plane_len(&self) -> usize {
        self.row_stride * self.height
    }

    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    pub fn cb(&self) -> &[u8] {
        &self.cb
    }

    pub fn cr(&self) -> &[u8] {
        &self.cr
    }

    /// Mutable access to `(luma, cb, cr)` together
    pub fn planes_mut(&mut self) -> (&mut [u8], &mut [u8], &mut [u8]) {
        (&mut self.luma, &mut self.cb, &mut self.cr)
    }

    /// Checks every plane still holds `row_stride * height` samples.
    pub fn validate(&self) -> Result<()> {
        let expected = self.plane_len();
        for plane in [&self.luma, &self.cb, &self.cr] {
            if plane.len() != expected {
                return Err(ConversionError::DimensionMismatch {
                    expected,
                    actual: plane.len(),
                });
            }
        }
        Ok(())
    }
}
