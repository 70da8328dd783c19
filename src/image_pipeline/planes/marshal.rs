use tracing::debug;

use crate::image_pipeline::color::{clamp_to_byte, to_luma_chroma, to_rgb};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::planes::types::SamplePlanes;
use crate::image_pipeline::raster::PixelGrid;

fn check_dimensions<G: PixelGrid + ?Sized>(grid: &G, planes: &SamplePlanes) -> Result<()> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(ConversionError::InvalidDimensions(width, height));
    }
    if width != planes.width() || height != planes.height() {
        return Err(ConversionError::DimensionMismatch {
            expected: planes.width() * planes.height(),
            actual: width * height,
        });
    }
    planes.validate()
}

/// Converts every pixel of `grid` into the three planes, raster order.
///
/// Padding columns, if any, repeat the last real column of their row.
pub fn forward<G: PixelGrid + ?Sized>(grid: &G, planes: &mut SamplePlanes) -> Result<()> {
    check_dimensions(grid, planes)?;

    let width = planes.width();
    let stride = planes.row_stride();
    let (luma, cb, cr) = planes.planes_mut();

    let rows = luma
        .chunks_exact_mut(stride)
        .zip(cb.chunks_exact_mut(stride))
        .zip(cr.chunks_exact_mut(stride));

    for (y, ((luma_row, cb_row), cr_row)) in rows.enumerate() {
        for x in 0..width {
            let [r, g, b] = grid.pixel(x, y).map(f64::from);
            let [ly, lcb, lcr] = to_luma_chroma(r, g, b).map(clamp_to_byte);
            luma_row[x] = ly;
            cb_row[x] = lcb;
            cr_row[x] = lcr;
        }
        for row in [luma_row, cb_row, cr_row] {
            let edge = row[width - 1];
            row[width..].fill(edge);
        }
    }

    Ok(())
}

/// Converts the (possibly engine-modified) planes back into `grid`.
///
/// Padding columns are ignored.
pub fn inverse<G: PixelGrid + ?Sized>(planes: &SamplePlanes, grid: &mut G) -> Result<()> {
    check_dimensions(grid, planes)?;

    let width = planes.width();
    let stride = planes.row_stride();

    for y in 0..planes.height() {
        let row = y * stride;
        for x in 0..width {
            let i = row + x;
            let [ly, lcb, lcr] = [planes.luma()[i], planes.cb()[i], planes.cr()[i]].map(f64::from);
            grid.set_pixel(x, y, to_rgb(ly, lcb, lcr).map(clamp_to_byte));
        }
    }

    Ok(())
}

/// Allocates planes with the given row stride and fills them from `grid`.
pub fn extract<G: PixelGrid + ?Sized>(grid: &G, row_stride: usize) -> Result<SamplePlanes> {
    let mut planes = SamplePlanes::allocate(grid.width(), grid.height(), row_stride)?;
    debug!(
        width = planes.width(),
        height = planes.height(),
        row_stride,
        "Allocated sample planes"
    );
    forward(grid, &mut planes)?;
    Ok(planes)
}

/// Writes `planes` back into `grid` and releases them.
pub fn reinsert<G: PixelGrid + ?Sized>(planes: SamplePlanes, grid: &mut G) -> Result<()> {
    inverse(&planes, grid)
}
