//! Limited-range ("studio swing") YCbCr <-> RGB conversion.
//!
//! Luma is offset by 16 and both chroma channels by 128. Neither direction
//! clamps; values may leave `[0, 255]` slightly near the channel extremes and
//! must go through [`clamp_to_byte`] before being stored.

const LUMA_OFFSET: f64 = 16.0;
const CHROMA_OFFSET: f64 = 128.0;

/// RGB -> (Y, Cb, Cr)
#[rustfmt::skip]
const RGB_TO_YCBCR: [[f64; 3]; 3] = [
    [ 0.257,  0.504,  0.098],
    [-0.148, -0.291,  0.439],
    [ 0.439, -0.368, -0.071],
];

/// (Y - 16, Cb - 128, Cr - 128) -> RGB
#[rustfmt::skip]
const YCBCR_TO_RGB: [[f64; 3]; 3] = [
    [1.164,  0.0,    1.596],
    [1.164, -0.392, -0.813],
    [1.164,  2.017,  0.0  ],
];

fn mul(matrix: &[[f64; 3]; 3], [a, b, c]: [f64; 3]) -> [f64; 3] {
    matrix.map(|row| row[0] * a + row[1] * b + row[2] * c)
}

/// Converts an RGB triple in `[0, 255]` to unclamped `[Y, Cb, Cr]`.
pub fn to_luma_chroma(r: f64, g: f64, b: f64) -> [f64; 3] {
    let [y, cb, cr] = mul(&RGB_TO_YCBCR, [r, g, b]);
    [y + LUMA_OFFSET, cb + CHROMA_OFFSET, cr + CHROMA_OFFSET]
}

/// Inverse of [`to_luma_chroma`]; offsets are removed before the matrix.
pub fn to_rgb(y: f64, cb: f64, cr: f64) -> [f64; 3] {
    mul(
        &YCBCR_TO_RGB,
        [y - LUMA_OFFSET, cb - CHROMA_OFFSET, cr - CHROMA_OFFSET],
    )
}

/// Rounds to nearest and saturates to `0..=255`.
pub fn clamp_to_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Sum of absolute per-channel errors of an unclamped RGB -> YCbCr -> RGB trip.
///
/// The two matrices use rounded published coefficients, so this is not zero,
/// but it stays well under one code value for every 8-bit input.
pub fn round_trip_error(r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    let [y, cb, cr] = to_luma_chroma(r, g, b);
    let [r2, g2, b2] = to_rgb(y, cb, cr);
    (r2 - r).abs() + (g2 - g).abs() + (b2 - b).abs()
}
