//! sRGB companding
//!
//! The IEC 61966-2-1 piecewise transfer curve between linear light and
//! stored channel values. Neither direction clamps: values outside [0, 1]
//! pass through the linear or power segment unchanged in sign handling.

/// Linear-light threshold below which the encode curve is linear
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.0031308;

/// Encoded threshold below which the decode curve is linear
pub const SRGB_ENCODED_THRESHOLD: f64 = 0.04045;

/// sRGB gamma decode (encoded → linear), a.k.a. inverse companding
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_ENCODED_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded), a.k.a. companding
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_LINEAR_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
