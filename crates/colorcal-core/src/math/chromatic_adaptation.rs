//! Chromatic Adaptation Transforms
//!
//! Chromatic adaptation transforms convert colors from one white point to another.
//! Arbitrary white pairs go through the Bradford cone-response model; the
//! common D65 ↔ D50 case has fixed matrices in both a Bradford and a plain
//! per-channel scaling variant.
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::Xyz;
use crate::math::Matrix3x3;
use serde::{Deserialize, Serialize};

/// Which fixed D65 ↔ D50 matrix to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScalingMethod {
    /// Bradford-derived matrix
    #[default]
    Bradford,
    /// Independent per-channel XYZ scaling by the white point ratio
    Linear,
}

/// Bradford matrix: XYZ → LMS (cone response)
pub const BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Compute the Bradford adaptation matrix from `src_white` to `dst_white`
///
/// The returned matrix M is used as XYZ_dst = M × XYZ_src, with
/// M = Bradford⁻¹ × diag(Bradford·dst / Bradford·src) × Bradford.
pub fn bradford_matrix(src_white: Xyz, dst_white: Xyz) -> Matrix3x3 {
    let src_lms = BRADFORD.multiply_vec(src_white.to_array());
    let dst_lms = BRADFORD.multiply_vec(dst_white.to_array());

    let scale = Matrix3x3::diagonal(
        dst_lms[0] / src_lms[0],
        dst_lms[1] / src_lms[1],
        dst_lms[2] / src_lms[2],
    );

    BRADFORD.inverse().multiply(&scale.multiply(&BRADFORD))
}

/// Adapt an XYZ color from one white point to another using Bradford
#[inline]
pub fn adapt_xyz(xyz: Xyz, src_white: Xyz, dst_white: Xyz) -> Xyz {
    Xyz::from_array(bradford_matrix(src_white, dst_white).multiply_vec(xyz.to_array()))
}

/// Pre-computed D65 → D50 Bradford matrix
pub const D65_TO_D50_BRADFORD: Matrix3x3 = Matrix3x3::new([
    [1.0478112, 0.0228866, -0.0501270],
    [0.0295424, 0.9904844, -0.0170491],
    [-0.0092345, 0.0150436, 0.7521316],
]);

/// Pre-computed D50 → D65 Bradford matrix
pub const D50_TO_D65_BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.9555766, -0.0230393, 0.0631636],
    [-0.0282895, 1.0099416, 0.0210077],
    [0.0122982, -0.0204830, 1.3299098],
]);

/// D65 → D50 by per-channel white ratio
pub const D65_TO_D50_LINEAR: Matrix3x3 = Matrix3x3::diagonal(1.0144659, 1.0, 0.7578878);

/// D50 → D65 by per-channel white ratio
pub const D50_TO_D65_LINEAR: Matrix3x3 = Matrix3x3::diagonal(0.9857403, 1.0, 1.3194565);

/// Adapt a D65-relative color to D50 with a fixed matrix
///
/// The fixed matrices assume both whites at Y = 1; scale absolute readings
/// with [`Xyz::normalize`] first.
#[inline]
pub fn scale_to_d50(xyz: Xyz, method: ScalingMethod) -> Xyz {
    let m = match method {
        ScalingMethod::Bradford => D65_TO_D50_BRADFORD,
        ScalingMethod::Linear => D65_TO_D50_LINEAR,
    };
    Xyz::from_array(m.multiply_vec(xyz.to_array()))
}

/// Adapt a D50-relative color to D65 with a fixed matrix
#[inline]
pub fn scale_to_d65(xyz: Xyz, method: ScalingMethod) -> Xyz {
    let m = match method {
        ScalingMethod::Bradford => D50_TO_D65_BRADFORD,
        ScalingMethod::Linear => D50_TO_D65_LINEAR,
    };
    Xyz::from_array(m.multiply_vec(xyz.to_array()))
}
