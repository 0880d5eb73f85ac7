//! Numeric building blocks for the colorimetry engine
//!
//! - 3x3 matrix operations for RGB↔XYZ and adaptation transforms
//! - sRGB companding
//! - Chromatic adaptation (Bradford and fixed D65↔D50 matrices)
//! - Linear and Sprague interpolation for spectral upsampling
//! - A derivative-free scalar minimizer for the CCT solver

pub mod chromatic_adaptation;
pub mod gamma;
pub mod interpolation;
pub mod matrix;
pub mod minimize;

pub use chromatic_adaptation::{ScalingMethod, adapt_xyz, bradford_matrix, scale_to_d50, scale_to_d65};
pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use interpolation::{lerp, upsample_linear, upsample_sprague};
pub use matrix::{Matrix3x3, Vector3};
pub use minimize::{Minimum, TrustRegion, minimize};
