//! Color value types and the conversion graph between them
//!
//! - CIE XYZ tristimulus and the 1960 UCS projection
//! - CIE xyY chromaticity
//! - CIELAB against an explicit reference white
//! - Companded sRGB
//! - Standard white point constants

pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyy;
pub mod xyz;

pub use lab::{LAB_DEFAULT_WHITE, Lab};
pub use rgb::{Rgb, RgbOptions, RgbPrimaries, SRGB_PRIMARIES};
pub use white_point::{D50, D55, D65, D75, WhitePoint};
pub use xyy::XyY;
pub use xyz::{Ucs, Xyz};
