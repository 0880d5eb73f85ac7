//! CIE xyY chromaticity + luminance

use crate::color::Xyz;
use serde::{Deserialize, Serialize};

/// Chromaticity (x, y) plus luminance Y; z is implied as 1 − x − y
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XyY {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
    /// Luminance
    pub big_y: f64,
}

impl XyY {
    /// The zero value, returned for colors without chromaticity
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new xyY value
    #[inline]
    pub const fn new(x: f64, y: f64, big_y: f64) -> Self {
        Self { x, y, big_y }
    }

    /// A chromaticity at unit luminance
    #[inline]
    pub const fn from_chromaticity(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }

    /// The implied z chromaticity
    #[inline]
    pub fn z(&self) -> f64 {
        1.0 - self.x - self.y
    }

    /// Convert to XYZ
    ///
    /// Y = 0 short-circuits to the zero XYZ instead of dividing by y.
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        if self.big_y == 0.0 {
            return Xyz::ZERO;
        }
        Xyz::new(
            self.x * self.big_y / self.y,
            self.big_y,
            self.z() * self.big_y / self.y,
        )
    }

    /// Check if approximately equal to another xyY value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.big_y - other.big_y).abs() < epsilon
    }
}
