//! CIE XYZ Color Space
//!
//! XYZ is the hub of the conversion graph: xyY, Lab, RGB and the 1960 UCS
//! all convert through it. Instrument samples arrive as XYZ.

use crate::color::XyY;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Below this component sum a color has no defined chromaticity
pub const CHROMATICITY_EPSILON: f64 = 1e-9;

/// CIE 1931 XYZ tristimulus value
///
/// The Y scale is arbitrary (cd/m² from an instrument, 0..1 from a
/// conversion) unless the value has been passed through [`Xyz::normalize`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

/// CIE 1960 UCS coordinates, carrying the source luminance along
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ucs {
    /// u = 4X / (X + 15Y + 3Z)
    pub u: f64,
    /// v = 6Y / (X + 15Y + 3Z)
    pub v: f64,
    /// Source Y
    pub y: f64,
}

impl Xyz {
    /// The zero tristimulus value
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// True if every component is exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Scale so that Y = 1.0
    ///
    /// Requires `y != 0`; a zero luminance yields non-finite components.
    /// Normalization is never applied implicitly by other conversions, so
    /// callers that need Y = 1 (the CCT solver, fixed adaptation matrices)
    /// must call this themselves.
    #[inline]
    pub fn normalize(&self) -> Self {
        Self {
            x: self.x / self.y,
            y: 1.0,
            z: self.z / self.y,
        }
    }

    /// Convert to xyY chromaticity coordinates
    ///
    /// A component sum below [`CHROMATICITY_EPSILON`] yields the zero xyY.
    #[inline]
    pub fn to_xyy(&self) -> XyY {
        let sum = self.x + self.y + self.z;
        if sum < CHROMATICITY_EPSILON {
            XyY::ZERO
        } else {
            XyY::new(self.x / sum, self.y / sum, self.y)
        }
    }

    /// Project onto the CIE 1960 UCS (u, v) diagram
    #[inline]
    pub fn to_ucs(&self) -> Ucs {
        let d = self.x + 15.0 * self.y + 3.0 * self.z;
        Ucs {
            u: 4.0 * self.x / d,
            v: 6.0 * self.y / d,
            y: self.y,
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Xyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
