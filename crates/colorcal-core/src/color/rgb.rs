//! Companded RGB and the RGB ↔ XYZ conversion
//!
//! The RGB → XYZ matrix is derived from the primaries' chromaticities and a
//! reference white rather than hard-coded, so the same primaries can be
//! evaluated against any calibration target white.
//!
//! Reference: <http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html>

use crate::color::{D65, XyY, Xyz};
use crate::math::{Matrix3x3, srgb_gamma_decode, srgb_gamma_encode};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use std::sync::LazyLock;

/// Companded (gamma-encoded) RGB, nominally in [0, 1]
///
/// Values outside [0, 1] are legitimate: they mark colors outside the gamut
/// of the primaries and are only clipped when explicitly requested.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

/// Chromaticities of a set of RGB primaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbPrimaries {
    /// Red primary
    pub red: XyY,
    /// Green primary
    pub green: XyY,
    /// Blue primary
    pub blue: XyY,
}

/// ITU-R BT.709 / sRGB primaries
pub const SRGB_PRIMARIES: RgbPrimaries = RgbPrimaries {
    red: XyY::new(0.6400, 0.3300, 0.2126),
    green: XyY::new(0.3000, 0.6000, 0.7153),
    blue: XyY::new(0.1500, 0.0600, 0.0721),
};

/// Options for XYZ ↔ RGB conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbOptions {
    /// Reference white the primaries are balanced to
    pub white: Xyz,
    /// Clip the companded output to [0, 1]
    pub clip: bool,
}

impl Default for RgbOptions {
    fn default() -> Self {
        Self {
            white: D65.xyz,
            clip: false,
        }
    }
}

impl RgbPrimaries {
    /// Linear RGB → XYZ matrix balanced so that RGB (1, 1, 1) maps to `white`
    ///
    /// Builds the raw matrix whose columns are the primaries' XYZ, solves the
    /// per-channel scale S = M⁻¹ · white, then rescales each column by S.
    pub fn to_xyz_matrix(&self, white: Xyz) -> Matrix3x3 {
        let raw = Matrix3x3::from_columns(
            self.red.to_xyz().to_array(),
            self.green.to_xyz().to_array(),
            self.blue.to_xyz().to_array(),
        );
        let s = raw.inverse().multiply_vec(white.to_array());
        raw.scale_columns(s)
    }

    /// XYZ → linear RGB matrix, the inverse of [`RgbPrimaries::to_xyz_matrix`]
    pub fn from_xyz_matrix(&self, white: Xyz) -> Matrix3x3 {
        self.to_xyz_matrix(white).inverse()
    }
}

/// sRGB → XYZ and XYZ → sRGB matrices against D65, derived once
static SRGB_D65: LazyLock<[Matrix3x3; 2]> = LazyLock::new(|| {
    let to_xyz = SRGB_PRIMARIES.to_xyz_matrix(D65.xyz);
    [to_xyz, to_xyz.inverse()]
});

/// Linear sRGB → XYZ matrix for `white`, cached for D65
fn srgb_to_xyz_matrix(white: Xyz) -> Matrix3x3 {
    if white == D65.xyz {
        SRGB_D65[0]
    } else {
        SRGB_PRIMARIES.to_xyz_matrix(white)
    }
}

/// XYZ → linear sRGB matrix for `white`, cached for D65
fn srgb_from_xyz_matrix(white: Xyz) -> Matrix3x3 {
    if white == D65.xyz {
        SRGB_D65[1]
    } else {
        SRGB_PRIMARIES.from_xyz_matrix(white)
    }
}

impl Rgb {
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clip(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Apply the sRGB companding curve to each channel
    #[inline]
    pub fn compand(&self) -> Self {
        Self::new(
            srgb_gamma_encode(self.r),
            srgb_gamma_encode(self.g),
            srgb_gamma_encode(self.b),
        )
    }

    /// Undo the sRGB companding curve on each channel
    #[inline]
    pub fn inverse_compand(&self) -> Self {
        Self::new(
            srgb_gamma_decode(self.r),
            srgb_gamma_decode(self.g),
            srgb_gamma_decode(self.b),
        )
    }

    /// Convert companded sRGB to XYZ relative to `white`
    ///
    /// Pure black short-circuits to the zero XYZ.
    pub fn to_xyz(&self, white: Xyz) -> Xyz {
        if *self == Self::BLACK {
            return Xyz::ZERO;
        }
        let m = srgb_to_xyz_matrix(white);
        Xyz::from_array(m.multiply_vec(self.inverse_compand().to_array()))
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl Xyz {
    /// Convert to companded sRGB
    ///
    /// The zero XYZ short-circuits to black. The input is used as-is: scale it
    /// (e.g. with [`Xyz::normalize`]) so that the reference white has Y = 1
    /// before converting absolute instrument readings.
    pub fn to_rgb(&self, options: &RgbOptions) -> Rgb {
        if self.is_zero() {
            return Rgb::BLACK;
        }
        let m = srgb_from_xyz_matrix(options.white);
        let rgb = Rgb::from_array(m.multiply_vec(self.to_array())).compand();
        if options.clip { rgb.clip() } else { rgb }
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}
