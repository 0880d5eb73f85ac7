//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually motivated opponent space referenced to a white
//! point. Every conversion here takes that white point explicitly; D50 is the
//! documented default via [`LAB_DEFAULT_WHITE`].
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)

use crate::color::{D50, WhitePoint, Xyz};
use serde::{Deserialize, Serialize};

/// CIE ε = 216 / 24389
pub const EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ = 24389 / 27
pub const KAPPA: f64 = 24389.0 / 27.0;

/// Reference white used when the caller has no better choice
pub const LAB_DEFAULT_WHITE: WhitePoint = D50;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// The reference white itself: L = 100, a = b = 0
    pub const WHITE: Self = Self::new(100.0, 0.0, 0.0);

    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ relative to the given reference white
    pub fn from_xyz(xyz: Xyz, white: Xyz) -> Self {
        let fx = lab_f(xyz.x / white.x);
        let fy = lab_f(xyz.y / white.y);
        let fz = lab_f(xyz.z / white.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert from XYZ relative to [`LAB_DEFAULT_WHITE`]
    #[inline]
    pub fn from_xyz_d50(xyz: Xyz) -> Self {
        Self::from_xyz(xyz, LAB_DEFAULT_WHITE.xyz)
    }

    /// Convert to XYZ relative to [`LAB_DEFAULT_WHITE`]
    #[inline]
    pub fn to_xyz_d50(&self) -> Xyz {
        self.to_xyz(LAB_DEFAULT_WHITE.xyz)
    }

    /// Convert to XYZ relative to the given reference white
    pub fn to_xyz(&self, white: Xyz) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let fx3 = fx * fx * fx;
        let fz3 = fz * fz * fz;

        let xr = if fx3 > EPSILON { fx3 } else { (116.0 * fx - 16.0) / KAPPA };
        let zr = if fz3 > EPSILON { fz3 } else { (116.0 * fz - 16.0) / KAPPA };
        let yr = if self.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            self.l / KAPPA
        };

        Xyz::new(xr * white.x, yr * white.y, zr * white.z)
    }

    /// Force L = 100, scaling a and b by the same factor
    ///
    /// Every Delta E entry point compares normalized values; it removes the
    /// lightness term so measurements at different luminance compare by
    /// chromaticity alone. L = 0 carries no chromaticity and maps to
    /// [`Lab::WHITE`].
    #[inline]
    pub fn normalize(&self) -> Self {
        if self.l == 0.0 {
            return Self::WHITE;
        }
        let k = 100.0 / self.l;
        Self {
            l: 100.0,
            a: self.a * k,
            b: self.b * k,
        }
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Get hue angle in degrees (0-360)
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::D65;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_white_is_100() {
        let lab = Lab::from_xyz(D50.xyz, LAB_DEFAULT_WHITE.xyz);
        assert!(lab.approx_eq(&Lab::WHITE, EPS));

        let lab = Lab::from_xyz(D65.xyz, D65.xyz);
        assert!(lab.approx_eq(&Lab::WHITE, EPS));
    }

    #[test]
    fn test_black_is_0() {
        let lab = Lab::from_xyz(Xyz::ZERO, D50.xyz);
        assert!(lab.l.abs() < EPS);
        assert!(lab.a.abs() < EPS);
        assert!(lab.b.abs() < EPS);
    }

    #[test]
    fn test_known_value() {
        // sRGB red in D65 XYZ against a D65 white
        let red = Xyz::new(0.412456, 0.212673, 0.019334);
        let lab = Lab::from_xyz(red, D65.xyz);
        assert!((lab.l - 53.24).abs() < 0.01, "{lab:?}");
        assert!((lab.a - 80.09).abs() < 0.05, "{lab:?}");
        assert!((lab.b - 67.20).abs() < 0.05, "{lab:?}");
    }

    #[test]
    fn test_roundtrip() {
        for lab in [
            Lab::new(50.0, 25.0, -30.0),
            Lab::new(5.0, -2.0, 3.0),
            Lab::new(95.0, 0.5, 1.0),
        ] {
            let roundtrip = Lab::from_xyz(lab.to_xyz(D50.xyz), D50.xyz);
            assert!(lab.approx_eq(&roundtrip, 1e-9), "{lab:?} vs {roundtrip:?}");
        }
    }

    #[test]
    fn test_roundtrip_dark_linear_segment() {
        let xyz = Xyz::new(0.002, 0.003, 0.001);
        let back = Lab::from_xyz(xyz, D65.xyz).to_xyz(D65.xyz);
        assert!(xyz.approx_eq(&back, 1e-12));
    }

    #[test]
    fn test_default_white_convenience() {
        let xyz = Xyz::new(0.3, 0.4, 0.5);
        assert_eq!(Lab::from_xyz_d50(xyz), Lab::from_xyz(xyz, D50.xyz));
        assert!(Lab::from_xyz_d50(xyz).to_xyz_d50().approx_eq(&xyz, 1e-12));
    }

    #[test]
    fn test_normalize() {
        let n = Lab::new(50.0, 10.0, -4.0).normalize();
        assert_eq!(n.l, 100.0);
        assert!((n.a - 20.0).abs() < EPS);
        assert!((n.b + 8.0).abs() < EPS);

        assert_eq!(Lab::WHITE.normalize(), Lab::WHITE);
        assert_eq!(Lab::new(0.0, 0.0, 0.0).normalize(), Lab::WHITE);
    }

    #[test]
    fn test_chroma_and_hue() {
        let lab = Lab::new(50.0, 3.0, 4.0);
        assert!((lab.chroma() - 5.0).abs() < EPS);
        assert!((Lab::new(50.0, 0.0, 1.0).hue_degrees() - 90.0).abs() < EPS);
        assert!((Lab::new(50.0, 0.0, -1.0).hue_degrees() - 270.0).abs() < EPS);
    }
}
