//! CIE Standard Illuminant White Points
//!
//! White points anchor chromatic adaptation and the Lab reference.
//! All are given as XYZ with Y = 1.0.

use crate::color::{XyY, Xyz};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named white point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }

    /// Chromaticity of the white point at unit luminance
    pub fn xyy(&self) -> XyY {
        self.xyz.to_xyy()
    }

    /// Get a standard white point by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "D50" => Some(D50),
            "D55" => Some(D55),
            "D65" => Some(D65),
            "D75" => Some(D75),
            _ => None,
        }
    }
}

/// CIE Standard Illuminant D50 (Horizon Light), ~5003K
///
/// Default reference white for Lab.
pub const D50: WhitePoint = WhitePoint::new("D50", 0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D55 (Mid-morning/Mid-afternoon Daylight), ~5503K
pub const D55: WhitePoint = WhitePoint::new("D55", 0.95682, 1.0, 0.92149);

/// CIE Standard Illuminant D65 (Noon Daylight), ~6504K
///
/// Reference white of sRGB and the usual display calibration target.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.950470558654, 1.0, 1.088828736396);

/// CIE Standard Illuminant D75 (North Sky Daylight), ~7504K
pub const D75: WhitePoint = WhitePoint::new("D75", 0.94972, 1.0, 1.22638);

impl FromStr for WhitePoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownWhitePoint(s.to_string()))
    }
}

impl TryFrom<String> for WhitePoint {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<WhitePoint> for String {
    fn from(wp: WhitePoint) -> Self {
        wp.name.to_string()
    }
}

impl fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_values() {
        assert!((D65.xyz.x - 0.95047).abs() < 1e-5);
        assert_eq!(D65.xyz.y, 1.0);
        assert!((D65.xyz.z - 1.08883).abs() < 1e-5);
    }

    #[test]
    fn test_d65_chromaticity() {
        let c = D65.xyy();
        assert!((c.x - 0.312727).abs() < 1e-6);
        assert!((c.y - 0.329023).abs() < 1e-6);
    }

    #[test]
    fn test_d50_chromaticity() {
        let c = D50.xyy();
        assert!((c.x - 0.3457).abs() < 1e-4);
        assert!((c.y - 0.3585).abs() < 1e-4);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(WhitePoint::from_name("D50"), Some(D50));
        assert_eq!(WhitePoint::from_name("d65"), Some(D65));
        assert_eq!("D75".parse::<WhitePoint>().unwrap(), D75);
        assert_eq!(
            "F11".parse::<WhitePoint>(),
            Err(Error::UnknownWhitePoint("F11".to_string()))
        );
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&D55).unwrap();
        assert_eq!(json, "\"D55\"");
        let back: WhitePoint = serde_json::from_str("\"d55\"").unwrap();
        assert_eq!(back, D55);
        assert!(serde_json::from_str::<WhitePoint>("\"A\"").is_err());
    }
}
