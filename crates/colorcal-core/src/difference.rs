//! Perceptual color difference (Delta E)
//!
//! Every entry point normalizes its Lab inputs to L = 100 before applying a
//! formula, so two readings of the same chromaticity at different luminance
//! compare as equal. The formula is always an explicit [`DeltaE`] argument;
//! [`DEFAULT_DELTA_E`] is the documented choice when a caller has none.
//!
//! References:
//! - <http://www.brucelindbloom.com/Eqn_DeltaE_CIE76.html>
//! - <http://www.brucelindbloom.com/Eqn_DeltaE_CIE94.html>
//! - Sharma, Wu, Dalal: "The CIEDE2000 Color-Difference Formula:
//!   Implementation Notes, Supplementary Test Data, and Mathematical
//!   Observations" (2005)

use crate::color::{Lab, Xyz};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color difference formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaE {
    /// Euclidean distance in L*a*b*
    #[serde(rename = "CIE1976")]
    Cie1976,
    /// Chroma- and hue-weighted distance
    #[serde(rename = "CIE1994")]
    Cie1994,
    /// CIEDE2000
    #[serde(rename = "CIE2000")]
    Cie2000,
}

/// Formula used when the caller does not pick one
pub const DEFAULT_DELTA_E: DeltaE = DeltaE::Cie2000;

impl Default for DeltaE {
    fn default() -> Self {
        DEFAULT_DELTA_E
    }
}

impl DeltaE {
    /// All supported formulas
    pub const ALL: [DeltaE; 3] = [DeltaE::Cie1976, DeltaE::Cie1994, DeltaE::Cie2000];

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            DeltaE::Cie1976 => "CIE1976",
            DeltaE::Cie1994 => "CIE1994",
            DeltaE::Cie2000 => "CIE2000",
        }
    }
}

impl FromStr for DeltaE {
    type Err = Error;

    /// Accepts `CIE1976`, `CIE76`, `1976`, `76` (and likewise for 1994 and
    /// 2000, plus `CIEDE2000`), case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_uppercase();
        let name = name
            .strip_prefix("CIEDE")
            .or_else(|| name.strip_prefix("CIE"))
            .unwrap_or(name.as_str());
        match name {
            "1976" | "76" => Ok(DeltaE::Cie1976),
            "1994" | "94" => Ok(DeltaE::Cie1994),
            "2000" | "00" => Ok(DeltaE::Cie2000),
            _ => Err(Error::UnsupportedDeltaE(s.to_string())),
        }
    }
}

impl fmt::Display for DeltaE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const K1: f64 = 0.045;
const K2: f64 = 0.015;
const POW25_7: f64 = 6_103_515_625.0;

/// Difference between two Lab colors
pub fn difference(a: Lab, b: Lab, mode: DeltaE) -> f64 {
    let a = a.normalize();
    let b = b.normalize();
    match mode {
        DeltaE::Cie1976 => cie1976(a, b),
        DeltaE::Cie1994 => cie1994(a, b),
        DeltaE::Cie2000 => ciede2000(a, b),
    }
}

/// Difference between two XYZ colors, both converted to Lab against `white`
pub fn difference_xyz(a: Xyz, b: Xyz, white: Xyz, mode: DeltaE) -> f64 {
    difference(Lab::from_xyz(a, white), Lab::from_xyz(b, white), mode)
}

/// Difference between `c` and the reference white [`Lab::WHITE`]
///
/// Same value as `difference(c, Lab::WHITE, mode)`, evaluated in closed form
/// with the reference terms (L = 100, C = 0) folded in.
pub fn difference_to_white(c: Lab, mode: DeltaE) -> f64 {
    let c = c.normalize();
    match mode {
        DeltaE::Cie1976 => c.a.hypot(c.b),
        DeltaE::Cie1994 => {
            // Weighting chroma sqrt(C * 0) vanishes, so Sc = Sh = 1 and the
            // hue term is zero: only the chroma difference remains.
            c.chroma()
        }
        DeltaE::Cie2000 => {
            let c_bar = c.chroma() / 2.0;
            let g = rotation_g(c_bar);
            let c_prime = (c.a * (1.0 + g)).hypot(c.b);
            let sc = 1.0 + K1 * c_prime / 2.0;
            c_prime / sc
        }
    }
}

/// Difference between an XYZ color and the white it is measured against
#[inline]
pub fn difference_to_white_xyz(c: Xyz, white: Xyz, mode: DeltaE) -> f64 {
    difference_to_white(Lab::from_xyz(c, white), mode)
}

/// G = (1 − √(C̄⁷ / (C̄⁷ + 25⁷))) / 2
#[inline]
fn rotation_g(c_bar: f64) -> f64 {
    let c7 = c_bar.powi(7);
    0.5 * (1.0 - (c7 / (c7 + POW25_7)).sqrt())
}

fn cie1976(a: Lab, b: Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE94 with graphic-arts weights, chroma-weighted by √(C₁·C₂)
///
/// The textbook form weights S_C and S_H by the reference chroma C₁ alone,
/// which makes the distance depend on argument order. The geometric mean
/// keeps it symmetric; against white it is zero.
fn cie1994(a: Lab, b: Lab) -> f64 {
    let c1 = a.chroma();
    let c2 = b.chroma();
    let c_w = (c1 * c2).sqrt();

    let dl = a.l - b.l;
    let dc = c1 - c2;
    let da = a.a - b.a;
    let db = a.b - b.b;
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + K1 * c_w;
    let sh = 1.0 + K2 * c_w;

    (dl * dl + (dc / sc).powi(2) + dh2 / (sh * sh)).sqrt()
}

/// Hue angle in degrees, [0, 360); zero for achromatic input
#[inline]
fn hue(b: f64, a_prime: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = rotation_g(c_bar);

    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);
    let h1p = hue(lab1.b, a1p);
    let h2p = hue(lab2.b, a2p);

    let dlp = lab2.l - lab1.l;
    let dcp = c2p - c1p;

    let chroma_product = c1p * c2p;
    let dhp = if chroma_product == 0.0 {
        0.0
    } else {
        let d = h2p - h1p;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let d_big_hp = 2.0 * chroma_product.sqrt() * (dhp / 2.0).to_radians().sin();

    let l_bar = (lab1.l + lab2.l) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;
    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let rc = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let l50 = (l_bar - 50.0).powi(2);
    let sl = 1.0 + K2 * l50 / (20.0 + l50).sqrt();
    let sc = 1.0 + K1 * c_bar_p;
    let sh = 1.0 + K2 * c_bar_p * t;

    let l_term = dlp / sl;
    let c_term = dcp / sc;
    let h_term = d_big_hp / sh;

    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term).sqrt()
}
