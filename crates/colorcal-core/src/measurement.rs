//! Measurement records and instrument sample decoding
//!
//! An instrument emits one tristimulus reading per line as three
//! whitespace-separated numbers, ending with an empty line. [`parse_sample`]
//! decodes one such line; [`Measurement::from_sample`] derives the numeric
//! fields a calibration report needs from a reading. Reading the stream and
//! formatting the report belong to the host application.

use crate::cct::{CctOptions, closest_color_temperature};
use crate::color::{RgbOptions, Xyz};
use crate::difference::{DeltaE, difference_to_white_xyz};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for deriving a [`Measurement`] from a reading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementOptions {
    /// Temperature search settings
    pub cct: CctOptions,
    /// Formula for the distance to the locus white
    pub delta_e: DeltaE,
    /// XYZ → RGB settings
    pub rgb: RgbOptions,
}

/// One row of a calibration report
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Measurement {
    /// Seconds since the session started
    pub seconds: u32,
    /// Display gamma reported by the instrument
    pub gamma: f64,
    /// Correlated color temperature (K)
    pub temperature: f64,
    /// Contrast ratio reported by the instrument
    pub contrast: f64,
    /// Distance to the locus white at `temperature`
    pub delta_e: f64,
    /// Absolute luminance (cd/m²)
    pub luminance: f64,
    /// Companded red of the normalized reading
    pub red: f64,
    /// Companded green of the normalized reading
    pub green: f64,
    /// Companded blue of the normalized reading
    pub blue: f64,
    /// Raw X
    pub x: f64,
    /// Raw Y
    pub y: f64,
    /// Raw Z
    pub z: f64,
}

impl Measurement {
    /// Report column names, in [`Measurement::values`] order
    pub const FIELDS: [&'static str; 12] = [
        "Seconds",
        "Gamma",
        "Temperature",
        "Contrast",
        "DeltaE",
        "Luminance",
        "Red",
        "Green",
        "Blue",
        "X",
        "Y",
        "Z",
    ];

    /// Derive temperature, Delta E and RGB from an absolute reading
    ///
    /// The reading is normalized to Y = 1 before the temperature search and
    /// RGB conversion. Gamma and contrast come from the instrument, not from
    /// a single reading, and are left at zero. Returns `None` when the
    /// reading has no luminance.
    pub fn from_sample(seconds: u32, xyz: Xyz, options: &MeasurementOptions) -> Option<Self> {
        if xyz.y.is_nan() || xyz.y <= 0.0 {
            return None;
        }

        let normalized = xyz.normalize();
        let estimate = closest_color_temperature(normalized, &options.cct);
        let delta_e = difference_to_white_xyz(normalized, estimate.white_point, options.delta_e);
        let rgb = normalized.to_rgb(&options.rgb);

        Some(Self {
            seconds,
            gamma: 0.0,
            temperature: estimate.temperature,
            contrast: 0.0,
            delta_e,
            luminance: xyz.y,
            red: rgb.r,
            green: rgb.g,
            blue: rgb.b,
            x: xyz.x,
            y: xyz.y,
            z: xyz.z,
        })
    }

    /// Field values in [`Measurement::FIELDS`] order
    pub fn values(&self) -> [f64; 12] {
        [
            f64::from(self.seconds),
            self.gamma,
            self.temperature,
            self.contrast,
            self.delta_e,
            self.luminance,
            self.red,
            self.green,
            self.blue,
            self.x,
            self.y,
            self.z,
        ]
    }
}

/// Decode one instrument line into a reading
///
/// An empty (or all-whitespace) line marks the end of the stream and gives
/// `Ok(None)`. Anything other than exactly three finite numbers is an error.
pub fn parse_sample(line: &str) -> Result<Option<Xyz>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let values = line
        .split_whitespace()
        .map(|token| token.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<_>>>();

    match values.as_deref() {
        Some(&[x, y, z]) => Ok(Some(Xyz::new(x, y, z))),
        _ => {
            debug!(line, "rejected sample line");
            Err(Error::InvalidSample(line.to_string()))
        }
    }
}

/// View a flat `[X, Y, Z, X, Y, Z, ...]` buffer as readings without copying
pub fn samples_from_flat(values: &[f64]) -> Result<&[Xyz]> {
    bytemuck::try_cast_slice(values).map_err(|e| {
        Error::InvalidSample(format!("{} values do not form XYZ triples: {e}", values.len()))
    })
}
