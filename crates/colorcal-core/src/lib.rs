//! # colorcal - Colorimetry for display calibration
//!
//! The numeric core of a display-calibration workflow: conversions between
//! color encodings, chromatic adaptation, perceptual color difference,
//! spectral integration and correlated color temperature.
//!
//! ## Scope
//!
//! - **Conversions**: xyY ↔ XYZ ↔ Lab, XYZ ↔ sRGB with explicit reference whites
//! - **Adaptation**: Bradford between any two whites, fixed D65 ↔ D50 matrices
//! - **Delta E**: CIE1976, CIE1994 and CIEDE2000, plus a closed form against white
//! - **Spectra**: CIE 1931 2° observer, D65, black-body and daylight illuminants
//! - **CCT**: trust-region search along the Planckian or daylight locus
//!
//! Driving the instrument and writing reports are left to the host; the
//! crate only decodes a sample line and fills in a [`Measurement`].
//!
//! ## Quick Start
//!
//! ```
//! use colorcal_core::{CctOptions, DeltaE, Lab, Locus, Xyz, closest_color_temperature, difference};
//!
//! // An absolute instrument reading, normalized before any temperature work
//! let reading = Xyz::new(133.82, 140.71, 153.52).normalize();
//!
//! let options = CctOptions::new(Locus::Daylight, DeltaE::Cie2000);
//! let estimate = closest_color_temperature(reading, &options);
//! assert!((6000.0..7000.0).contains(&estimate.temperature));
//!
//! // Distance from the reading to the locus white it was matched to
//! let lab = Lab::from_xyz(reading, estimate.white_point);
//! let de = difference(lab, Lab::WHITE, DeltaE::Cie2000);
//! assert!(de < 5.0);
//! ```
//!
//! ## Conventions
//!
//! Nothing normalizes implicitly. Routines that need Y = 1 (the CCT search,
//! the fixed adaptation matrices) say so and leave the call to
//! [`Xyz::normalize`] to the caller. Delta E is the exception: every Delta E
//! entry point normalizes its Lab inputs to L = 100.

pub mod cct;
pub mod color;
pub mod difference;
pub mod error;
pub mod math;
pub mod measurement;
pub mod spectral;

pub use cct::{
    CctEstimate, CctOptions, closest_color_temperature, closest_daylight_temperature,
    closest_planckian_temperature, correlated_color_temperature, robertson_cct,
};
pub use color::{D50, D55, D65, D75, Lab, Rgb, RgbOptions, Ucs, WhitePoint, XyY, Xyz};
pub use difference::{
    DEFAULT_DELTA_E, DeltaE, difference, difference_to_white, difference_to_white_xyz,
    difference_xyz,
};
pub use error::{Error, Result};
pub use math::{Matrix3x3, ScalingMethod, Vector3};
pub use measurement::{Measurement, MeasurementOptions, parse_sample, samples_from_flat};
pub use spectral::{Illuminant, Locus, Observer, white_point};

/// Version of colorcal
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
