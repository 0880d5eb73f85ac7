//! Illuminant spectra: tabulated D65, black-body and CIE daylight
//!
//! All generated spectra are sampled at 1nm over 300–830nm.

use super::tables::{
    D65_SPD, DAYLIGHT_END, DAYLIGHT_S0, DAYLIGHT_S1, DAYLIGHT_S2, DAYLIGHT_START, DAYLIGHT_STEP,
};
use crate::color::XyY;
use crate::math::{lerp, upsample_linear};
use std::sync::LazyLock;
use tracing::debug;

/// First wavelength of generated spectra (nm)
pub const SPECTRUM_START: usize = DAYLIGHT_START;

/// Last wavelength of generated spectra (nm)
pub const SPECTRUM_END: usize = DAYLIGHT_END;

/// Lowest temperature accepted by [`Illuminant::planckian`] (K)
pub const PLANCKIAN_MIN_TEMPERATURE: f64 = 1.0;

/// Highest temperature accepted by [`Illuminant::planckian`] (K)
pub const PLANCKIAN_MAX_TEMPERATURE: f64 = 1e6;

/// First radiation constant 2πhc² (W·m²)
const C1: f64 = 3.74183e-16;

/// Second radiation constant hc/k (m·K)
const C2: f64 = 1.4388e-2;

/// Relative spectral power distribution at a fixed step over [start, end] nm
#[derive(Debug, Clone, PartialEq)]
pub struct Illuminant {
    /// Display name
    pub name: String,
    /// First tabulated wavelength (nm)
    pub start: usize,
    /// Last tabulated wavelength (nm)
    pub end: usize,
    /// Spectral power per sample
    pub s: Vec<f64>,
}

/// The daylight basis vectors S0, S1, S2 at 1nm
struct DaylightBasis {
    s0: Vec<f64>,
    s1: Vec<f64>,
    s2: Vec<f64>,
}

static DAYLIGHT_BASIS: LazyLock<DaylightBasis> = LazyLock::new(|| {
    let fill = DAYLIGHT_STEP - 1;
    let basis = DaylightBasis {
        s0: upsample_linear(&DAYLIGHT_S0, fill),
        s1: upsample_linear(&DAYLIGHT_S1, fill),
        s2: upsample_linear(&DAYLIGHT_S2, fill),
    };
    debug!(table = "daylight S0/S1/S2", samples = basis.s0.len(), "spectral table initialized");
    basis
});

/// CIE standard illuminant D65 at 1nm, 300–830nm
pub static D65_1NM: LazyLock<Illuminant> = LazyLock::new(|| {
    let il = Illuminant {
        name: "D65".to_string(),
        start: DAYLIGHT_START,
        end: DAYLIGHT_END,
        s: upsample_linear(&D65_SPD, DAYLIGHT_STEP - 1),
    };
    debug!(table = "D65", samples = il.len(), "spectral table initialized");
    il
});

/// Spectral radiance of a black body at wavelength `wl` (m) and temperature `t` (K)
#[inline]
fn planck(wl: f64, t: f64) -> f64 {
    C1 * wl.powi(-5) / ((C2 / (wl * t)).exp() - 1.0)
}

/// Chromaticity of CIE daylight at a correlated color temperature
///
/// Cubic in 1/T, with separate coefficients above and below 7000K. The CIE
/// fit is defined from 4000K; lower temperatures still produce a value but it
/// drifts away from real daylight.
///
/// Reference: <http://www.brucelindbloom.com/Eqn_T_to_xy.html>
pub fn daylight_chromaticity(t: f64) -> XyY {
    let t2 = t * t;
    let t3 = t2 * t;
    let x = if t > 7000.0 {
        -2.0064e9 / t3 + 1.9018e6 / t2 + 0.24748e3 / t + 0.237040
    } else {
        -4.6070e9 / t3 + 2.9678e6 / t2 + 0.09911e3 / t + 0.244063
    };
    let y = -3.0 * x * x + 2.87 * x - 0.275;
    XyY::from_chromaticity(x, y)
}

impl Illuminant {
    /// Black-body radiator at `t` kelvin, normalized to 1 at 560nm
    ///
    /// Returns `None` outside [1, 1e6] K.
    pub fn planckian(t: f64) -> Option<Self> {
        if !(PLANCKIAN_MIN_TEMPERATURE..=PLANCKIAN_MAX_TEMPERATURE).contains(&t) {
            return None;
        }

        let norm = planck(560e-9, t);
        let s = (SPECTRUM_START..=SPECTRUM_END)
            .map(|nm| planck(nm as f64 * 1e-9, t) / norm)
            .collect();

        Some(Self {
            name: format!("P({t:.1}K)"),
            start: SPECTRUM_START,
            end: SPECTRUM_END,
            s,
        })
    }

    /// CIE daylight at correlated color temperature `t`
    ///
    /// S(λ) = S0(λ) + M1·S1(λ) + M2·S2(λ), with M1 and M2 derived from the
    /// daylight chromaticity at `t`.
    pub fn daylight(t: f64) -> Self {
        let XyY { x, y, .. } = daylight_chromaticity(t);

        let m = 0.0241 + 0.2562 * x - 0.7341 * y;
        let m1 = (-1.3515 - 1.7703 * x + 5.9114 * y) / m;
        let m2 = (0.03 - 31.4424 * x + 30.0717 * y) / m;

        let basis = &*DAYLIGHT_BASIS;
        let s = basis
            .s0
            .iter()
            .zip(&basis.s1)
            .zip(&basis.s2)
            .map(|((s0, s1), s2)| s0 + m1 * s1 + m2 * s2)
            .collect();

        Self {
            name: format!("D({t:.1}K)"),
            start: SPECTRUM_START,
            end: SPECTRUM_END,
            s,
        }
    }

    /// Number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.s.len()
    }

    /// True when the spectrum has no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Wavelength step between samples (nm)
    ///
    /// Zero for a spectrum with fewer than two samples or a reversed range.
    #[inline]
    pub fn interval(&self) -> usize {
        match self.len().checked_sub(1) {
            Some(gaps) if gaps > 0 => self.end.saturating_sub(self.start) / gaps,
            _ => 0,
        }
    }

    /// Spectral power at a tabulated wavelength
    pub fn at(&self, wavelength: usize) -> Option<f64> {
        let step = self.interval();
        if step == 0 || wavelength < self.start || wavelength > self.end {
            return None;
        }
        let offset = wavelength - self.start;
        if offset % step != 0 {
            return None;
        }
        self.s.get(offset / step).copied()
    }

    /// Spectral power at any wavelength in range, linearly interpolated
    pub fn interpolate(&self, wavelength: f64) -> Option<f64> {
        let step = self.interval();
        if step == 0 || !(self.start as f64..=self.end as f64).contains(&wavelength) {
            return None;
        }
        let pos = (wavelength - self.start as f64) / step as f64;
        let i = (pos.floor() as usize).min(self.len() - 1);
        let j = (i + 1).min(self.len() - 1);
        Some(lerp(self.s[i], self.s[j], pos - i as f64))
    }
}
