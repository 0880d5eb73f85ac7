//! Standard observer color matching functions

use super::tables::{
    CIE1931_2DEG_X, CIE1931_2DEG_Y, CIE1931_2DEG_Z, OBSERVER_END, OBSERVER_START, OBSERVER_STEP,
};
use crate::math::{lerp, upsample_sprague};
use std::sync::LazyLock;
use tracing::debug;

/// Tabulated x̄, ȳ, z̄ at a fixed wavelength step over [start, end] nm
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    /// Display name
    pub name: &'static str,
    /// First tabulated wavelength (nm)
    pub start: usize,
    /// Last tabulated wavelength (nm)
    pub end: usize,
    /// x̄(λ)
    pub x: Vec<f64>,
    /// ȳ(λ)
    pub y: Vec<f64>,
    /// z̄(λ)
    pub z: Vec<f64>,
}

/// CIE 1931 2° observer at 1nm, 360–830nm
pub static CIE1931_2DEG: LazyLock<Observer> = LazyLock::new(|| {
    // The polynomial overshoots slightly where z̄ runs into its zero tail
    let upsample = |table: &[f64]| -> Vec<f64> {
        upsample_sprague(table, OBSERVER_STEP - 1)
            .into_iter()
            .map(|v| v.max(0.0))
            .collect()
    };
    let observer = Observer {
        name: "CIE 1931 2°",
        start: OBSERVER_START,
        end: OBSERVER_END,
        x: upsample(&CIE1931_2DEG_X[..]),
        y: upsample(&CIE1931_2DEG_Y[..]),
        z: upsample(&CIE1931_2DEG_Z[..]),
    };
    debug!(table = observer.name, samples = observer.len(), "spectral table initialized");
    observer
});

impl Observer {
    /// Number of samples per function
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the observer has no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Wavelength step between samples (nm)
    ///
    /// Zero when fewer than two samples are tabulated or `end` precedes
    /// `start`.
    #[inline]
    pub fn interval(&self) -> usize {
        match self.len().checked_sub(1) {
            Some(gaps) if gaps > 0 => self.end.saturating_sub(self.start) / gaps,
            _ => 0,
        }
    }

    /// All three functions at sample `i`
    #[inline]
    fn sample(&self, i: usize) -> Option<[f64; 3]> {
        Some([*self.x.get(i)?, *self.y.get(i)?, *self.z.get(i)?])
    }

    /// Matching function values at a tabulated wavelength
    pub fn at(&self, wavelength: usize) -> Option<[f64; 3]> {
        let step = self.interval();
        if step == 0 || wavelength < self.start || wavelength > self.end {
            return None;
        }
        let offset = wavelength - self.start;
        if offset % step != 0 {
            return None;
        }
        self.sample(offset / step)
    }

    /// Matching function values at any wavelength in range, linearly
    /// interpolated between samples
    pub fn interpolate(&self, wavelength: f64) -> Option<[f64; 3]> {
        let step = self.interval();
        if step == 0 || !(self.start as f64..=self.end as f64).contains(&wavelength) {
            return None;
        }
        let pos = (wavelength - self.start as f64) / step as f64;
        let i = (pos.floor() as usize).min(self.len() - 1);
        let j = (i + 1).min(self.len() - 1);
        let t = pos - i as f64;
        let (a, b) = (self.sample(i)?, self.sample(j)?);
        Some([lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)])
    }
}
