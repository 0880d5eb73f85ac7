//! Whitepoint loci: the Planckian (black-body) and CIE daylight curves
//!
//! Both loci are precomputed once at 10K resolution for fast lookup and
//! seeding; exact values at arbitrary temperatures go through
//! [`Locus::white_point`].

use super::{CIE1931_2DEG, Illuminant, white_point};
use crate::cct::locus_distance;
use crate::color::Xyz;
use crate::difference::DeltaE;
use crate::math::lerp;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// Temperature spacing of the precomputed tables (K)
pub const LOCUS_STEP: f64 = 10.0;

/// Family of illuminants a temperature refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locus {
    /// CIE daylight series
    #[default]
    Daylight,
    /// Black-body radiators
    Planckian,
}

/// Planckian locus, 2000–10000K
pub static PLANCKIAN_LOCUS: LazyLock<LocusTable> =
    LazyLock::new(|| LocusTable::build(Locus::Planckian, 2000.0, 10000.0));

/// Daylight locus, 4000–10000K
pub static DAYLIGHT_LOCUS: LazyLock<LocusTable> =
    LazyLock::new(|| LocusTable::build(Locus::Daylight, 4000.0, 10000.0));

impl Locus {
    /// Both loci
    pub const ALL: [Locus; 2] = [Locus::Daylight, Locus::Planckian];

    /// Spectrum of the locus illuminant at `t` kelvin
    ///
    /// `None` only for Planckian temperatures outside [1, 1e6] K.
    pub fn illuminant(&self, t: f64) -> Option<Illuminant> {
        match self {
            Locus::Daylight => Some(Illuminant::daylight(t)),
            Locus::Planckian => Illuminant::planckian(t),
        }
    }

    /// White point of the locus at `t` kelvin under the CIE 1931 2° observer
    pub fn white_point(&self, t: f64) -> Option<Xyz> {
        self.illuminant(t).map(|il| white_point(&il, &CIE1931_2DEG))
    }

    /// The precomputed table for this locus
    pub fn table(&self) -> &'static LocusTable {
        match self {
            Locus::Daylight => &DAYLIGHT_LOCUS,
            Locus::Planckian => &PLANCKIAN_LOCUS,
        }
    }

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Locus::Daylight => "Daylight",
            Locus::Planckian => "Planckian",
        }
    }
}

impl FromStr for Locus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daylight" | "d" => Ok(Locus::Daylight),
            "planckian" | "planck" | "blackbody" | "p" => Ok(Locus::Planckian),
            _ => Err(Error::UnsupportedLocus(s.to_string())),
        }
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Locus white points sampled at a fixed temperature step
#[derive(Debug, Clone, PartialEq)]
pub struct LocusTable {
    /// Locus the points lie on
    pub locus: Locus,
    /// Temperature of the first point (K)
    pub start: f64,
    /// Temperature spacing (K)
    pub step: f64,
    /// White points, Y = 1
    pub points: Vec<Xyz>,
}

impl LocusTable {
    fn build(locus: Locus, start: f64, end: f64) -> Self {
        let n = ((end - start) / LOCUS_STEP).round() as usize + 1;
        let points = (0..n)
            .filter_map(|i| locus.white_point(start + i as f64 * LOCUS_STEP))
            .collect::<Vec<_>>();
        debug!(locus = %locus, start, end, samples = points.len(), "locus table initialized");
        Self {
            locus,
            start,
            step: LOCUS_STEP,
            points,
        }
    }

    /// Temperature of the last point (K)
    #[inline]
    pub fn end(&self) -> f64 {
        self.temperature(self.points.len().saturating_sub(1))
    }

    /// Temperature of point `i` (K)
    #[inline]
    pub fn temperature(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// (temperature, white point) pairs in ascending temperature
    pub fn iter(&self) -> impl Iterator<Item = (f64, Xyz)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (self.temperature(i), p))
    }

    /// White point at `t`, linearly interpolated between neighbouring points
    ///
    /// `None` outside the tabulated range.
    pub fn white_point_at(&self, t: f64) -> Option<Xyz> {
        if self.points.is_empty() || !(self.start..=self.end()).contains(&t) {
            return None;
        }
        let pos = (t - self.start) / self.step;
        let i = (pos.floor() as usize).min(self.points.len() - 1);
        let j = (i + 1).min(self.points.len() - 1);
        let frac = pos - i as f64;
        let (a, b) = (self.points[i], self.points[j]);
        Some(Xyz::new(
            lerp(a.x, b.x, frac),
            lerp(a.y, b.y, frac),
            lerp(a.z, b.z, frac),
        ))
    }

    /// Tabulated temperature closest to `xyz` and its distance
    ///
    /// `xyz` must be normalized to Y = 1; the distance is the one the CCT
    /// solver minimizes.
    pub fn nearest(&self, xyz: Xyz, mode: DeltaE) -> Option<(f64, f64)> {
        self.iter()
            .map(|(t, p)| (t, locus_distance(xyz, p, mode)))
            .filter(|(_, e)| e.is_finite())
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
