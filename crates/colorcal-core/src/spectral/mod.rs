//! Spectral engine
//!
//! Standard observer and illuminant tables at 1nm, black-body and CIE
//! daylight spectra, spectral → XYZ integration, and the precomputed
//! Planckian and daylight loci.
//!
//! Every table is a process-wide `LazyLock`: built once on first use,
//! immutable afterwards and safe to read from any number of threads.

pub mod illuminant;
pub mod locus;
pub mod observer;
mod tables;

pub use illuminant::{D65_1NM, Illuminant, daylight_chromaticity};
pub use locus::{DAYLIGHT_LOCUS, Locus, LocusTable, PLANCKIAN_LOCUS};
pub use observer::{CIE1931_2DEG, Observer};

use crate::color::Xyz;

/// Integrate an illuminant against an observer, normalized to Y = 1
///
/// Sums S(λ)·x̄(λ), S(λ)·ȳ(λ), S(λ)·z̄(λ) at every nanometre both tables
/// cover. Disjoint ranges or a spectrum with no luminance give the zero XYZ.
pub fn white_point(il: &Illuminant, ob: &Observer) -> Xyz {
    let start = il.start.max(ob.start);
    let end = il.end.min(ob.end);
    if start > end {
        return Xyz::ZERO;
    }

    let mut sum = [0.0; 3];
    for nm in start..=end {
        let wl = nm as f64;
        let (Some(s), Some(cmf)) = (il.interpolate(wl), ob.interpolate(wl)) else {
            continue;
        };
        for (acc, c) in sum.iter_mut().zip(cmf) {
            *acc += s * c;
        }
    }

    let xyz = Xyz::from_array(sum);
    if xyz.y == 0.0 { Xyz::ZERO } else { xyz.normalize() }
}

impl Illuminant {
    /// White point under the CIE 1931 2° observer, normalized to Y = 1
    #[inline]
    pub fn white_point(&self) -> Xyz {
        white_point(self, &CIE1931_2DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::D65;

    #[test]
    fn test_d65_white_point() {
        let wp = D65_1NM.white_point();
        assert_eq!(wp.y, 1.0);
        assert!(wp.approx_eq(&D65.xyz, 1e-5), "{wp:?} vs {:?}", D65.xyz);
    }

    #[test]
    fn test_equal_energy_is_white() {
        let e = Illuminant {
            name: "E".to_string(),
            start: 300,
            end: 830,
            s: vec![1.0; 531],
        };
        let c = e.white_point().to_xyy();
        assert!((c.x - 1.0 / 3.0).abs() < 1e-4, "{c:?}");
        assert!((c.y - 1.0 / 3.0).abs() < 1e-4, "{c:?}");
    }

    #[test]
    fn test_disjoint_ranges_give_zero() {
        let uv = Illuminant {
            name: "UV".to_string(),
            start: 200,
            end: 300,
            s: vec![1.0; 101],
        };
        assert_eq!(uv.white_point(), Xyz::ZERO);
    }

    #[test]
    fn test_dark_spectrum_gives_zero() {
        let dark = Illuminant {
            name: "dark".to_string(),
            start: 300,
            end: 830,
            s: vec![0.0; 531],
        };
        assert_eq!(dark.white_point(), Xyz::ZERO);
    }

    #[test]
    fn test_coarse_illuminant_integrates() {
        // A 10nm table integrates through interpolation
        let coarse = Illuminant {
            name: "D65 10nm".to_string(),
            start: 300,
            end: 830,
            s: D65_1NM.s.iter().step_by(10).copied().collect(),
        };
        assert_eq!(coarse.interval(), 10);
        let wp = coarse.white_point();
        assert!(wp.approx_eq(&D65_1NM.white_point(), 1e-9), "{wp:?}");
    }
}
