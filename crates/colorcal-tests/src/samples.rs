//! Seeded sample generation
//!
//! Every generator is driven by a ChaCha8 stream so a failing case can be
//! replayed from its seed.

use colorcal_core::{Lab, Locus, Rgb, Xyz};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Reproducible stream of colors
pub struct Samples {
    rng: ChaCha8Rng,
}

impl Samples {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Companded RGB inside the unit cube
    pub fn rgb(&mut self) -> Rgb {
        Rgb::new(
            self.rng.gen_range(0.0..=1.0),
            self.rng.gen_range(0.0..=1.0),
            self.rng.gen_range(0.0..=1.0),
        )
    }

    /// Tristimulus value of an in-gamut sRGB color, never black
    pub fn xyz(&mut self) -> Xyz {
        let white = colorcal_core::D65.xyz;
        loop {
            let xyz = self.rgb().to_xyz(white);
            if xyz.y > 1e-3 {
                return xyz;
            }
        }
    }

    /// Lab with positive lightness and moderate chroma
    pub fn lab(&mut self) -> Lab {
        Lab::new(
            self.rng.gen_range(1.0..=100.0),
            self.rng.gen_range(-80.0..=80.0),
            self.rng.gen_range(-80.0..=80.0),
        )
    }

    /// A temperature inside the tabulated range of `locus`
    pub fn temperature(&mut self, locus: Locus) -> f64 {
        let table = locus.table();
        self.rng.gen_range(table.start..=table.end())
    }

    /// Normalized white of `locus` at a random temperature, with the temperature
    pub fn locus_white(&mut self, locus: Locus) -> (f64, Xyz) {
        loop {
            let t = self.temperature(locus);
            if let Some(white) = locus.white_point(t) {
                return (t, white.normalize());
            }
        }
    }

    /// Collect `n` samples from one of the generators
    pub fn take<T>(&mut self, n: usize, mut next: impl FnMut(&mut Self) -> T) -> Vec<T> {
        (0..n).map(|_| next(self)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let a = Samples::new(7).take(16, Samples::lab);
        let b = Samples::new(7).take(16, Samples::lab);
        assert_eq!(a, b);
    }

    #[test]
    fn test_xyz_not_black() {
        let mut samples = Samples::new(1);
        for xyz in samples.take(256, Samples::xyz) {
            assert!(xyz.y > 1e-3);
        }
    }

    #[test]
    fn test_temperature_in_table() {
        let mut samples = Samples::new(3);
        for locus in Locus::ALL {
            let table = locus.table();
            for t in samples.take(64, |s| s.temperature(locus)) {
                assert!(t >= table.start && t <= table.end());
            }
        }
    }
}
