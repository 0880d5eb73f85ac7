//! Interpolation for tabulated spectra

/// Linear interpolation between two values
///
/// Returns a + t * (b - a) for t in [0, 1]
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Upsample a uniformly sampled table by inserting `fill` linearly
/// interpolated values between every pair of neighbours.
///
/// A table sampled every 10nm becomes a 1nm table with `fill = 9`. Every
/// original sample lands unchanged at index `i * (fill + 1)`, including both
/// endpoints.
pub fn upsample_linear(samples: &[f64], fill: usize) -> Vec<f64> {
    if samples.len() < 2 {
        return samples.to_vec();
    }

    let step = fill + 1;
    let mut out = Vec::with_capacity(step * (samples.len() - 1) + 1);

    for pair in samples.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        out.push(start);
        for i in 1..step {
            out.push(lerp(start, end, i as f64 / step as f64));
        }
    }

    // windows() never yields the final sample as a start
    out.push(samples[samples.len() - 1]);
    out
}

/// Lagrange weights extrapolating six samples two steps before the first
const EDGE_FAR: [f64; 6] = [21.0, -70.0, 105.0, -84.0, 35.0, -6.0];

/// Lagrange weights extrapolating six samples one step before the first
const EDGE_NEAR: [f64; 6] = [6.0, -15.0, 20.0, -15.0, 6.0, -1.0];

/// (r₋₂, r₋₁) extrapolated from the first six samples of `r`
fn sprague_edge(r: &[f64]) -> (f64, f64) {
    let dot = |w: &[f64; 6]| w.iter().zip(r).map(|(w, v)| w * v).sum::<f64>();
    (dot(&EDGE_FAR), dot(&EDGE_NEAR))
}

/// Upsample a uniformly sampled table with Sprague's fifth-order
/// interpolation, inserting `fill` values between every pair of neighbours.
///
/// Used to bring the 5nm color matching functions to 1nm, where linear
/// interpolation flattens the peaks. Original samples are preserved exactly
/// and polynomials up to degree four are reproduced. Tables shorter than six
/// samples fall back to [`upsample_linear`].
pub fn upsample_sprague(samples: &[f64], fill: usize) -> Vec<f64> {
    let n = samples.len();
    if n < 6 {
        return upsample_linear(samples, fill);
    }

    let (lo_far, lo_near) = sprague_edge(samples);
    let tail: Vec<f64> = samples.iter().rev().copied().collect();
    let (hi_far, hi_near) = sprague_edge(&tail);

    let mut padded = Vec::with_capacity(n + 4);
    padded.extend([lo_far, lo_near]);
    padded.extend_from_slice(samples);
    padded.extend([hi_near, hi_far]);

    let step = fill + 1;
    let mut out = Vec::with_capacity(step * (n - 1) + 1);

    for w in padded.windows(6) {
        let [m2, m1, r0, r1, r2, r3] = [w[0], w[1], w[2], w[3], w[4], w[5]];
        let a = [
            r0,
            (2.0 * m2 - 16.0 * m1 + 16.0 * r1 - 2.0 * r2) / 24.0,
            (-m2 + 16.0 * m1 - 30.0 * r0 + 16.0 * r1 - r2) / 24.0,
            (-9.0 * m2 + 39.0 * m1 - 70.0 * r0 + 66.0 * r1 - 33.0 * r2 + 7.0 * r3) / 24.0,
            (13.0 * m2 - 64.0 * m1 + 126.0 * r0 - 124.0 * r1 + 61.0 * r2 - 12.0 * r3) / 24.0,
            (-5.0 * m2 + 25.0 * m1 - 50.0 * r0 + 50.0 * r1 - 25.0 * r2 + 5.0 * r3) / 24.0,
        ];
        out.push(r0);
        for i in 1..step {
            let x = i as f64 / step as f64;
            out.push(a.iter().rev().fold(0.0, |acc, c| acc * x + c));
        }
    }

    out.push(samples[n - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < EPSILON);
        assert!((lerp(0.0, 10.0, 1.0) - 10.0).abs() < EPSILON);
        assert!((lerp(-2.0, 2.0, 0.25) - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_upsample_length() {
        let table = vec![0.0; 54];
        assert_eq!(upsample_linear(&table, 9).len(), 531);

        let table = vec![0.0; 81];
        assert_eq!(upsample_linear(&table, 4).len(), 401);
    }

    #[test]
    fn test_upsample_preserves_samples() {
        let table = [1.0, 3.0, -2.0, 7.5];
        let up = upsample_linear(&table, 4);
        for (i, v) in table.iter().enumerate() {
            assert_eq!(up[i * 5], *v);
        }
        assert_eq!(*up.last().unwrap(), 7.5);
    }

    #[test]
    fn test_upsample_values() {
        let up = upsample_linear(&[0.0, 10.0], 9);
        assert_eq!(up.len(), 11);
        for (i, v) in up.iter().enumerate() {
            assert!((v - i as f64).abs() < EPSILON);
        }
    }

    #[test]
    fn test_upsample_degenerate() {
        assert!(upsample_linear(&[], 3).is_empty());
        assert_eq!(upsample_linear(&[2.0], 3), vec![2.0]);
        assert_eq!(upsample_linear(&[1.0, 2.0], 0), vec![1.0, 2.0]);
    }

    #[test]
    fn test_sprague_length_and_samples() {
        let table = [0.1, 0.4, 1.2, 2.0, 1.5, 0.7, 0.3, 0.05];
        let up = upsample_sprague(&table, 4);
        assert_eq!(up.len(), 36);
        for (i, v) in table.iter().enumerate() {
            assert_eq!(up[i * 5], *v);
        }
    }

    #[test]
    fn test_sprague_reproduces_quartic() {
        let f = |x: f64| 0.5 * x.powi(4) - 2.0 * x.powi(3) + x * x - 3.0 * x + 7.0;
        let table: Vec<f64> = (0..9).map(|i| f(i as f64)).collect();
        let up = upsample_sprague(&table, 4);
        for (k, v) in up.iter().enumerate() {
            let x = k as f64 / 5.0;
            assert!((v - f(x)).abs() < 1e-9, "x = {x}: {v} vs {}", f(x));
        }
    }

    #[test]
    fn test_sprague_short_table_is_linear() {
        let table = [0.0, 1.0, 4.0];
        assert_eq!(upsample_sprague(&table, 3), upsample_linear(&table, 3));
        assert!(upsample_sprague(&[], 4).is_empty());
    }
}
