//! Accuracy measurement against independent Delta E formulas
//!
//! The formulas here share no code with `colorcal_core::difference`. They
//! work on plain `[L, a, b]` arrays with hues in radians.

use std::f64::consts::{PI, TAU};

/// Statistics from a Delta E comparison
#[derive(Debug, Clone, Default)]
pub struct DeltaEStats {
    /// Mean Delta E across all samples
    pub mean: f64,
    /// Maximum Delta E
    pub max: f64,
    /// 95th percentile Delta E
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of differences
    ///
    /// NaN entries sort last and therefore surface as `max`.
    pub fn from_differences(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let p95_index = ((count as f64 * 0.95).ceil() as usize).clamp(1, count) - 1;
        Self {
            mean: sorted.iter().sum::<f64>() / count as f64,
            max: sorted[count - 1],
            p95: sorted[p95_index],
            count,
        }
    }

    /// All differences below `limit`
    pub fn within(&self, limit: f64) -> bool {
        self.max < limit
    }

    /// Check if all differences are imperceptible (Delta E < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.within(1.0)
    }

    /// Check if differences are barely perceptible (Delta E < 2.0)
    pub fn is_good(&self) -> bool {
        self.within(2.0)
    }
}

/// Scale `[L, a, b]` to L = 100; L = 0 becomes the white `[100, 0, 0]`
pub fn normalize_lab(lab: [f64; 3]) -> [f64; 3] {
    if lab[0] == 0.0 {
        return [100.0, 0.0, 0.0];
    }
    let k = 100.0 / lab[0];
    [100.0, lab[1] * k, lab[2] * k]
}

/// Euclidean distance in Lab
pub fn delta_e_1976(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    lab1.iter()
        .zip(lab2.iter())
        .map(|(p, q)| (p - q) * (p - q))
        .sum::<f64>()
        .sqrt()
}

/// CIE94, graphic arts weights, weighting chroma taken as √(C₁·C₂)
pub fn delta_e_1994(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    let c1 = lab1[1].hypot(lab1[2]);
    let c2 = lab2[1].hypot(lab2[2]);
    let weight = (c1 * c2).sqrt();

    let dl = lab1[0] - lab2[0];
    let dc = c1 - c2;
    let da = lab1[1] - lab2[1];
    let db = lab1[2] - lab2[2];
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + 0.045 * weight;
    let sh = 1.0 + 0.015 * weight;
    (dl * dl + (dc / sc).powi(2) + dh_sq / (sh * sh)).sqrt()
}

/// A Lab color after the CIEDE2000 a-axis stretch
struct Primed {
    l: f64,
    c: f64,
    /// Hue in radians, [0, 2π)
    h: f64,
}

impl Primed {
    fn new(lab: [f64; 3], stretch: f64) -> Self {
        let a = lab[1] * stretch;
        let b = lab[2];
        let h = if a == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a).rem_euclid(TAU)
        };
        Self {
            l: lab[0],
            c: a.hypot(b),
            h,
        }
    }
}

fn chroma_ratio(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + 25f64.powi(7))).sqrt()
}

/// CIEDE2000 after Sharma, Wu and Dalal (2005), k_L = k_C = k_H = 1
pub fn delta_e_2000(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    let mean_chroma = (lab1[1].hypot(lab1[2]) + lab2[1].hypot(lab2[2])) / 2.0;
    let stretch = 1.0 + 0.5 * (1.0 - chroma_ratio(mean_chroma));

    let p1 = Primed::new(lab1, stretch);
    let p2 = Primed::new(lab2, stretch);
    let achromatic = p1.c * p2.c == 0.0;

    let mut dh = p2.h - p1.h;
    if achromatic {
        dh = 0.0;
    } else if dh > PI {
        dh -= TAU;
    } else if dh < -PI {
        dh += TAU;
    }
    let big_dh = 2.0 * (p1.c * p2.c).sqrt() * (dh / 2.0).sin();

    let h_sum = p1.h + p2.h;
    let h_mean = if achromatic {
        h_sum
    } else if (p1.h - p2.h).abs() <= PI {
        h_sum / 2.0
    } else if h_sum < TAU {
        (h_sum + TAU) / 2.0
    } else {
        (h_sum - TAU) / 2.0
    };

    let deg = PI / 180.0;
    let t = 1.0 - 0.17 * (h_mean - 30.0 * deg).cos()
        + 0.24 * (2.0 * h_mean).cos()
        + 0.32 * (3.0 * h_mean + 6.0 * deg).cos()
        - 0.20 * (4.0 * h_mean - 63.0 * deg).cos();

    let l_mean = (p1.l + p2.l) / 2.0;
    let c_mean = (p1.c + p2.c) / 2.0;
    let l_off = (l_mean - 50.0) * (l_mean - 50.0);

    let sl = 1.0 + 0.015 * l_off / (20.0 + l_off).sqrt();
    let sc = 1.0 + 0.045 * c_mean;
    let sh = 1.0 + 0.015 * c_mean * t;

    let h_mean_deg = h_mean / deg;
    let rotation = 60.0 * deg * (-((h_mean_deg - 275.0) / 25.0).powi(2)).exp();
    let rt = -2.0 * chroma_ratio(c_mean) * rotation.sin();

    let dl = (p2.l - p1.l) / sl;
    let dc = (p2.c - p1.c) / sc;
    let dh = big_dh / sh;
    (dl * dl + dc * dc + dh * dh + rt * dc * dh).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_e_identical() {
        let lab = [50.0, 25.0, -30.0];
        assert_eq!(delta_e_2000(lab, lab), 0.0);
        assert_eq!(delta_e_1994(lab, lab), 0.0);
        assert_eq!(delta_e_1976(lab, lab), 0.0);
    }

    #[test]
    fn test_delta_e_2000_sharma_pairs() {
        let pairs = [
            ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
            ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
            ([50.0, 2.49, -0.001], [50.0, -2.49, 0.0011], 7.2195),
            ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.1492),
            ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
            ([22.7233, 20.0904, -46.694], [23.0331, 14.973, -42.5619], 2.0373),
            ([90.8027, -2.0831, 1.441], [91.1528, -1.6435, 0.0447], 1.4441),
            ([2.0776, 0.0795, -1.135], [0.9033, -0.0636, -0.5514], 0.9082),
        ];
        for (a, b, expected) in pairs {
            let de = delta_e_2000(a, b);
            assert!((de - expected).abs() < 1e-4, "{a:?} {b:?}: {de} vs {expected}");
        }
    }

    #[test]
    fn test_delta_e_1994_neutral() {
        // No chroma anywhere: only lightness remains
        assert!((delta_e_1994([40.0, 0.0, 0.0], [70.0, 0.0, 0.0]) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_lab() {
        assert_eq!(normalize_lab([50.0, 10.0, -5.0]), [100.0, 20.0, -10.0]);
        assert_eq!(normalize_lab([0.0, 3.0, 4.0]), [100.0, 0.0, 0.0]);
    }

    #[test]
    fn test_stats() {
        let values: Vec<f64> = (1..=100).map(|i| i as f64 / 100.0).collect();
        let stats = DeltaEStats::from_differences(&values);
        assert_eq!(stats.count, 100);
        assert!((stats.mean - 0.505).abs() < 1e-12);
        assert_eq!(stats.max, 1.0);
        assert_eq!(stats.p95, 0.95);
        assert!(stats.is_good());
        assert!(!stats.is_excellent());
    }

    #[test]
    fn test_stats_empty() {
        let stats = DeltaEStats::from_differences(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.is_excellent());
    }
}
