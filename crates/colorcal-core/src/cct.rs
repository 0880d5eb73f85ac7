//! Correlated color temperature
//!
//! [`closest_color_temperature`] searches a locus for the temperature whose
//! white point is perceptually nearest a sample, using a derivative-free
//! trust-region minimizer over the single temperature parameter.
//! [`robertson_cct`] is the classic closed-form isotemperature-line method,
//! useful as a quick cross-check.
//!
//! Input must already be normalized to Y = 1 ([`Xyz::normalize`]). This is
//! not checked: un-normalized input gives meaningless results.

use crate::color::{Lab, Ucs, Xyz};
use crate::difference::{DEFAULT_DELTA_E, DeltaE, difference};
use crate::math::{TrustRegion, lerp, minimize};
use crate::spectral::Locus;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Objective value for temperatures with no usable white point
pub const CCT_PENALTY: f64 = 1e9;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CctOptions {
    /// Locus to search along
    pub locus: Locus,
    /// Distance metric; CIE2000 compares in Lab, anything else in 1960 UCS
    pub mode: DeltaE,
    /// Starting temperature (K)
    pub initial_temperature: f64,
    /// Initial trust-region radius (K)
    pub initial_radius: f64,
    /// Stop once the trust region shrinks below this (K)
    pub tolerance: f64,
    /// Cap on white point evaluations
    pub max_evaluations: usize,
}

impl Default for CctOptions {
    fn default() -> Self {
        Self {
            locus: Locus::default(),
            mode: DEFAULT_DELTA_E,
            initial_temperature: 7000.0,
            initial_radius: 500.0,
            tolerance: 0.01,
            max_evaluations: 200,
        }
    }
}

impl CctOptions {
    /// Defaults with the given locus and metric
    pub fn new(locus: Locus, mode: DeltaE) -> Self {
        Self {
            locus,
            mode,
            ..Self::default()
        }
    }
}

/// Result of a temperature search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CctEstimate {
    /// Temperature of the best sample (K)
    pub temperature: f64,
    /// Distance from the sample to the locus at `temperature`
    pub error: f64,
    /// Locus white point at `temperature`, Y = 1
    pub white_point: Xyz,
    /// White point evaluations spent
    pub evaluations: usize,
}

/// UCS coordinates laid out as Lab so the Delta E formulas apply
#[inline]
fn ucs_as_lab(c: Ucs) -> Lab {
    Lab::new(c.y, c.u, c.v)
}

/// Distance between a normalized sample and a locus white point
///
/// CIE2000 measures in Lab with the sample itself as reference white. Any
/// other mode measures in the 1960 UCS (u, v) plane.
pub fn locus_distance(sample: Xyz, white: Xyz, mode: DeltaE) -> f64 {
    match mode {
        DeltaE::Cie2000 => difference(
            Lab::from_xyz(sample, sample),
            Lab::from_xyz(white, sample),
            mode,
        ),
        DeltaE::Cie1976 | DeltaE::Cie1994 => {
            difference(ucs_as_lab(sample.to_ucs()), ucs_as_lab(white.to_ucs()), mode)
        }
    }
}

/// Temperature on `options.locus` nearest to `xyz`
///
/// Returns the best sample seen during the search, which is not always the
/// minimizer's final iterate.
pub fn closest_color_temperature(xyz: Xyz, options: &CctOptions) -> CctEstimate {
    let mut best = (CCT_PENALTY, Xyz::ZERO);

    let objective = |t: f64| {
        let Some(white) = options.locus.white_point(t) else {
            return CCT_PENALTY;
        };
        let error = locus_distance(xyz, white, options.mode);
        if !error.is_finite() {
            return CCT_PENALTY;
        }
        if error < best.0 {
            best = (error, white);
        }
        error
    };

    let region = TrustRegion {
        initial_radius: options.initial_radius,
        tolerance: options.tolerance,
        max_evaluations: options.max_evaluations,
    };
    let min = minimize(objective, options.initial_temperature, &region);

    let (error, white_point) = best;
    debug!(
        locus = %options.locus,
        mode = %options.mode,
        temperature = min.x,
        error,
        evaluations = min.evaluations,
        "color temperature solved"
    );

    CctEstimate {
        temperature: min.x,
        error,
        white_point,
        evaluations: min.evaluations,
    }
}

/// CCT in the historical sense: nearest Planckian temperature in 1960 UCS
pub fn correlated_color_temperature(xyz: Xyz) -> f64 {
    closest_color_temperature(xyz, &CctOptions::new(Locus::Planckian, DeltaE::Cie1976)).temperature
}

/// Nearest daylight temperature under the default metric
pub fn closest_daylight_temperature(xyz: Xyz) -> f64 {
    closest_color_temperature(xyz, &CctOptions::new(Locus::Daylight, DEFAULT_DELTA_E)).temperature
}

/// Nearest Planckian temperature under the default metric
pub fn closest_planckian_temperature(xyz: Xyz) -> f64 {
    closest_color_temperature(xyz, &CctOptions::new(Locus::Planckian, DEFAULT_DELTA_E)).temperature
}

/// Reciprocal temperatures of the isotemperature lines (1/K)
const ROBERTSON_MIRED: [f64; 31] = [
    f64::MIN,
    10.0e-6,
    20.0e-6,
    30.0e-6,
    40.0e-6,
    50.0e-6,
    60.0e-6,
    70.0e-6,
    80.0e-6,
    90.0e-6,
    100.0e-6,
    125.0e-6,
    150.0e-6,
    175.0e-6,
    200.0e-6,
    225.0e-6,
    250.0e-6,
    275.0e-6,
    300.0e-6,
    325.0e-6,
    350.0e-6,
    375.0e-6,
    400.0e-6,
    425.0e-6,
    450.0e-6,
    475.0e-6,
    500.0e-6,
    525.0e-6,
    550.0e-6,
    575.0e-6,
    600.0e-6,
];

/// (u, v, slope) of each isotemperature line
const ROBERTSON_UVT: [[f64; 3]; 31] = [
    [0.18006, 0.26352, -0.24341],
    [0.18066, 0.26589, -0.25479],
    [0.18133, 0.26846, -0.26876],
    [0.18208, 0.27119, -0.28539],
    [0.18293, 0.27407, -0.30470],
    [0.18388, 0.27709, -0.32675],
    [0.18494, 0.28021, -0.35156],
    [0.18611, 0.28342, -0.37915],
    [0.18740, 0.28668, -0.40955],
    [0.18880, 0.28997, -0.44278],
    [0.19032, 0.29326, -0.47888],
    [0.19462, 0.30141, -0.58204],
    [0.19962, 0.30921, -0.70471],
    [0.20525, 0.31647, -0.84901],
    [0.21142, 0.32312, -1.0182],
    [0.21807, 0.32909, -1.2168],
    [0.22511, 0.33439, -1.4512],
    [0.23247, 0.33904, -1.7298],
    [0.24010, 0.34308, -2.0637],
    // 0.24792 corrects the 0.24702 misprint in Wyszecki & Stiles
    [0.24792, 0.34655, -2.4681],
    [0.25591, 0.34951, -2.9641],
    [0.26400, 0.35200, -3.5814],
    [0.27218, 0.35407, -4.3633],
    [0.28039, 0.35577, -5.3762],
    [0.28863, 0.35714, -6.7262],
    [0.29685, 0.35823, -8.5955],
    [0.30505, 0.35907, -11.324],
    [0.31320, 0.35968, -15.628],
    [0.32129, 0.36011, -23.325],
    [0.32931, 0.36038, -40.770],
    [0.33724, 0.36051, -116.45],
];

/// Robertson's method: interpolate between the two isotemperature lines
/// that bracket the sample in the 1960 UCS diagram
///
/// Returns `None` for near-zero input and for colors outside the table
/// (warmer than about 1667K).
///
/// Reference: <http://www.brucelindbloom.com/Eqn_XYZ_to_T.html>
pub fn robertson_cct(xyz: Xyz) -> Option<f64> {
    if xyz.x < 1e-20 && xyz.y < 1e-20 && xyz.z < 1e-20 {
        return None;
    }

    let Ucs { u, v, .. } = xyz.to_ucs();
    let distance = |[lu, lv, slope]: [f64; 3]| (v - lv) - slope * (u - lu);

    let mut dm = 0.0;
    for i in 0..ROBERTSON_UVT.len() {
        let di = distance(ROBERTSON_UVT[i]);
        if i > 0 && ((di < 0.0 && dm >= 0.0) || (di >= 0.0 && dm < 0.0)) {
            let di = di / (1.0 + ROBERTSON_UVT[i][2].powi(2)).sqrt();
            let dm = dm / (1.0 + ROBERTSON_UVT[i - 1][2].powi(2)).sqrt();
            let p = dm / (dm - di);
            return Some(1.0 / lerp(ROBERTSON_MIRED[i - 1], ROBERTSON_MIRED[i], p));
        }
        dm = di;
    }

    None
}
