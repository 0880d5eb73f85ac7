//! Tabulated CIE data at their published sampling intervals
//!
//! The observer tables cover 360–830nm in 5nm steps; the daylight basis
//! and D65 tables cover 300–830nm in 10nm steps. They are upsampled to 1nm
//! once, on first use.

/// First wavelength of the observer tables (nm)
pub(crate) const OBSERVER_START: usize = 360;

/// Last wavelength of the observer tables (nm)
pub(crate) const OBSERVER_END: usize = 830;

/// Sampling interval of the observer tables (nm)
pub(crate) const OBSERVER_STEP: usize = 5;

/// First wavelength of the daylight tables (nm)
pub(crate) const DAYLIGHT_START: usize = 300;

/// Last wavelength of the daylight tables (nm)
pub(crate) const DAYLIGHT_END: usize = 830;

/// Sampling interval of the daylight tables (nm)
pub(crate) const DAYLIGHT_STEP: usize = 10;

/// CIE 1931 2° x̄(λ)
pub(crate) const CIE1931_2DEG_X: [f64; 95] = [
    0.0001299, 0.0002321, 0.0004149, 0.0007416, 0.001368, 0.002236, 0.004243, 0.007650, 0.014310,
    0.023190, 0.043510, 0.077630, 0.134380, 0.214770, 0.283900, 0.328500, 0.348280, 0.348060,
    0.336200, 0.318700, 0.290800, 0.251100, 0.195360, 0.142100, 0.095640, 0.058010, 0.032010,
    0.014700, 0.004900, 0.002400, 0.009300, 0.029100, 0.063270, 0.109600, 0.165500, 0.225750,
    0.290400, 0.359700, 0.433450, 0.512050, 0.594500, 0.678400, 0.762100, 0.842500, 0.916300,
    0.978600, 1.026300, 1.056700, 1.062200, 1.045600, 1.002600, 0.938400, 0.854450, 0.751400,
    0.642400, 0.541900, 0.447900, 0.360800, 0.283500, 0.218700, 0.164900, 0.121200, 0.087400,
    0.063600, 0.046770, 0.032900, 0.022700, 0.015840, 0.011359, 0.008111, 0.005790, 0.004109,
    0.002899, 0.002049, 0.001440, 0.001000, 0.000690, 0.000476, 0.000332, 0.000235, 0.000166,
    0.000117, 0.000083, 0.000059, 0.000042, 0.00002935, 0.00002067, 0.00001455, 0.00001025,
    0.000007221, 0.000005085, 0.000003581, 0.000002522, 0.000001776, 0.000001251,
];

/// CIE 1931 2° ȳ(λ)
pub(crate) const CIE1931_2DEG_Y: [f64; 95] = [
    0.000003917, 0.000006965, 0.00001239, 0.00002202, 0.000039, 0.000064, 0.000120, 0.000217,
    0.000396, 0.000640, 0.001210, 0.002180, 0.004000, 0.007300, 0.011600, 0.016840, 0.023000,
    0.029800, 0.038000, 0.048000, 0.060000, 0.073900, 0.090980, 0.112600, 0.139020, 0.169300,
    0.208020, 0.258600, 0.323000, 0.407300, 0.503000, 0.608200, 0.710000, 0.793200, 0.862000,
    0.914850, 0.954000, 0.980300, 0.994950, 1.000000, 0.995000, 0.978600, 0.952000, 0.915400,
    0.870000, 0.816300, 0.757000, 0.694900, 0.631000, 0.566800, 0.503000, 0.441200, 0.381000,
    0.321000, 0.265000, 0.217000, 0.175000, 0.138200, 0.107000, 0.081600, 0.061000, 0.044580,
    0.032000, 0.023200, 0.017000, 0.011920, 0.008210, 0.005723, 0.004102, 0.002929, 0.002091,
    0.001484, 0.001047, 0.000740, 0.000520, 0.000361, 0.000249, 0.000172, 0.000120, 0.000085,
    0.000060, 0.000042, 0.000030, 0.000021, 0.000015, 0.0000106, 0.000007465, 0.000005257,
    0.000003702, 0.000002607, 0.000001836, 0.000001293, 0.00000091, 0.000000641, 0.000000451,
];

/// CIE 1931 2° z̄(λ)
pub(crate) const CIE1931_2DEG_Z: [f64; 95] = [
    0.0006061, 0.001086, 0.001946, 0.003486, 0.006450, 0.010550, 0.020050, 0.036210, 0.067850,
    0.110200, 0.207400, 0.371300, 0.645600, 1.039050, 1.385600, 1.622960, 1.747060, 1.782600,
    1.772110, 1.744100, 1.669200, 1.528100, 1.287640, 1.041900, 0.812950, 0.616200, 0.465180,
    0.353300, 0.272000, 0.212300, 0.158200, 0.111700, 0.078250, 0.057250, 0.042160, 0.029840,
    0.020300, 0.013400, 0.008750, 0.005750, 0.003900, 0.002750, 0.002100, 0.001800, 0.001650,
    0.001400, 0.001100, 0.001000, 0.000800, 0.000600, 0.000340, 0.000240, 0.000190, 0.000100,
    0.000050, 0.000030, 0.000020, 0.000010, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000,
    0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000,
    0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000,
    0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000, 0.000000,
    0.000000, 0.000000, 0.000000, 0.000000, 0.000000,
];

/// Daylight basis S0(λ), the mean spectrum
pub(crate) const DAYLIGHT_S0: [f64; 54] = [
    0.04, 6.0, 29.6, 55.3, 57.3, 61.8, 61.5, 68.8, 63.4,
    65.8, 94.8, 104.8, 105.9, 96.8, 113.9, 125.6, 125.5, 121.3,
    121.3, 113.5, 113.1, 110.8, 106.5, 108.8, 105.3, 104.4, 100.0,
    96.0, 95.1, 89.1, 90.5, 90.3, 88.4, 84.0, 85.1, 81.9,
    82.6, 84.9, 81.3, 71.9, 74.3, 76.4, 63.3, 71.7, 77.0,
    65.2, 47.7, 68.6, 65.0, 66.0, 61.0, 53.3, 58.9, 61.9,
];

/// Daylight basis S1(λ), the yellow-blue variation
pub(crate) const DAYLIGHT_S1: [f64; 54] = [
    0.02, 4.5, 22.4, 42.0, 40.6, 41.6, 38.0, 42.4, 38.5,
    35.0, 43.4, 46.3, 43.9, 37.1, 36.7, 35.9, 32.6, 27.9,
    24.3, 20.1, 16.2, 13.2, 8.6, 6.1, 4.2, 1.9, 0.0,
    -1.6, -3.5, -3.5, -5.8, -7.2, -8.6, -9.5, -10.9, -10.7,
    -12.0, -14.0, -13.6, -12.0, -13.3, -12.9, -10.6, -11.6, -12.2,
    -10.2, -7.8, -11.2, -10.4, -10.6, -9.7, -8.3, -9.3, -9.8,
];

/// Daylight basis S2(λ), the pink-green variation
pub(crate) const DAYLIGHT_S2: [f64; 54] = [
    0.0, 2.0, 4.0, 8.5, 7.8, 6.7, 5.3, 6.1, 3.0,
    1.2, -1.1, -0.5, -0.7, -1.2, -2.6, -2.9, -2.8, -2.6,
    -2.6, -1.8, -1.5, -1.3, -1.2, -1.0, -0.5, -0.3, 0.0,
    0.2, 0.5, 2.1, 3.2, 4.1, 4.7, 5.1, 6.7, 7.3,
    8.6, 9.8, 10.2, 8.3, 9.6, 8.5, 7.0, 7.6, 8.0,
    6.7, 5.2, 7.4, 6.8, 7.0, 6.4, 5.5, 6.1, 6.5,
];

/// CIE standard illuminant D65 relative spectral power
pub(crate) const D65_SPD: [f64; 54] = [
    0.0341, 3.2945, 20.236, 37.0535, 39.9488, 44.9117,
    46.6383, 52.0891, 49.9755, 54.6482, 82.7549, 91.486,
    93.4318, 86.6823, 104.865, 117.008, 117.812, 114.861,
    115.923, 108.811, 109.354, 107.802, 104.79, 107.689,
    104.405, 104.046, 100.0, 96.3342, 95.788, 88.6856,
    90.0062, 89.5991, 87.6987, 83.2886, 83.6992, 80.0268,
    80.2146, 82.2778, 78.2842, 69.7213, 71.6091, 74.349,
    61.604, 69.8856, 75.087, 63.5927, 46.4182, 66.8054,
    63.3828, 64.304, 59.4519, 51.959, 57.4406, 60.3125,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths_match_ranges() {
        let observer = (OBSERVER_END - OBSERVER_START) / OBSERVER_STEP + 1;
        assert_eq!(CIE1931_2DEG_X.len(), observer);
        assert_eq!(CIE1931_2DEG_Y.len(), observer);
        assert_eq!(CIE1931_2DEG_Z.len(), observer);

        let daylight = (DAYLIGHT_END - DAYLIGHT_START) / DAYLIGHT_STEP + 1;
        assert_eq!(DAYLIGHT_S0.len(), daylight);
        assert_eq!(DAYLIGHT_S1.len(), daylight);
        assert_eq!(DAYLIGHT_S2.len(), daylight);
        assert_eq!(D65_SPD.len(), daylight);
    }

    #[test]
    fn test_560nm_anchor() {
        // Relative spectra are normalized to 100 at 560nm, the basis
        // vectors S1 and S2 cross zero there
        let i = (560 - DAYLIGHT_START) / DAYLIGHT_STEP;
        assert_eq!(D65_SPD[i], 100.0);
        assert_eq!(DAYLIGHT_S0[i], 100.0);
        assert_eq!(DAYLIGHT_S1[i], 0.0);
        assert_eq!(DAYLIGHT_S2[i], 0.0);
    }

    #[test]
    fn test_photopic_peak() {
        let peak = CIE1931_2DEG_Y
            .iter()
            .enumerate()
            .fold((0, 0.0), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc });
        assert_eq!(OBSERVER_START + peak.0 * OBSERVER_STEP, 555);
        assert_eq!(peak.1, 1.0);
    }
}
