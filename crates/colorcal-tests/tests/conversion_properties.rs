//! Conversion round trips and invariants over seeded samples

use approx::assert_abs_diff_eq;
use colorcal_core::math::{adapt_xyz, bradford_matrix, scale_to_d50, scale_to_d65};
use colorcal_core::{D50, D65, Lab, Rgb, RgbOptions, ScalingMethod, XyY, Xyz};
use colorcal_tests::Samples;

const SAMPLE_COUNT: usize = 1000;

#[test]
fn test_xyz_xyy_round_trip() {
    let mut samples = Samples::new(11);
    for xyz in samples.take(SAMPLE_COUNT, Samples::xyz) {
        let back = xyz.to_xyy().to_xyz();
        assert!(back.approx_eq(&xyz, 1e-9), "{xyz:?} -> {back:?}");
    }
}

#[test]
fn test_xyz_lab_round_trip() {
    let mut samples = Samples::new(12);
    for white in [D50.xyz, D65.xyz] {
        for xyz in samples.take(SAMPLE_COUNT, Samples::xyz) {
            let back = Lab::from_xyz(xyz, white).to_xyz(white);
            assert!(back.approx_eq(&xyz, 1e-9), "{xyz:?} -> {back:?}");
        }
    }
}

#[test]
fn test_rgb_xyz_round_trip() {
    let mut samples = Samples::new(13);
    let options = RgbOptions::default();
    for rgb in samples.take(SAMPLE_COUNT, Samples::rgb) {
        let back = rgb.to_xyz(options.white).to_rgb(&options);
        assert!(back.approx_eq(&rgb, 1e-6), "{rgb:?} -> {back:?}");
    }
}

#[test]
fn test_zero_short_circuits() {
    assert_eq!(XyY::new(0.3, 0.3, 0.0).to_xyz(), Xyz::ZERO);
    assert_eq!(Xyz::ZERO.to_xyy(), XyY::ZERO);
    assert_eq!(Xyz::ZERO.to_rgb(&RgbOptions::default()), Rgb::BLACK);
    assert_eq!(Rgb::BLACK.to_xyz(D65.xyz), Xyz::ZERO);
}

#[test]
fn test_lab_of_black_is_origin() {
    for white in [D50.xyz, D65.xyz] {
        let lab = Lab::from_xyz(Xyz::ZERO, white);
        assert_abs_diff_eq!(lab.l, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_rgb_white_has_white_chromaticity() {
    for white in [D50.xyz, D65.xyz] {
        let xyz = Rgb::WHITE.to_xyz(white);
        let ours = xyz.to_xyy();
        let expected = white.to_xyy();
        assert_abs_diff_eq!(ours.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(ours.y, expected.y, epsilon = 1e-9);
        assert_abs_diff_eq!(xyz.y, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_clipping_is_opt_in() {
    // Saturated spectral green, outside sRGB
    let green = XyY::new(0.15, 0.80, 0.5).to_xyz();
    let raw = green.to_rgb(&RgbOptions::default());
    assert!(!raw.is_in_gamut());

    let clipped = green.to_rgb(&RgbOptions {
        clip: true,
        ..RgbOptions::default()
    });
    assert!(clipped.is_in_gamut());
    assert_eq!(clipped, raw.clip());
}

#[test]
fn test_bradford_maps_white_to_white() {
    let mut samples = Samples::new(14);
    let whites = samples.take(32, |s| s.locus_white(colorcal_core::Locus::Daylight).1);
    for pair in whites.windows(2) {
        let adapted = adapt_xyz(pair[0], pair[0], pair[1]);
        assert!(adapted.approx_eq(&pair[1], 1e-12));
    }
}

#[test]
fn test_bradford_round_trip() {
    let forward = bradford_matrix(D65.xyz, D50.xyz);
    let back = bradford_matrix(D50.xyz, D65.xyz);
    assert!(forward.multiply(&back).is_identity(1e-12));

    let mut samples = Samples::new(15);
    for xyz in samples.take(SAMPLE_COUNT, Samples::xyz) {
        let there = adapt_xyz(xyz, D65.xyz, D50.xyz);
        let back = adapt_xyz(there, D50.xyz, D65.xyz);
        assert!(back.approx_eq(&xyz, 1e-12));
    }
}

#[test]
fn test_fixed_scaling_round_trips() {
    let mut samples = Samples::new(16);
    for method in [ScalingMethod::Bradford, ScalingMethod::Linear] {
        for xyz in samples.take(256, Samples::xyz) {
            let back = scale_to_d65(scale_to_d50(xyz.normalize(), method), method);
            assert!(back.approx_eq(&xyz.normalize(), 1e-5), "{method:?}");
        }
    }
}

#[test]
fn test_fixed_scaling_moves_white() {
    for method in [ScalingMethod::Bradford, ScalingMethod::Linear] {
        let d50 = scale_to_d50(D65.xyz, method);
        assert!(d50.approx_eq(&D50.xyz, 1e-4), "{method:?}: {d50:?}");
        let d65 = scale_to_d65(D50.xyz, method);
        assert!(d65.approx_eq(&D65.xyz, 1e-4), "{method:?}: {d65:?}");
    }
}
