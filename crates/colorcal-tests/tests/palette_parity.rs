//! Conversion parity against palette
//!
//! palette is configured with its own D65, so every colorcal call here passes
//! that white explicitly.

use approx::assert_abs_diff_eq;
use colorcal_core::{Lab, Rgb, RgbOptions, XyY, Xyz};
use colorcal_tests::Samples;
use colorcal_tests::reference::{self, PALETTE_D65};

const SAMPLE_COUNT: usize = 2000;

fn assert_xyz_eq(ours: Xyz, theirs: Xyz, epsilon: f64) {
    assert_abs_diff_eq!(ours.x, theirs.x, epsilon = epsilon);
    assert_abs_diff_eq!(ours.y, theirs.y, epsilon = epsilon);
    assert_abs_diff_eq!(ours.z, theirs.z, epsilon = epsilon);
}

fn assert_lab_eq(ours: Lab, theirs: Lab, epsilon: f64) {
    assert_abs_diff_eq!(ours.l, theirs.l, epsilon = epsilon);
    assert_abs_diff_eq!(ours.a, theirs.a, epsilon = epsilon);
    assert_abs_diff_eq!(ours.b, theirs.b, epsilon = epsilon);
}

#[test]
fn test_lab_from_xyz_matches_palette() {
    let mut samples = Samples::new(0x1ab);
    for xyz in samples.take(SAMPLE_COUNT, Samples::xyz) {
        let ours = Lab::from_xyz(xyz, PALETTE_D65);
        let theirs = reference::lab_from_xyz(xyz);
        assert_lab_eq(ours, theirs, 1e-9);
    }
}

#[test]
fn test_lab_to_xyz_matches_palette() {
    let mut samples = Samples::new(0x1ab2);
    for lab in samples.take(SAMPLE_COUNT, Samples::lab) {
        let ours = lab.to_xyz(PALETTE_D65);
        let theirs = reference::xyz_from_lab(lab);
        assert_xyz_eq(ours, theirs, 1e-9);
    }
}

#[test]
fn test_dark_lab_branch_matches_palette() {
    // Below L = 8 both sides leave the cube-root branch
    for l in [0.5, 2.0, 5.0, 7.9, 8.1] {
        let lab = Lab::new(l, 3.0, -2.0);
        assert_xyz_eq(lab.to_xyz(PALETTE_D65), reference::xyz_from_lab(lab), 1e-12);
    }
}

#[test]
fn test_xyy_matches_palette() {
    let mut samples = Samples::new(0x799);
    for xyz in samples.take(SAMPLE_COUNT, Samples::xyz) {
        let ours = xyz.to_xyy();
        let theirs = reference::xyy_from_xyz(xyz);
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-12);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-12);
        assert_abs_diff_eq!(ours.big_y, theirs.big_y, epsilon = 1e-12);

        let back = XyY::new(ours.x, ours.y, ours.big_y).to_xyz();
        assert_xyz_eq(back, reference::xyz_from_xyy(theirs), 1e-9);
    }
}

#[test]
fn test_srgb_to_xyz_matches_palette() {
    let mut samples = Samples::new(0x5267);
    for rgb in samples.take(SAMPLE_COUNT, Samples::rgb) {
        let ours = rgb.to_xyz(PALETTE_D65);
        let theirs = reference::xyz_from_srgb(rgb);
        assert_xyz_eq(ours, theirs, 1e-7);
    }
}

#[test]
fn test_xyz_to_srgb_matches_palette() {
    let options = RgbOptions {
        white: PALETTE_D65,
        clip: false,
    };
    let mut samples = Samples::new(0x5268);
    for xyz in samples.take(SAMPLE_COUNT, Samples::xyz) {
        let ours = xyz.to_rgb(&options);
        let theirs = reference::srgb_encode(reference::linear_srgb_from_xyz(xyz));
        assert!(
            ours.approx_eq(&theirs, 1e-6),
            "{xyz:?}: {ours:?} vs {theirs:?}"
        );
    }
}

#[test]
fn test_primaries_match_palette() {
    let primaries = [
        Rgb::new(1.0, 0.0, 0.0),
        Rgb::new(0.0, 1.0, 0.0),
        Rgb::new(0.0, 0.0, 1.0),
    ];
    for rgb in primaries {
        let ours = rgb.to_xyz(PALETTE_D65).to_xyy();
        let theirs = reference::xyz_from_srgb(rgb).to_xyy();
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-9);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-9);
    }
}
