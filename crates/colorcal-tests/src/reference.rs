//! Conversions computed by palette
//!
//! palette carries its own D65 (four-decimal CIE value) and derives the sRGB
//! matrix from the same primaries colorcal uses. Comparisons against it are
//! made with the white point palette assumes, see [`PALETTE_D65`].

use colorcal_core::{Lab, Rgb, XyY, Xyz};
use palette::white_point::D65;
use palette::convert::IntoColorUnclamped;
use palette::{LinSrgb, Srgb};

type PaletteXyz = palette::Xyz<D65, f64>;
type PaletteLab = palette::Lab<D65, f64>;
type PaletteYxy = palette::Yxy<D65, f64>;

/// The D65 white palette uses for Lab and RGB conversions
pub const PALETTE_D65: Xyz = Xyz::new(0.95047, 1.0, 1.08883);

fn to_palette(xyz: Xyz) -> PaletteXyz {
    PaletteXyz::new(xyz.x, xyz.y, xyz.z)
}

fn from_palette(xyz: PaletteXyz) -> Xyz {
    Xyz::new(xyz.x, xyz.y, xyz.z)
}

/// XYZ → Lab relative to [`PALETTE_D65`]
pub fn lab_from_xyz(xyz: Xyz) -> Lab {
    let lab: PaletteLab = to_palette(xyz).into_color_unclamped();
    Lab::new(lab.l, lab.a, lab.b)
}

/// Lab relative to [`PALETTE_D65`] → XYZ
pub fn xyz_from_lab(lab: Lab) -> Xyz {
    let xyz: PaletteXyz = PaletteLab::new(lab.l, lab.a, lab.b).into_color_unclamped();
    from_palette(xyz)
}

/// XYZ → xyY; only meaningful for non-zero input
pub fn xyy_from_xyz(xyz: Xyz) -> XyY {
    let yxy: PaletteYxy = to_palette(xyz).into_color_unclamped();
    XyY::new(yxy.x, yxy.y, yxy.luma)
}

/// xyY → XYZ
pub fn xyz_from_xyy(xyy: XyY) -> Xyz {
    let xyz: PaletteXyz = PaletteYxy::new(xyy.x, xyy.y, xyy.big_y).into_color_unclamped();
    from_palette(xyz)
}

/// Companded sRGB → XYZ
pub fn xyz_from_srgb(rgb: Rgb) -> Xyz {
    let xyz: PaletteXyz = Srgb::new(rgb.r, rgb.g, rgb.b).into_color_unclamped();
    from_palette(xyz)
}

/// XYZ → linear sRGB, unclipped
pub fn linear_srgb_from_xyz(xyz: Xyz) -> Rgb {
    let rgb: LinSrgb<f64> = to_palette(xyz).into_color_unclamped();
    Rgb::new(rgb.red, rgb.green, rgb.blue)
}

/// Apply the sRGB transfer function to a linear value
pub fn srgb_encode(linear: Rgb) -> Rgb {
    let encoded: Srgb<f64> = Srgb::from_linear(LinSrgb::new(linear.r, linear.g, linear.b));
    Rgb::new(encoded.red, encoded.green, encoded.blue)
}
