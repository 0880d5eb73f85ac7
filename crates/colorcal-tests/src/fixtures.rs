//! Recorded temperature fixtures
//!
//! Readings taken from calibration sessions plus a few reference whites,
//! each with the temperature expected from every search configuration that
//! was checked. Loci and formulas are stored by name and parsed with the
//! same `FromStr` impls a configuration file would use.

use anyhow::{Context, Result, bail};
use colorcal_core::{CctOptions, DeltaE, Locus, XyY, Xyz};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Absolute tolerance on solver temperatures (K)
pub const SOLVER_TOLERANCE: f64 = 5.0;

/// Absolute tolerance on Robertson temperatures (K)
pub const ROBERTSON_TOLERANCE: f64 = 1.0;

#[derive(Debug, Deserialize)]
struct RawFixture {
    name: String,
    #[serde(default)]
    xy: Option<[f64; 2]>,
    #[serde(default)]
    xyz: Option<[f64; 3]>,
    robertson: f64,
    solver: Vec<RawExpectation>,
}

#[derive(Debug, Deserialize)]
struct RawExpectation {
    locus: String,
    mode: String,
    temperature: f64,
}

/// Expected search result for one configuration
#[derive(Debug, Clone)]
pub struct Expectation {
    pub options: CctOptions,
    pub temperature: f64,
}

/// A sample with its expected temperatures
#[derive(Debug, Clone)]
pub struct CctFixture {
    pub name: String,
    /// Sample normalized to Y = 1
    pub xyz: Xyz,
    pub robertson: f64,
    pub expectations: Vec<Expectation>,
}

impl TryFrom<RawFixture> for CctFixture {
    type Error = anyhow::Error;

    fn try_from(raw: RawFixture) -> Result<Self> {
        let xyz = match (raw.xy, raw.xyz) {
            (Some([x, y]), None) => XyY::from_chromaticity(x, y).to_xyz(),
            (None, Some(v)) => Xyz::from(v).normalize(),
            _ => bail!("{}: exactly one of `xy` and `xyz` is required", raw.name),
        };
        let expectations = raw
            .solver
            .into_iter()
            .map(|e| {
                let locus: Locus = e.locus.parse()?;
                let mode: DeltaE = e.mode.parse()?;
                Ok(Expectation {
                    options: CctOptions::new(locus, mode),
                    temperature: e.temperature,
                })
            })
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("fixture `{}`", raw.name))?;

        Ok(Self {
            name: raw.name,
            xyz,
            robertson: raw.robertson,
            expectations,
        })
    }
}

/// Default fixture file shipped with this crate
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/cct_fixtures.json")
}

/// Parse fixtures from JSON text
pub fn parse_fixtures(json: &str) -> Result<Vec<CctFixture>> {
    let raw: Vec<RawFixture> = serde_json::from_str(json).context("malformed fixture JSON")?;
    raw.into_iter().map(CctFixture::try_from).collect()
}

/// Load fixtures from a file
pub fn load_fixtures(path: impl AsRef<Path>) -> Result<Vec<CctFixture>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_fixtures(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_fixtures_load() {
        let fixtures = load_fixtures(fixture_path()).unwrap();
        assert!(fixtures.len() >= 5);
        for f in &fixtures {
            assert!((f.xyz.y - 1.0).abs() < 1e-12, "{}", f.name);
            assert!(!f.expectations.is_empty(), "{}", f.name);
        }
    }

    #[test]
    fn test_both_sample_forms_rejected() {
        let json = r#"[{"name": "bad", "xy": [0.3, 0.3], "xyz": [1, 1, 1],
                        "robertson": 0, "solver": []}]"#;
        assert!(parse_fixtures(json).is_err());
    }

    #[test]
    fn test_unknown_locus_rejected() {
        let json = r#"[{"name": "bad", "xy": [0.3, 0.3], "robertson": 0,
                        "solver": [{"locus": "tungsten", "mode": "CIE1976", "temperature": 0}]}]"#;
        let err = parse_fixtures(json).unwrap_err();
        assert!(format!("{err:#}").contains("bad"));
    }
}
