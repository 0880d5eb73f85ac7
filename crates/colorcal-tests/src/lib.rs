//! # colorcal-tests
//!
//! Parity and property testing for colorcal.
//!
//! This crate provides:
//! - Independent Delta E formulas and summary statistics
//! - palette-backed reference conversions
//! - Seeded sample generators
//! - Recorded correlated color temperature fixtures
//!
//! ## Reference Implementations
//!
//! - **palette**: Lab, XYZ, xyY and sRGB conversions
//! - **accuracy**: CIE76, CIE94 and CIEDE2000 written against the published
//!   formulas, sharing no code with `colorcal_core::difference`
//!
//! ## Test Categories
//!
//! 1. **Parity**: conversions against palette
//! 2. **Properties**: round trips, zero handling, adaptation
//! 3. **Delta E**: reference agreement, symmetry, normalization
//! 4. **CCT**: fixtures, locus recovery, Robertson cross-check
//! 5. **Concurrency**: shared tables read from worker threads

pub mod accuracy;
pub mod fixtures;
pub mod reference;
pub mod samples;

pub use accuracy::{DeltaEStats, delta_e_1976, delta_e_1994, delta_e_2000, normalize_lab};
pub use fixtures::{CctFixture, load_fixtures};
pub use samples::Samples;
