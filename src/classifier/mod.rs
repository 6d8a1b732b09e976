//! Threshold classification of packages.
//!
//! A package is **bulky** when any single dimension reaches
//! [`DIMENSION_THRESHOLD`] or its volume reaches [`VOLUME_THRESHOLD`], and
//! **heavy** when its mass reaches [`MASS_THRESHOLD`]. The decision matrix:
//!
//! | bulky | heavy | category |
//! |-------|-------|----------|
//! | yes   | yes   | `REJECTED` |
//! | yes   | no    | `SPECIAL`  |
//! | no    | yes   | `SPECIAL`  |
//! | no    | no    | `STANDARD` |
//!
//! [`sort`] applies the matrix directly. The same matrix expressed as data
//! lives in [`crate::rules::default_rules`].

mod config;
mod predicates;
mod types;

pub use config::{Thresholds, DIMENSION_THRESHOLD, MASS_THRESHOLD, VOLUME_THRESHOLD};
pub use predicates::{is_bulky, is_heavy, sort};
pub use types::{Category, PackageRecord};
