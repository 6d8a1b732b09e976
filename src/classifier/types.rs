//! Handling categories and the package input record.

use std::fmt;
use std::str::FromStr;

use super::config::Thresholds;
use crate::rules::Structured;

/// Handling category assigned to a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Category {
    /// Neither bulky nor heavy.
    Standard,
    /// Bulky or heavy, but not both.
    Special,
    /// Both bulky and heavy.
    Rejected,
}

impl Category {
    /// All categories, in decision-matrix order.
    pub const ALL: [Category; 3] = [Category::Standard, Category::Special, Category::Rejected];

    /// Returns the label used as a rule result.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }

    /// The fixed decision matrix over the two predicates.
    pub const fn from_flags(bulky: bool, heavy: bool) -> Self {
        match (bulky, heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category label: {s:?}"))
    }
}

/// Package measurements plus the derived bulky/heavy flags.
///
/// This is the record the default rule set is written against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageRecord {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
    pub bulky: bool,
    pub heavy: bool,
}

impl Structured for PackageRecord {}

impl PackageRecord {
    /// Builds a record with flags computed from the fixed thresholds.
    pub fn measure(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self::measure_with(&Thresholds::DEFAULT, width, height, length, mass)
    }

    /// Builds a record with flags computed from `thresholds`.
    pub fn measure_with(
        thresholds: &Thresholds,
        width: f64,
        height: f64,
        length: f64,
        mass: f64,
    ) -> Self {
        Self {
            width,
            height,
            length,
            mass,
            bulky: thresholds.is_bulky(width, height, length),
            heavy: thresholds.is_heavy(mass),
        }
    }

    /// `width * height * length`.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }
}
