//! Default package rule set and priority tiers.

use super::types::{Always, RuleDefinition};
use crate::classifier::{Category, PackageRecord, Thresholds};

/// Standard priority tiers.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl Priority {
    pub const HIGH: f64 = 1.0;
    pub const MEDIUM: f64 = 2.0;
    pub const LOW: f64 = 3.0;
}

pub const REJECTED_RULE: &str = "rejected-packages";
pub const SPECIAL_RULE: &str = "special-packages";
pub const STANDARD_RULE: &str = "standard-packages";

/// Records that carry precomputed bulky/heavy flags.
pub trait PackageFlags {
    fn bulky(&self) -> bool;
    fn heavy(&self) -> bool;
}

impl PackageFlags for PackageRecord {
    fn bulky(&self) -> bool {
        self.bulky
    }

    fn heavy(&self) -> bool {
        self.heavy
    }
}

// Absent or non-boolean flags read as false.
#[cfg(feature = "serde")]
impl PackageFlags for serde_json::Value {
    fn bulky(&self) -> bool {
        self.get("bulky").and_then(serde_json::Value::as_bool).unwrap_or(false)
    }

    fn heavy(&self) -> bool {
        self.get("heavy").and_then(serde_json::Value::as_bool).unwrap_or(false)
    }
}

/// The decision matrix as three rules over precomputed flags.
///
/// 1. `rejected-packages` (HIGH): bulky and heavy
/// 2. `special-packages` (MEDIUM): bulky or heavy
/// 3. `standard-packages` (LOW): catch-all
pub fn default_rules<T>() -> Vec<RuleDefinition<T>>
where
    T: PackageFlags + 'static,
{
    vec![
        RuleDefinition::default()
            .with_name(REJECTED_RULE)
            .when(|r: &T| r.bulky() && r.heavy())
            .with_result(Category::Rejected.as_str())
            .with_priority(Priority::HIGH),
        RuleDefinition::default()
            .with_name(SPECIAL_RULE)
            .when(|r: &T| r.bulky() || r.heavy())
            .with_result(Category::Special.as_str())
            .with_priority(Priority::MEDIUM),
        RuleDefinition::new(
            STANDARD_RULE,
            Always,
            Category::Standard.as_str(),
            Priority::LOW,
        ),
    ]
}

/// Same rules as [`default_rules`], computing the flags from raw
/// measurements with `thresholds` instead of reading precomputed ones.
pub fn rules_for(thresholds: &Thresholds) -> Vec<RuleDefinition<PackageRecord>> {
    let thresholds = *thresholds;
    vec![
        RuleDefinition::default()
            .with_name(REJECTED_RULE)
            .when(move |r: &PackageRecord| {
                thresholds.is_bulky(r.width, r.height, r.length) && thresholds.is_heavy(r.mass)
            })
            .with_result(Category::Rejected.as_str())
            .with_priority(Priority::HIGH),
        RuleDefinition::default()
            .with_name(SPECIAL_RULE)
            .when(move |r: &PackageRecord| {
                thresholds.is_bulky(r.width, r.height, r.length) || thresholds.is_heavy(r.mass)
            })
            .with_result(Category::Special.as_str())
            .with_priority(Priority::MEDIUM),
        RuleDefinition::new(
            STANDARD_RULE,
            Always,
            Category::Standard.as_str(),
            Priority::LOW,
        ),
    ]
}
