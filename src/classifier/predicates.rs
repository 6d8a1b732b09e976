//! Threshold predicates and the direct decision function.

use super::config::Thresholds;
use super::types::Category;

/// Returns `true` if any dimension is at least 150 or the volume is at
/// least 1,000,000.
///
/// Any numeric input is accepted; zero, fractional and negative values go
/// through the same formula.
pub fn is_bulky(width: f64, height: f64, length: f64) -> bool {
    Thresholds::DEFAULT.is_bulky(width, height, length)
}

/// Returns `true` if `mass` is at least 20.
pub fn is_heavy(mass: f64) -> bool {
    Thresholds::DEFAULT.is_heavy(mass)
}

/// Classifies a package without building a rule engine.
///
/// Agrees with [`RuleEngine::evaluate`](crate::rules::RuleEngine::evaluate)
/// over [`default_rules`](crate::rules::default_rules) for every input.
///
/// # Examples
///
/// ```
/// use parcel_sort::classifier::{sort, Category};
///
/// assert_eq!(sort(100.0, 100.0, 100.0, 10.0), Category::Special);
/// assert_eq!(sort(150.0, 50.0, 50.0, 20.0), Category::Rejected);
/// assert_eq!(sort(50.0, 50.0, 50.0, 19.9), Category::Standard);
/// ```
pub fn sort(width: f64, height: f64, length: f64, mass: f64) -> Category {
    Thresholds::DEFAULT.classify(width, height, length, mass)
}
