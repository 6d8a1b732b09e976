//! Package handling classification.
//!
//! Two collaborating pieces:
//!
//! - **Classifier**: pure predicates ([`classifier::is_bulky`],
//!   [`classifier::is_heavy`]) over package dimensions and mass, and a
//!   direct decision function ([`classifier::sort`]) mapping a package to
//!   `STANDARD`, `SPECIAL` or `REJECTED`.
//! - **Rules**: a generic, ordered, first-match rule engine
//!   ([`rules::RuleEngine`]) with validated rules and add/remove support.
//!   [`rules::default_rules`] expresses the classifier's decision matrix as
//!   data and always agrees with [`classifier::sort`].
//!
//! # Examples
//!
//! ```
//! use parcel_sort::classifier::{sort, PackageRecord};
//! use parcel_sort::rules::{default_rules, RuleEngine};
//!
//! let engine = RuleEngine::new(default_rules())?;
//! let record = PackageRecord::measure(150.0, 50.0, 50.0, 20.0);
//!
//! assert_eq!(engine.evaluate(&record)?, "REJECTED");
//! assert_eq!(sort(150.0, 50.0, 50.0, 20.0).as_str(), "REJECTED");
//! # Ok::<(), parcel_sort::rules::EngineError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: serde derives on the classifier types, and JSON values as
//!   engine records.
//! - `parallel`: `RuleEngine::par_evaluate_batch` on the rayon pool.

pub mod classifier;
pub mod rules;
