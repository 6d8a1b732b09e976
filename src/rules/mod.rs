//! Generic first-match rule engine.
//!
//! A [`RuleEngine`] holds named rules, each a [`Condition`] paired with a
//! result label and a priority. Evaluation scans the rules in ascending
//! priority and returns the result of the first rule whose condition
//! holds:
//!
//! - **Validation**: every [`RuleDefinition`] is checked before it becomes
//!   a [`Rule`]; an engine never holds an invalid or duplicate rule.
//! - **Ordering**: lower priority first; equal priorities keep insertion
//!   order.
//! - **Mutation**: [`RuleEngine::add_rule`] and [`RuleEngine::remove_rule`]
//!   keep the ordering intact.
//!
//! # Design
//!
//! The engine knows nothing about packages. Records are any type
//! implementing [`Structured`]; results are plain strings. The package
//! classification lives in [`default_rules`], built on
//! [`crate::classifier`].
//!
//! # Concurrency
//!
//! An engine has no internal locking. Evaluation only reads, so a shared
//! `&RuleEngine` can be evaluated from many threads; mutation needs
//! `&mut` and therefore exclusive access (wrap in a `Mutex` or `RwLock`
//! to mutate a shared engine).

mod defaults;
mod engine;
mod error;
mod types;

pub use defaults::{
    default_rules, rules_for, PackageFlags, Priority, REJECTED_RULE, SPECIAL_RULE, STANDARD_RULE,
};
pub use engine::RuleEngine;
pub use error::{BoxError, EngineError, ErrorKind};
pub use types::{Always, Condition, Fallible, Predicate, Rule, RuleDefinition, Structured};
