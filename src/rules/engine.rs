//! First-match rule evaluation engine.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::EngineError;
use super::types::{is_non_blank, Rule, RuleDefinition, Structured};

/// Ordered, first-match rule evaluator.
///
/// Rules are kept sorted ascending by priority. Rules with equal priority
/// keep the order in which they were supplied or added, so the earlier
/// one wins a tie. Rule names are unique within an engine.
///
/// # Examples
///
/// ```
/// use parcel_sort::classifier::PackageRecord;
/// use parcel_sort::rules::{Always, RuleDefinition, RuleEngine};
///
/// let mut engine = RuleEngine::new(vec![
///     RuleDefinition::default()
///         .with_name("fragile")
///         .when(|r: &PackageRecord| r.mass < 1.0)
///         .with_result("FRAGILE")
///         .with_priority(1.0),
///     RuleDefinition::new("fallback", Always, "STANDARD", 9.0),
/// ])?;
///
/// let tiny = PackageRecord::measure(5.0, 5.0, 5.0, 0.2);
/// assert_eq!(engine.evaluate(&tiny)?, "FRAGILE");
///
/// engine.remove_rule("fragile")?;
/// assert_eq!(engine.evaluate(&tiny)?, "STANDARD");
/// # Ok::<(), parcel_sort::rules::EngineError>(())
/// ```
pub struct RuleEngine<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleEngine<T> {
    /// Validates `rules` and builds an engine.
    ///
    /// Fails on an empty set, on the first invalid definition, or on a
    /// repeated name. Nothing is retained on failure.
    pub fn new<I>(rules: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = RuleDefinition<T>>,
    {
        let mut validated: Vec<Rule<T>> = Vec::new();
        for def in rules {
            let rule = def.validate()?;
            if validated.iter().any(|r| r.name() == rule.name()) {
                return Err(EngineError::DuplicateRule(rule.name().to_owned()));
            }
            validated.push(rule);
        }

        if validated.is_empty() {
            return Err(EngineError::EmptyRuleSet);
        }

        // Stable: equal priorities keep supplied order.
        validated.sort_by(|a, b| a.priority().total_cmp(&b.priority()));

        tracing::debug!(
            rules = validated.len(),
            order = ?validated.iter().map(Rule::name).collect::<Vec<_>>(),
            "rule engine created"
        );

        Ok(Self { rules: validated })
    }

    /// Validates `rule` and inserts it at its priority position.
    ///
    /// The new rule goes after every existing rule with the same or lower
    /// priority.
    pub fn add_rule(&mut self, rule: RuleDefinition<T>) -> Result<(), EngineError> {
        let rule = rule.validate()?;
        if self.contains_rule(rule.name()) {
            return Err(EngineError::DuplicateRule(rule.name().to_owned()));
        }

        let pos = self
            .rules
            .partition_point(|r| r.priority() <= rule.priority());

        tracing::debug!(
            rule = rule.name(),
            priority = rule.priority(),
            position = pos,
            "rule added"
        );

        self.rules.insert(pos, rule);
        Ok(())
    }

    /// Removes the rule called `name` and returns it.
    ///
    /// Remaining rules keep their relative order. Removing the last rule
    /// is allowed; `evaluate` then reports no match.
    pub fn remove_rule(&mut self, name: &str) -> Result<Rule<T>, EngineError> {
        if !is_non_blank(name) {
            return Err(EngineError::InvalidName);
        }

        let idx = self
            .rules
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| EngineError::RuleNotFound(name.to_owned()))?;

        let removed = self.rules.remove(idx);
        tracing::debug!(rule = name, remaining = self.rules.len(), "rule removed");
        Ok(removed)
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Returns `true` if a rule called `name` is present.
    pub fn contains_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name() == name)
    }
}

impl<T: Structured> RuleEngine<T> {
    /// Returns the result of the first rule whose condition holds.
    ///
    /// Rules after the match are not consulted. A failing condition aborts
    /// the scan.
    pub fn evaluate(&self, record: &T) -> Result<&str, EngineError> {
        if !record.is_structured() {
            return Err(EngineError::InvalidInput);
        }

        for rule in &self.rules {
            match rule.check(record) {
                Ok(true) => {
                    tracing::trace!(rule = rule.name(), result = rule.result(), "rule matched");
                    return Ok(rule.result());
                }
                Ok(false) => {}
                Err(source) => {
                    tracing::warn!(rule = rule.name(), error = %source, "rule condition failed");
                    return Err(EngineError::RuleExecution {
                        rule: rule.name().to_owned(),
                        source,
                    });
                }
            }
        }

        Err(EngineError::NoMatch)
    }

    /// Evaluates each record independently, preserving input order.
    pub fn evaluate_batch(&self, records: &[T]) -> Vec<Result<&str, EngineError>> {
        records.iter().map(|r| self.evaluate(r)).collect()
    }
}

#[cfg(feature = "parallel")]
impl<T: Structured + Sync> RuleEngine<T> {
    /// Like [`evaluate_batch`](Self::evaluate_batch), but on the rayon pool.
    pub fn par_evaluate_batch(&self, records: &[T]) -> Vec<Result<&str, EngineError>> {
        records.par_iter().map(|r| self.evaluate(r)).collect()
    }
}

impl<T> Clone for RuleEngine<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T> std::fmt::Debug for RuleEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules)
            .finish()
    }
}
