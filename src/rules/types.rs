//! Core traits and rule types.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use super::error::{BoxError, EngineError};

/// A predicate over an input record.
///
/// Returning `Err` aborts the whole evaluation; the engine wraps the
/// failure together with the rule name.
///
/// # Examples
///
/// ```ignore
/// struct Above(&'static str, f64);
///
/// impl Condition<HashMap<String, f64>> for Above {
///     fn check(&self, record: &HashMap<String, f64>) -> Result<bool, BoxError> {
///         Ok(record.get(self.0).is_some_and(|v| *v > self.1))
///     }
/// }
/// ```
pub trait Condition<T>: Send + Sync {
    fn check(&self, record: &T) -> Result<bool, BoxError>;
}

/// Wraps an infallible closure as a [`Condition`].
pub struct Predicate<F>(pub F);

impl<T, F> Condition<T> for Predicate<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn check(&self, record: &T) -> Result<bool, BoxError> {
        Ok((self.0)(record))
    }
}

/// Wraps a closure that may fail as a [`Condition`].
pub struct Fallible<F>(pub F);

impl<T, F> Condition<T> for Fallible<F>
where
    F: Fn(&T) -> Result<bool, BoxError> + Send + Sync,
{
    fn check(&self, record: &T) -> Result<bool, BoxError> {
        (self.0)(record)
    }
}

/// Catch-all condition; always holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<T> Condition<T> for Always {
    fn check(&self, _record: &T) -> Result<bool, BoxError> {
        Ok(true)
    }
}

/// A record the engine can evaluate.
///
/// Typed records are always structured. Dynamic representations (JSON
/// values) report `false` for anything but an object, which makes
/// `evaluate` fail with an input error.
pub trait Structured {
    fn is_structured(&self) -> bool {
        true
    }
}

impl<V> Structured for HashMap<String, V> {}

impl<V> Structured for BTreeMap<String, V> {}

impl<S: Structured> Structured for Option<S> {
    fn is_structured(&self) -> bool {
        self.as_ref().is_some_and(Structured::is_structured)
    }
}

#[cfg(feature = "serde")]
impl Structured for serde_json::Value {
    fn is_structured(&self) -> bool {
        self.is_object()
    }
}

#[cfg(feature = "serde")]
impl Structured for serde_json::Map<String, serde_json::Value> {}

/// An unvalidated rule, as supplied by a caller.
///
/// Every property is optional so that a missing one can be reported by
/// name. [`RuleEngine`](super::RuleEngine) validates definitions into
/// [`Rule`]s on construction and on `add_rule`.
pub struct RuleDefinition<T> {
    pub name: Option<String>,
    pub condition: Option<Arc<dyn Condition<T>>>,
    pub result: Option<String>,
    pub priority: Option<f64>,
}

impl<T> RuleDefinition<T> {
    /// Creates a definition with all four properties set.
    pub fn new<C: Condition<T> + 'static>(
        name: impl Into<String>,
        condition: C,
        result: impl Into<String>,
        priority: f64,
    ) -> Self {
        Self {
            name: Some(name.into()),
            condition: Some(Arc::new(condition)),
            result: Some(result.into()),
            priority: Some(priority),
        }
    }

    /// Sets the rule name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the condition.
    pub fn with_condition<C: Condition<T> + 'static>(mut self, condition: C) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Sets the condition from an infallible closure.
    pub fn when<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
        T: 'static,
    {
        self.with_condition(Predicate(f))
    }

    /// Sets the result label.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    /// Sets the priority. Lower is evaluated earlier.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Checks the definition and turns it into a [`Rule`].
    ///
    /// Missing properties are reported first, in the order name,
    /// condition, result, priority; then each value is checked in the
    /// same order.
    pub fn validate(self) -> Result<Rule<T>, EngineError> {
        let Some(name) = self.name else {
            return Err(EngineError::MissingProperty("name"));
        };
        let Some(condition) = self.condition else {
            return Err(EngineError::MissingProperty("condition"));
        };
        let Some(result) = self.result else {
            return Err(EngineError::MissingProperty("result"));
        };
        let Some(priority) = self.priority else {
            return Err(EngineError::MissingProperty("priority"));
        };

        if !is_non_blank(&name) {
            return Err(EngineError::InvalidName);
        }
        if !is_non_blank(&result) {
            return Err(EngineError::InvalidResult);
        }
        if !priority.is_finite() || priority < 0.0 {
            return Err(EngineError::InvalidPriority);
        }
        // -0.0 becomes 0.0 so equal priorities order by insertion only.
        let priority = priority + 0.0;

        Ok(Rule {
            name,
            condition,
            result,
            priority,
        })
    }
}

impl<T> Default for RuleDefinition<T> {
    fn default() -> Self {
        Self {
            name: None,
            condition: None,
            result: None,
            priority: None,
        }
    }
}

impl<T> fmt::Debug for RuleDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("name", &self.name)
            .field("condition", &self.condition.as_ref().map(|_| ".."))
            .field("result", &self.result)
            .field("priority", &self.priority)
            .finish()
    }
}

/// A validated rule. Immutable; replace it with remove + add.
pub struct Rule<T> {
    name: String,
    condition: Arc<dyn Condition<T>>,
    result: String,
    priority: f64,
}

impl<T> Rule<T> {
    /// Returns the unique rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the label produced when the condition holds.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Lower is evaluated earlier.
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Runs the rule's condition against `record`.
    pub fn check(&self, record: &T) -> Result<bool, BoxError> {
        self.condition.check(record)
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            condition: Arc::clone(&self.condition),
            result: self.result.clone(),
            priority: self.priority,
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("result", &self.result)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// `true` if `s` has at least one non-whitespace character.
pub(crate) fn is_non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::PackageRecord;

    fn complete() -> RuleDefinition<PackageRecord> {
        RuleDefinition::new("heavy", Predicate(|r: &PackageRecord| r.heavy), "SPECIAL", 2.0)
    }

    fn err_of(def: RuleDefinition<PackageRecord>) -> String {
        match def.validate() {
            Ok(rule) => panic!("expected validation failure, got {rule:?}"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let rule = complete().validate().unwrap();
        assert_eq!(rule.name(), "heavy");
        assert_eq!(rule.result(), "SPECIAL");
        assert!((rule.priority() - 2.0).abs() < 1e-10);
        assert!(rule.check(&PackageRecord::measure(1.0, 1.0, 1.0, 30.0)).unwrap());
    }

    #[test]
    fn test_missing_each_property() {
        let mut def = complete();
        def.name = None;
        assert_eq!(err_of(def), "rule is missing required property: name");

        let mut def = complete();
        def.condition = None;
        assert_eq!(err_of(def), "rule is missing required property: condition");

        let mut def = complete();
        def.result = None;
        assert_eq!(err_of(def), "rule is missing required property: result");

        let mut def = complete();
        def.priority = None;
        assert_eq!(err_of(def), "rule is missing required property: priority");
    }

    #[test]
    fn test_first_missing_property_reported() {
        let def: RuleDefinition<PackageRecord> = RuleDefinition::default().with_priority(1.0);
        assert_eq!(err_of(def), "rule is missing required property: name");

        let def = RuleDefinition::<PackageRecord>::default()
            .with_name("")
            .with_result("X");
        assert_eq!(err_of(def), "rule is missing required property: condition");
    }

    #[test]
    fn test_blank_name_and_result() {
        assert_eq!(
            err_of(complete().with_name("   ")),
            "rule name must be a non-empty string"
        );
        assert_eq!(
            err_of(complete().with_result("\t\n")),
            "rule result must be a non-empty string"
        );
    }

    #[test]
    fn test_bad_priorities() {
        for p in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                err_of(complete().with_priority(p)),
                "rule priority must be a non-negative number"
            );
        }
        assert!(complete().with_priority(0.0).validate().is_ok());
    }

    #[test]
    fn test_negative_zero_priority_normalized() {
        let rule = complete().with_priority(-0.0).validate().unwrap();
        assert_eq!(rule.priority(), 0.0);
        assert!(rule.priority().is_sign_positive());
    }

    #[test]
    fn test_adapters() {
        let rec = PackageRecord::measure(1.0, 1.0, 1.0, 1.0);
        assert!(Condition::<PackageRecord>::check(&Always, &rec).unwrap());

        let failing = Fallible(|_: &PackageRecord| -> Result<bool, BoxError> { Err("nope".into()) });
        assert_eq!(failing.check(&rec).unwrap_err().to_string(), "nope");
    }

    #[test]
    fn test_structured() {
        assert!(PackageRecord::measure(1.0, 1.0, 1.0, 1.0).is_structured());
        assert!(HashMap::<String, f64>::new().is_structured());
        assert!(!None::<PackageRecord>.is_structured());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_structured() {
        assert!(serde_json::json!({ "mass": 3 }).is_structured());
        assert!(!serde_json::Value::Null.is_structured());
        assert!(!serde_json::json!(42).is_structured());
        assert!(!serde_json::json!([1, 2]).is_structured());
    }
}
