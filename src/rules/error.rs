//! Rule engine errors.

use thiserror::Error;

/// Failure raised by a [`Condition`](super::Condition).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Broad classification of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed rule or rule set, duplicate or unknown rule name.
    Config,
    /// Malformed record passed to `evaluate`.
    Input,
    /// A condition failed while being evaluated.
    RuleExecution,
    /// No rule matched the record.
    NoMatch,
}

/// Error returned by [`RuleEngine`](super::RuleEngine) operations.
///
/// None of these are retried internally.
#[derive(Error, Debug)]
pub enum EngineError {
    // Config
    #[error("rules must be a non-empty structured sequence")]
    EmptyRuleSet,

    #[error("rule is missing required property: {0}")]
    MissingProperty(&'static str),

    #[error("rule name must be a non-empty string")]
    InvalidName,

    #[error("rule result must be a non-empty string")]
    InvalidResult,

    #[error("rule priority must be a non-negative number")]
    InvalidPriority,

    #[error("rule with name \"{0}\" already exists")]
    DuplicateRule(String),

    #[error("rule with name \"{0}\" not found")]
    RuleNotFound(String),

    // Input
    #[error("package data must be an object")]
    InvalidInput,

    // Evaluation
    #[error("error evaluating rule \"{rule}\": {source}")]
    RuleExecution {
        rule: String,
        #[source]
        source: BoxError,
    },

    #[error("no matching rule found for package data")]
    NoMatch,
}

impl EngineError {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::EmptyRuleSet
            | EngineError::MissingProperty(_)
            | EngineError::InvalidName
            | EngineError::InvalidResult
            | EngineError::InvalidPriority
            | EngineError::DuplicateRule(_)
            | EngineError::RuleNotFound(_) => ErrorKind::Config,
            EngineError::InvalidInput => ErrorKind::Input,
            EngineError::RuleExecution { .. } => ErrorKind::RuleExecution,
            EngineError::NoMatch => ErrorKind::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::MissingProperty("priority").to_string(),
            "rule is missing required property: priority"
        );
        assert_eq!(
            EngineError::DuplicateRule("a".into()).to_string(),
            "rule with name \"a\" already exists"
        );
        assert_eq!(
            EngineError::RuleNotFound("b".into()).to_string(),
            "rule with name \"b\" not found"
        );
    }

    #[test]
    fn test_rule_execution_keeps_source() {
        let err = EngineError::RuleExecution {
            rule: "r1".into(),
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "error evaluating rule \"r1\": boom");
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".into()));
        assert_eq!(err.kind(), ErrorKind::RuleExecution);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(EngineError::EmptyRuleSet.kind(), ErrorKind::Config);
        assert_eq!(EngineError::RuleNotFound("x".into()).kind(), ErrorKind::Config);
        assert_eq!(EngineError::InvalidInput.kind(), ErrorKind::Input);
        assert_eq!(EngineError::NoMatch.kind(), ErrorKind::NoMatch);
    }
}
