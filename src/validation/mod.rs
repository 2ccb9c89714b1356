//! Validation - Named rules, a single runner, and result aggregation.
//!
//! A rule is plain data: a name, a predicate and a failure message. The
//! predicate either looks at the value alone or at the value plus a context
//! (for example the current match collection). The message is either fixed
//! or derived from the failing value.
//!
//! Every rule in a set is evaluated; failures are collected rather than
//! stopping at the first one, and the order of messages follows the order
//! of evaluation.
//!
//! ## Example
//!
//! ```ignore
//! use scoreboard::validation::{validate, Rule, ValidationResult};
//!
//! const RULES: [Rule<str>; 1] = [Rule::new("required", |v: &str| !v.is_empty(), "Value is required")];
//!
//! let result = ValidationResult::combine([validate("", &RULES), validate("ok", &RULES)]);
//! assert_eq!(result.errors(), ["Value is required"]);
//! ```

pub mod rules;
mod validators;

use std::fmt;

use crate::error::ValidationError;

pub use validators::{
    validate_finish_match, validate_match_id, validate_score, validate_start_match,
    validate_update_score,
};

/// How a rule decides whether a value passes.
pub enum Predicate<T: ?Sized, C: ?Sized> {
    /// Looks at the value alone.
    Value(fn(&T) -> bool),
    /// Looks at the value and the validation context.
    WithContext(fn(&T, &C) -> bool),
}

/// What a failing rule reports.
pub enum Message<T: ?Sized> {
    Static(&'static str),
    /// Built from the failing value.
    Derived(fn(&T) -> String),
}

/// A named predicate paired with its failure message.
pub struct Rule<T: ?Sized, C: ?Sized = ()> {
    name: &'static str,
    predicate: Predicate<T, C>,
    message: Message<T>,
}

impl<T: ?Sized, C: ?Sized> Rule<T, C> {
    /// Context-free rule with a fixed message.
    pub const fn new(name: &'static str, test: fn(&T) -> bool, message: &'static str) -> Self {
        Rule {
            name,
            predicate: Predicate::Value(test),
            message: Message::Static(message),
        }
    }

    /// Context-aware rule with a fixed message.
    pub const fn with_context(
        name: &'static str,
        test: fn(&T, &C) -> bool,
        message: &'static str,
    ) -> Self {
        Rule {
            name,
            predicate: Predicate::WithContext(test),
            message: Message::Static(message),
        }
    }

    /// Context-aware rule whose message is computed from the value.
    pub const fn with_context_derived(
        name: &'static str,
        test: fn(&T, &C) -> bool,
        message: fn(&T) -> String,
    ) -> Self {
        Rule {
            name,
            predicate: Predicate::WithContext(test),
            message: Message::Derived(message),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn passes(&self, value: &T, context: &C) -> bool {
        match self.predicate {
            Predicate::Value(test) => test(value),
            Predicate::WithContext(test) => test(value, context),
        }
    }

    pub fn message(&self, value: &T) -> String {
        match self.message {
            Message::Static(message) => message.to_string(),
            Message::Derived(render) => render(value),
        }
    }
}

impl<T: ?Sized, C: ?Sized> fmt::Debug for Rule<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.predicate {
            Predicate::Value(_) => "value",
            Predicate::WithContext(_) => "context",
        };
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("predicate", &kind)
            .finish()
    }
}

/// Outcome of running one or more rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult::default()
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Concatenates the error lists of `results` in the order given.
    /// The combined result is valid only when every component is.
    pub fn combine<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ValidationResult>,
    {
        let errors = results
            .into_iter()
            .flat_map(|result| result.errors)
            .collect();
        ValidationResult { errors }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

/// Runs context-free rules against `value`.
pub fn validate<T: ?Sized>(value: &T, rules: &[Rule<T>]) -> ValidationResult {
    validate_with_context(value, &(), rules)
}

/// Runs every rule against `value` and `context`, collecting each failure.
pub fn validate_with_context<T: ?Sized, C: ?Sized>(
    value: &T,
    context: &C,
    rules: &[Rule<T, C>],
) -> ValidationResult {
    let errors = rules
        .iter()
        .filter(|rule| !rule.passes(value, context))
        .map(|rule| {
            tracing::trace!(rule = rule.name(), "validation rule failed");
            rule.message(value)
        })
        .collect();
    ValidationResult { errors }
}
