use std::fmt;

/// Rejection raised by a scoreboard operation.
///
/// Carries every violated rule message in evaluation order. There is only one
/// kind of failure; callers tell them apart by message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// Wrap the violated messages, first failure first.
    pub fn new(errors: Vec<String>) -> Self {
        ValidationError { errors }
    }

    /// The violated rule messages, first failure first.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join(", "))
    }
}

impl std::error::Error for ValidationError {}
