use serde::Serialize;

/// How many violations `Display` renders beyond the first.
const DISPLAY_VIOLATION_TAIL: usize = 3;

/// Structured description of a rejected value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureDetail {
    /// Primary reason the value was rejected.
    pub message: String,
    /// Individual violations, in schema-reported order.
    pub violations: Vec<Violation>,
}

/// One schema violation at a specific location in the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Path into the rejected value (empty for the root).
    pub path: String,
    /// What the schema reported at that path.
    pub message: String,
}

impl FailureDetail {
    /// Create a failure with a primary message and no violation list.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Append a violation.
    pub fn with_violation(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.violations.push(Violation {
            path: path.into(),
            message: message.into(),
        });
        self
    }
}

impl std::fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        // The first violation restates the primary message; skip it.
        for violation in self.violations.iter().skip(1).take(DISPLAY_VIOLATION_TAIL) {
            write!(f, "; {}", violation.message)?;
        }
        Ok(())
    }
}
