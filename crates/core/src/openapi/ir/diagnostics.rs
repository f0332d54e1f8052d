//! Diagnostics collected while normalizing a document.
//!
//! Resolution never logs directly. Every stage receives a `&mut Diagnostics`
//! and appends to it; the pipeline forwards the report to `tracing` once, and
//! callers may inspect it in the returned summary.

use std::fmt;

/// How much attention a diagnostic deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected simplification, useful when debugging output.
    Info,
    /// Likely a problem in the source document.
    Warning,
}

/// One recorded observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Where it happened (operation name, type name, ...).
    pub scope: String,
    /// What happened.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

/// Ordered diagnostics report.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    scope: String,
}

impl Diagnostics {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scope attached to subsequent entries.
    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
    }

    /// Record an informational note.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message.into());
    }

    /// Record a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message.into());
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.entries.push(Diagnostic {
            severity,
            scope: self.scope.clone(),
            message,
        });
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forward every entry to `tracing`.
    pub fn log(&self) {
        for entry in &self.entries {
            match entry.severity {
                Severity::Info => {
                    tracing::debug!(scope = %entry.scope, "{}", entry.message);
                }
                Severity::Warning => {
                    tracing::warn!(scope = %entry.scope, "{}", entry.message);
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_carry_current_scope() {
        let mut diag = Diagnostics::new();
        diag.set_scope("getUser");
        diag.info("first");
        diag.set_scope("User");
        diag.warn("second");

        assert_eq!(diag.entries().len(), 2);
        assert_eq!(diag.entries()[0].to_string(), "getUser: first");
        assert_eq!(diag.entries()[1].scope, "User");
        assert_eq!(diag.warning_count(), 1);
    }
}
