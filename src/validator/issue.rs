//! Validation issue types

use std::fmt;

use serde::Serialize;

/// Structural defect classes the validator reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum IssueCode {
    /// A join key's table qualifier is not a registered table
    DanglingJoinKey,
    /// An aggregate reads the nullable side of a LEFT JOIN with no NULL guard
    AmbiguousOuterJoin,
    /// A selected column is missing from the GROUP BY list
    GroupByCompleteness,
    /// A HAVING predicate references a column that is neither aggregated nor grouped
    HavingWithoutAggregate,
}

/// Issue severity; warnings never block rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding, tied to the clause that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub code: IssueCode,
    pub severity: Severity,
    pub message: String,
    /// Clause path within the plan, e.g. `joins[0].left_key`
    pub location: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(
            f,
            "{}[{:?}] at {}: {}",
            severity, self.code, self.location, self.message
        )
    }
}

/// Outcome of validating one plan.
///
/// All rules run and every finding is collected, so a caller can report
/// each problem at once instead of fixing them one at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    /// True when no error-severity issue is present; warnings are allowed
    pub fn is_ok(&self) -> bool {
        self.issues.iter().all(|i| i.severity != Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}
