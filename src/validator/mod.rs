//! Plan validator (verb module)
//!
//! Inspects a finalized `QueryPlan` for structural defects and collects
//! every finding; nothing here mutates the plan.

mod issue;
mod validate;

pub use issue::{Issue, IssueCode, Severity, ValidationResult};
pub use validate::validate;
