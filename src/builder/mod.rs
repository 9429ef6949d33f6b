//! Plan builder (verb module)
//!
//! Accumulates clauses into a `QueryPlan`, rejecting alias misuse at append
//! time.

mod build;
mod error;

pub use build::QueryPlanBuilder;
pub use error::BuildError;
