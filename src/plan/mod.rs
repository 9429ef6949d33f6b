//! Query plan types (noun module)
//!
//! Represents a flat relational query as ordered clause lists, prior to
//! validation and text rendering.

mod node;
mod expr;

pub use node::{QueryPlan, TableRef, JoinClause, JoinKind, SortKey, SortDirection};
pub use expr::{Column, Predicate, CompareOp, ScalarValue, AggregateSpec, AggregateFn};
