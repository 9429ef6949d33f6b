//! relint - Build, validate and render relational query plans
//!
//! This library provides:
//! - Plan types (QueryPlan, TableRef, JoinClause, Predicate, AggregateSpec)
//! - Incremental plan construction with alias checking
//! - Structural validation (dangling join keys, GROUP BY completeness,
//!   HAVING references, ambiguous outer-join aggregation)
//! - Deterministic SQL rendering
//! - Plan description parsing from YAML
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `plan/` - finalized plan types (QueryPlan, Column, Predicate, ...)
//! - `query/` - plan description types (PlanDescription and its clauses)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → PlanDescription → QueryPlan
//! - `builder/` - append calls → QueryPlan
//! - `validator/` - QueryPlan → ValidationResult
//! - `renderer/` - QueryPlan → SQL text
//!
//! # Example
//!
//! ```
//! use relint::builder::QueryPlanBuilder;
//! use relint::plan::{Column, JoinKind};
//! use relint::validator::validate;
//! use relint::renderer::render_sql;
//!
//! let mut builder = QueryPlanBuilder::new();
//! builder.add_table("vendor", "v").unwrap();
//! builder.add_table("vendorcontact", "vc").unwrap();
//! builder.add_join(
//!     JoinKind::Inner,
//!     "v",
//!     "vc",
//!     Column::new("v", "VendorId"),
//!     Column::new("vc", "VendorId"),
//! ).unwrap();
//! builder.add_column(Column::new("v", "Name")).unwrap();
//!
//! let plan = builder.build();
//! let result = validate(&plan);
//! assert!(result.is_ok());
//! let sql = render_sql(&plan).unwrap();
//! assert!(sql.starts_with("SELECT v.Name"));
//! ```

pub mod plan;
pub mod query;
pub mod builder;
pub mod validator;
pub mod renderer;
pub mod parser;
pub mod error;

// Re-export commonly used types
pub use plan::{QueryPlan, TableRef, JoinClause, JoinKind, Column, Predicate, CompareOp, ScalarValue, AggregateSpec, AggregateFn, SortKey, SortDirection};
pub use query::PlanDescription;
pub use builder::{QueryPlanBuilder, BuildError};
pub use validator::{validate, ValidationResult, Issue, IssueCode, Severity};
pub use renderer::{render_sql, RenderError};
pub use error::ParseError;
