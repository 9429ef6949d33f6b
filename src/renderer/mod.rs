//! SQL renderer (verb module)
//!
//! Transforms a `QueryPlan` into deterministic SQL text.

mod sql;
mod error;

pub use sql::render_sql;
pub use error::RenderError;
