//! Plan description types (noun module)
//!
//! The serde-deserializable surface a caller or the CLI hands to the parser.

mod request;

pub use request::{
    PlanDescription, TableClause, JoinDescription, FilterClause, AggregateClause, OrderClause,
};
