use serde::Deserialize;

use crate::plan::{AggregateFn, CompareOp, JoinKind, ScalarValue, SortDirection};

/// One table entry in a plan description
#[derive(Debug, Deserialize, Clone)]
pub struct TableClause {
    pub name: String,
    /// Defaults to the table name when omitted
    #[serde(default)]
    pub alias: Option<String>,
}

/// One join entry; `left_key`/`right_key` use the `table.column` text form
#[derive(Debug, Deserialize, Clone)]
pub struct JoinDescription {
    pub kind: JoinKind,
    pub left: String,
    pub right: String,
    pub left_key: String,
    pub right_key: String,
}

/// A WHERE or HAVING predicate entry
#[derive(Debug, Deserialize, Clone)]
pub struct FilterClause {
    pub column: String,
    pub op: CompareOp,
    /// Absent for is_null / is_not_null
    #[serde(default)]
    pub value: Option<ScalarValue>,
}

/// An aggregate entry: `fn(column) AS alias`
#[derive(Debug, Deserialize, Clone)]
pub struct AggregateClause {
    #[serde(rename = "fn")]
    pub func: AggregateFn,
    pub column: String,
    pub alias: String,
}

/// An ORDER BY entry
#[derive(Debug, Deserialize, Clone)]
pub struct OrderClause {
    pub column: String,
    pub direction: SortDirection,
}

/// External description of a query plan.
///
/// This is the YAML surface consumed by the parser and the CLI; the parser
/// turns it into a `QueryPlan` by driving the builder, so every structural
/// rule the builder enforces applies to descriptions too.
#[derive(Debug, Deserialize, Default)]
pub struct PlanDescription {
    pub tables: Vec<TableClause>,
    #[serde(default)]
    pub joins: Vec<JoinDescription>,
    #[serde(default)]
    pub select: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterClause>,
    #[serde(default)]
    pub aggregates: Vec<AggregateClause>,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub having: Vec<FilterClause>,
    #[serde(default)]
    pub order_by: Vec<OrderClause>,
}
