//! Finalized plan types

use serde::Deserialize;

use super::expr::{AggregateSpec, Column, Predicate};

/// A table registered in a plan, always carrying an alias
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    /// Physical table name
    pub name: String,
    /// Alias bound to the table within this plan's scope
    pub alias: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }
}

/// Join kind
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    Inner,
    Left,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        }
    }
}

/// A join between two registered tables on a single equality condition
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    /// Alias of the table already in the plan
    pub left_alias: String,
    /// Alias of the table being joined in
    pub right_alias: String,
    /// Left side of the ON equality; its qualifier may name any table,
    /// the validator reports unregistered ones
    pub left_key: Column,
    /// Right side of the ON equality
    pub right_key: Column,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// An ORDER BY key with direction
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub column: Column,
    pub direction: SortDirection,
}

/// A finalized query plan.
///
/// Built incrementally through `QueryPlanBuilder` and immutable afterwards:
/// every clause list is in append order, and nothing here mutates. The
/// validator and renderer only ever take `&QueryPlan`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub tables: Vec<TableRef>,
    pub joins: Vec<JoinClause>,
    /// Plain selected columns, before any aggregate outputs
    pub select: Vec<Column>,
    /// WHERE predicates, combined with AND
    pub filters: Vec<Predicate>,
    pub aggregates: Vec<AggregateSpec>,
    pub group_by: Vec<Column>,
    pub having: Vec<Predicate>,
    pub order_by: Vec<SortKey>,
}

impl QueryPlan {
    /// Look up a registered table by alias
    pub fn table(&self, alias: &str) -> Option<&TableRef> {
        self.tables.iter().find(|t| t.alias == alias)
    }

    /// Whether `alias` names a registered table (by alias or physical name)
    pub fn has_table(&self, alias: &str) -> bool {
        self.tables.iter().any(|t| t.alias == alias || t.name == alias)
    }

    /// Aliases of tables sitting on the nullable side of a LEFT JOIN
    pub fn nullable_aliases(&self) -> Vec<&str> {
        self.joins
            .iter()
            .filter(|j| j.kind == JoinKind::Left)
            .map(|j| j.right_alias.as_str())
            .collect()
    }
}
