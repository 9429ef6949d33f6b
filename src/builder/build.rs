//! Plan construction
//!
//! `QueryPlanBuilder` accumulates clauses and enforces the alias rules:
//! every alias is bound at most once, and clauses may only name aliases
//! that are already registered. Join *key* columns are exempt from the
//! alias check so the validator can report them as dangling keys.

use crate::plan::{
    AggregateFn, AggregateSpec, Column, CompareOp, JoinClause, JoinKind, Predicate, QueryPlan,
    ScalarValue, SortDirection, SortKey, TableRef,
};
use super::error::BuildError;

/// Incremental builder for a `QueryPlan`.
///
/// Append operations mutate in place and return `&mut Self` for chaining;
/// all checks run before any mutation, so a failed append leaves the
/// builder exactly as it was. `build()` may be called any number of times
/// and always yields the same plan for the same accumulated state.
#[derive(Debug, Default)]
pub struct QueryPlanBuilder {
    tables: Vec<TableRef>,
    joins: Vec<JoinClause>,
    select: Vec<Column>,
    filters: Vec<Predicate>,
    aggregates: Vec<AggregateSpec>,
    group_by: Vec<Column>,
    having: Vec<Predicate>,
    order_by: Vec<SortKey>,
}

impl QueryPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table under an alias.
    pub fn add_table(
        &mut self,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<&mut Self, BuildError> {
        let table = TableRef::new(name, alias);
        if self.tables.iter().any(|t| t.alias == table.alias) {
            return Err(BuildError::DuplicateAlias { alias: table.alias });
        }
        self.tables.push(table);
        Ok(self)
    }

    /// Add a plain column to the select list.
    pub fn add_column(&mut self, column: Column) -> Result<&mut Self, BuildError> {
        self.check_alias(&column, "Select column")?;
        self.select.push(column);
        Ok(self)
    }

    /// Join a registered table to another registered table.
    ///
    /// `left_alias` and `right_alias` must both be registered already; the
    /// key columns are carried as written.
    pub fn add_join(
        &mut self,
        kind: JoinKind,
        left_alias: impl Into<String>,
        right_alias: impl Into<String>,
        left_key: Column,
        right_key: Column,
    ) -> Result<&mut Self, BuildError> {
        let left_alias = left_alias.into();
        let right_alias = right_alias.into();
        for alias in [&left_alias, &right_alias] {
            if !self.is_registered(alias) {
                return Err(BuildError::UnknownAlias {
                    alias: alias.clone(),
                    clause: "Join".to_string(),
                });
            }
        }
        self.joins.push(JoinClause {
            kind,
            left_alias,
            right_alias,
            left_key,
            right_key,
        });
        Ok(self)
    }

    /// Add a WHERE predicate.
    pub fn add_predicate(
        &mut self,
        column: Column,
        op: CompareOp,
        value: Option<ScalarValue>,
    ) -> Result<&mut Self, BuildError> {
        self.check_alias(&column, "Predicate")?;
        self.filters.push(Predicate { column, op, value });
        Ok(self)
    }

    /// Add an aggregate output.
    pub fn add_aggregate(
        &mut self,
        func: AggregateFn,
        column: Column,
        alias: impl Into<String>,
    ) -> Result<&mut Self, BuildError> {
        self.check_alias(&column, "Aggregate")?;
        self.aggregates.push(AggregateSpec {
            func,
            column,
            alias: alias.into(),
        });
        Ok(self)
    }

    /// Append a GROUP BY column.
    pub fn group_by(&mut self, column: Column) -> Result<&mut Self, BuildError> {
        self.check_alias(&column, "Group-by column")?;
        self.group_by.push(column);
        Ok(self)
    }

    /// Add a HAVING predicate. Unqualified columns are accepted here since
    /// they commonly name aggregate output aliases.
    pub fn having(
        &mut self,
        column: Column,
        op: CompareOp,
        value: Option<ScalarValue>,
    ) -> Result<&mut Self, BuildError> {
        self.check_alias(&column, "Having predicate")?;
        self.having.push(Predicate { column, op, value });
        Ok(self)
    }

    /// Append an ORDER BY key.
    pub fn order_by(
        &mut self,
        column: Column,
        direction: SortDirection,
    ) -> Result<&mut Self, BuildError> {
        self.check_alias(&column, "Order-by column")?;
        self.order_by.push(SortKey { column, direction });
        Ok(self)
    }

    /// Freeze the accumulated state into a plan.
    pub fn build(&self) -> QueryPlan {
        QueryPlan {
            tables: self.tables.clone(),
            joins: self.joins.clone(),
            select: self.select.clone(),
            filters: self.filters.clone(),
            aggregates: self.aggregates.clone(),
            group_by: self.group_by.clone(),
            having: self.having.clone(),
            order_by: self.order_by.clone(),
        }
    }

    fn is_registered(&self, alias: &str) -> bool {
        self.tables.iter().any(|t| t.alias == alias || t.name == alias)
    }

    /// Qualified columns must name a registered alias; unqualified ones pass.
    fn check_alias(&self, column: &Column, clause: &str) -> Result<(), BuildError> {
        if column.is_qualified() && !self.is_registered(&column.table) {
            return Err(BuildError::UnknownAlias {
                alias: column.table.clone(),
                clause: clause.to_string(),
            });
        }
        Ok(())
    }
}
