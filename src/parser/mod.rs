//! Description parser (verb module)
//!
//! Transforms YAML text into a `PlanDescription`, and a description into a
//! `QueryPlan` by driving the builder, so alias rules apply uniformly.

use std::path::Path;

use crate::builder::{BuildError, QueryPlanBuilder};
use crate::error::ParseError;
use crate::plan::{Column, QueryPlan};
use crate::query::PlanDescription;

/// Parse a plan description from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PlanDescription, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse a plan description from a YAML string
pub fn parse_str(yaml: &str) -> Result<PlanDescription, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Build a `QueryPlan` from a description by replaying its clauses through
/// the builder.
pub fn plan_from_description(desc: &PlanDescription) -> Result<QueryPlan, BuildError> {
    let mut builder = QueryPlanBuilder::new();

    for table in &desc.tables {
        let alias = table.alias.as_deref().unwrap_or(&table.name);
        builder.add_table(&table.name, alias)?;
    }
    for join in &desc.joins {
        builder.add_join(
            join.kind,
            &join.left,
            &join.right,
            Column::parse(&join.left_key),
            Column::parse(&join.right_key),
        )?;
    }
    for column in &desc.select {
        builder.add_column(Column::parse(column))?;
    }
    for filter in &desc.filters {
        builder.add_predicate(Column::parse(&filter.column), filter.op, filter.value.clone())?;
    }
    for agg in &desc.aggregates {
        builder.add_aggregate(agg.func, Column::parse(&agg.column), &agg.alias)?;
    }
    for column in &desc.group_by {
        builder.group_by(Column::parse(column))?;
    }
    for pred in &desc.having {
        builder.having(Column::parse(&pred.column), pred.op, pred.value.clone())?;
    }
    for key in &desc.order_by {
        builder.order_by(Column::parse(&key.column), key.direction)?;
    }

    Ok(builder.build())
}
