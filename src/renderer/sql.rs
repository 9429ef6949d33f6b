//! SQL renderer
//!
//! Serializes a validated `QueryPlan` into deterministic multi-line SQL:
//! SELECT list, FROM first table, joins in append order, WHERE predicates
//! ANDed, then GROUP BY, HAVING and ORDER BY.

use crate::plan::{
    AggregateFn, AggregateSpec, JoinClause, Predicate, QueryPlan, ScalarValue, TableRef,
};
use super::error::RenderError;

/// Render a plan as SQL text. Callers are expected to validate first;
/// rendering itself only rejects a plan with no tables.
pub fn render_sql(plan: &QueryPlan) -> Result<String, RenderError> {
    let first = plan.tables.first().ok_or(RenderError::EmptyPlan)?;

    let mut lines = Vec::new();
    lines.push(format!("SELECT {}", render_select_list(plan)));
    lines.push(format!("FROM {}", render_table(first)));

    for join in &plan.joins {
        lines.push(render_join(plan, join));
    }

    if !plan.filters.is_empty() {
        lines.push(format!("WHERE {}", render_predicates(&plan.filters)));
    }

    if !plan.group_by.is_empty() {
        let cols: Vec<String> = plan.group_by.iter().map(|c| c.qualified_name()).collect();
        lines.push(format!("GROUP BY {}", cols.join(", ")));
    }

    if !plan.having.is_empty() {
        lines.push(format!("HAVING {}", render_predicates(&plan.having)));
    }

    if !plan.order_by.is_empty() {
        let keys: Vec<String> = plan
            .order_by
            .iter()
            .map(|k| format!("{} {}", k.column.qualified_name(), k.direction.as_str()))
            .collect();
        lines.push(format!("ORDER BY {}", keys.join(", ")));
    }

    Ok(lines.join("\n"))
}

fn render_select_list(plan: &QueryPlan) -> String {
    let mut items: Vec<String> = plan.select.iter().map(|c| c.qualified_name()).collect();
    items.extend(plan.aggregates.iter().map(render_aggregate));
    if items.is_empty() {
        "*".to_string()
    } else {
        items.join(", ")
    }
}

fn render_table(table: &TableRef) -> String {
    if table.alias == table.name {
        table.name.clone()
    } else {
        format!("{} AS {}", table.name, table.alias)
    }
}

fn render_join(plan: &QueryPlan, join: &JoinClause) -> String {
    // The builder guarantees the right alias is registered; fall back to the
    // alias text so a hand-built plan still renders something inspectable.
    let right = plan
        .table(&join.right_alias)
        .map(render_table)
        .unwrap_or_else(|| join.right_alias.clone());
    format!(
        "{} {} ON {} = {}",
        join.kind.as_str(),
        right,
        join.left_key.qualified_name(),
        join.right_key.qualified_name(),
    )
}

fn render_predicates(predicates: &[Predicate]) -> String {
    let parts: Vec<String> = predicates.iter().map(render_predicate).collect();
    parts.join(" AND ")
}

fn render_predicate(pred: &Predicate) -> String {
    if pred.op.is_null_test() {
        format!("{} {}", pred.column.qualified_name(), pred.op.as_str())
    } else {
        let value = pred
            .value
            .as_ref()
            .map(render_value)
            .unwrap_or_else(|| "NULL".to_string());
        format!("{} {} {}", pred.column.qualified_name(), pred.op.as_str(), value)
    }
}

fn render_value(value: &ScalarValue) -> String {
    match value {
        ScalarValue::Bool(b) => if *b { "TRUE".to_string() } else { "FALSE".to_string() },
        ScalarValue::Int(i) => i.to_string(),
        ScalarValue::Float(f) => format!("{}", f),
        ScalarValue::String(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

fn render_aggregate(agg: &AggregateSpec) -> String {
    let inner = agg.column.qualified_name();
    let func_sql = match agg.func {
        AggregateFn::Count => format!("COUNT({})", inner),
        AggregateFn::CountDistinct => format!("COUNT(DISTINCT {})", inner),
        AggregateFn::Sum => format!("SUM({})", inner),
        AggregateFn::Avg => format!("AVG({})", inner),
    };
    format!("{} AS \"{}\"", func_sql, agg.alias)
}
