//! Structural plan checks
//!
//! `validate` is a pure function over a finalized plan: same plan in, same
//! result out. Rules run in a fixed order and never short-circuit.

use crate::plan::{Column, QueryPlan};
use super::issue::{Issue, IssueCode, Severity, ValidationResult};

/// Validate a finalized plan, collecting all findings.
pub fn validate(plan: &QueryPlan) -> ValidationResult {
    let mut issues = Vec::new();
    check_join_keys(plan, &mut issues);
    check_outer_join_aggregates(plan, &mut issues);
    check_group_by_completeness(plan, &mut issues);
    check_having_references(plan, &mut issues);
    ValidationResult { issues }
}

/// Rule 1: every qualified join key must name a registered table.
///
/// Catches joins written against the wrong table's key, e.g. joining
/// `vendoraddress` on `vendorcontact.VendorId` when `vendorcontact` was
/// never added to the plan.
fn check_join_keys(plan: &QueryPlan, issues: &mut Vec<Issue>) {
    for (idx, join) in plan.joins.iter().enumerate() {
        for (side, key) in [("left_key", &join.left_key), ("right_key", &join.right_key)] {
            if key.is_qualified() && !plan.has_table(&key.table) {
                issues.push(Issue {
                    code: IssueCode::DanglingJoinKey,
                    severity: Severity::Error,
                    message: format!(
                        "Join key '{}' references table '{}', which is not registered in this plan",
                        key.qualified_name(),
                        key.table
                    ),
                    location: format!("joins[{}].{}", idx, side),
                });
            }
        }
    }
}

/// Rule 2: an aggregate over the nullable side of a LEFT JOIN needs an
/// explicit IS NULL / IS NOT NULL predicate on that column, otherwise NULL
/// rows silently skew the totals. Warning only.
fn check_outer_join_aggregates(plan: &QueryPlan, issues: &mut Vec<Issue>) {
    let nullable = plan.nullable_aliases();
    if nullable.is_empty() {
        return;
    }

    for (idx, agg) in plan.aggregates.iter().enumerate() {
        if !nullable.contains(&agg.column.table.as_str()) {
            continue;
        }
        let guarded = plan
            .filters
            .iter()
            .chain(plan.having.iter())
            .any(|p| p.op.is_null_test() && same_column(&p.column, &agg.column));
        if !guarded {
            issues.push(Issue {
                code: IssueCode::AmbiguousOuterJoin,
                severity: Severity::Warning,
                message: format!(
                    "Aggregate over '{}' reads the nullable side of a LEFT JOIN with no NULL-handling predicate; unmatched rows will feed the aggregate as NULL",
                    agg.column.qualified_name()
                ),
                location: format!("aggregates[{}]", idx),
            });
        }
    }
}

/// Rule 3: in an aggregating plan, every plain selected column must appear
/// in the GROUP BY list.
fn check_group_by_completeness(plan: &QueryPlan, issues: &mut Vec<Issue>) {
    if plan.aggregates.is_empty() && plan.group_by.is_empty() {
        return;
    }
    for (idx, col) in plan.select.iter().enumerate() {
        let grouped = plan.group_by.iter().any(|g| same_column(g, col));
        if !grouped {
            issues.push(Issue {
                code: IssueCode::GroupByCompleteness,
                severity: Severity::Error,
                message: format!(
                    "Selected column '{}' is not aggregated and not in the GROUP BY list",
                    col.qualified_name()
                ),
                location: format!("select[{}]", idx),
            });
        }
    }
}

/// Rule 4: a HAVING predicate must reference an aggregate alias, an
/// aggregated column, or a grouped column.
fn check_having_references(plan: &QueryPlan, issues: &mut Vec<Issue>) {
    for (idx, pred) in plan.having.iter().enumerate() {
        let col = &pred.column;
        let is_aggregate_alias =
            !col.is_qualified() && plan.aggregates.iter().any(|a| a.alias == col.name);
        let is_aggregated_column = plan.aggregates.iter().any(|a| same_column(&a.column, col));
        let is_grouped = plan.group_by.iter().any(|g| same_column(g, col));

        if !is_aggregate_alias && !is_aggregated_column && !is_grouped {
            issues.push(Issue {
                code: IssueCode::HavingWithoutAggregate,
                severity: Severity::Error,
                message: format!(
                    "HAVING references '{}', which is neither aggregated nor grouped",
                    col.qualified_name()
                ),
                location: format!("having[{}]", idx),
            });
        }
    }
}

/// Column equality that tolerates one side being unqualified.
fn same_column(a: &Column, b: &Column) -> bool {
    if a.is_qualified() && b.is_qualified() {
        a.table == b.table && a.name == b.name
    } else {
        a.name == b.name
    }
}
