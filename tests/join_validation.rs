//! Integration tests for join construction and join-key validation
//!
//! Covers the vendor/vendorcontact/vendoraddress scenario: a join written
//! against the wrong table's key must surface as a dangling-join-key issue,
//! while builder-level alias misuse fails before the plan exists.

use relint::builder::{BuildError, QueryPlanBuilder};
use relint::plan::{Column, JoinKind};
use relint::validator::{validate, IssueCode, Severity};

#[test]
fn test_join_on_unregistered_table_key_fails_validation() {
    // Only vendor and vendoraddress are registered; the join key names
    // vendorcontact, which was never added.
    let mut builder = QueryPlanBuilder::new();
    builder.add_table("vendor", "vendor").unwrap();
    builder.add_table("vendoraddress", "vendoraddress").unwrap();
    builder
        .add_join(
            JoinKind::Inner,
            "vendor",
            "vendoraddress",
            Column::new("vendorcontact", "VendorId"),
            Column::new("vendoraddress", "VendorId"),
        )
        .unwrap();

    let result = validate(&builder.build());
    assert!(!result.is_ok());
    let issue = result.errors().next().unwrap();
    assert_eq!(issue.code, IssueCode::DanglingJoinKey);
    assert_eq!(issue.severity, Severity::Error);
    assert!(issue.message.contains("vendorcontact"));
}

#[test]
fn test_corrected_join_passes_validation() {
    // Same query joined on vendor's own key validates cleanly.
    let mut builder = QueryPlanBuilder::new();
    builder.add_table("vendor", "vendor").unwrap();
    builder.add_table("vendoraddress", "vendoraddress").unwrap();
    builder
        .add_join(
            JoinKind::Inner,
            "vendor",
            "vendoraddress",
            Column::new("vendor", "VendorId"),
            Column::new("vendoraddress", "VendorId"),
        )
        .unwrap();

    let result = validate(&builder.build());
    assert!(result.is_ok());
    assert!(result.issues.is_empty());
}

#[test]
fn test_three_table_chain_collects_all_key_issues() {
    // Both joins carry one bad key each; validation reports both instead of
    // stopping at the first.
    let mut builder = QueryPlanBuilder::new();
    builder.add_table("vendor", "v").unwrap();
    builder.add_table("vendorcontact", "vc").unwrap();
    builder.add_table("vendoraddress", "va").unwrap();
    builder
        .add_join(
            JoinKind::Inner,
            "v",
            "vc",
            Column::new("contact", "VendorId"),
            Column::new("vc", "VendorId"),
        )
        .unwrap();
    builder
        .add_join(
            JoinKind::Inner,
            "v",
            "va",
            Column::new("v", "VendorId"),
            Column::new("address", "VendorId"),
        )
        .unwrap();

    let result = validate(&builder.build());
    let errors: Vec<_> = result.errors().collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].location, "joins[0].left_key");
    assert_eq!(errors[1].location, "joins[1].right_key");
}

#[test]
fn test_duplicate_alias_fails_fast() {
    let mut builder = QueryPlanBuilder::new();
    builder.add_table("vendor", "v").unwrap();
    let before = builder.build();

    let err = builder.add_table("vendor", "v").unwrap_err();
    assert!(matches!(err, BuildError::DuplicateAlias { alias } if alias == "v"));

    // Prior state is untouched
    assert_eq!(builder.build(), before);
}

#[test]
fn test_join_to_unknown_alias_fails_fast() {
    let mut builder = QueryPlanBuilder::new();
    builder.add_table("vendor", "v").unwrap();

    let err = builder
        .add_join(
            JoinKind::Left,
            "v",
            "po",
            Column::new("v", "VendorId"),
            Column::new("po", "VendorId"),
        )
        .unwrap_err();
    assert!(matches!(err, BuildError::UnknownAlias { alias, .. } if alias == "po"));
    assert!(builder.build().joins.is_empty());
}
