//! End-to-end tests over the YAML description surface
//!
//! Exercises the full pipeline: YAML text → PlanDescription → QueryPlan →
//! validation → SQL, the same path the CLI takes.

use relint::parser::{parse_str, plan_from_description};
use relint::renderer::render_sql;
use relint::validator::{validate, IssueCode};

const CONTACTS_PER_VENDOR: &str = r#"
tables:
  - { name: vendor, alias: v }
  - { name: vendorcontact, alias: vc }
joins:
  - { kind: inner, left: v, right: vc, left_key: v.VendorId, right_key: vc.VendorId }
select: [v.Name]
aggregates:
  - { fn: count, column: vc.ContactId, alias: contact_count }
group_by: [v.Name]
having:
  - { column: contact_count, op: gt, value: 2 }
order_by:
  - { column: contact_count, direction: desc }
"#;

#[test]
fn test_description_validates_and_renders() {
    let desc = parse_str(CONTACTS_PER_VENDOR).unwrap();
    let plan = plan_from_description(&desc).unwrap();

    let result = validate(&plan);
    assert!(result.is_ok(), "issues: {:?}", result.issues);

    let sql = render_sql(&plan).unwrap();
    assert_eq!(
        sql,
        "SELECT v.Name, COUNT(vc.ContactId) AS \"contact_count\"\n\
         FROM vendor AS v\n\
         INNER JOIN vendorcontact AS vc ON v.VendorId = vc.VendorId\n\
         GROUP BY v.Name\n\
         HAVING contact_count > 2\n\
         ORDER BY contact_count DESC"
    );
}

#[test]
fn test_rendering_is_byte_identical_across_calls() {
    let desc = parse_str(CONTACTS_PER_VENDOR).unwrap();
    let plan = plan_from_description(&desc).unwrap();
    assert!(validate(&plan).is_ok());

    let first = render_sql(&plan).unwrap();
    let second = render_sql(&plan).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_described_dangling_key_caught_by_validator() {
    // The description parses and builds fine; the structural defect only
    // shows up in validation.
    let desc = parse_str(
        r#"
tables:
  - { name: vendor, alias: v }
  - { name: vendoraddress, alias: va }
joins:
  - { kind: inner, left: v, right: va, left_key: vc.VendorId, right_key: va.VendorId }
"#,
    )
    .unwrap();
    let plan = plan_from_description(&desc).unwrap();

    let result = validate(&plan);
    assert!(!result.is_ok());
    assert_eq!(result.errors().next().unwrap().code, IssueCode::DanglingJoinKey);
}

#[test]
fn test_described_left_join_scenario_warns() {
    let desc = parse_str(
        r#"
tables:
  - { name: salesorderdetail, alias: sod }
  - { name: specialoffer, alias: spec_offer }
joins:
  - { kind: left, left: sod, right: spec_offer, left_key: sod.SpecialOfferID, right_key: spec_offer.SpecialOfferID }
aggregates:
  - { fn: count_distinct, column: spec_offer.Category, alias: categories }
"#,
    )
    .unwrap();
    let plan = plan_from_description(&desc).unwrap();

    let result = validate(&plan);
    assert!(result.is_ok());
    assert_eq!(result.warnings().count(), 1);
    assert_eq!(
        result.warnings().next().unwrap().code,
        IssueCode::AmbiguousOuterJoin
    );
}

#[test]
fn test_issues_serialize_to_json() {
    let desc = parse_str(
        r#"
tables:
  - { name: location, alias: loc }
select: [loc.LocationName]
aggregates:
  - { fn: count, column: loc.WorkOrderID, alias: order_count }
group_by: [loc.LocationID]
"#,
    )
    .unwrap();
    let plan = plan_from_description(&desc).unwrap();
    let result = validate(&plan);
    assert!(!result.is_ok());

    let json = serde_json::to_string(&result.issues).unwrap();
    assert!(json.contains("\"GroupByCompleteness\""));
    assert!(json.contains("\"severity\":\"error\""));
}

#[test]
fn test_filter_values_cover_scalar_forms() {
    let desc = parse_str(
        r#"
tables:
  - { name: product, alias: p }
select: [p.Name]
filters:
  - { column: p.ListPrice, op: gt_eq, value: 19.99 }
  - { column: p.MakeFlag, op: eq, value: true }
  - { column: p.Color, op: eq, value: "Silver" }
  - { column: p.SellEndDate, op: is_null }
"#,
    )
    .unwrap();
    let plan = plan_from_description(&desc).unwrap();
    assert!(validate(&plan).is_ok());

    let sql = render_sql(&plan).unwrap();
    assert!(sql.contains("p.ListPrice >= 19.99"));
    assert!(sql.contains("p.MakeFlag = TRUE"));
    assert!(sql.contains("p.Color = 'Silver'"));
    assert!(sql.contains("p.SellEndDate IS NULL"));
}
