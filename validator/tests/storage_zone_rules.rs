//! Integration tests for storage zone region rules (S001).

mod helpers;

use helpers::*;
use validator::value::ConfigValue;
use validator::{Diagnostics, ResourceKind, validate_resource};

fn validate(config: &ConfigValue) -> Diagnostics {
    validate_resource(ResourceKind::StorageZone, config)
}

fn zone(tier: ConfigValue, region: &str, replication: &[&str]) -> ConfigValue {
    obj(vec![
        ("name", s("assets")),
        ("zone_tier", tier),
        ("region", s(region)),
        ("replication_regions", strings(replication)),
    ])
}

#[test]
fn standard_zone_with_valid_regions_passes() {
    assert_clean(&validate(&zone(s("Standard"), "DE", &["NY", "SG"])));
}

#[test]
fn unset_tier_is_standard() {
    assert_clean(&validate(&zone(null(), "UK", &["SE"])));

    let diagnostics = validate(&zone(null(), "XX", &[]));
    assert_only(&diagnostics, "S001");
    assert_eq!(diagnostics[0].summary, "Invalid region for Standard storage");
}

#[test]
fn edge_zone_must_use_primary_region() {
    let diagnostics = validate(&zone(s("Edge"), "SG", &["NY", "XX"]));
    // Replication is not inspected once the primary region is wrong.
    assert_only(&diagnostics, "S001");
    assert_eq!(diagnostics[0].path.to_string(), "region");
    insta::assert_snapshot!(
        diagnostics[0].detail.as_str(),
        @r#"Edge storage zones must use region "DE", found "SG""#
    );
}

#[test]
fn edge_zone_rejects_unavailable_replication_regions() {
    assert_clean(&validate(&zone(s("Edge"), "DE", &["NY", "SYD"])));

    let diagnostics = validate(&zone(s("Edge"), "DE", &["DE", "NY"]));
    assert_only(&diagnostics, "S001");
    assert_eq!(diagnostics[0].path.to_string(), "replication_regions");
    assert!(diagnostics[0].detail.contains("\"DE\""));
}

#[test]
fn standard_zone_reports_every_replication_violation() {
    // Two unknown regions plus the primary region replicated.
    let diagnostics = validate(&zone(s("Standard"), "DE", &["DE", "MARS", "VENUS"]));
    assert_eq!(codes(&diagnostics), vec!["S001", "S001", "S001"]);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.summary == "Primary region replicated")
    );
    assert!(
        diagnostics
            .iter()
            .all(|d| d.path.to_string() == "replication_regions")
    );
}

#[test]
fn invalid_standard_region_stops_the_check() {
    let diagnostics = validate(&zone(s("Standard"), "MARS", &["MARS"]));
    assert_only(&diagnostics, "S001");
    assert_eq!(diagnostics[0].path.to_string(), "region");
}

#[test]
fn unset_region_is_left_to_the_schema() {
    let config = obj(vec![("name", s("assets")), ("zone_tier", s("Edge"))]);
    assert_clean(&validate(&config));
}

#[test]
fn replication_is_checked_when_region_is_unset() {
    let config = obj(vec![
        ("zone_tier", s("Standard")),
        ("replication_regions", strings(&["NY", "MARS"])),
    ]);
    let diagnostics = validate(&config);
    assert_only(&diagnostics, "S001");
    assert_eq!(diagnostics[0].path.to_string(), "replication_regions");
    assert!(diagnostics[0].detail.contains("\"MARS\""));
}
