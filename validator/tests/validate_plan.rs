//! Integration tests for the rule registry and whole-plan validation.

mod helpers;

use helpers::*;
use validator::parse::{self, ResourceConfig};
use validator::{ResourceKind, Severity, validate_plan, validate_resource};

#[test]
fn every_kind_round_trips_its_type_name() {
    for kind in ResourceKind::ALL {
        assert_eq!(ResourceKind::from_type_name(kind.type_name()), Some(kind));
    }
    assert_eq!(ResourceKind::from_type_name("bunnynet_pullzone"), None);
}

#[test]
fn registry_lists_rules_in_evaluation_order() {
    let codes: Vec<&str> = ResourceKind::ContainerApp
        .rules()
        .into_iter()
        .map(|(code, _)| code)
        .collect();
    assert_eq!(codes, vec!["C001", "C002", "C003", "C004", "C005"]);

    insta::assert_debug_snapshot!(ResourceKind::ShieldZone.rules(), @r#"
    [
        (
            "W001",
            "bot_detection_tier",
        ),
        (
            "W002",
            "whitelabel_tier",
        ),
        (
            "W003",
            "realtime_threat_intelligence_tier",
        ),
        (
            "W004",
            "unique_access_list_ids",
        ),
    ]
    "#);
}

#[test]
fn every_rule_code_is_unique() {
    let mut all: Vec<&str> = ResourceKind::ALL
        .into_iter()
        .flat_map(|kind| kind.rules())
        .map(|(code, _)| code)
        .collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
}

#[test]
fn fixture_container_app_is_clean() {
    let config = parse::parse(include_str!("fixtures/container_app.json")).expect("Should parse");
    assert_clean(&validate_resource(ResourceKind::ContainerApp, &config));
}

#[test]
fn fixture_plan_reports_under_resource_addresses() {
    let resources = parse::parse_plan(include_str!("fixtures/plan.json")).expect("Should parse");
    let diagnostics = validate_plan(&resources);

    assert_eq!(codes(&diagnostics), vec!["S001", "W002"]);
    assert_eq!(
        diagnostics[0].path.to_string(),
        "bunnynet_storage_zone.assets.region"
    );
    assert_eq!(
        diagnostics[1].path.to_string(),
        "bunnynet_shield_zone.main.whitelabel_response_pages"
    );
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.error_count(), 2);
}

#[test]
fn schema_mismatch_is_reported_as_decode_error() {
    let config = obj(vec![("regions_allowed", s("DE"))]);
    let diagnostics = validate_resource(ResourceKind::ContainerApp, &config);
    assert_only(&diagnostics, "P002");
    assert_eq!(diagnostics[0].path.to_string(), "regions_allowed");
    assert_eq!(
        diagnostics[0].detail,
        "attribute regions_allowed must be a list or set, found string"
    );
}

#[test]
fn decode_error_in_one_resource_does_not_stop_the_plan() {
    let resources = vec![
        ResourceConfig {
            resource_type: "bunnynet_storage_zone".to_string(),
            name: "broken".to_string(),
            config: obj(vec![("region", n(5))]),
        },
        ResourceConfig {
            resource_type: "bunnynet_pullzone_hostname".to_string(),
            name: "www".to_string(),
            config: obj(vec![("force_ssl", b(true))]),
        },
    ];
    let diagnostics = validate_plan(&resources);
    assert_eq!(codes(&diagnostics), vec!["P002", "H001"]);
    assert_eq!(
        diagnostics[0].path.to_string(),
        "bunnynet_storage_zone.broken.region"
    );
    assert_eq!(
        diagnostics[1].path.to_string(),
        "bunnynet_pullzone_hostname.www.force_ssl"
    );
}

#[test]
fn unsupported_resource_types_are_skipped() {
    let resources = vec![ResourceConfig {
        resource_type: "bunnynet_dns_record".to_string(),
        name: "apex".to_string(),
        config: obj(vec![("anything", s("goes"))]),
    }];
    assert_clean(&validate_plan(&resources));
}

#[test]
fn rule_diagnostics_are_errors() {
    let config = obj(vec![("force_ssl", b(true))]);
    let diagnostics = validate_resource(ResourceKind::PullzoneHostname, &config);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    assert!(diagnostics.has_errors());
}
