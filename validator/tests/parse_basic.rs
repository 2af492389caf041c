//! Integration tests for the host adapter: configuration JSON and plan documents.

use validator::parse;
use validator::value::{ConfigValue, Known};

#[test]
fn parse_container_app_fixture() {
    let json = include_str!("fixtures/container_app.json");
    let config = parse::parse(json).expect("Should parse successfully");

    assert_eq!(config.get("name"), &ConfigValue::string("storefront"));
    assert!(matches!(
        config.get("regions_allowed"),
        ConfigValue::Known(Known::Set(items)) if items.len() == 3
    ));
    assert!(matches!(
        config.get("container"),
        ConfigValue::Known(Known::List(items)) if items.len() == 2
    ));
    assert!(config.contains_unknown());
}

#[test]
fn absent_attribute_reads_as_null() {
    let config = parse::parse(r#"{"name": "assets"}"#).expect("Should parse");
    assert!(config.get("region").is_null());
    assert!(config.get("name").get("nested").is_null());
}

#[test]
fn unknown_marker_anywhere_in_tree() {
    let json = r#"{"container": [{"endpoint": [{"name": {"$unknown": true}}]}]}"#;
    let config = parse::parse(json).expect("Should parse");
    assert!(config.contains_unknown());
    assert!(!config.is_unknown());
    assert!(parse::parse(r#"{"$unknown": true}"#).expect("Should parse").is_unknown());
}

#[test]
fn parse_invalid_json_returns_error() {
    let result = parse::parse("not valid json");
    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "P001");
    assert!(errors[0].detail.starts_with("Failed to parse configuration JSON"));
}

#[test]
fn parse_plan_fixture() {
    let json = include_str!("fixtures/plan.json");
    let resources = parse::parse_plan(json).expect("Should parse");
    let addresses: Vec<String> = resources
        .iter()
        .map(|r| format!("{}.{}", r.resource_type, r.name))
        .collect();
    assert_eq!(
        addresses,
        vec![
            "bunnynet_storage_zone.assets",
            "bunnynet_shield_zone.main",
            "bunnynet_pullzone.cdn",
            "bunnynet_pullzone_edgerule.legacy_redirect",
            "bunnynet_pullzone_hostname.www",
        ]
    );
    assert!(resources[4].config.get("tls_enabled").is_unknown());
}

#[test]
fn plan_resource_without_config_is_null() {
    let json = r#"{"resources": [{"type": "bunnynet_storage_zone", "name": "empty"}]}"#;
    let resources = parse::parse_plan(json).expect("Should parse");
    assert!(resources[0].config.is_null());
}

#[test]
fn plan_with_wrong_shape_returns_error() {
    for json in ["[]", r#"{"resources": [{"name": "x"}]}"#, "{"] {
        let errors = parse::parse_plan(json).unwrap_err();
        assert_eq!(errors[0].code, "P001", "{json}");
        assert!(errors[0].path.is_root());
    }
}
