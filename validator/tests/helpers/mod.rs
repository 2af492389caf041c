use validator::error::Diagnostics;
use validator::value::ConfigValue;

// =============================================================================
// Value builders
// =============================================================================

pub fn s(value: &str) -> ConfigValue {
    ConfigValue::string(value)
}

pub fn n(value: i64) -> ConfigValue {
    ConfigValue::number(value)
}

pub fn b(value: bool) -> ConfigValue {
    ConfigValue::bool(value)
}

pub fn unknown() -> ConfigValue {
    ConfigValue::Unknown
}

pub fn null() -> ConfigValue {
    ConfigValue::Null
}

pub fn obj(fields: Vec<(&str, ConfigValue)>) -> ConfigValue {
    ConfigValue::object(fields)
}

pub fn list(items: Vec<ConfigValue>) -> ConfigValue {
    ConfigValue::list(items)
}

pub fn set(items: Vec<ConfigValue>) -> ConfigValue {
    ConfigValue::set(items)
}

pub fn strings(items: &[&str]) -> ConfigValue {
    ConfigValue::set(items.iter().map(|i| ConfigValue::string(*i)))
}

// =============================================================================
// Container app builders
// =============================================================================

pub fn port(container: Option<i64>, exposed: Option<i64>, protocols: &[&str]) -> ConfigValue {
    obj(vec![
        ("container", container.map(n).unwrap_or(ConfigValue::Null)),
        ("exposed", exposed.map(n).unwrap_or(ConfigValue::Null)),
        ("protocols", strings(protocols)),
    ])
}

pub fn cdn_block(origin_ssl: Option<bool>) -> ConfigValue {
    obj(vec![(
        "origin_ssl",
        origin_ssl.map(b).unwrap_or(ConfigValue::Null),
    )])
}

pub fn endpoint(
    name: &str,
    kind: &str,
    cdn: Vec<ConfigValue>,
    ports: Vec<ConfigValue>,
) -> ConfigValue {
    obj(vec![
        ("name", s(name)),
        ("type", s(kind)),
        ("cdn", list(cdn)),
        ("port", list(ports)),
    ])
}

/// A CDN endpoint that passes every compatibility check.
pub fn cdn_endpoint(name: &str) -> ConfigValue {
    endpoint(
        name,
        "CDN",
        vec![cdn_block(Some(true))],
        vec![port(Some(8080), None, &[])],
    )
}

pub fn anycast_port(container: i64, exposed: i64) -> ConfigValue {
    port(Some(container), Some(exposed), &["TCP"])
}

pub fn volume(name: &str) -> ConfigValue {
    obj(vec![("name", s(name)), ("size", n(10))])
}

pub fn mount(name: &str, path: &str) -> ConfigValue {
    obj(vec![("name", s(name)), ("mountpath", s(path))])
}

pub fn container(
    name: &str,
    endpoints: Vec<ConfigValue>,
    mounts: Vec<ConfigValue>,
) -> ConfigValue {
    obj(vec![
        ("name", s(name)),
        ("image", s("nginx:latest")),
        ("endpoint", list(endpoints)),
        ("volumemount", list(mounts)),
    ])
}

pub fn container_app(containers: Vec<ConfigValue>, volumes: Vec<ConfigValue>) -> ConfigValue {
    obj(vec![
        ("name", s("app")),
        ("regions_allowed", strings(&["DE"])),
        ("regions_required", strings(&[])),
        ("container", list(containers)),
        ("volume", list(volumes)),
    ])
}

pub fn app_with_endpoint(endpoint: ConfigValue) -> ConfigValue {
    container_app(vec![container("web", vec![endpoint], vec![])], vec![])
}

// =============================================================================
// Edge rule builders
// =============================================================================

pub fn action(kind: &str, parameter1: ConfigValue, parameter2: ConfigValue) -> ConfigValue {
    obj(vec![
        ("type", s(kind)),
        ("parameter1", parameter1),
        ("parameter2", parameter2),
        ("parameter3", null()),
    ])
}

pub fn trigger(kind: &str, match_type: &str, patterns: &[&str]) -> ConfigValue {
    obj(vec![
        ("type", s(kind)),
        ("match_type", s(match_type)),
        ("patterns", list(patterns.iter().map(|p| s(p)).collect())),
    ])
}

pub fn edge_rule(actions: Vec<ConfigValue>, triggers: Vec<ConfigValue>) -> ConfigValue {
    obj(vec![
        ("enabled", b(true)),
        ("match_type", s("MatchAny")),
        ("actions", list(actions)),
        ("triggers", list(triggers)),
    ])
}

// =============================================================================
// Assertions
// =============================================================================

pub fn codes(diagnostics: &Diagnostics) -> Vec<&str> {
    diagnostics.iter().map(|d| d.code.as_str()).collect()
}

pub fn assert_clean(diagnostics: &Diagnostics) {
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics, got: {:?}",
        diagnostics
    );
}

pub fn assert_only(diagnostics: &Diagnostics, code: &str) {
    assert_eq!(
        codes(diagnostics),
        vec![code],
        "Expected exactly one {} diagnostic, got: {:?}",
        code,
        diagnostics
    );
}
