//! Whole-plan documents: every resource snapshot the host wants validated.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Diagnostic;
use crate::value::ConfigValue;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceConfig {
    /// Terraform type name, e.g. `bunnynet_storage_zone`.
    pub resource_type: String,
    pub name: String,
    pub config: ConfigValue,
}

#[derive(Deserialize)]
struct PlanDocument {
    resources: Vec<PlanResource>,
}

#[derive(Deserialize)]
struct PlanResource {
    #[serde(rename = "type")]
    resource_type: String,
    name: String,
    #[serde(default)]
    config: Value,
}

/// Deserialize `{"resources": [{"type", "name", "config"}]}`.
pub fn parse_plan(json: &str) -> Result<Vec<ResourceConfig>, Vec<Diagnostic>> {
    let document = serde_json::from_str::<PlanDocument>(json).map_err(|e| {
        vec![Diagnostic::parse(
            "P001",
            format!("Failed to parse plan JSON: {}", e),
        )]
    })?;

    Ok(document
        .resources
        .into_iter()
        .map(|r| ResourceConfig {
            config: super::from_json(&r.config),
            resource_type: r.resource_type,
            name: r.name,
        })
        .collect())
}
