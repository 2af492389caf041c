//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::{Diagnostic, Diagnostics};
use crate::validate::{self, ResourceKind};

/// Validate one resource configuration JSON.
/// Returns a JSON array of diagnostic objects.
#[wasm_bindgen]
pub fn validate_resource(resource_type: &str, json: &str) -> JsValue {
    let result = validate_resource_inner(resource_type, json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_resource_inner(resource_type: &str, json: &str) -> Vec<DiagnosticDto> {
    let Some(kind) = ResourceKind::from_type_name(resource_type) else {
        return vec![DiagnosticDto::from(Diagnostic::parse(
            "P003",
            format!("Resource type '{}' has no validation rules", resource_type),
        ))];
    };

    let config = match crate::parse::parse(json) {
        Ok(c) => c,
        Err(errors) => return errors.into_iter().map(DiagnosticDto::from).collect(),
    };

    to_dtos(validate::validate_resource(kind, &config))
}

/// Validate every resource of a plan JSON document.
/// Returns a JSON array of diagnostic objects.
#[wasm_bindgen]
pub fn validate_plan(json: &str) -> JsValue {
    let result = validate_plan_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_plan_inner(json: &str) -> Vec<DiagnosticDto> {
    match crate::parse::parse_plan(json) {
        Ok(resources) => to_dtos(validate::validate_plan(&resources)),
        Err(errors) => errors.into_iter().map(DiagnosticDto::from).collect(),
    }
}

fn to_dtos(diagnostics: Diagnostics) -> Vec<DiagnosticDto> {
    diagnostics.into_iter().map(DiagnosticDto::from).collect()
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    code: String,
    severity: String,
    path: String,
    summary: String,
    detail: String,
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        DiagnosticDto {
            code: d.code,
            severity: d.severity.to_string(),
            path: d.path.to_string(),
            summary: d.summary,
            detail: d.detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_resource_type_is_reported() {
        let dtos = validate_resource_inner("bunnynet_dns_zone", "{}");
        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].code, "P003");
    }

    #[test]
    fn plan_diagnostics_carry_resource_address() {
        let json = r#"{"resources": [
            {"type": "bunnynet_storage_zone", "name": "assets",
             "config": {"zone_tier": "Edge", "region": "SG"}}
        ]}"#;
        let dtos = validate_plan_inner(json);
        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].path, "bunnynet_storage_zone.assets.region");
        assert_eq!(dtos[0].severity, "error");
    }
}
