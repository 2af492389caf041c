//! `regions_required` must be a subset of `regions_allowed`.

use std::collections::BTreeSet;

use crate::error::{Diagnostic, Diagnostics, format_set};
use crate::model::{Attr, ContainerApp};
use crate::value::AttributePath;

pub const CODE: &str = "C005";

pub fn validate_regions(app: &ContainerApp, diagnostics: &mut Diagnostics) {
    if app.regions_allowed.any_unknown() || app.regions_required.any_unknown() {
        tracing::trace!(code = CODE, "region sets unknown, deferring");
        return;
    }

    let allowed = known_strings(&app.regions_allowed);
    let required = known_strings(&app.regions_required);
    let missing = missing_regions(&allowed, &required);
    if missing.is_empty() {
        return;
    }

    diagnostics.push(Diagnostic::error(
        CODE,
        AttributePath::attr("regions_allowed"),
        "Required regions not allowed",
        format!(
            "regions_required contains regions missing from regions_allowed: {}",
            format_set(&missing)
        ),
    ));
}

/// `required − allowed`, sorted.
pub fn missing_regions<'a>(allowed: &[&str], required: &[&'a str]) -> BTreeSet<&'a str> {
    let allowed: BTreeSet<&str> = allowed.iter().copied().collect();
    required
        .iter()
        .copied()
        .filter(|region| !allowed.contains(region))
        .collect()
}

fn known_strings(attr: &Attr<Vec<Attr<String>>>) -> Vec<&str> {
    attr.known()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.known().map(String::as_str))
                .collect()
        })
        .unwrap_or_default()
}
