//! Access-list ids must be unique within a shield zone.
//!
//! An Unknown anywhere in the set defers the whole check. Only the first
//! duplicate is reported.

use std::collections::HashSet;

use crate::error::{Diagnostic, Diagnostics};
use crate::model::{Attr, ShieldZone};
use crate::value::AttributePath;

pub const CODE: &str = "W004";

pub fn validate_access_lists(zone: &ShieldZone, diagnostics: &mut Diagnostics) {
    let entries = match &zone.access_list {
        Attr::Known(entries) => entries,
        Attr::Null => return,
        Attr::Unknown => return defer(),
    };
    if entries.iter().any(|entry| entry.id.is_unknown()) {
        return defer();
    }

    let mut seen = HashSet::new();
    for id in entries.iter().filter_map(|entry| entry.id.known()) {
        if !seen.insert(*id) {
            diagnostics.push(Diagnostic::error(
                CODE,
                AttributePath::attr("access_list"),
                "Duplicate access list",
                format!("Access list {id} is configured more than once"),
            ));
            return;
        }
    }
}

fn defer() {
    tracing::trace!(code = CODE, "unknown input, deferring");
}
