//! Storage zone region catalogs, by zone tier.
//!
//! Violations accumulate, except that an invalid primary `region` stops the
//! check before replication regions are looked at. An unset `region` is left
//! to the schema, but replication regions are still checked.

use crate::catalog::{
    DEFAULT_STORAGE_ZONE_TIER, EDGE_PRIMARY_REGION, EDGE_REPLICATION_REGIONS, STANDARD_REGIONS,
    STORAGE_ZONE_TIERS,
};
use crate::error::{Diagnostic, Diagnostics, format_set};
use crate::model::{Attr, StorageZone};
use crate::value::AttributePath;

pub const CODE: &str = "S001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTier {
    Standard,
    Edge,
}

impl ZoneTier {
    pub fn from_name(name: &str) -> Option<Self> {
        match STORAGE_ZONE_TIERS.code(name)? {
            0 => Some(ZoneTier::Standard),
            1 => Some(ZoneTier::Edge),
            _ => None,
        }
    }
}

pub fn validate_regions(zone: &StorageZone, diagnostics: &mut Diagnostics) {
    let tier_name = match &zone.zone_tier {
        Attr::Known(name) => name.as_str(),
        Attr::Null => DEFAULT_STORAGE_ZONE_TIER,
        Attr::Unknown => return defer(),
    };
    let region = match &zone.region {
        Attr::Known(region) => Some(region.as_str()),
        Attr::Null => None,
        Attr::Unknown => return defer(),
    };
    if zone.replication_regions.any_unknown() {
        return defer();
    }
    let replication: Vec<&str> = zone
        .replication_regions
        .known()
        .map(|items| {
            items
                .iter()
                .filter_map(|r| r.known().map(String::as_str))
                .collect()
        })
        .unwrap_or_default();

    let Some(tier) = ZoneTier::from_name(tier_name) else {
        tracing::trace!(tier = tier_name, "unrecognised zone tier");
        return;
    };

    match tier {
        ZoneTier::Edge => {
            if let Some(region) = region.filter(|r| *r != EDGE_PRIMARY_REGION) {
                diagnostics.push(Diagnostic::error(
                    CODE,
                    AttributePath::attr("region"),
                    "Invalid region for Edge storage",
                    format!(
                        "Edge storage zones must use region \"{EDGE_PRIMARY_REGION}\", found \"{region}\""
                    ),
                ));
                return;
            }
            check_replication(&replication, EDGE_REPLICATION_REGIONS, "Edge", diagnostics);
        }
        ZoneTier::Standard => {
            if let Some(region) = region.filter(|r| !STANDARD_REGIONS.contains(r)) {
                diagnostics.push(Diagnostic::error(
                    CODE,
                    AttributePath::attr("region"),
                    "Invalid region for Standard storage",
                    format!(
                        "Region \"{region}\" is not available for Standard storage zones; allowed regions: {}",
                        format_set(STANDARD_REGIONS)
                    ),
                ));
                return;
            }
            check_replication(&replication, STANDARD_REGIONS, "Standard", diagnostics);
            if let Some(region) = region.filter(|r| replication.contains(r)) {
                diagnostics.push(Diagnostic::error(
                    CODE,
                    AttributePath::attr("replication_regions"),
                    "Primary region replicated",
                    format!(
                        "Region \"{region}\" is the primary region and cannot also be a replication region"
                    ),
                ));
            }
        }
    }
}

fn check_replication(
    replication: &[&str],
    catalog: &[&str],
    tier: &str,
    diagnostics: &mut Diagnostics,
) {
    for region in replication {
        if !catalog.contains(region) {
            diagnostics.push(Diagnostic::error(
                CODE,
                AttributePath::attr("replication_regions"),
                format!("Invalid replication region for {tier} storage"),
                format!(
                    "Replication region \"{region}\" is not available for {tier} storage zones; allowed regions: {}",
                    format_set(catalog)
                ),
            ));
        }
    }
}

fn defer() {
    tracing::trace!(code = CODE, "unknown input, deferring");
}
