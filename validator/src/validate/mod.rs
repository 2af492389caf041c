//! Rule registry and the per-resource validation pass.
//!
//! Each resource type owns an ordered list of rules. Rules are independent;
//! order only affects the order of the resulting diagnostics.

pub mod access_list;
pub mod edge_rule;
pub mod endpoint;
pub mod hostname;
pub mod regions;
pub mod storage_zone;
pub mod tier;
pub mod uniqueness;

use serde::{Deserialize, Serialize};

use crate::error::{Diagnostic, Diagnostics};
use crate::model::{
    Attr, ContainerApp, Decode, EdgeRule, PullzoneHostname, ShieldZone, StorageZone,
    decode_resource,
};
use crate::parse::ResourceConfig;
use crate::value::{AttributePath, ConfigValue};

/// A named check over one decoded resource.
pub struct Rule<R> {
    pub code: &'static str,
    pub name: &'static str,
    pub check: fn(&R, &mut Diagnostics),
}

const CONTAINER_APP_RULES: &[Rule<ContainerApp>] = &[
    Rule {
        code: endpoint::CODE,
        name: "endpoint_compatibility",
        check: endpoint::validate_endpoints,
    },
    Rule {
        code: uniqueness::ENDPOINT_NAMES,
        name: "unique_endpoint_names",
        check: uniqueness::validate_endpoint_names,
    },
    Rule {
        code: uniqueness::VOLUME_NAMES,
        name: "unique_volume_names",
        check: uniqueness::validate_volume_names,
    },
    Rule {
        code: uniqueness::VOLUME_MOUNTS,
        name: "volume_mounts",
        check: uniqueness::validate_volume_mounts,
    },
    Rule {
        code: regions::CODE,
        name: "required_regions_allowed",
        check: regions::validate_regions,
    },
];

const EDGE_RULE_RULES: &[Rule<EdgeRule>] = &[
    Rule {
        code: edge_rule::ACTION_PARAMETERS,
        name: "action_parameters",
        check: edge_rule::validate_actions,
    },
    Rule {
        code: edge_rule::TRIGGERS,
        name: "triggers",
        check: edge_rule::validate_triggers,
    },
];

const SHIELD_ZONE_RULES: &[Rule<ShieldZone>] = &[
    Rule {
        code: tier::BOT_DETECTION,
        name: "bot_detection_tier",
        check: tier::validate_bot_detection,
    },
    Rule {
        code: tier::WHITELABEL,
        name: "whitelabel_tier",
        check: tier::validate_whitelabel,
    },
    Rule {
        code: tier::REALTIME_THREAT_INTELLIGENCE,
        name: "realtime_threat_intelligence_tier",
        check: tier::validate_realtime_threat_intelligence,
    },
    Rule {
        code: access_list::CODE,
        name: "unique_access_list_ids",
        check: access_list::validate_access_lists,
    },
];

const STORAGE_ZONE_RULES: &[Rule<StorageZone>] = &[Rule {
    code: storage_zone::CODE,
    name: "region_tier",
    check: storage_zone::validate_regions,
}];

const PULLZONE_HOSTNAME_RULES: &[Rule<PullzoneHostname>] = &[
    Rule {
        code: hostname::FORCE_SSL,
        name: "force_ssl_requires_tls",
        check: hostname::validate_force_ssl,
    },
    Rule {
        code: hostname::CERTIFICATE_PAIR,
        name: "certificate_pair",
        check: hostname::validate_certificate_pair,
    },
];

/// Resource types that carry cross-field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    ContainerApp,
    EdgeRule,
    ShieldZone,
    StorageZone,
    PullzoneHostname,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::ContainerApp,
        ResourceKind::EdgeRule,
        ResourceKind::ShieldZone,
        ResourceKind::StorageZone,
        ResourceKind::PullzoneHostname,
    ];

    pub fn type_name(self) -> &'static str {
        match self {
            ResourceKind::ContainerApp => "bunnynet_compute_container_app",
            ResourceKind::EdgeRule => "bunnynet_pullzone_edgerule",
            ResourceKind::ShieldZone => "bunnynet_shield_zone",
            ResourceKind::StorageZone => "bunnynet_storage_zone",
            ResourceKind::PullzoneHostname => "bunnynet_pullzone_hostname",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// `(code, name)` of each registered rule, in evaluation order.
    pub fn rules(self) -> Vec<(&'static str, &'static str)> {
        fn listing<R>(rules: &[Rule<R>]) -> Vec<(&'static str, &'static str)> {
            rules.iter().map(|r| (r.code, r.name)).collect()
        }
        match self {
            ResourceKind::ContainerApp => listing(CONTAINER_APP_RULES),
            ResourceKind::EdgeRule => listing(EDGE_RULE_RULES),
            ResourceKind::ShieldZone => listing(SHIELD_ZONE_RULES),
            ResourceKind::StorageZone => listing(STORAGE_ZONE_RULES),
            ResourceKind::PullzoneHostname => listing(PULLZONE_HOSTNAME_RULES),
        }
    }
}

/// Run every rule registered for `kind` against one resource configuration.
pub fn validate_resource(kind: ResourceKind, config: &ConfigValue) -> Diagnostics {
    let _span = tracing::debug_span!("validate_resource", resource = kind.type_name()).entered();

    // A wholly unknown or null resource has nothing to judge yet.
    if config.is_unknown() || config.is_null() {
        tracing::trace!(state = config.kind_name(), "resource not known, deferring");
        return Diagnostics::new();
    }

    match kind {
        ResourceKind::ContainerApp => run_rules(config, CONTAINER_APP_RULES),
        ResourceKind::EdgeRule => run_rules(config, EDGE_RULE_RULES),
        ResourceKind::ShieldZone => run_rules(config, SHIELD_ZONE_RULES),
        ResourceKind::StorageZone => run_rules(config, STORAGE_ZONE_RULES),
        ResourceKind::PullzoneHostname => run_rules(config, PULLZONE_HOSTNAME_RULES),
    }
}

/// Validate every resource of a plan and collect all diagnostics together.
///
/// Diagnostics are anchored under the resource address (`type.name`).
/// Resource types without registered rules are skipped.
pub fn validate_plan(resources: &[ResourceConfig]) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    for resource in resources {
        let Some(kind) = ResourceKind::from_type_name(&resource.resource_type) else {
            tracing::trace!(resource = %resource.resource_type, "no rules registered");
            continue;
        };
        let address = AttributePath::attr(resource.resource_type.as_str())
            .name(resource.name.as_str());
        diagnostics.extend(validate_resource(kind, &resource.config).prefixed(&address));
    }

    tracing::debug!(
        resources = resources.len(),
        errors = diagnostics.error_count(),
        "plan validated"
    );
    diagnostics
}

fn run_rules<R: Decode>(config: &ConfigValue, rules: &[Rule<R>]) -> Diagnostics {
    let model = match decode_resource::<R>(config) {
        Ok(model) => model,
        Err(e) => {
            tracing::warn!(error = %e, "configuration does not match resource schema");
            return Diagnostics::from(vec![Diagnostic::from(e)]);
        }
    };

    let mut diagnostics = Diagnostics::new();
    for rule in rules {
        let before = diagnostics.len();
        (rule.check)(&model, &mut diagnostics);
        tracing::debug!(
            code = rule.code,
            rule = rule.name,
            raised = diagnostics.len() - before,
            "rule evaluated"
        );
    }
    diagnostics
}

// ---------------------------------------------------------------------------
// Short-circuit helpers
// ---------------------------------------------------------------------------

/// Why a short-circuiting check stopped early.
#[derive(Debug)]
pub(crate) enum Stop {
    /// An input was Unknown; judge again once it resolves.
    Defer,
    Violation {
        path: AttributePath,
        detail: String,
    },
}

impl Stop {
    pub(crate) fn violation(path: AttributePath, detail: impl Into<String>) -> Self {
        Stop::Violation {
            path,
            detail: detail.into(),
        }
    }
}

/// Known value or Null as `Some`/`None`; Unknown stops the check.
pub(crate) fn known<T>(attr: &Attr<T>) -> Result<Option<&T>, Stop> {
    match attr {
        Attr::Null => Ok(None),
        Attr::Unknown => Err(Stop::Defer),
        Attr::Known(value) => Ok(Some(value)),
    }
}

/// Null reads as an empty collection; Unknown stops the check.
pub(crate) fn known_items<T>(attr: &Attr<Vec<T>>) -> Result<&[T], Stop> {
    Ok(known(attr)?.map(Vec::as_slice).unwrap_or(&[]))
}

/// Turn the outcome of a short-circuiting check into at most one diagnostic.
pub(crate) fn conclude(
    outcome: Result<(), Stop>,
    code: &str,
    summary: impl FnOnce() -> String,
) -> Option<Diagnostic> {
    match outcome {
        Ok(()) => None,
        Err(Stop::Defer) => {
            tracing::trace!(code, "unknown input, deferring");
            None
        }
        Err(Stop::Violation { path, detail }) => {
            Some(Diagnostic::error(code, path, summary(), detail))
        }
    }
}

/// Display form of an optional name for summaries.
pub(crate) fn display_name(name: &Attr<String>) -> &str {
    match name {
        Attr::Known(name) => name,
        Attr::Unknown => "(known after apply)",
        Attr::Null => "(unnamed)",
    }
}
