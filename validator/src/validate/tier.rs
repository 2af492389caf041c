//! Shield features gated behind a plan tier.
//!
//! Bot detection and whitelabel response pages need any paid tier.
//! Real-time threat intelligence needs exactly the Advanced tier; a higher
//! tier such as Business does not qualify.

use crate::catalog::{DEFAULT_PLAN_TIER, PLAN_TIERS};
use crate::error::{Diagnostic, Diagnostics};
use crate::model::{Attr, ShieldZone};
use crate::value::AttributePath;

pub const BOT_DETECTION: &str = "W001";
pub const WHITELABEL: &str = "W002";
pub const REALTIME_THREAT_INTELLIGENCE: &str = "W003";

const RTI_TIER: &str = "Advanced";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feature {
    Enabled,
    Disabled,
    Unresolved,
}

impl Feature {
    fn from_block<T>(block: &Attr<T>) -> Self {
        match block {
            Attr::Known(_) => Feature::Enabled,
            Attr::Null => Feature::Disabled,
            Attr::Unknown => Feature::Unresolved,
        }
    }

    fn from_flag(flag: &Attr<bool>) -> Self {
        match flag {
            Attr::Known(true) => Feature::Enabled,
            Attr::Known(false) | Attr::Null => Feature::Disabled,
            Attr::Unknown => Feature::Unresolved,
        }
    }
}

pub fn validate_bot_detection(zone: &ShieldZone, diagnostics: &mut Diagnostics) {
    require_paid_tier(
        zone,
        Feature::from_block(&zone.bot_detection),
        BOT_DETECTION,
        AttributePath::attr("bot_detection"),
        "Bot detection",
        diagnostics,
    );
}

pub fn validate_whitelabel(zone: &ShieldZone, diagnostics: &mut Diagnostics) {
    require_paid_tier(
        zone,
        Feature::from_flag(&zone.whitelabel_response_pages),
        WHITELABEL,
        AttributePath::attr("whitelabel_response_pages"),
        "Whitelabel response pages",
        diagnostics,
    );
}

pub fn validate_realtime_threat_intelligence(zone: &ShieldZone, diagnostics: &mut Diagnostics) {
    let Some(tier) = tier_name(zone) else {
        return;
    };
    let feature = match &zone.waf {
        Attr::Known(waf) => Feature::from_flag(&waf.realtime_threat_intelligence_enabled),
        other => Feature::from_block(other),
    };
    match feature {
        Feature::Unresolved => {
            tracing::trace!(code = REALTIME_THREAT_INTELLIGENCE, "feature unknown, deferring");
        }
        Feature::Disabled => {}
        Feature::Enabled if tier == RTI_TIER => {}
        Feature::Enabled => diagnostics.push(Diagnostic::error(
            REALTIME_THREAT_INTELLIGENCE,
            AttributePath::attr("waf").name("realtime_threat_intelligence_enabled"),
            "Feature not available on this plan",
            format!(
                "Real-time threat intelligence requires the \"{RTI_TIER}\" tier, but tier is \"{tier}\""
            ),
        )),
    }
}

fn require_paid_tier(
    zone: &ShieldZone,
    feature: Feature,
    code: &str,
    path: AttributePath,
    label: &str,
    diagnostics: &mut Diagnostics,
) {
    let Some(tier) = tier_name(zone) else {
        return;
    };
    match feature {
        Feature::Unresolved => {
            tracing::trace!(code, "feature unknown, deferring");
            return;
        }
        Feature::Disabled => return,
        Feature::Enabled => {}
    }
    if PLAN_TIERS.code(tier) != Some(0) {
        return;
    }
    let required = PLAN_TIERS.name(1).unwrap_or("a paid tier");
    diagnostics.push(Diagnostic::error(
        code,
        path,
        "Feature not available on this plan",
        format!("{label} requires the \"{required}\" tier or higher, but tier is \"{tier}\""),
    ));
}

/// The configured tier, or the default when unset. `None` while Unknown.
fn tier_name(zone: &ShieldZone) -> Option<&str> {
    match &zone.tier {
        Attr::Known(tier) => Some(tier.as_str()),
        Attr::Null => Some(DEFAULT_PLAN_TIER),
        Attr::Unknown => {
            tracing::trace!("tier unknown, deferring");
            None
        }
    }
}
