//! Shield (WAF) zone (`bunnynet_shield_zone`).

use super::{Attr, Decode, Fields};
use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq)]
pub struct ShieldZone {
    /// Plan tier name, see [`crate::catalog::PLAN_TIERS`].
    pub tier: Attr<String>,
    pub bot_detection: Attr<BotDetection>,
    pub whitelabel_response_pages: Attr<bool>,
    pub waf: Attr<Waf>,
    pub access_list: Attr<Vec<AccessList>>,
}

/// Presence of the block is what enables bot detection.
#[derive(Debug, Clone, PartialEq)]
pub struct BotDetection;

#[derive(Debug, Clone, PartialEq)]
pub struct Waf {
    pub realtime_threat_intelligence_enabled: Attr<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessList {
    pub id: Attr<i64>,
}

impl Decode for ShieldZone {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(ShieldZone {
            tier: fields.string("tier")?,
            bot_detection: fields.block("bot_detection")?,
            whitelabel_response_pages: fields.boolean("whitelabel_response_pages")?,
            waf: fields.block("waf")?,
            access_list: fields.blocks("access_list")?,
        })
    }
}

impl Decode for BotDetection {
    fn decode(_fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(BotDetection)
    }
}

impl Decode for Waf {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Waf {
            realtime_threat_intelligence_enabled: fields
                .boolean("realtime_threat_intelligence_enabled")?,
        })
    }
}

impl Decode for AccessList {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(AccessList {
            id: fields.integer("id")?,
        })
    }
}
