//! Static enumeration tables and region catalogs.
//!
//! Backend codes and their provider-facing names. Both directions are built
//! once on first use and never mutated.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Bidirectional mapping between a numeric backend code and its name.
#[derive(Debug)]
pub struct EnumMap {
    by_code: BTreeMap<u8, &'static str>,
    by_name: HashMap<&'static str, u8>,
}

impl EnumMap {
    fn new(entries: &[(u8, &'static str)]) -> Self {
        EnumMap {
            by_code: entries.iter().copied().collect(),
            by_name: entries.iter().map(|&(code, name)| (name, code)).collect(),
        }
    }

    pub fn name(&self, code: u8) -> Option<&'static str> {
        self.by_code.get(&code).copied()
    }

    pub fn code(&self, name: &str) -> Option<u8> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Names in code order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_code.values().copied()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

// =============================================================================
// EDGE RULES
// =============================================================================

pub static ACTION_TYPES: LazyLock<EnumMap> = LazyLock::new(|| {
    EnumMap::new(&[
        (0, "ForceSSL"),
        (1, "Redirect"),
        (2, "OriginUrl"),
        (3, "OverrideCacheTime"),
        (4, "BlockRequest"),
        (5, "SetResponseHeader"),
        (6, "SetRequestHeader"),
        (7, "ForceDownload"),
        (8, "DisableTokenAuthentication"),
        (9, "EnableTokenAuthentication"),
        (10, "OverrideCacheTimePublic"),
        (11, "IgnoreQueryString"),
        (12, "DisableOptimizer"),
        (13, "ForceCompression"),
        (14, "SetStatusCode"),
        (15, "BypassPermaCache"),
        (16, "OverrideBrowserCacheTime"),
        (17, "OriginStorage"),
        (18, "SetNetworkRateLimit"),
        (19, "SetConnectionLimit"),
        (20, "SetRequestsPerSecondLimit"),
        (21, "RunEdgeScript"),
        (22, "OriginMagicContainers"),
        (23, "DisableWAF"),
        (24, "RetryOrigin"),
        (25, "OverrideBrowserCacheResponseHeader"),
        (26, "RemoveBrowserCacheResponseHeader"),
        (27, "DisableShieldChallenge"),
        (28, "DisableShield"),
        (29, "DisableShieldBotDetection"),
        (30, "BypassAwsS3Authentication"),
        (31, "DisableShieldAccessLists"),
        (32, "DisableShieldRateLimiting"),
    ])
});

pub static TRIGGER_TYPES: LazyLock<EnumMap> = LazyLock::new(|| {
    EnumMap::new(&[
        (0, "Url"),
        (1, "RequestHeader"),
        (2, "ResponseHeader"),
        (3, "UrlExtension"),
        (4, "CountryCode"),
        (5, "RemoteIP"),
        (6, "UrlQueryString"),
        (7, "RandomChance"),
        (8, "StatusCode"),
        (9, "RequestMethod"),
        (10, "CookieValue"),
        (11, "CountryStateCode"),
        (12, "OriginRetryAttemptCount"),
    ])
});

pub static TRIGGER_MATCH_TYPES: LazyLock<EnumMap> =
    LazyLock::new(|| EnumMap::new(&[(0, "MatchAny"), (1, "MatchAll"), (2, "MatchNone")]));

/// Status codes a `Redirect` action may answer with.
pub const REDIRECT_STATUS_CODES: &[&str] = &["301", "302", "307", "308"];

// =============================================================================
// SHIELD
// =============================================================================

/// Shield plan tiers. Code 0 is the free tier.
pub static PLAN_TIERS: LazyLock<EnumMap> = LazyLock::new(|| {
    EnumMap::new(&[
        (0, "Basic"),
        (1, "Advanced"),
        (2, "Business"),
        (3, "Enterprise"),
    ])
});

/// Tier assumed when the configuration leaves `tier` unset.
pub const DEFAULT_PLAN_TIER: &str = "Basic";

// =============================================================================
// STORAGE ZONES
// =============================================================================

pub static STORAGE_ZONE_TIERS: LazyLock<EnumMap> =
    LazyLock::new(|| EnumMap::new(&[(0, "Standard"), (1, "Edge")]));

pub const DEFAULT_STORAGE_ZONE_TIER: &str = "Standard";

/// Primary and replication regions for Standard (HDD) zones.
pub const STANDARD_REGIONS: &[&str] = &[
    "BR", "CZ", "DE", "ES", "HK", "JH", "JP", "LA", "MI", "NY", "SE", "SG", "SYD", "UK", "WA",
];

/// Edge (SSD) zones always have their primary copy here.
pub const EDGE_PRIMARY_REGION: &str = "DE";

/// Replication regions for Edge (SSD) zones.
pub const EDGE_REPLICATION_REGIONS: &[&str] = &[
    "BR", "CZ", "ES", "HK", "JH", "JP", "LA", "MI", "NY", "SE", "SG", "SYD", "UK", "WA",
];
