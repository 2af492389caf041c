//! Storage zone (`bunnynet_storage_zone`).

use super::{Attr, Decode, Fields};
use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageZone {
    /// `Standard` or `Edge`; unset means Standard.
    pub zone_tier: Attr<String>,
    pub region: Attr<String>,
    pub replication_regions: Attr<Vec<Attr<String>>>,
}

impl Decode for StorageZone {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(StorageZone {
            zone_tier: fields.string("zone_tier")?,
            region: fields.string("region")?,
            replication_regions: fields.strings("replication_regions")?,
        })
    }
}
