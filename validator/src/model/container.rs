//! Compute container application (`bunnynet_compute_container_app`).

use super::{Attr, Decode, Fields};
use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerApp {
    pub regions_allowed: Attr<Vec<Attr<String>>>,
    pub regions_required: Attr<Vec<Attr<String>>>,
    pub container: Attr<Vec<Container>>,
    pub volume: Attr<Vec<Volume>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub endpoint: Attr<Vec<Endpoint>>,
    pub volumemount: Attr<Vec<VolumeMount>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub name: Attr<String>,
    /// `CDN`, `Anycast` or `InternalIP`.
    pub endpoint_type: Attr<String>,
    pub cdn: Attr<Vec<CdnBlock>>,
    pub port: Attr<Vec<PortBlock>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CdnBlock {
    pub origin_ssl: Attr<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortBlock {
    pub container: Attr<i64>,
    pub exposed: Attr<i64>,
    pub protocols: Attr<Vec<Attr<String>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub name: Attr<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeMount {
    pub name: Attr<String>,
    pub mountpath: Attr<String>,
}

impl Decode for ContainerApp {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(ContainerApp {
            regions_allowed: fields.strings("regions_allowed")?,
            regions_required: fields.strings("regions_required")?,
            container: fields.blocks("container")?,
            volume: fields.blocks("volume")?,
        })
    }
}

impl Decode for Container {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Container {
            endpoint: fields.blocks("endpoint")?,
            volumemount: fields.blocks("volumemount")?,
        })
    }
}

impl Decode for Endpoint {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Endpoint {
            name: fields.string("name")?,
            endpoint_type: fields.string("type")?,
            cdn: fields.blocks("cdn")?,
            port: fields.blocks("port")?,
        })
    }
}

impl Decode for CdnBlock {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(CdnBlock {
            origin_ssl: fields.boolean("origin_ssl")?,
        })
    }
}

impl Decode for PortBlock {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(PortBlock {
            container: fields.integer("container")?,
            exposed: fields.integer("exposed")?,
            protocols: fields.strings("protocols")?,
        })
    }
}

impl Decode for Volume {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Volume {
            name: fields.string("name")?,
        })
    }
}

impl Decode for VolumeMount {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(VolumeMount {
            name: fields.string("name")?,
            mountpath: fields.string("mountpath")?,
        })
    }
}
