//! Custom hostname attached to a pull zone (`bunnynet_pullzone_hostname`).

use super::{Attr, Decode, Fields};
use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq)]
pub struct PullzoneHostname {
    pub tls_enabled: Attr<bool>,
    pub force_ssl: Attr<bool>,
    pub certificate: Attr<String>,
    pub certificate_key: Attr<String>,
}

impl Decode for PullzoneHostname {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(PullzoneHostname {
            tls_enabled: fields.boolean("tls_enabled")?,
            force_ssl: fields.boolean("force_ssl")?,
            certificate: fields.string("certificate")?,
            certificate_key: fields.string("certificate_key")?,
        })
    }
}
