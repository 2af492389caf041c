//! Pull zone hostname TLS settings.

use crate::error::{Diagnostic, Diagnostics};
use crate::model::{Attr, PullzoneHostname};
use crate::value::AttributePath;

pub const FORCE_SSL: &str = "H001";
pub const CERTIFICATE_PAIR: &str = "H002";

/// HTTPS cannot be forced on a hostname without TLS.
pub fn validate_force_ssl(hostname: &PullzoneHostname, diagnostics: &mut Diagnostics) {
    match (&hostname.force_ssl, &hostname.tls_enabled) {
        (Attr::Unknown, _) | (_, Attr::Unknown) => {
            tracing::trace!(code = FORCE_SSL, "unknown input, deferring");
        }
        (Attr::Known(true), Attr::Known(true)) => {}
        (Attr::Known(true), _) => diagnostics.push(Diagnostic::error(
            FORCE_SSL,
            AttributePath::attr("force_ssl"),
            "Invalid hostname TLS settings",
            "force_ssl requires tls_enabled to be true",
        )),
        _ => {}
    }
}

/// A custom certificate needs both the certificate and its private key.
pub fn validate_certificate_pair(hostname: &PullzoneHostname, diagnostics: &mut Diagnostics) {
    let missing = match (&hostname.certificate, &hostname.certificate_key) {
        (Attr::Unknown, _) | (_, Attr::Unknown) => {
            tracing::trace!(code = CERTIFICATE_PAIR, "unknown input, deferring");
            return;
        }
        (Attr::Known(_), Attr::Null) => ("certificate_key", "certificate"),
        (Attr::Null, Attr::Known(_)) => ("certificate", "certificate_key"),
        _ => return,
    };
    let (absent, present) = missing;
    diagnostics.push(Diagnostic::error(
        CERTIFICATE_PAIR,
        AttributePath::attr(absent),
        "Incomplete custom certificate",
        format!("{present} is set, so {absent} must be set as well"),
    ));
}
