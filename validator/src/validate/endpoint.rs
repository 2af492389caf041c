//! Endpoint/port/protocol compatibility for container endpoints.
//!
//! Each endpoint type constrains which `cdn` and `port` blocks it may carry.
//! Checking stops at the first failing condition, so an endpoint yields at
//! most one diagnostic.

use crate::error::{Diagnostic, Diagnostics};
use crate::model::{ContainerApp, Endpoint, PortBlock};
use crate::value::AttributePath;

use super::{Stop, conclude, display_name, known, known_items};

pub const CODE: &str = "C001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointType {
    Cdn,
    Anycast,
    InternalIp,
}

impl EndpointType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CDN" => Some(EndpointType::Cdn),
            "Anycast" => Some(EndpointType::Anycast),
            "InternalIP" => Some(EndpointType::InternalIp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EndpointType::Cdn => "CDN",
            EndpointType::Anycast => "Anycast",
            EndpointType::InternalIp => "InternalIP",
        }
    }
}

pub fn validate_endpoints(app: &ContainerApp, diagnostics: &mut Diagnostics) {
    let Some(containers) = app.container.known() else {
        return;
    };
    for (ci, container) in containers.iter().enumerate() {
        let Some(endpoints) = container.endpoint.known() else {
            continue;
        };
        for (ei, endpoint) in endpoints.iter().enumerate() {
            let path = AttributePath::attr("container")
                .index(ci)
                .name("endpoint")
                .index(ei);
            if let Some(diagnostic) = check_endpoint(endpoint, &path) {
                diagnostics.push(diagnostic);
            }
        }
    }
}

/// First violation of the endpoint's type constraints, if any.
pub fn check_endpoint(endpoint: &Endpoint, path: &AttributePath) -> Option<Diagnostic> {
    conclude(check(endpoint, path), CODE, || {
        format!("Invalid endpoint \"{}\"", display_name(&endpoint.name))
    })
}

fn check(endpoint: &Endpoint, path: &AttributePath) -> Result<(), Stop> {
    let Some(type_name) = known(&endpoint.endpoint_type)? else {
        return Ok(());
    };
    let Some(endpoint_type) = EndpointType::from_name(type_name) else {
        // Unrecognised types are rejected by the schema itself.
        return Ok(());
    };
    // Inputs are resolved in check order; an Unknown only stops the checks
    // from that point on.
    let cdn = known_items(&endpoint.cdn)?;
    let label = endpoint_type.name();
    let port_path = |i: usize| path.clone().name("port").index(i);

    match endpoint_type {
        EndpointType::Cdn => {
            let cdn = exactly_one(cdn, label, "cdn", path)?;
            if known(&cdn.origin_ssl)?.is_none() {
                return Err(Stop::violation(
                    path.clone().name("cdn").index(0).name("origin_ssl"),
                    "CDN endpoints must set origin_ssl in their cdn block",
                ));
            }
            let port = exactly_one(known_items(&endpoint.port)?, label, "port", path)?;
            exposed_absent(port, label, port_path(0))?;
            if !known_items(&port.protocols)?.is_empty() {
                return Err(Stop::violation(
                    port_path(0).name("protocols"),
                    "CDN endpoints do not accept port protocols",
                ));
            }
        }
        EndpointType::Anycast => {
            no_cdn(cdn, label, path)?;
            let ports = known_items(&endpoint.port)?;
            if ports.is_empty() {
                return Err(missing(label, "port", path));
            }
            for (i, port) in ports.iter().enumerate() {
                container_port_set(port, label, port_path(i))?;
                if known(&port.exposed)?.is_none() {
                    return Err(Stop::violation(
                        port_path(i).name("exposed"),
                        "Anycast endpoints require an exposed port",
                    ));
                }
                protocols_set(port, label, port_path(i))?;
            }
        }
        EndpointType::InternalIp => {
            no_cdn(cdn, label, path)?;
            let port = exactly_one(known_items(&endpoint.port)?, label, "port", path)?;
            container_port_set(port, label, port_path(0))?;
            exposed_absent(port, label, port_path(0))?;
            protocols_set(port, label, port_path(0))?;
        }
    }
    Ok(())
}

fn exactly_one<'a, T>(
    blocks: &'a [T],
    label: &str,
    block: &str,
    path: &AttributePath,
) -> Result<&'a T, Stop> {
    match blocks {
        [one] => Ok(one),
        [] => Err(missing(label, block, path)),
        many => Err(Stop::violation(
            path.clone().name(block),
            format!(
                "{label} endpoints allow exactly one {block} block, found {} (too many)",
                many.len()
            ),
        )),
    }
}

fn missing(label: &str, block: &str, path: &AttributePath) -> Stop {
    Stop::violation(
        path.clone().name(block),
        format!("{label} endpoints require a {block} block, but it is missing"),
    )
}

fn no_cdn<T>(cdn: &[T], label: &str, path: &AttributePath) -> Result<(), Stop> {
    if cdn.is_empty() {
        Ok(())
    } else {
        Err(Stop::violation(
            path.clone().name("cdn"),
            format!("{label} endpoints do not accept a cdn block"),
        ))
    }
}

fn exposed_absent(port: &PortBlock, label: &str, path: AttributePath) -> Result<(), Stop> {
    match known(&port.exposed)? {
        None => Ok(()),
        Some(exposed) => Err(Stop::violation(
            path.name("exposed"),
            format!("{label} endpoints do not accept an exposed port, found {exposed}"),
        )),
    }
}

fn container_port_set(port: &PortBlock, label: &str, path: AttributePath) -> Result<(), Stop> {
    match known(&port.container)? {
        Some(_) => Ok(()),
        None => Err(Stop::violation(
            path.name("container"),
            format!("{label} endpoints require a container port"),
        )),
    }
}

fn protocols_set(port: &PortBlock, label: &str, path: AttributePath) -> Result<(), Stop> {
    if known_items(&port.protocols)?.is_empty() {
        Err(Stop::violation(
            path.name("protocols"),
            format!("{label} endpoints require at least one port protocol"),
        ))
    } else {
        Ok(())
    }
}
