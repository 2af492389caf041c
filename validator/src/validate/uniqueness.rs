//! Endpoint name, volume name and volume mount uniqueness across all
//! containers of an application.
//!
//! These rules build frequency tables and report every violated entry; they
//! do not stop at the first problem. Any Unknown among the inspected names
//! defers the whole rule.

use std::collections::{BTreeMap, HashSet};

use crate::error::{Diagnostic, Diagnostics};
use crate::model::{Attr, Container, ContainerApp};
use crate::value::AttributePath;

pub const ENDPOINT_NAMES: &str = "C002";
pub const VOLUME_NAMES: &str = "C003";
pub const VOLUME_MOUNTS: &str = "C004";

/// Endpoint names must be unique across every container, not per container.
pub fn validate_endpoint_names(app: &ContainerApp, diagnostics: &mut Diagnostics) {
    let Some(containers) = known_containers(app) else {
        return;
    };

    let mut places: BTreeMap<&str, Vec<(usize, usize)>> = BTreeMap::new();
    for (ci, container) in containers.iter().enumerate() {
        let endpoints: &[_] = match &container.endpoint {
            Attr::Known(endpoints) => endpoints.as_slice(),
            Attr::Null => &[],
            Attr::Unknown => return defer(ENDPOINT_NAMES),
        };
        for (ei, endpoint) in endpoints.iter().enumerate() {
            match &endpoint.name {
                Attr::Known(name) => places.entry(name.as_str()).or_default().push((ci, ei)),
                Attr::Null => {}
                Attr::Unknown => return defer(ENDPOINT_NAMES),
            }
        }
    }

    for (name, found) in places {
        if found.len() < 2 {
            continue;
        }
        let (ci, ei) = found[0];
        diagnostics.push(Diagnostic::error(
            ENDPOINT_NAMES,
            endpoint_path(ci, ei).name("name"),
            "Duplicate endpoint name",
            format!(
                "Found {} endpoints named \"{name}\"; endpoint names must be unique across all containers",
                found.len()
            ),
        ));
    }
}

/// Each top-level volume name may be declared once. Every repeated
/// occurrence is reported.
pub fn validate_volume_names(app: &ContainerApp, diagnostics: &mut Diagnostics) {
    let volumes = match &app.volume {
        Attr::Known(volumes) => volumes,
        Attr::Null => return,
        Attr::Unknown => return defer(VOLUME_NAMES),
    };
    if volumes.iter().any(|v| v.name.is_unknown()) {
        return defer(VOLUME_NAMES);
    }

    let mut seen = HashSet::new();
    for (i, volume) in volumes.iter().enumerate() {
        let Some(name) = volume.name.known() else {
            continue;
        };
        if !seen.insert(name.as_str()) {
            diagnostics.push(Diagnostic::error(
                VOLUME_NAMES,
                AttributePath::attr("volume").index(i).name("name"),
                "Duplicate volume name",
                format!("Volume \"{name}\" is declared more than once"),
            ));
        }
    }
}

struct Mount<'a> {
    container: usize,
    index: usize,
    name: &'a str,
    mountpath: Option<&'a str>,
}

/// Mounts must reference a declared volume; a volume is mounted at most once
/// and a mount path is used by at most one mount.
pub fn validate_volume_mounts(app: &ContainerApp, diagnostics: &mut Diagnostics) {
    let Some(containers) = known_containers(app) else {
        return;
    };
    let declared: HashSet<&str> = match &app.volume {
        Attr::Known(volumes) => {
            if volumes.iter().any(|v| v.name.is_unknown()) {
                return defer(VOLUME_MOUNTS);
            }
            volumes
                .iter()
                .filter_map(|v| v.name.known())
                .map(String::as_str)
                .collect()
        }
        Attr::Null => HashSet::new(),
        Attr::Unknown => return defer(VOLUME_MOUNTS),
    };
    let Some(mounts) = collect_mounts(containers) else {
        return defer(VOLUME_MOUNTS);
    };

    let mut by_name: BTreeMap<&str, Vec<&Mount>> = BTreeMap::new();
    let mut by_path: BTreeMap<&str, Vec<&Mount>> = BTreeMap::new();
    for mount in &mounts {
        if !declared.contains(mount.name) {
            diagnostics.push(Diagnostic::error(
                VOLUME_MOUNTS,
                mount_path(mount).name("name"),
                "Undeclared volume",
                format!(
                    "Volume mount references \"{}\", which is not declared in a volume block",
                    mount.name
                ),
            ));
        }
        by_name.entry(mount.name).or_default().push(mount);
        if let Some(path) = mount.mountpath {
            by_path.entry(path).or_default().push(mount);
        }
    }

    for (name, found) in by_name {
        if found.len() > 1 {
            diagnostics.push(Diagnostic::error(
                VOLUME_MOUNTS,
                mount_path(found[0]).name("name"),
                "Volume mounted more than once",
                format!(
                    "Volume \"{name}\" is mounted {} times; a volume can only be mounted once",
                    found.len()
                ),
            ));
        }
    }
    for (path, found) in by_path {
        if found.len() > 1 {
            diagnostics.push(Diagnostic::error(
                VOLUME_MOUNTS,
                mount_path(found[0]).name("mountpath"),
                "Mount path used more than once",
                format!(
                    "Mount path \"{path}\" is used by {} volume mounts",
                    found.len()
                ),
            ));
        }
    }
}

fn collect_mounts(containers: &[Container]) -> Option<Vec<Mount<'_>>> {
    let mut mounts = Vec::new();
    for (ci, container) in containers.iter().enumerate() {
        let entries: &[_] = match &container.volumemount {
            Attr::Known(entries) => entries.as_slice(),
            Attr::Null => &[],
            Attr::Unknown => return None,
        };
        for (mi, entry) in entries.iter().enumerate() {
            let name = match &entry.name {
                Attr::Known(name) => name.as_str(),
                Attr::Null => continue,
                Attr::Unknown => return None,
            };
            let mountpath = match &entry.mountpath {
                Attr::Known(path) => Some(path.as_str()),
                Attr::Null => None,
                Attr::Unknown => return None,
            };
            mounts.push(Mount {
                container: ci,
                index: mi,
                name,
                mountpath,
            });
        }
    }
    Some(mounts)
}

fn known_containers(app: &ContainerApp) -> Option<&[Container]> {
    match &app.container {
        Attr::Known(containers) => Some(containers.as_slice()),
        Attr::Null => None,
        Attr::Unknown => {
            tracing::trace!("container list unknown, deferring");
            None
        }
    }
}

fn defer(code: &str) {
    tracing::trace!(code, "unknown input, deferring");
}

fn endpoint_path(container: usize, endpoint: usize) -> AttributePath {
    AttributePath::attr("container")
        .index(container)
        .name("endpoint")
        .index(endpoint)
}

fn mount_path(mount: &Mount<'_>) -> AttributePath {
    AttributePath::attr("container")
        .index(mount.container)
        .name("volumemount")
        .index(mount.index)
}
