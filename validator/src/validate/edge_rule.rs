//! Edge rule action parameters and trigger definitions.
//!
//! Both rules stop at the first violation. For triggers this means the
//! errors of later triggers stay hidden until the first one is fixed.

use crate::catalog::{ACTION_TYPES, REDIRECT_STATUS_CODES, TRIGGER_MATCH_TYPES, TRIGGER_TYPES};
use crate::error::{Diagnostics, format_set};
use crate::model::{Attr, EdgeRule};
use crate::value::AttributePath;

use super::{Stop, conclude, known_items};

pub const ACTION_PARAMETERS: &str = "E001";
pub const TRIGGERS: &str = "E002";

/// Backend code of the `Redirect` action.
const REDIRECT_ACTION: u8 = 1;

/// One action, from whichever schema shape the rule uses.
struct ActionView<'a> {
    action_type: &'a Attr<String>,
    parameters: [&'a Attr<String>; 3],
    /// `actions[i]` for the list shape; `None` for the flattened attributes.
    base: Option<AttributePath>,
}

impl ActionView<'_> {
    fn has_unknown(&self) -> bool {
        self.action_type.is_unknown() || self.parameters.iter().any(|p| p.is_unknown())
    }

    fn parameter_path(&self, n: usize) -> AttributePath {
        match &self.base {
            Some(base) => base.clone().name(format!("parameter{n}")),
            None => AttributePath::attr(format!("action_parameter{n}")),
        }
    }
}

/// The populated action shape. A non-empty `actions` list wins; otherwise
/// the flattened `action` attributes are used.
fn action_views(rule: &EdgeRule) -> Result<Vec<ActionView<'_>>, Stop> {
    match &rule.actions {
        Attr::Unknown => Err(Stop::Defer),
        Attr::Known(actions) if !actions.is_empty() => Ok(actions
            .iter()
            .enumerate()
            .map(|(i, action)| ActionView {
                action_type: &action.action_type,
                parameters: [&action.parameter1, &action.parameter2, &action.parameter3],
                base: Some(AttributePath::attr("actions").index(i)),
            })
            .collect()),
        _ if rule.action.is_null() => Ok(Vec::new()),
        _ => Ok(vec![ActionView {
            action_type: &rule.action,
            parameters: [
                &rule.action_parameter1,
                &rule.action_parameter2,
                &rule.action_parameter3,
            ],
            base: None,
        }]),
    }
}

pub fn validate_actions(rule: &EdgeRule, diagnostics: &mut Diagnostics) {
    if let Some(diagnostic) = conclude(check_actions(rule), ACTION_PARAMETERS, || {
        "Invalid edge rule action".to_string()
    }) {
        diagnostics.push(diagnostic);
    }
}

fn check_actions(rule: &EdgeRule) -> Result<(), Stop> {
    let views = action_views(rule)?;
    if views.iter().any(ActionView::has_unknown) {
        return Err(Stop::Defer);
    }
    for view in &views {
        check_action(view)?;
    }
    Ok(())
}

fn check_action(view: &ActionView<'_>) -> Result<(), Stop> {
    let Some(action_type) = view.action_type.known() else {
        return Ok(());
    };
    match ACTION_TYPES.code(action_type) {
        Some(REDIRECT_ACTION) => check_redirect(view),
        _ => Ok(()),
    }
}

fn check_redirect(view: &ActionView<'_>) -> Result<(), Stop> {
    let url = view.parameters[0].known().map(String::as_str).unwrap_or("");
    if url.is_empty() {
        return Err(Stop::violation(
            view.parameter_path(1),
            "Redirect actions require the target URL in parameter1",
        ));
    }

    let status = view.parameters[1].known().map(String::as_str).unwrap_or("");
    if status.is_empty() || !REDIRECT_STATUS_CODES.contains(&status) {
        return Err(Stop::violation(
            view.parameter_path(2),
            format!(
                "Redirect actions require an HTTP status code in parameter2, one of {}; got \"{status}\"",
                format_set(REDIRECT_STATUS_CODES)
            ),
        ));
    }
    Ok(())
}

pub fn validate_triggers(rule: &EdgeRule, diagnostics: &mut Diagnostics) {
    if let Some(diagnostic) = conclude(check_triggers(rule), TRIGGERS, || {
        "Invalid edge rule trigger".to_string()
    }) {
        diagnostics.push(diagnostic);
    }
}

fn check_triggers(rule: &EdgeRule) -> Result<(), Stop> {
    let triggers = known_items(&rule.triggers)?;
    if triggers.iter().any(|t| {
        t.trigger_type.is_unknown() || t.match_type.is_unknown() || t.patterns.is_unknown()
    }) {
        return Err(Stop::Defer);
    }

    for (i, trigger) in triggers.iter().enumerate() {
        let path = AttributePath::attr("triggers").index(i);

        let match_type = trigger.match_type.known().map(String::as_str);
        if !match_type.is_some_and(|m| TRIGGER_MATCH_TYPES.contains(m)) {
            return Err(Stop::violation(
                path.name("match_type"),
                format!(
                    "match_type must be one of {}; got {}",
                    format_set(TRIGGER_MATCH_TYPES.names()),
                    describe(match_type)
                ),
            ));
        }

        let patterns = trigger.patterns.known().map_or(0, Vec::len);
        if patterns == 0 {
            return Err(Stop::violation(
                path.name("patterns"),
                "Triggers require at least one pattern",
            ));
        }

        let trigger_type = trigger.trigger_type.known().map(String::as_str);
        if !trigger_type.is_some_and(|t| TRIGGER_TYPES.contains(t)) {
            return Err(Stop::violation(
                path.name("type"),
                format!(
                    "type must be one of {}; got {}",
                    format_set(TRIGGER_TYPES.names()),
                    describe(trigger_type)
                ),
            ));
        }
    }
    Ok(())
}

fn describe(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("\"{value}\""),
        None => "null".to_string(),
    }
}
