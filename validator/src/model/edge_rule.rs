//! Pull zone edge rule (`bunnynet_pullzone_edgerule`).
//!
//! Actions appear in two shapes: the `actions` list, and the older flattened
//! `action` + `action_parameter1..3` attributes.

use super::{Attr, Decode, Fields};
use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRule {
    pub action: Attr<String>,
    pub action_parameter1: Attr<String>,
    pub action_parameter2: Attr<String>,
    pub action_parameter3: Attr<String>,
    pub actions: Attr<Vec<Action>>,
    pub triggers: Attr<Vec<Trigger>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub action_type: Attr<String>,
    pub parameter1: Attr<String>,
    pub parameter2: Attr<String>,
    pub parameter3: Attr<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub trigger_type: Attr<String>,
    pub match_type: Attr<String>,
    pub patterns: Attr<Vec<Attr<String>>>,
}

impl Decode for EdgeRule {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(EdgeRule {
            action: fields.string("action")?,
            action_parameter1: fields.string("action_parameter1")?,
            action_parameter2: fields.string("action_parameter2")?,
            action_parameter3: fields.string("action_parameter3")?,
            actions: fields.blocks("actions")?,
            triggers: fields.blocks("triggers")?,
        })
    }
}

impl Decode for Action {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Action {
            action_type: fields.string("type")?,
            parameter1: fields.string("parameter1")?,
            parameter2: fields.string("parameter2")?,
            parameter3: fields.string("parameter3")?,
        })
    }
}

impl Decode for Trigger {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Trigger {
            trigger_type: fields.string("type")?,
            match_type: fields.string("match_type")?,
            patterns: fields.strings("patterns")?,
        })
    }
}
