//! Cross-field validation rules for edge platform provider resources.
//!
//! The host hands over one configuration tree per resource; the rules return
//! diagnostics. Any error diagnostic blocks the resource from being applied.

pub mod catalog;
pub mod error;
pub mod model;
pub mod parse;
pub mod validate;
pub mod value;
pub mod wasm;

pub use error::{Diagnostic, Diagnostics, Severity};
pub use validate::{ResourceKind, validate_plan, validate_resource};
pub use value::{AttributePath, ConfigValue};
