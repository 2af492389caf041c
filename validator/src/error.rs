//! Diagnostics raised by validation, and the decode error for trees that do
//! not match a resource schema.

use std::fmt::{self, Display};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::AttributePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation message, anchored to a location in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable rule code, e.g. `C001`.
    pub code: String,
    pub severity: Severity,
    pub path: AttributePath,
    pub summary: String,
    pub detail: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(
                f,
                "{}[{}] {}: {}",
                self.severity, self.code, self.summary, self.detail
            )
        } else {
            write!(
                f,
                "{}[{}] {} (at {}): {}",
                self.severity, self.code, self.summary, self.path, self.detail
            )
        }
    }
}

impl Diagnostic {
    pub fn error(
        code: &str,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Diagnostic {
            code: code.into(),
            severity: Severity::Error,
            path,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn warning(
        code: &str,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Diagnostic {
            code: code.into(),
            severity: Severity::Warning,
            path,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Error raised before any rule runs, when the input document is unusable.
    pub fn parse(code: &str, detail: impl Into<String>) -> Self {
        Diagnostic::error(
            code,
            AttributePath::root(),
            "Invalid configuration document",
            detail,
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Ordered list of diagnostics owned by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// True when any diagnostic must block create/update/delete.
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    /// Re-anchor every diagnostic under `prefix`, e.g. a resource address.
    pub fn prefixed(self, prefix: &AttributePath) -> Self {
        Diagnostics(
            self.0
                .into_iter()
                .map(|mut d| {
                    d.path = prefix.join(&d.path);
                    d
                })
                .collect(),
        )
    }
}

impl Deref for Diagnostics {
    type Target = [Diagnostic];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Diagnostics(diagnostics)
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The configuration tree disagrees with the schema a rule was written for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("attribute {path} must be {expected}, found {found}")]
    WrongKind {
        path: AttributePath,
        expected: &'static str,
        found: &'static str,
    },
    #[error("attribute {path} must be an integer, found {value}")]
    NotAnInteger { path: AttributePath, value: String },
}

impl DecodeError {
    pub fn path(&self) -> &AttributePath {
        match self {
            DecodeError::WrongKind { path, .. } | DecodeError::NotAnInteger { path, .. } => path,
        }
    }
}

impl From<DecodeError> for Diagnostic {
    fn from(e: DecodeError) -> Self {
        Diagnostic::error(
            "P002",
            e.path().clone(),
            "Configuration does not match the resource schema",
            e.to_string(),
        )
    }
}

/// Render values as a bracketed, comma-separated set: `[301, 302]`.
pub fn format_set<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let parts: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let d = Diagnostic::error(
            "C005",
            AttributePath::attr("regions_allowed"),
            "Required regions not allowed",
            "missing [NY]",
        );
        assert_eq!(
            d.to_string(),
            "error[C005] Required regions not allowed (at regions_allowed): missing [NY]"
        );
    }

    #[test]
    fn display_omits_root_path() {
        let d = Diagnostic::parse("P001", "expected value");
        assert_eq!(
            d.to_string(),
            "error[P001] Invalid configuration document: expected value"
        );
    }

    #[test]
    fn warnings_do_not_block() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::warning(
            "X000",
            AttributePath::root(),
            "note",
            "",
        ));
        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 0);
    }

    #[test]
    fn format_set_renders_brackets() {
        assert_eq!(format_set(["301", "302"]), "[301, 302]");
        assert_eq!(format_set(Vec::<String>::new()), "[]");
    }
}
