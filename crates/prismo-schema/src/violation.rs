//! # Field Violations
//!
//! Structured violation records produced by request validation. Each
//! violation names the offending field as a dotted path
//! (`content.media[2].url`) so callers can attach it to form inputs.
//!
//! Rules themselves are declared with `validator` derive attributes on the
//! request shapes. [`ValidationViolations`] flattens the nested
//! [`ValidationErrors`] tree into wire-named paths.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path to the violating field. Empty for the request root.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// Build a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.field, self.message)
        }
    }
}

/// Collection of violations, ordered by field path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(field, message));
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationViolations {}

impl From<ValidationErrors> for ValidationViolations {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Self::new();
        flatten_into(&mut violations, "", &errors);
        violations
    }
}

/// Run the declared field rules of `value`.
///
/// # Errors
///
/// Every failing field, flattened to dotted camelCase paths.
pub fn validate_fields<T: Validate>(value: &T) -> Result<(), ValidationViolations> {
    value.validate().map_err(ValidationViolations::from)
}

fn flatten_into(out: &mut ValidationViolations, prefix: &str, errors: &ValidationErrors) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        let path = join_path(prefix, &wire_name(field));
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(path.clone(), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(out, &path, nested),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_into(out, &format!("{path}[{index}]"), nested);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// `platform_user_id` becomes `platformUserId`, matching the serde names.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
