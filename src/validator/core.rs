//! Validation core: raw JSON input against an [`ObjectSchema`].
//!
//! [`validate_object`] is a pure function of (input, schema). It checks
//! every declared field and enumerates *all* violations found rather than
//! stopping at the first, so a caller gets one rejection describing the
//! whole input. On success it returns a normalized object containing
//! exactly the schema's fields with their declared JSON types.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{FieldType, ObjectSchema};

/// One failed constraint, tagged with the field, the offending value and
/// the constraint label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    /// Offending value; `null` when the field was absent.
    pub value: Value,
    /// Constraint label (`required`, `type`, `min_length`, ...).
    pub constraint: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        value: Value,
        constraint: &'static str,
        message: impl Into<String>,
    ) -> Self {
        FieldViolation {
            field: field.into(),
            value,
            constraint,
            message: message.into(),
        }
    }
}

/// The single error taxonomy of the validation layer.
///
/// Never recovered internally; it propagates to the caller as the
/// operation's 400 result.
#[derive(Debug, Clone, Error)]
#[error("validation failed with {} violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    #[must_use]
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Response body for the wire: the enumerated violation list.
    #[must_use]
    pub fn to_body(&self) -> Value {
        serde_json::json!({
            "error": "Validation failed",
            "violations": self.violations,
        })
    }

    #[must_use]
    pub fn cites(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Check one value against its declared type, appending any violations.
pub(crate) fn validate_value(
    field: &str,
    value: &Value,
    ty: &FieldType,
    out: &mut Vec<FieldViolation>,
) {
    match ty {
        FieldType::String { min_len, max_len } => match value.as_str() {
            Some(s) => {
                let len = s.chars().count();
                if let Some(min) = min_len {
                    if len < *min {
                        out.push(FieldViolation::new(
                            field,
                            value.clone(),
                            "min_length",
                            format!("must have at least {min} character(s)"),
                        ));
                    }
                }
                if let Some(max) = max_len {
                    if len > *max {
                        out.push(FieldViolation::new(
                            field,
                            value.clone(),
                            "max_length",
                            format!("must have at most {max} character(s)"),
                        ));
                    }
                }
            }
            None => out.push(type_violation(field, value, ty)),
        },
        FieldType::Integer { gt, le } => match value.as_i64() {
            Some(n) => {
                if let Some(gt) = gt {
                    if n <= *gt {
                        out.push(FieldViolation::new(
                            field,
                            value.clone(),
                            "greater_than",
                            format!("must be greater than {gt}"),
                        ));
                    }
                }
                if let Some(le) = le {
                    if n > *le {
                        out.push(FieldViolation::new(
                            field,
                            value.clone(),
                            "less_than_or_equal",
                            format!("must be less than or equal to {le}"),
                        ));
                    }
                }
            }
            None => out.push(type_violation(field, value, ty)),
        },
        FieldType::Boolean => {
            if !value.is_boolean() {
                out.push(type_violation(field, value, ty));
            }
        }
        FieldType::Enum { allowed } => match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            _ => out.push(FieldViolation::new(
                field,
                value.clone(),
                "enum",
                format!("must be one of: {}", allowed.join(", ")),
            )),
        },
    }
}

fn type_violation(field: &str, value: &Value, ty: &FieldType) -> FieldViolation {
    FieldViolation::new(
        field,
        value.clone(),
        "type",
        format!("must be a {}", ty.type_name()),
    )
}

pub(crate) fn required_violation(field: &str) -> FieldViolation {
    FieldViolation::new(field, Value::Null, "required", "field is required")
}

/// Validate a raw JSON object against a record schema.
///
/// Fields present in the input but absent from the schema are ignored; an
/// explicit JSON `null` counts as absent. Returns the normalized object on
/// success, or a [`ValidationError`] enumerating every violation.
pub fn validate_object(
    input: &Map<String, Value>,
    schema: &ObjectSchema,
) -> Result<Map<String, Value>, ValidationError> {
    let mut violations = Vec::new();
    let mut normalized = Map::new();

    for spec in &schema.fields {
        match input.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    violations.push(required_violation(spec.name));
                }
            }
            Some(value) => {
                validate_value(spec.name, value, &spec.ty, &mut violations);
                normalized.insert(spec.name.to_string(), value.clone());
            }
        }
    }

    if violations.is_empty() {
        Ok(normalized)
    } else {
        Err(ValidationError::new(violations))
    }
}
