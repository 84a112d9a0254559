//! Request-level validation: a matched route's declared parameter specs
//! and body schema against the raw request input.
//!
//! Path and query parameters arrive as strings; they are decoded to their
//! declared JSON type first, then checked like any other field. Violations
//! from parameters and body are collected into a single
//! [`ValidationError`] so the caller sees every problem at once.

use serde_json::{Map, Value};

use super::core::{required_violation, validate_value, FieldViolation, ValidationError};
use crate::router::RouteMatch;
use crate::routes::{BodySchema, ParamLocation};
use crate::schema::{FieldType, ObjectSchema};

/// Decode a raw parameter string to its declared JSON type.
///
/// Returns `None` when the raw text does not parse as the declared type;
/// the caller reports that as a `type` violation.
#[must_use]
pub fn decode_param(raw: &str, ty: &FieldType) -> Option<Value> {
    match ty {
        FieldType::String { .. } | FieldType::Enum { .. } => Some(Value::String(raw.to_string())),
        FieldType::Integer { .. } => raw.parse::<i64>().ok().map(Value::from),
        FieldType::Boolean => raw.parse::<bool>().ok().map(Value::from),
    }
}

/// Validate a matched request against its route's declared specs.
///
/// On success returns the normalized body (`None` for body-less routes);
/// on failure, a [`ValidationError`] enumerating every parameter and body
/// violation found.
pub fn validate_request(
    route_match: &RouteMatch,
    body: Option<&Value>,
) -> Result<Option<Value>, ValidationError> {
    let mut violations = Vec::new();

    for param in &route_match.route.params {
        let name = param.spec.name;
        let raw = match param.location {
            ParamLocation::Path => route_match.get_path_param(name),
            ParamLocation::Query => route_match.get_query_param(name),
        };
        match raw {
            None => {
                if param.spec.required {
                    violations.push(required_violation(name));
                }
            }
            Some(raw) => match decode_param(raw, &param.spec.ty) {
                Some(value) => validate_value(name, &value, &param.spec.ty, &mut violations),
                None => violations.push(FieldViolation::new(
                    name,
                    Value::String(raw.to_string()),
                    "type",
                    format!("must be a {}", param.spec.ty.type_name()),
                )),
            },
        }
    }

    let normalized = match &route_match.route.body {
        BodySchema::None => None,
        BodySchema::Record(schema) => {
            validate_body_record(body, schema, None, &mut violations).map(Value::Object)
        }
        BodySchema::Embedded(parts) => match body {
            None => {
                violations.push(required_violation("body"));
                None
            }
            Some(Value::Object(map)) => {
                let mut out = Map::new();
                for (part, schema) in parts {
                    if let Some(normalized_part) =
                        validate_body_record(map.get(*part), schema, Some(*part), &mut violations)
                    {
                        out.insert((*part).to_string(), Value::Object(normalized_part));
                    }
                }
                Some(Value::Object(out))
            }
            Some(other) => {
                violations.push(FieldViolation::new(
                    "body",
                    other.clone(),
                    "type",
                    "request body must be a JSON object",
                ));
                None
            }
        },
    };

    if violations.is_empty() {
        Ok(normalized)
    } else {
        Err(ValidationError::new(violations))
    }
}

/// Validate one body record (the whole body, or a named embedded part).
///
/// Embedded violations carry their part name as a prefix (`person.age`).
fn validate_body_record(
    value: Option<&Value>,
    schema: &ObjectSchema,
    part: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<Map<String, Value>> {
    let field = part.unwrap_or("body");
    match value {
        None | Some(Value::Null) => {
            violations.push(required_violation(field));
            None
        }
        Some(Value::Object(map)) => match super::core::validate_object(map, schema) {
            Ok(normalized) => Some(normalized),
            Err(err) => {
                violations.extend(err.violations.into_iter().map(|mut v| {
                    if let Some(part) = part {
                        v.field = format!("{part}.{}", v.field);
                    }
                    v
                }));
                None
            }
        },
        Some(other) => {
            violations.push(FieldViolation::new(
                field,
                other.clone(),
                "type",
                format!("{} must be a JSON object", schema.name),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_param() {
        let int = FieldType::Integer { gt: None, le: None };
        assert_eq!(decode_param("42", &int), Some(json!(42)));
        assert_eq!(decode_param("-5", &int), Some(json!(-5)));
        assert_eq!(decode_param("forty", &int), None);

        assert_eq!(decode_param("true", &FieldType::Boolean), Some(json!(true)));
        assert_eq!(decode_param("yes", &FieldType::Boolean), None);

        let s = FieldType::String {
            min_len: None,
            max_len: None,
        };
        assert_eq!(decode_param("Ana", &s), Some(json!("Ana")));
    }
}
