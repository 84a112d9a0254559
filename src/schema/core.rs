//! Explicit schema descriptors for request records and parameters.
//!
//! Every record and parameter the service accepts is described by an
//! [`ObjectSchema`] or a single [`FieldSpec`] built once at startup. The
//! validator consumes these descriptors generically; nothing else in the
//! crate hard-codes a constraint.

/// Declared type of a field, with its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string with optional inclusive character-count bounds.
    String {
        min_len: Option<usize>,
        max_len: Option<usize>,
    },
    /// Integer with optional strict lower bound and inclusive upper bound.
    Integer { gt: Option<i64>, le: Option<i64> },
    /// Boolean.
    Boolean,
    /// Closed set of string labels.
    Enum { allowed: &'static [&'static str] },
}

impl FieldType {
    /// JSON type name used in violation messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String { .. } | FieldType::Enum { .. } => "string",
            FieldType::Integer { .. } => "integer",
            FieldType::Boolean => "boolean",
        }
    }
}

/// A single named field and its constraint.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub ty: FieldType,
}

impl FieldSpec {
    #[must_use]
    pub fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            required: true,
            ty,
        }
    }

    #[must_use]
    pub fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            required: false,
            ty,
        }
    }
}

/// Schema for a flat record: an ordered list of field specs.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    /// Record name, used in log output only.
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    #[must_use]
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
