use http::Method;

use crate::schema::{FieldSpec, ObjectSchema};

/// Where a declared parameter is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

impl std::fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamLocation::Path => write!(f, "path"),
            ParamLocation::Query => write!(f, "query"),
        }
    }
}

/// A declared request parameter: location plus field constraint.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub location: ParamLocation,
    pub spec: FieldSpec,
}

impl ParamSpec {
    #[must_use]
    pub fn path(spec: FieldSpec) -> Self {
        Self {
            location: ParamLocation::Path,
            spec,
        }
    }

    #[must_use]
    pub fn query(spec: FieldSpec) -> Self {
        Self {
            location: ParamLocation::Query,
            spec,
        }
    }
}

/// Declared shape of a route's request body.
#[derive(Debug, Clone)]
pub enum BodySchema {
    /// Route takes no body.
    None,
    /// The whole body is one record.
    Record(&'static ObjectSchema),
    /// The body is an object with one named part per record, each
    /// validated against its own schema.
    Embedded(Vec<(&'static str, &'static ObjectSchema)>),
}

/// One entry of the dispatch table: (method, path pattern) plus the
/// declared input specs and the name of the handler that serves it.
#[derive(Debug, Clone)]
pub struct RouteMeta {
    pub method: Method,
    pub path_pattern: String,
    pub handler_name: String,
    pub params: Vec<ParamSpec>,
    pub body: BodySchema,
}
