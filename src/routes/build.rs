//! The dispatch table, built once at startup and handed to the router.
//!
//! Every route the service exposes is declared here: method, path
//! pattern, parameter constraints and body schema. There is no ambient
//! registry; whatever is not in this table does not exist.

use http::Method;

use super::types::{BodySchema, ParamSpec, RouteMeta};
use crate::model::{Location, Person};
use crate::schema::{FieldSpec, FieldType};

/// Build the route table.
#[must_use]
pub fn build_routes() -> Vec<RouteMeta> {
    vec![
        RouteMeta {
            method: Method::GET,
            path_pattern: "/".to_string(),
            handler_name: "home".to_string(),
            params: Vec::new(),
            body: BodySchema::None,
        },
        RouteMeta {
            method: Method::POST,
            path_pattern: "/person/new".to_string(),
            handler_name: "create_person".to_string(),
            params: Vec::new(),
            body: BodySchema::Record(Person::schema()),
        },
        RouteMeta {
            method: Method::GET,
            path_pattern: "/person/detail".to_string(),
            handler_name: "query_person".to_string(),
            params: vec![
                ParamSpec::query(FieldSpec::optional(
                    "name",
                    FieldType::String {
                        min_len: Some(1),
                        max_len: Some(10),
                    },
                )),
                ParamSpec::query(FieldSpec::required(
                    "age",
                    FieldType::Integer { gt: None, le: None },
                )),
            ],
            body: BodySchema::None,
        },
        RouteMeta {
            method: Method::GET,
            path_pattern: "/person/detail/{person_id}".to_string(),
            handler_name: "lookup_person".to_string(),
            params: vec![ParamSpec::path(FieldSpec::required(
                "person_id",
                FieldType::Integer {
                    gt: Some(0),
                    le: None,
                },
            ))],
            body: BodySchema::None,
        },
        RouteMeta {
            method: Method::PUT,
            path_pattern: "/person/{person_id}".to_string(),
            handler_name: "update_person".to_string(),
            params: vec![ParamSpec::path(FieldSpec::required(
                "person_id",
                FieldType::Integer {
                    gt: Some(0),
                    le: None,
                },
            ))],
            body: BodySchema::Embedded(vec![
                ("person", Person::schema()),
                ("location", Location::schema()),
            ]),
        },
    ]
}
