//! Tests for request-level validation: declared parameter specs and body
//! schemas against raw request input.

use http::Method;
use serde_json::{json, Value};
use std::sync::Arc;

use personapi::router::{RouteMatch, Router};
use personapi::routes::build_routes;
use personapi::validator::validate_request;

fn matched(method: Method, path: &str, query: &[(&str, &str)]) -> RouteMatch {
    let router = Router::new(build_routes());
    let mut m = router.route(method, path).expect("route match");
    for (k, v) in query {
        m.query_params.push((Arc::from(*k), v.to_string()));
    }
    m
}

#[test]
fn test_valid_query_params() {
    let m = matched(
        Method::GET,
        "/person/detail",
        &[("name", "Gabriela"), ("age", "27")],
    );
    assert_eq!(validate_request(&m, None).unwrap(), None);
}

#[test]
fn test_optional_query_param_may_be_absent() {
    let m = matched(Method::GET, "/person/detail", &[("age", "27")]);
    assert!(validate_request(&m, None).is_ok());
}

#[test]
fn test_missing_required_query_param() {
    let m = matched(Method::GET, "/person/detail", &[("name", "Gabriela")]);
    let err = validate_request(&m, None).unwrap_err();
    assert!(err.cites("age"));
    assert_eq!(err.violations[0].constraint, "required");
}

#[test]
fn test_unparseable_integer_param_is_a_type_violation() {
    let m = matched(Method::GET, "/person/detail", &[("age", "old")]);
    let err = validate_request(&m, None).unwrap_err();
    assert_eq!(err.violations[0].field, "age");
    assert_eq!(err.violations[0].constraint, "type");
    assert_eq!(err.violations[0].value, json!("old"));
}

#[test]
fn test_name_length_bounds() {
    let m = matched(
        Method::GET,
        "/person/detail",
        &[("name", "Maximiliana"), ("age", "27")],
    );
    let err = validate_request(&m, None).unwrap_err();
    assert!(err.cites("name"));
    assert_eq!(err.violations[0].constraint, "max_length");
}

#[test]
fn test_path_param_strict_lower_bound() {
    let m = matched(Method::GET, "/person/detail/0", &[]);
    let err = validate_request(&m, None).unwrap_err();
    assert!(err.cites("person_id"));
    assert_eq!(err.violations[0].constraint, "greater_than");

    let m = matched(Method::GET, "/person/detail/1", &[]);
    assert!(validate_request(&m, None).is_ok());
}

#[test]
fn test_body_record_normalizes_and_drops_unknown_fields() {
    let m = matched(Method::POST, "/person/new", &[]);
    let body = json!({
        "first_name": "Ana",
        "last_name": "Gomez",
        "age": 30,
        "nickname": "annie"
    });
    let normalized = validate_request(&m, Some(&body)).unwrap().expect("body");
    assert_eq!(normalized["age"], json!(30));
    assert!(normalized.get("nickname").is_none());
}

#[test]
fn test_missing_body_for_record_route() {
    let m = matched(Method::POST, "/person/new", &[]);
    let err = validate_request(&m, None).unwrap_err();
    assert!(err.cites("body"));
    assert_eq!(err.violations[0].constraint, "required");
}

#[test]
fn test_non_object_body_for_record_route() {
    let m = matched(Method::POST, "/person/new", &[]);
    let err = validate_request(&m, Some(&json!([1, 2]))).unwrap_err();
    assert!(err.cites("body"));
    assert_eq!(err.violations[0].constraint, "type");
}

#[test]
fn test_body_violations_are_enumerated_with_params() {
    // person_id invalid AND the body broken: both reported at once.
    let m = matched(Method::PUT, "/person/0", &[]);
    let body = json!({
        "person": {"first_name": "", "last_name": "B", "age": 101},
        "location": {"city": "Lima"}
    });
    let err = validate_request(&m, Some(&body)).unwrap_err();
    assert!(err.cites("person_id"));
    assert!(err.cites("person.first_name"));
    assert!(err.cites("person.age"));
    assert!(err.cites("location.country"));
    assert_eq!(err.violations.len(), 4);
}

#[test]
fn test_embedded_body_missing_part() {
    let m = matched(Method::PUT, "/person/1", &[]);
    let body = json!({ "person": {"first_name": "A", "last_name": "B", "age": 5} });
    let err = validate_request(&m, Some(&body)).unwrap_err();
    assert!(err.cites("location"));
    assert_eq!(err.violations[0].constraint, "required");
}

#[test]
fn test_embedded_body_normalizes_both_parts() {
    let m = matched(Method::PUT, "/person/1", &[]);
    let body = json!({
        "person": {"first_name": "A", "last_name": "B", "age": 5},
        "location": {"city": "Lima", "country": "Peru"}
    });
    let normalized = validate_request(&m, Some(&body)).unwrap().expect("body");
    assert_eq!(normalized["person"]["age"], json!(5));
    assert_eq!(normalized["location"]["city"], json!("Lima"));
}

#[test]
fn test_body_less_route_returns_no_normalized_body() {
    let m = matched(Method::GET, "/", &[]);
    let out: Option<Value> = validate_request(&m, None).unwrap();
    assert!(out.is_none());
}
