//! End-to-end tests for the five operations: validation and dispatch
//! wired together the way the HTTP service drives them.

use http::Method;
use serde_json::{json, Value};
use std::sync::Arc;

use personapi::dispatcher::{Dispatcher, HandlerResponse};
use personapi::handlers;
use personapi::router::Router;
use personapi::routes::build_routes;
use personapi::runtime_config::RuntimeConfig;
use personapi::validator::{validate_request, ValidationError};

struct App {
    router: Router,
    dispatcher: Dispatcher,
}

fn app() -> App {
    may::config().set_stack_size(RuntimeConfig::from_env().stack_size);
    let router = Router::new(build_routes());
    let mut dispatcher = Dispatcher::new();
    unsafe {
        handlers::register_all(&mut dispatcher);
    }
    App { router, dispatcher }
}

impl App {
    /// Route, validate and dispatch, the way `AppService::call` does.
    fn call(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<HandlerResponse, ValidationError> {
        let mut route_match = self.router.route(method, path).expect("route match");
        for (k, v) in query {
            route_match.query_params.push((Arc::from(*k), v.to_string()));
        }
        let normalized = validate_request(&route_match, body.as_ref())?;
        Ok(self
            .dispatcher
            .dispatch(route_match, normalized)
            .expect("dispatch"))
    }
}

#[test]
fn test_home_greeting() {
    let app = app();
    let resp = app.call(Method::GET, "/", &[], None).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({"Hello": "World"}));
}

#[test]
fn test_create_echoes_valid_person_unchanged() {
    let app = app();
    let person = json!({
        "first_name": "Ana",
        "last_name": "Gomez",
        "age": 30,
        "hair_color": "brown",
        "is_married": true
    });
    let resp = app
        .call(Method::POST, "/person/new", &[], Some(person.clone()))
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, person);
}

#[test]
fn test_create_is_idempotent() {
    let app = app();
    let person = json!({
        "first_name": "Ana",
        "last_name": "Gomez",
        "age": 30,
        "hair_color": "brown",
        "is_married": true
    });
    let first = app
        .call(Method::POST, "/person/new", &[], Some(person.clone()))
        .unwrap();
    let second = app
        .call(Method::POST, "/person/new", &[], Some(person))
        .unwrap();
    assert_eq!(first.status, second.status);
    assert_eq!(first.body, second.body);
}

#[test]
fn test_create_rejects_age_out_of_bounds() {
    let app = app();
    for age in [0, -3, 101] {
        let person = json!({"first_name": "Ana", "last_name": "Gomez", "age": age});
        let err = app
            .call(Method::POST, "/person/new", &[], Some(person))
            .unwrap_err();
        assert!(err.cites("age"), "age {age} must be rejected");
    }
}

#[test]
fn test_create_rejects_bad_first_name_length() {
    let app = app();
    for name in [String::new(), "x".repeat(51)] {
        let person = json!({"first_name": name, "last_name": "Gomez", "age": 30});
        let err = app
            .call(Method::POST, "/person/new", &[], Some(person))
            .unwrap_err();
        assert!(err.cites("first_name"));
    }
}

#[test]
fn test_create_rejects_unknown_hair_color() {
    let app = app();
    let person = json!({
        "first_name": "Ana",
        "last_name": "Gomez",
        "age": 30,
        "hair_color": "green"
    });
    let err = app
        .call(Method::POST, "/person/new", &[], Some(person))
        .unwrap_err();
    assert!(err.cites("hair_color"));
    assert_eq!(err.violations[0].constraint, "enum");
}

#[test]
fn test_query_lookup_maps_name_to_age() {
    let app = app();
    let resp = app
        .call(
            Method::GET,
            "/person/detail",
            &[("name", "Gabriela"), ("age", "27")],
            None,
        )
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({"Gabriela": 27}));
}

#[test]
fn test_query_lookup_without_name_uses_absent_marker() {
    let app = app();
    let resp = app
        .call(Method::GET, "/person/detail", &[("age", "27")], None)
        .unwrap();
    assert_eq!(resp.body, json!({"null": 27}));
}

#[test]
fn test_query_lookup_requires_age() {
    let app = app();
    let err = app
        .call(Method::GET, "/person/detail", &[("name", "Gabriela")], None)
        .unwrap_err();
    assert!(err.cites("age"));
}

#[test]
fn test_path_lookup_acknowledges_existing_id() {
    let app = app();
    let resp = app
        .call(Method::GET, "/person/detail/7", &[], None)
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({"7": "It's exists!"}));
}

#[test]
fn test_path_lookup_rejects_non_positive_id() {
    let app = app();
    for path in ["/person/detail/0", "/person/detail/-5"] {
        let err = app.call(Method::GET, path, &[], None).unwrap_err();
        assert!(err.cites("person_id"), "{path} must be rejected");
    }
}

#[test]
fn test_update_merges_person_and_location() {
    let app = app();
    let body = json!({
        "person": {"first_name": "A", "last_name": "B", "age": 5},
        "location": {"city": "Lima", "country": "Peru"}
    });
    let resp = app
        .call(Method::PUT, "/person/1", &[], Some(body))
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.body,
        json!({
            "1": {
                "first_name": "A",
                "last_name": "B",
                "age": 5,
                "hair_color": null,
                "is_married": null,
                "city": "Lima",
                "state": null,
                "country": "Peru"
            }
        })
    );
}

#[test]
fn test_update_rejects_non_positive_id() {
    let app = app();
    let body = json!({
        "person": {"first_name": "A", "last_name": "B", "age": 5},
        "location": {"city": "Lima", "country": "Peru"}
    });
    let err = app
        .call(Method::PUT, "/person/0", &[], Some(body))
        .unwrap_err();
    assert!(err.cites("person_id"));
}

#[test]
fn test_update_cites_embedded_fields() {
    let app = app();
    let body = json!({
        "person": {"first_name": "A", "last_name": "B", "age": 5},
        "location": {"city": "", "country": "Peru"}
    });
    let err = app
        .call(Method::PUT, "/person/1", &[], Some(body))
        .unwrap_err();
    assert!(err.cites("location.city"));
}
