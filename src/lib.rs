//! # personapi
//!
//! A small person-registry HTTP service built around a declarative
//! request/response validation core, running on the `may` coroutine
//! runtime and `may_minihttp`.
//!
//! Raw HTTP input (JSON bodies, query strings, path segments) is checked
//! against explicit per-field schema descriptors and either converted
//! into fully-typed records or rejected with a structured list of field
//! violations — every violation found, not just the first.
//!
//! ## Architecture
//!
//! - **[`schema`]** - explicit field/record constraint descriptors
//! - **[`model`]** - the Person/Location value objects and their schemas
//! - **[`validator`]** - pure validation of raw input against a schema,
//!   plus request-level parameter and body validation
//! - **[`routes`]** - the dispatch table built once at startup
//! - **[`router`]** - (method, path) matching and path-parameter
//!   extraction
//! - **[`dispatcher`]** - coroutine-per-handler dispatch over channels,
//!   with panic recovery and a middleware chain
//! - **[`typed`]** - type-safe handler trait (`TryFrom` requests,
//!   `Serialize` responses)
//! - **[`server`]** - `may_minihttp` binding: parse, route, validate,
//!   dispatch, respond
//! - **[`handlers`]** - the five operations the service exposes
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use personapi::{dispatcher::Dispatcher, handlers, router::Router};
//! use personapi::routes::build_routes;
//! use personapi::server::AppService;
//!
//! let router = Router::new(build_routes());
//! let mut dispatcher = Dispatcher::new();
//! unsafe { handlers::register_all(&mut dispatcher) };
//! let service = AppService::new(Arc::new(router), Arc::new(dispatcher));
//! // may_minihttp::HttpServer(service).start("0.0.0.0:8080");
//! ```
//!
//! ## Runtime considerations
//!
//! The service runs on the `may` coroutine runtime, not tokio. Handler
//! stack size is configurable via the `PERSONAPI_STACK_SIZE` environment
//! variable; blocking operations inside handlers should use `may`'s
//! facilities.

pub mod cli;
pub mod dispatcher;
pub mod handlers;
pub mod ids;
pub mod middleware;
pub mod model;
pub mod router;
pub mod routes;
pub mod runtime_config;
pub mod schema;
pub mod server;
pub mod typed;
pub mod validator;

pub use model::{HairColor, Location, Person};
pub use routes::{build_routes, BodySchema, ParamLocation, ParamSpec, RouteMeta};
pub use validator::{validate_object, validate_request, FieldViolation, ValidationError};
