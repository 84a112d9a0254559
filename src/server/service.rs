//! The HTTP service: parse, route, validate, dispatch, respond.

use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::sync::Arc;

use http::Method;

use super::request::parse_request;
use super::response::{write_handler_response, write_json_error, write_validation_error};
use crate::dispatcher::Dispatcher;
use crate::ids::RequestId;
use crate::router::Router;
use crate::validator::validate_request;

/// The application service bound to the HTTP server.
///
/// Router and dispatcher are built once at startup and shared read-only
/// across connections.
#[derive(Clone)]
pub struct AppService {
    pub router: Arc<Router>,
    pub dispatcher: Arc<Dispatcher>,
}

impl AppService {
    #[must_use]
    pub fn new(router: Arc<Router>, dispatcher: Arc<Dispatcher>) -> Self {
        Self { router, dispatcher }
    }
}

/// Basic health check endpoint returning `{ "status": "ok" }`.
pub fn health_endpoint(res: &mut Response) -> io::Result<()> {
    write_handler_response(res, 200, json!({ "status": "ok" }));
    Ok(())
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let parsed = parse_request(req);

        if parsed.method == "GET" && parsed.path == "/health" {
            return health_endpoint(res);
        }

        let method: Method = match parsed.method.parse() {
            Ok(m) => m,
            Err(_) => {
                write_json_error(res, 400, json!({ "error": "Unsupported method" }));
                return Ok(());
            }
        };

        let Some(mut route_match) = self.router.route(method, &parsed.path) else {
            write_json_error(
                res,
                404,
                json!({"error": "Not Found", "method": parsed.method, "path": parsed.path}),
            );
            return Ok(());
        };
        route_match.query_params = parsed.query_params;

        let normalized_body = match validate_request(&route_match, parsed.body.as_ref()) {
            Ok(body) => body,
            Err(err) => {
                write_validation_error(res, &err);
                return Ok(());
            }
        };

        let request_id =
            RequestId::from_header_or_new(parsed.headers.get("x-request-id").map(String::as_str));

        match self
            .dispatcher
            .dispatch_with_request_id(route_match, normalized_body, request_id)
        {
            Some(handler_response) => {
                write_handler_response(res, handler_response.status, handler_response.body);
            }
            None => {
                write_json_error(
                    res,
                    500,
                    json!({
                        "error": "Handler failed or not registered",
                        "method": parsed.method,
                        "path": parsed.path
                    }),
                );
            }
        }
        Ok(())
    }
}
