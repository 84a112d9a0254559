//! Coroutine-based request dispatch.
//!
//! Every registered handler owns a long-lived `may` coroutine consuming
//! [`HandlerRequest`] messages from an mpsc channel; each request carries
//! a fresh reply channel for its [`HandlerResponse`]. Handler panics are
//! caught and converted to 500 responses so one failing handler cannot
//! take the server down.

use may::coroutine;
use may::sync::mpsc;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use http::Method;
use tracing::{debug, error, info};

use crate::ids::RequestId;
use crate::middleware::Middleware;
use crate::router::{ParamVec, RouteMatch};
use crate::runtime_config::RuntimeConfig;

/// Request data passed to a handler coroutine.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique request id for log correlation.
    pub request_id: RequestId,
    pub method: Method,
    /// The matched route pattern, not the concrete request path.
    pub path: String,
    pub handler_name: String,
    pub path_params: ParamVec,
    pub query_params: ParamVec,
    /// Normalized JSON request body, if the route declared one.
    pub body: Option<Value>,
    /// Channel for sending the response back to the dispatcher.
    pub reply_tx: mpsc::Sender<HandlerResponse>,
}

impl HandlerRequest {
    /// Get a path parameter by name (last write wins on duplicates).
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter by name (last write wins on duplicates).
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Response data sent back from a handler coroutine.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: Value,
}

impl HandlerResponse {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::new(status, serde_json::json!({ "error": message }))
    }
}

/// Channel sender that feeds requests to one handler coroutine.
pub type HandlerSender = mpsc::Sender<HandlerRequest>;

/// Dispatcher routing matched requests to registered handler coroutines.
#[derive(Clone, Default)]
pub struct Dispatcher {
    /// Map of handler names to their channel senders.
    pub handlers: HashMap<String, HandlerSender>,
    /// Ordered middleware applied around every dispatch.
    pub middlewares: Vec<Arc<dyn Middleware>>,
}

impl Dispatcher {
    /// Create an empty dispatcher; handlers are registered afterwards.
    #[must_use]
    pub fn new() -> Self {
        Dispatcher {
            handlers: HashMap::new(),
            middlewares: Vec::new(),
        }
    }

    /// Add middleware to the pipeline. Middleware runs in registration
    /// order: `before` hooks ahead of the handler, `after` hooks once the
    /// response is in hand.
    pub fn add_middleware(&mut self, mw: Arc<dyn Middleware>) {
        self.middlewares.push(mw);
    }

    /// Register a handler function under the given name.
    ///
    /// Spawns a coroutine consuming requests from a channel. The handler
    /// is wrapped with panic recovery; a panicking invocation produces a
    /// 500 response instead of killing the coroutine loop.
    ///
    /// # Safety
    ///
    /// Calls `may::coroutine::Builder::spawn`, which is unsafe in the
    /// `may` runtime. The caller must ensure the runtime is initialized
    /// and that the handler sends a response for every request it
    /// receives.
    pub unsafe fn register_handler<F>(&mut self, name: &str, handler_fn: F)
    where
        F: Fn(HandlerRequest) + Send + 'static + Clone,
    {
        let (tx, rx) = mpsc::channel::<HandlerRequest>();
        let name = name.to_string();
        let coroutine_name = name.clone();
        let stack_size = RuntimeConfig::from_env().stack_size;

        // SAFETY: spawn is unsafe per the may runtime; the closure is
        // Send + 'static and replies only through the per-request channel.
        let spawn_result = unsafe {
            coroutine::Builder::new()
                .stack_size(stack_size)
                .spawn(move || {
                    debug!(
                        handler_name = %coroutine_name,
                        stack_size = stack_size,
                        "Handler coroutine start"
                    );

                    for req in rx.iter() {
                        let reply_tx = req.reply_tx.clone();
                        let handler_name = req.handler_name.clone();
                        let request_id = req.request_id;

                        if let Err(panic) =
                            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                                handler_fn(req);
                            }))
                        {
                            let panic_message = format!("{panic:?}");
                            error!(
                                request_id = %request_id,
                                handler_name = %handler_name,
                                panic_message = %panic_message,
                                "Handler panicked"
                            );
                            let _ = reply_tx.send(HandlerResponse::error(
                                500,
                                &format!("Handler panicked: {panic_message}"),
                            ));
                        }
                    }
                })
        };

        if let Err(e) = spawn_result {
            error!(
                handler_name = %name,
                error = %e,
                stack_size = stack_size,
                "Failed to spawn handler coroutine"
            );
            return;
        }

        self.handlers.insert(name, tx);
    }

    /// Dispatch a request, generating a fresh request id.
    #[must_use]
    pub fn dispatch(&self, route_match: RouteMatch, body: Option<Value>) -> Option<HandlerResponse> {
        self.dispatch_with_request_id(route_match, body, RequestId::new())
    }

    /// Dispatch a request with a caller-supplied request id (taken from
    /// an `X-Request-Id` header, or generated by the server).
    ///
    /// Returns `None` when no handler is registered for the matched
    /// route. A handler whose channel has closed yields a 503 rather
    /// than a dropped connection.
    pub fn dispatch_with_request_id(
        &self,
        route_match: RouteMatch,
        body: Option<Value>,
        request_id: RequestId,
    ) -> Option<HandlerResponse> {
        let (reply_tx, reply_rx) = mpsc::channel();

        let tx = match self.handlers.get(&route_match.handler_name) {
            Some(tx) => tx,
            None => {
                error!(
                    handler_name = %route_match.handler_name,
                    available_handlers = self.handlers.len(),
                    "Handler not found"
                );
                return None;
            }
        };

        let request = HandlerRequest {
            request_id,
            method: route_match.route.method.clone(),
            path: route_match.route.path_pattern.clone(),
            handler_name: route_match.handler_name,
            path_params: route_match.path_params,
            query_params: route_match.query_params,
            body,
            reply_tx,
        };

        let mut early_resp: Option<HandlerResponse> = None;
        for mw in &self.middlewares {
            if early_resp.is_none() {
                early_resp = mw.before(&request);
            } else {
                let _ = mw.before(&request);
            }
        }

        let (mut resp, latency) = if let Some(r) = early_resp {
            (r, Duration::from_millis(0))
        } else {
            let start = Instant::now();

            if let Err(e) = tx.send(request.clone()) {
                error!(
                    request_id = %request_id,
                    handler_name = %request.handler_name,
                    error = %e,
                    "Failed to send request to handler"
                );
                return None;
            }

            match reply_rx.recv() {
                Ok(response) => {
                    info!(
                        request_id = %request_id,
                        handler_name = %request.handler_name,
                        latency_ms = start.elapsed().as_millis() as u64,
                        status = response.status,
                        "Handler response received"
                    );
                    (response, start.elapsed())
                }
                Err(e) => {
                    error!(
                        request_id = %request_id,
                        handler_name = %request.handler_name,
                        error = %e,
                        "Handler channel closed - handler may have crashed"
                    );
                    return Some(HandlerResponse::error(
                        503,
                        &format!("Handler '{}' is not responding", request.handler_name),
                    ));
                }
            }
        };

        for mw in &self.middlewares {
            mw.after(&request, &mut resp, latency);
        }

        Some(resp)
    }
}
