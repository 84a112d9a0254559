//! Type-safe handler seam over the raw dispatcher.
//!
//! A typed handler declares its request type (built from a
//! [`HandlerRequest`] via `TryFrom`) and its serializable response type.
//! Conversion failures become 400 responses; the handler body only ever
//! sees well-formed data.

use may::sync::mpsc;
use serde::Serialize;
use std::convert::TryFrom;

use http::Method;
use tracing::error;

use crate::dispatcher::{Dispatcher, HandlerRequest, HandlerResponse};
use crate::router::ParamVec;

/// Trait implemented by typed coroutine handlers.
pub trait Handler: Send + 'static {
    /// Typed request, converted from [`HandlerRequest`].
    type Request: TryFrom<HandlerRequest, Error = anyhow::Error> + Send + 'static;
    /// Typed response, serialized to JSON.
    type Response: Serialize + Send + 'static;

    fn handle(&self, req: TypedHandlerRequest<Self::Request>) -> Self::Response;
}

/// Typed request data passed to a [`Handler`].
#[derive(Debug, Clone)]
pub struct TypedHandlerRequest<T> {
    pub method: Method,
    pub path: String,
    pub handler_name: String,
    pub path_params: ParamVec,
    pub query_params: ParamVec,
    /// Converted request data.
    pub data: T,
}

/// Spawn a typed handler coroutine and return its request sender.
///
/// # Safety
///
/// Spawns a `may` coroutine; the caller must ensure the runtime is
/// initialized. The coroutine replies exactly once per request, also on
/// conversion failure and panic.
pub unsafe fn spawn_typed<H>(handler: H) -> mpsc::Sender<HandlerRequest>
where
    H: Handler + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<HandlerRequest>();

    // SAFETY: spawn is unsafe per the may runtime; the closure is
    // Send + 'static and replies only through the per-request channel.
    let spawn_result = unsafe {
        may::coroutine::Builder::new()
            .stack_size(may::config().get_stack_size())
            .spawn(move || {
                let handler = handler;
                for req in rx.iter() {
                    let reply_tx = req.reply_tx.clone();
                    let handler_name = req.handler_name.clone();

                    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                        let reply_tx_inner = reply_tx.clone();

                        let data = match H::Request::try_from(req.clone()) {
                            Ok(v) => v,
                            Err(err) => {
                                let _ = reply_tx_inner.send(HandlerResponse::new(
                                    400,
                                    serde_json::json!({
                                        "error": "Invalid request data",
                                        "message": err.to_string()
                                    }),
                                ));
                                return;
                            }
                        };

                        let typed_req = TypedHandlerRequest {
                            method: req.method,
                            path: req.path,
                            handler_name: req.handler_name,
                            path_params: req.path_params,
                            query_params: req.query_params,
                            data,
                        };

                        let result = handler.handle(typed_req);

                        let _ = reply_tx_inner.send(HandlerResponse::new(
                            200,
                            serde_json::to_value(result).unwrap_or_else(
                                |_| serde_json::json!({"error": "Failed to serialize response"}),
                            ),
                        ));
                    }));

                    if let Err(panic) = result {
                        let _ = reply_tx.send(HandlerResponse::new(
                            500,
                            serde_json::json!({
                                "error": "Handler panicked",
                                "details": format!("{panic:?}")
                            }),
                        ));
                        error!(handler_name = %handler_name, "Handler panicked");
                    }
                }
            })
    };

    if let Err(e) = spawn_result {
        error!(error = %e, "Failed to spawn typed handler coroutine");
    }

    tx
}

impl Dispatcher {
    /// Register a typed handler under the given name.
    ///
    /// # Safety
    ///
    /// Same requirements as [`spawn_typed`].
    pub unsafe fn register_typed<H>(&mut self, name: &str, handler: H)
    where
        H: Handler + Send + 'static,
    {
        let name = name.to_string();
        let tx = unsafe { spawn_typed(handler) };
        self.handlers.insert(name, tx);
    }
}
