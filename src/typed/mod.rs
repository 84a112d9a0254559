mod core;

pub use core::{spawn_typed, Handler, TypedHandlerRequest};
