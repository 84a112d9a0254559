mod core;

pub use core::{Dispatcher, HandlerRequest, HandlerResponse, HandlerSender};
