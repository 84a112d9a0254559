mod build;
mod types;

pub use build::build_routes;
pub use types::{BodySchema, ParamLocation, ParamSpec, RouteMeta};
