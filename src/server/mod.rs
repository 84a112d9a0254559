pub mod request;
pub mod response;
pub mod service;

pub use request::{parse_query_params, parse_request, ParsedRequest};
pub use response::{write_handler_response, write_json_error, write_validation_error};
pub use service::AppService;
