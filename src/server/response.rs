use may_minihttp::Response;
use serde_json::Value;

use crate::validator::ValidationError;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

pub fn write_handler_response(res: &mut Response, status: u16, body: Value) {
    let reason = status_reason(status);
    res.status_code(status as usize, reason);
    match body {
        Value::String(s) => {
            res.header("Content-Type: text/plain");
            res.body_vec(s.into_bytes());
        }
        other => {
            res.header("Content-Type: application/json");
            res.body_vec(serde_json::to_vec(&other).unwrap_or_default());
        }
    }
}

pub fn write_json_error(res: &mut Response, status: u16, body: Value) {
    let reason = status_reason(status);
    res.status_code(status as usize, reason);
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}

/// Write the structured 400 rejection for a failed validation.
pub fn write_validation_error(res: &mut Response, err: &ValidationError) {
    write_json_error(res, 400, err.to_body());
}
