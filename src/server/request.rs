use may_minihttp::Request;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use tracing::{debug, info};

use crate::router::ParamVec;

/// Parsed HTTP request data used by `AppService`.
#[derive(Debug, PartialEq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, ...).
    pub method: String,
    /// Request path with the query string stripped.
    pub path: String,
    /// HTTP headers (lowercase keys).
    pub headers: HashMap<String, String>,
    /// Parsed query string parameters, in wire order.
    pub query_params: ParamVec,
    /// Parsed JSON body, if any.
    pub body: Option<serde_json::Value>,
}

/// Parse query string parameters from a URL path.
///
/// Everything after `?` is percent-decoded into name/value pairs.
#[must_use]
pub fn parse_query_params(path: &str) -> ParamVec {
    let mut params = ParamVec::new();
    if let Some(pos) = path.find('?') {
        let query_str = &path[pos + 1..];
        for (k, v) in url::form_urlencoded::parse(query_str.as_bytes()) {
            params.push((Arc::from(k.as_ref()), v.to_string()));
        }
    }
    params
}

/// Extract method, path, headers, query parameters and JSON body from a
/// raw `may_minihttp` request.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    let query_params = parse_query_params(&raw_path);
    debug!(
        param_count = query_params.len(),
        query_params = ?query_params,
        "Query params parsed"
    );

    let body = {
        let mut body_str = String::new();
        match req.body().read_to_string(&mut body_str) {
            Ok(size) if size > 0 => {
                debug!(body_size_bytes = size, "Request body read");
                serde_json::from_str(&body_str).ok()
            }
            _ => None,
        }
    };

    info!(
        method = %method,
        path = %path,
        header_count = headers.len(),
        has_body = body.is_some(),
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        headers,
        query_params,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let q = parse_query_params("/person/detail?name=Gabriela&age=27");
        assert_eq!(q.len(), 2);
        assert_eq!(q[0], (Arc::from("name"), "Gabriela".to_string()));
        assert_eq!(q[1], (Arc::from("age"), "27".to_string()));
    }

    #[test]
    fn test_parse_query_params_decodes_percent_encoding() {
        let q = parse_query_params("/p?name=Ana%20Mar%C3%ADa");
        assert_eq!(q[0].1, "Ana María");
    }

    #[test]
    fn test_no_query_string() {
        assert!(parse_query_params("/person/detail").is_empty());
    }
}
