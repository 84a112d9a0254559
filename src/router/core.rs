//! Path matching over the dispatch table.
//!
//! Each path pattern (`/person/detail/{person_id}`) is compiled once at
//! startup into an anchored regex with an ordered capture per `{name}`
//! segment. Matching scans the table for the first (method, pattern) hit
//! and extracts path parameters into a stack-allocated vector.

use regex::Regex;
use smallvec::SmallVec;
use std::sync::Arc;

use http::Method;
use tracing::{debug, info, warn};

use crate::routes::RouteMeta;

/// Maximum number of path/query parameters before heap allocation.
/// The routes here carry at most a couple of parameters each.
pub const MAX_INLINE_PARAMS: usize = 4;

/// Stack-allocated parameter storage for the dispatch hot path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of matching a request path against the route table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route entry (shared, not cloned per request).
    pub route: Arc<RouteMeta>,
    /// Path parameters extracted from the URL (`{person_id}` → `"42"`).
    pub path_params: ParamVec,
    /// Name of the handler that serves this route.
    pub handler_name: String,
    /// Query string parameters (populated by the server).
    pub query_params: ParamVec,
}

impl RouteMatch {
    /// Get a path parameter by name (last write wins on duplicates).
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter by name (last write wins on duplicates,
    /// e.g. `?age=10&age=20` resolves to `20`).
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Router matching HTTP requests against the startup-built route table.
#[derive(Clone)]
pub struct Router {
    routes: Vec<(Method, Regex, Arc<RouteMeta>, Vec<String>)>,
}

impl Router {
    /// Compile the route table into matchers.
    #[must_use]
    pub fn new(routes: Vec<RouteMeta>) -> Self {
        let routes: Vec<_> = routes
            .into_iter()
            .map(|route| {
                let (regex, param_names) = Self::path_to_regex(&route.path_pattern);
                let method = route.method.clone();
                (method, regex, Arc::new(route), param_names)
            })
            .collect();

        let routes_summary: Vec<String> = routes
            .iter()
            .map(|(method, _, meta, _)| format!("{} {}", method, meta.path_pattern))
            .collect();

        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Self { routes }
    }

    /// Print all registered routes to stdout.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for (method, _re, meta, _params) in &self.routes {
            println!(
                "[route] {method} {} -> {}",
                meta.path_pattern, meta.handler_name
            );
        }
    }

    /// Match an HTTP request to a route.
    ///
    /// Returns `None` when no route matches, which the server turns into
    /// a 404. Query parameters are filled in by the caller.
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");

        for (m, regex, meta, param_names) in &self.routes {
            if *m != method {
                continue;
            }
            let Some(caps) = regex.captures(path) else {
                continue;
            };

            let mut path_params = ParamVec::new();
            for (idx, name) in param_names.iter().enumerate() {
                if let Some(value) = caps.get(idx + 1) {
                    path_params.push((Arc::from(name.as_str()), value.as_str().to_string()));
                }
            }

            info!(
                method = %method,
                path = %path,
                handler_name = %meta.handler_name,
                route_pattern = %meta.path_pattern,
                path_params = ?path_params,
                "Route matched"
            );

            return Some(RouteMatch {
                route: Arc::clone(meta),
                path_params,
                handler_name: meta.handler_name.clone(),
                query_params: ParamVec::new(),
            });
        }

        warn!(method = %method, path = %path, "No route matched");
        None
    }

    /// Convert a path pattern to a regex and extract parameter names.
    ///
    /// `/person/detail/{person_id}` becomes `^/person/detail/([^/]+)$`
    /// with the ordered name list `["person_id"]`.
    pub(crate) fn path_to_regex(path: &str) -> (Regex, Vec<String>) {
        if path == "/" {
            #[allow(clippy::expect_used)]
            return (
                Regex::new(r"^/$").expect("failed to compile path regex"),
                Vec::new(),
            );
        }

        let mut pattern = String::with_capacity(path.len() + 5);
        pattern.push('^');
        let mut param_names = Vec::with_capacity(path.matches('{').count());

        for segment in path.split('/') {
            if segment.starts_with('{') && segment.ends_with('}') {
                let param_name = segment
                    .trim_start_matches('{')
                    .trim_end_matches('}')
                    .to_string();
                pattern.push_str("/([^/]+)");
                param_names.push(param_name);
            } else if !segment.is_empty() {
                pattern.push('/');
                pattern.push_str(segment);
            }
        }

        pattern.push('$');
        // Patterns come from the startup route table, not from requests.
        #[allow(clippy::expect_used)]
        let regex = Regex::new(&pattern).expect("failed to compile path regex");

        (regex, param_names)
    }
}
