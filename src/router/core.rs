//! Router core module - registration and the request hot path.
//!
//! Resolution allocates only for captured parameter values; up to
//! [`MAX_INLINE_PARAMS`] bindings live on the stack.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::{Method, Request};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::error::RouterError;
use super::matcher::SegmentMatcher;
use super::node::RouteNode;
use crate::runtime_config::RouterConfig;

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
///
/// Param names are `Arc<str>` shared with the tree's matchers; values are
/// per-request text copied out of the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Split a path into its non-empty `/`-separated segments
///
/// Leading, trailing and repeated slashes are dropped, so `//a/b/` and `a/b`
/// produce the same segments.
#[inline]
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Add a binding, replacing the value if `key` was already captured
#[inline]
fn bind_param(params: &mut ParamVec, key: Arc<str>, value: String) {
    match params.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => params.push((key, value)),
    }
}

/// Path parameters bound to a request
///
/// Inserted into `http::Request` extensions by [`Router::resolve_request`] so
/// handlers further down can look values up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(ParamVec);

impl PathParams {
    /// Value captured for `name`
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Owned copy as a `HashMap`
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

impl From<ParamVec> for PathParams {
    fn from(params: ParamVec) -> Self {
        Self(params)
    }
}

/// Result of successfully resolving a request path
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    /// Handler registered for the path and method
    pub handler: &'r H,
    /// Path parameters captured along the way, keys unique
    pub path_params: ParamVec,
    /// Normalized pattern of the matched route (e.g. `/users/{id}`)
    pub pattern: Arc<str>,
}

impl<'r, H> RouteMatch<'r, H> {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to a HashMap
    /// Note: This allocates - use get_path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Detach the parameters from the borrowed handler
    #[must_use]
    pub fn into_params(self) -> PathParams {
        PathParams(self.path_params)
    }
}

/// Router that resolves request paths against a segment tree
///
/// Built once at startup through [`register`](Router::register) /
/// [`register_route`](Router::register_route), then queried read-only.
/// Registration takes `&mut self` and resolution `&self`, so a built router
/// can sit behind an `Arc` and serve any number of threads without locking.
///
/// # Example
///
/// ```
/// use http::Method;
/// use trierouter::router::Router;
///
/// let mut router = Router::new();
/// router.register(Method::GET, "/users/{id:^\\d+$}", "get_user").unwrap();
///
/// let m = router.resolve("/users/42", &Method::GET).unwrap();
/// assert_eq!(*m.handler, "get_user");
/// assert_eq!(m.get_path_param("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct Router<H> {
    /// Empty root segment every path starts from
    root: RouteNode<H>,
    config: RouterConfig,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    /// Create an empty router with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create an empty router with the given configuration
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            root: RouteNode::root(),
            config,
        }
    }

    /// Register a single handler for `method` on `path`
    pub fn register(&mut self, method: Method, path: &str, handler: H) -> Result<(), RouterError> {
        self.register_route(path, [(method, handler)])
    }

    /// Register several method handlers on one path
    ///
    /// Every segment is parsed before the tree is touched, so a malformed
    /// regex leaves the router exactly as it was. Re-registering a method on
    /// an existing path replaces its handler.
    ///
    /// # Errors
    ///
    /// `RouterError::InvalidRoutePattern` when a `{name:pattern}` segment
    /// does not compile. Treat it as fatal: the route table is broken.
    pub fn register_route<I>(&mut self, path: &str, endpoints: I) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = (Method, H)>,
    {
        let parsed = split_segments(path)
            .map(|segment| SegmentMatcher::parse(segment).map(|m| (segment, m)))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| {
                error!(path = %path, error = %e, "Rejected route with invalid pattern");
            })?;

        let mut current = &mut self.root;
        for (segment, matcher) in parsed {
            current = current.child_or_insert(segment, matcher);
        }
        current.insert_endpoints(endpoints);

        info!(
            route_pattern = %current.pattern(),
            methods = ?current.allowed_methods(),
            "Route registered"
        );
        Ok(())
    }

    /// Resolve `path` for `method`
    ///
    /// Walks one tree level per path segment, capturing a binding for every
    /// parameter node on the way.
    ///
    /// # Errors
    ///
    /// * `RouterError::NoRouteMatch` - some segment has no matching child (404)
    /// * `RouterError::MethodNotAllowed` - the path exists but `method` is not bound (405)
    pub fn resolve(&self, path: &str, method: &Method) -> Result<RouteMatch<'_, H>, RouterError> {
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let result = self.walk(path, method);
        let match_duration = match_start.elapsed();

        match &result {
            Ok(matched) if match_duration > self.config.slow_match_threshold => {
                warn!(
                    method = %method,
                    path = %path,
                    route_pattern = %matched.pattern,
                    path_params = ?matched.path_params,
                    duration_us = match_duration.as_micros(),
                    "Slow route matching detected"
                );
            }
            Ok(matched) => {
                info!(
                    method = %method,
                    path = %path,
                    route_pattern = %matched.pattern,
                    path_params = ?matched.path_params,
                    duration_us = match_duration.as_micros(),
                    "Route matched"
                );
            }
            Err(RouterError::InvariantViolation { segment }) => {
                error!(
                    method = %method,
                    path = %path,
                    segment = %segment,
                    "Parameter context requested on literal node"
                );
            }
            Err(e) => {
                warn!(
                    method = %method,
                    path = %path,
                    status = e.status_code(),
                    duration_us = match_duration.as_micros(),
                    "No route matched: {}",
                    e
                );
            }
        }

        result
    }

    fn walk(&self, path: &str, method: &Method) -> Result<RouteMatch<'_, H>, RouterError> {
        let mut params = ParamVec::new();
        let mut current = &self.root;

        for segment in split_segments(path) {
            current = current
                .find_match(segment)
                .ok_or_else(|| RouterError::NoRouteMatch {
                    path: path.to_owned(),
                })?;
            if current.matcher().is_some() {
                let (key, value) = current.context(segment)?;
                bind_param(&mut params, key, value);
            }
        }

        let handler = current
            .endpoint(method)
            .ok_or_else(|| RouterError::MethodNotAllowed {
                method: method.clone(),
                path: path.to_owned(),
                allowed: current.allowed_methods(),
            })?;

        Ok(RouteMatch {
            handler,
            path_params: params,
            pattern: Arc::clone(current.pattern()),
        })
    }

    /// Resolve an `http::Request` and bind its path parameters
    ///
    /// Uses the request method and `uri().path()` (the query string is not
    /// part of routing). On success the captured parameters are inserted into
    /// the request extensions as [`PathParams`].
    pub fn resolve_request<B>(&self, req: &mut Request<B>) -> Result<&H, RouterError> {
        let matched = self.resolve(req.uri().path(), req.method())?;
        let handler = matched.handler;
        req.extensions_mut().insert(matched.into_params());
        Ok(handler)
    }

    /// All `(method, pattern)` bindings, depth first in registration order
    #[must_use]
    pub fn routes(&self) -> Vec<(Method, Arc<str>)> {
        let mut out = Vec::new();
        self.root.collect_routes(&mut out);
        out
    }

    /// Root node of the routing tree
    #[must_use]
    pub fn root(&self) -> &RouteNode<H> {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Displayable dump of the tree
    #[must_use]
    pub fn tree(&self) -> TreeDump<'_, H> {
        TreeDump { root: &self.root }
    }

    /// Print the routing tree to stdout
    ///
    /// Useful for debugging and verifying that routes are loaded correctly.
    pub fn print_tree(&self) {
        print!("{}", self.tree());
    }
}

/// Indented listing of registered segments and their methods
///
/// ```text
/// Routing Tree:
///  └──users	[GET]
///     └──{id:\d+}	[DELETE, GET]
/// ```
pub struct TreeDump<'a, H> {
    root: &'a RouteNode<H>,
}

impl<H> fmt::Display for TreeDump<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Routing Tree:")?;
        self.root.render(f, 0)
    }
}
