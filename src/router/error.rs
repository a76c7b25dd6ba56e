use http::Method;
use std::fmt;

/// Errors produced while building or querying a routing tree
///
/// Registration failures (`InvalidRoutePattern`) mean the route table is
/// malformed and the service should not start. Resolution failures
/// (`NoRouteMatch`, `MethodNotAllowed`) are ordinary request outcomes the
/// HTTP layer turns into 404 / 405 responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A `{name:pattern}` segment whose pattern does not compile
    InvalidRoutePattern {
        /// The raw segment text as written in the route
        segment: String,
        /// Compiler message from the regex engine
        reason: String,
    },
    /// No registered path matches the request path
    NoRouteMatch {
        /// The request path as given to the router
        path: String,
    },
    /// The path is registered but not for the requested method
    MethodNotAllowed {
        /// The requested method
        method: Method,
        /// The request path as given to the router
        path: String,
        /// Methods registered on the matched path, sorted by name
        allowed: Vec<Method>,
    },
    /// A parameter value was requested from a literal node
    ///
    /// Only parameter nodes carry bound values. Reaching this through the
    /// public resolution API is a bug in the router itself.
    InvariantViolation {
        /// Segment text of the offending node
        segment: String,
    },
}

impl RouterError {
    /// HTTP status code a server would answer with for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RouterError::NoRouteMatch { .. } => 404,
            RouterError::MethodNotAllowed { .. } => 405,
            RouterError::InvalidRoutePattern { .. } | RouterError::InvariantViolation { .. } => 500,
        }
    }

    /// `true` for errors that describe the incoming request rather than the router
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            RouterError::NoRouteMatch { .. } | RouterError::MethodNotAllowed { .. }
        )
    }
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidRoutePattern { segment, reason } => {
                write!(
                    f,
                    "invalid route pattern in segment '{}': {}",
                    segment, reason
                )
            }
            RouterError::NoRouteMatch { path } => {
                write!(f, "no matching route found for path '{}'", path)
            }
            RouterError::MethodNotAllowed {
                method,
                path,
                allowed,
            } => {
                let allowed: Vec<&str> = allowed.iter().map(Method::as_str).collect();
                write!(
                    f,
                    "method {} not allowed for path '{}' (allowed: {})",
                    method,
                    path,
                    allowed.join(", ")
                )
            }
            RouterError::InvariantViolation { segment } => {
                write!(
                    f,
                    "router invariant violated: parameter context requested on literal segment '{}'",
                    segment
                )
            }
        }
    }
}

impl std::error::Error for RouterError {}
