//! # Route Table Module
//!
//! Loads route definitions from YAML or JSON files and builds a [`Router`]
//! whose handler references are handler names.
//!
//! ## Format
//!
//! ```yaml
//! routes:
//!   - path: /users
//!     handlers:
//!       GET: list_users
//!       POST: create_user
//!   - path: /users/{id:^\d+$}
//!     handlers:
//!       GET: get_user
//!       DELETE: delete_user
//! ```
//!
//! Method tokens are case-insensitive (`get` and `GET` are the same method).
//! The format is chosen by file extension: `.yaml` / `.yml` for YAML,
//! anything else is parsed as JSON.

use anyhow::{bail, Context};
use http::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::router::Router;
use crate::runtime_config::RouterConfig;

/// One path with its method bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route pattern, e.g. `/users/{id}`
    pub path: String,
    /// Method token → handler name
    pub handlers: BTreeMap<String, String>,
}

/// A complete route table as read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).context("failed to parse YAML route table")
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("failed to parse JSON route table")
    }

    /// Build a router with default configuration
    pub fn build_router(&self) -> anyhow::Result<Router<Arc<str>>> {
        self.build_router_with_config(RouterConfig::default())
    }

    /// Register every entry on a fresh router
    ///
    /// Fails on the first entry with an unknown method token or a malformed
    /// pattern; the error names the offending route.
    pub fn build_router_with_config(
        &self,
        config: RouterConfig,
    ) -> anyhow::Result<Router<Arc<str>>> {
        let mut router = Router::with_config(config);

        for (idx, entry) in self.routes.iter().enumerate() {
            let endpoints = entry
                .handlers
                .iter()
                .map(|(token, handler)| -> anyhow::Result<(Method, Arc<str>)> {
                    Ok((parse_method(token)?, Arc::from(handler.as_str())))
                })
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("route #{} '{}'", idx, entry.path))?;

            if endpoints.is_empty() {
                bail!("route #{} '{}' has no handlers", idx, entry.path);
            }

            router
                .register_route(&entry.path, endpoints)
                .with_context(|| format!("route #{} '{}'", idx, entry.path))?;
        }

        info!(
            routes_count = self.routes.len(),
            "Route table loaded"
        );
        Ok(router)
    }
}

/// Parse a method token, accepting any case
pub fn parse_method(token: &str) -> anyhow::Result<Method> {
    let upper = token.trim().to_ascii_uppercase();
    if upper.is_empty() {
        bail!("empty HTTP method");
    }
    Method::from_bytes(upper.as_bytes()).with_context(|| format!("invalid HTTP method '{token}'"))
}

/// Load a route table from a YAML or JSON file
pub fn load_table(file_path: impl AsRef<Path>) -> anyhow::Result<RouteTable> {
    let file_path = file_path.as_ref();
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read route table {}", file_path.display()))?;

    let is_yaml = matches!(
        file_path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        RouteTable::from_yaml_str(&content)
    } else {
        RouteTable::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouterError;

    const TABLE: &str = r#"
routes:
  - path: /users
    handlers:
      get: list_users
      POST: create_user
  - path: /users/{id:^\d+$}
    handlers:
      GET: get_user
"#;

    #[test]
    fn test_parse_yaml_table() {
        let table = RouteTable::from_yaml_str(TABLE).unwrap();
        assert_eq!(table.routes.len(), 2);
        assert_eq!(table.routes[1].path, r"/users/{id:^\d+$}");
        assert_eq!(table.routes[0].handlers["get"], "list_users");
    }

    #[test]
    fn test_build_router_from_table() {
        let router = RouteTable::from_yaml_str(TABLE)
            .unwrap()
            .build_router()
            .unwrap();

        let m = router.resolve("/users", &Method::GET).unwrap();
        assert_eq!(m.handler.as_ref(), "list_users");
        let m = router.resolve("/users/7", &Method::GET).unwrap();
        assert_eq!(m.handler.as_ref(), "get_user");
        assert_eq!(m.get_path_param("id"), Some("7"));
    }

    #[test]
    fn test_parse_json_table() {
        let json = r#"{"routes":[{"path":"/a/{b}","handlers":{"PUT":"put_b"}}]}"#;
        let router = RouteTable::from_json_str(json)
            .unwrap()
            .build_router()
            .unwrap();
        assert_eq!(
            router.resolve("/a/x", &Method::PUT).unwrap().handler.as_ref(),
            "put_b"
        );
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::from_yaml_str("routes: []").unwrap();
        let router = table.build_router().unwrap();
        assert!(router.routes().is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let yaml = "routes:\n  - path: /bad/{key:][}\n    handlers:\n      GET: broken\n";
        let err = RouteTable::from_yaml_str(yaml)
            .unwrap()
            .build_router()
            .unwrap_err();
        assert!(err.to_string().contains("/bad/{key:][}"));
        assert!(matches!(
            err.downcast_ref::<RouterError>(),
            Some(RouterError::InvalidRoutePattern { .. })
        ));
    }

    #[test]
    fn test_invalid_method_is_reported() {
        let yaml = "routes:\n  - path: /a\n    handlers:\n      \"GE T\": nope\n";
        let err = RouteTable::from_yaml_str(yaml)
            .unwrap()
            .build_router()
            .unwrap_err();
        assert!(err.to_string().contains("route #0"));
    }

    #[test]
    fn test_route_without_handlers_is_rejected() {
        let yaml = "routes:\n  - path: /a\n    handlers: {}\n";
        assert!(RouteTable::from_yaml_str(yaml)
            .unwrap()
            .build_router()
            .is_err());
    }

    #[test]
    fn test_parse_method_accepts_any_case() {
        assert_eq!(parse_method("get").unwrap(), Method::GET);
        assert_eq!(parse_method(" Delete ").unwrap(), Method::DELETE);
        assert!(parse_method("").is_err());
    }
}
