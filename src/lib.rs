//! # trierouter
//!
//! **trierouter** is a URL router built on a segment tree: one tree level per
//! `/`-separated path segment, with literal segments, generic parameters
//! (`{id}`) and regex-constrained parameters (`{id:\d+}`).
//!
//! ## Overview
//!
//! - **[`router`]** - segment matcher, routing tree and the [`Router`](router::Router) façade
//! - **[`table`]** - route tables loaded from YAML or JSON files
//! - **[`runtime_config`]** - environment-driven router configuration
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - the `trierouter` command-line tool
//!
//! ### Request Resolution Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Server as HTTP layer
//!     participant Router as Router
//!     participant Tree as RouteNode
//!
//!     Server->>Router: resolve("/users/42", GET)
//!     Router->>Router: split into segments
//!     loop one tree level per segment
//!         Router->>Tree: find_match(segment)
//!         Tree-->>Router: literal > regex > generic child
//!         Router->>Tree: context(segment) on parameter nodes
//!     end
//!     alt no child matches
//!         Router-->>Server: NoRouteMatch (404)
//!     end
//!     Router->>Tree: endpoint(GET)
//!     alt method not bound
//!         Router-->>Server: MethodNotAllowed (405)
//!     end
//!     Router-->>Server: RouteMatch { handler, path_params }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::Router;
//!
//! let mut router = Router::new();
//! router.register(Method::GET, "/users/{id}", "get_user").unwrap();
//!
//! let m = router.resolve("/users/42", &Method::GET).unwrap();
//! assert_eq!(*m.handler, "get_user");
//! assert_eq!(m.get_path_param("id"), Some("42"));
//! ```
//!
//! Handlers are opaque to the router: any `H` is stored and handed back by
//! reference. Building happens once at startup with `&mut Router`; afterwards
//! the router is read-only and can be shared across threads.

pub mod cli;
pub mod logging;
pub mod router;
pub mod runtime_config;
pub mod table;

pub use router::{PathParams, RouteMatch, Router, RouterError};
pub use table::{load_table, RouteTable};
