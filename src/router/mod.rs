//! # Router Module
//!
//! Path matching and route resolution for trierouter.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Building a segment tree from registered path patterns
//! - Matching incoming request paths against the tree, one segment per level
//! - Extracting path parameters from matched routes
//! - Distinguishing "no such path" from "path exists, wrong method"
//!
//! ## Pattern syntax
//!
//! Patterns are `/`-separated segments. Each segment is one of:
//!
//! - `users` - literal, matches identical text only
//! - `{id}` - generic parameter, matches any segment and binds it to `id`
//! - `{id:\d+}` - regex parameter, matches segments accepted by `\d+`
//!
//! When siblings overlap, literals win over regex parameters, which win over
//! generic parameters. See [`RouteNode::find_match`].
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::{Router, RouterError};
//!
//! let mut router = Router::new();
//! router.register(Method::GET, "/pets", "list_pets").unwrap();
//! router.register(Method::GET, "/pets/{id}", "get_pet").unwrap();
//! router.register(Method::GET, "/pets/{id:^\\d+$}", "get_pet_by_number").unwrap();
//!
//! let m = router.resolve("/pets/7", &Method::GET).unwrap();
//! assert_eq!(*m.handler, "get_pet_by_number");
//!
//! let m = router.resolve("/pets/rex", &Method::GET).unwrap();
//! assert_eq!(*m.handler, "get_pet");
//! assert_eq!(m.get_path_param("id"), Some("rex"));
//!
//! assert!(matches!(
//!     router.resolve("/pets", &Method::DELETE),
//!     Err(RouterError::MethodNotAllowed { .. })
//! ));
//! ```

mod core;
mod error;
mod matcher;
mod node;

pub use core::{
    split_segments, ParamVec, PathParams, RouteMatch, Router, TreeDump, MAX_INLINE_PARAMS,
};
pub use error::RouterError;
pub use matcher::{MatcherKind, SegmentMatcher};
pub use node::RouteNode;
