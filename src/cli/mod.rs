//! # CLI Module
//!
//! Command-line access to a router built from a route table file.
//!
//! ## Commands
//!
//! ### `dump`
//!
//! Print the routing tree:
//!
//! ```bash
//! trierouter dump --table routes.yaml
//! ```
//!
//! ### `routes`
//!
//! List every method and normalized route pattern:
//!
//! ```bash
//! trierouter routes --table routes.yaml
//! ```
//!
//! ### `resolve`
//!
//! Resolve a request path the way a server would and print the handler name,
//! the matched pattern and every captured parameter:
//!
//! ```bash
//! trierouter resolve --table routes.yaml --method DELETE /users/42
//! ```
//!
//! A path with no route, or a method not bound on the matched path, exits
//! with a non-zero status and the router error on stderr.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use trierouter::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli)?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run, run_cli, Cli, Commands};
