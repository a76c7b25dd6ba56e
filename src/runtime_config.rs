//! # Runtime Configuration Module
//!
//! Environment variable based configuration for the router's runtime behavior.
//!
//! ## Environment Variables
//!
//! ### `TRIEROUTER_SLOW_MATCH_US`
//!
//! Resolution time, in microseconds, above which a match is logged at `WARN`
//! as a slow match instead of at `INFO`. Accepts values in:
//! - Decimal: `1000`
//! - Hexadecimal: `0x3e8`
//!
//! Default: `1000` (1 ms)
//!
//! Resolution is bounded by path depth times sibling count, so a slow match
//! usually points at an expensive regex parameter.
//!
//! ## Usage
//!
//! ```rust
//! use trierouter::runtime_config::RouterConfig;
//! use trierouter::router::Router;
//!
//! let config = RouterConfig::from_env();
//! let router: Router<&str> = Router::with_config(config);
//! ```

use std::env;
use std::time::Duration;

/// Environment variable holding the slow-match threshold in microseconds
pub const SLOW_MATCH_ENV: &str = "TRIEROUTER_SLOW_MATCH_US";

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Router configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Matches slower than this are logged as warnings
    pub slow_match_threshold: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let micros = env::var(SLOW_MATCH_ENV)
            .ok()
            .and_then(|val| parse_micros(&val))
            .unwrap_or(DEFAULT_SLOW_MATCH_US);
        Self {
            slow_match_threshold: Duration::from_micros(micros),
        }
    }
}

fn parse_micros(val: &str) -> Option<u64> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
