//! Classification of single route-pattern segments
//!
//! A segment of a registered path is one of three things:
//!
//! - a literal (`users`) that only matches identical text,
//! - a generic parameter (`{id}`) that matches any segment and captures it,
//! - a regex parameter (`{id:\d+}`) that captures only segments the pattern accepts.
//!
//! Literal segments carry no matcher at all; [`SegmentMatcher::parse`] returns
//! `Ok(None)` for them. Regex bodies are compiled exactly as written, so a
//! route author who wants a full-segment match writes the anchors themselves
//! (`{id:^\d+$}`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

use super::error::RouterError;

/// `{name:body}` spanning the whole segment
static REGEX_PARAM_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_-]*):(.+)\}$")
        .expect("regex parameter detector should be valid")
});

/// `{name}` spanning the whole segment
static GENERIC_PARAM_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(.+)\}$").expect("generic parameter detector should be valid"));

/// How a tree node decides whether a request segment belongs to it
///
/// Variants are ordered by matching priority: a literal sibling always beats
/// a regex sibling, which always beats a generic sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatcherKind {
    /// Exact text comparison; node has no matcher
    Literal,
    /// `{name:pattern}`
    RegexParam,
    /// `{name}`
    GenericParam,
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatcherKind::Literal => "literal",
            MatcherKind::RegexParam => "regex",
            MatcherKind::GenericParam => "generic",
        };
        f.write_str(name)
    }
}

/// Parameter matcher compiled from a `{name}` or `{name:pattern}` segment
///
/// Fully determined by the segment text it was parsed from and never mutated
/// afterwards, so a built tree can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    key: Arc<str>,
    pattern: Option<Regex>,
}

impl SegmentMatcher {
    /// Parse a raw pattern segment
    ///
    /// # Returns
    ///
    /// * `Ok(Some(matcher))` - for `{name}` and `{name:pattern}` segments
    /// * `Ok(None)` - for literal segments
    /// * `Err(RouterError::InvalidRoutePattern)` - when the regex body does not compile
    pub fn parse(segment: &str) -> Result<Option<Self>, RouterError> {
        if let Some(caps) = REGEX_PARAM_SEGMENT.captures(segment) {
            let (_, [key, body]) = caps.extract();
            let pattern =
                Regex::new(body).map_err(|e| RouterError::InvalidRoutePattern {
                    segment: segment.to_string(),
                    reason: e.to_string(),
                })?;
            return Ok(Some(Self {
                key: Arc::from(key),
                pattern: Some(pattern),
            }));
        }

        if let Some(caps) = GENERIC_PARAM_SEGMENT.captures(segment) {
            let (_, [key]) = caps.extract();
            return Ok(Some(Self {
                key: Arc::from(key),
                pattern: None,
            }));
        }

        Ok(None)
    }

    /// Whether `candidate` is accepted by this parameter
    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(candidate),
            None => true,
        }
    }

    /// `GenericParam` or `RegexParam`
    #[must_use]
    pub fn kind(&self) -> MatcherKind {
        if self.pattern.is_some() {
            MatcherKind::RegexParam
        } else {
            MatcherKind::GenericParam
        }
    }

    /// Name the captured value is bound to
    #[must_use]
    pub fn key(&self) -> &Arc<str> {
        &self.key
    }

    /// The compiled constraint, if any
    #[must_use]
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}
