//! Segment tree for route matching
//!
//! Every registered path is split on `/` and stored one segment per tree
//! level. A node owns:
//!
//! - the raw segment text it was created from (`users`, `{id}`, `{id:\d+}`),
//! - an optional [`SegmentMatcher`] (absent for literal segments),
//! - the handlers registered for the path ending at this node, keyed by method,
//! - its children in insertion order.
//!
//! ## Matching priority
//!
//! When more than one child could accept a request segment, [`RouteNode::find_match`]
//! picks:
//!
//! 1. the literal child with identical text,
//! 2. else the first regex parameter whose pattern accepts the segment,
//! 3. else the first generic parameter.
//!
//! Within a tier the earliest inserted child wins, so registration order
//! matters for overlapping regex patterns at the same level.
//!
//! Nodes are only ever appended; there are no parent links and no removal,
//! which keeps a built tree trivially shareable between threads.

use http::Method;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::RouterError;
use super::matcher::{MatcherKind, SegmentMatcher};

/// One level of the routing tree
#[derive(Debug, Clone)]
pub struct RouteNode<H> {
    /// Raw pattern text this node was created from
    segment: Box<str>,
    /// Parameter matcher; `None` for literal segments
    matcher: Option<SegmentMatcher>,
    /// Handlers for the path ending at this node
    endpoints: HashMap<Method, H>,
    /// Child nodes in insertion order
    children: Vec<RouteNode<H>>,
    /// Normalized route pattern from the root to this node (`/users/{id}`)
    pattern: Arc<str>,
}

impl<H> RouteNode<H> {
    /// The empty root node every tree starts from
    #[must_use]
    pub fn root() -> Self {
        Self::with_matcher("", None, Arc::from("/"))
    }

    /// Create a detached node, compiling its matcher from `segment`
    pub fn new(segment: &str) -> Result<Self, RouterError> {
        let matcher = SegmentMatcher::parse(segment)?;
        let pattern = if segment.is_empty() {
            Arc::from("/")
        } else {
            Arc::from(format!("/{segment}"))
        };
        Ok(Self::with_matcher(segment, matcher, pattern))
    }

    fn with_matcher(segment: &str, matcher: Option<SegmentMatcher>, pattern: Arc<str>) -> Self {
        Self {
            segment: Box::from(segment),
            matcher,
            endpoints: HashMap::new(),
            children: Vec::new(),
            pattern,
        }
    }

    /// Return the child created from exactly `segment`, creating it if needed
    ///
    /// Comparison is on the raw text: `{id}` and `{id:\d+}` are different
    /// children even though both bind `id`. Repeated calls with the same text
    /// always return the same node.
    pub fn get_or_create(&mut self, segment: &str) -> Result<&mut Self, RouterError> {
        if let Some(idx) = self.child_index(segment) {
            return Ok(&mut self.children[idx]);
        }
        let matcher = SegmentMatcher::parse(segment)?;
        Ok(self.push_child(segment, matcher))
    }

    /// Like [`get_or_create`](Self::get_or_create) with a matcher parsed up front
    ///
    /// `matcher` is dropped when the child already exists.
    pub(crate) fn child_or_insert(
        &mut self,
        segment: &str,
        matcher: Option<SegmentMatcher>,
    ) -> &mut Self {
        match self.child_index(segment) {
            Some(idx) => &mut self.children[idx],
            None => self.push_child(segment, matcher),
        }
    }

    fn child_index(&self, segment: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.segment.as_ref() == segment)
    }

    fn push_child(&mut self, segment: &str, matcher: Option<SegmentMatcher>) -> &mut Self {
        let pattern: Arc<str> = if self.pattern.as_ref() == "/" {
            Arc::from(format!("/{segment}"))
        } else {
            Arc::from(format!("{}/{segment}", self.pattern))
        };
        let idx = self.children.len();
        self.children
            .push(Self::with_matcher(segment, matcher, pattern));
        &mut self.children[idx]
    }

    /// Merge method bindings into this node
    ///
    /// A method already bound here is overwritten; other methods are kept.
    pub fn insert_endpoints<I>(&mut self, endpoints: I)
    where
        I: IntoIterator<Item = (Method, H)>,
    {
        self.endpoints.extend(endpoints);
    }

    /// Whether this node accepts `candidate` as its segment
    #[inline]
    #[must_use]
    pub fn matches_segment(&self, candidate: &str) -> bool {
        match &self.matcher {
            None => self.segment.as_ref() == candidate,
            Some(matcher) => matcher.matches(candidate),
        }
    }

    /// Pick the child that should handle `candidate`
    ///
    /// See the module docs for the priority rules. Returns `None` when no
    /// child accepts the segment.
    #[must_use]
    pub fn find_match(&self, candidate: &str) -> Option<&Self> {
        let mut regex_match = None;
        let mut generic_match = None;

        for child in &self.children {
            match &child.matcher {
                None => {
                    if child.segment.as_ref() == candidate {
                        return Some(child);
                    }
                }
                Some(matcher) if matcher.pattern().is_some() => {
                    if regex_match.is_none() && matcher.matches(candidate) {
                        regex_match = Some(child);
                    }
                }
                Some(_) => {
                    if generic_match.is_none() {
                        generic_match = Some(child);
                    }
                }
            }
        }

        regex_match.or(generic_match)
    }

    /// The `(key, value)` binding this node produces for `candidate`
    ///
    /// The value is the candidate text unchanged: no decoding, no coercion.
    ///
    /// # Errors
    ///
    /// `RouterError::InvariantViolation` when called on a literal node.
    pub fn context(&self, candidate: &str) -> Result<(Arc<str>, String), RouterError> {
        match &self.matcher {
            Some(matcher) => Ok((Arc::clone(matcher.key()), candidate.to_string())),
            None => Err(RouterError::InvariantViolation {
                segment: self.segment.to_string(),
            }),
        }
    }

    /// Handler bound to `method` on this node
    #[inline]
    #[must_use]
    pub fn endpoint(&self, method: &Method) -> Option<&H> {
        self.endpoints.get(method)
    }

    /// Methods bound on this node, sorted by name
    #[must_use]
    pub fn allowed_methods(&self) -> Vec<Method> {
        let mut methods: Vec<Method> = self.endpoints.keys().cloned().collect();
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods
    }

    /// Raw segment text
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Parameter matcher, if this is a parameter node
    #[must_use]
    pub fn matcher(&self) -> Option<&SegmentMatcher> {
        self.matcher.as_ref()
    }

    #[must_use]
    pub fn kind(&self) -> MatcherKind {
        self.matcher
            .as_ref()
            .map_or(MatcherKind::Literal, SegmentMatcher::kind)
    }

    /// Normalized pattern of the path ending at this node
    #[must_use]
    pub fn pattern(&self) -> &Arc<str> {
        &self.pattern
    }

    #[must_use]
    pub fn children(&self) -> &[RouteNode<H>] {
        &self.children
    }

    #[must_use]
    pub fn has_endpoints(&self) -> bool {
        !self.endpoints.is_empty()
    }

    /// Collect `(method, pattern)` for every binding at or below this node
    pub(crate) fn collect_routes(&self, out: &mut Vec<(Method, Arc<str>)>) {
        for method in self.allowed_methods() {
            out.push((method, Arc::clone(&self.pattern)));
        }
        for child in &self.children {
            child.collect_routes(out);
        }
    }

    /// Write one indented line per descendant
    pub(crate) fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for child in &self.children {
            write!(f, "{:width$} └──{}", "", child.segment, width = depth * 3)?;
            let methods = child.allowed_methods();
            if !methods.is_empty() {
                let names: Vec<&str> = methods.iter().map(Method::as_str).collect();
                write!(f, "\t[{}]", names.join(", "))?;
            }
            writeln!(f)?;
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}
