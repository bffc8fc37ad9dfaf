//! Request context seen by the resolver.
//!
//! The web framework owns the real request; it exposes what the resolver
//! needs through `RequestContext`. `Request` is a plain owned implementation
//! used by the CLI and tests.

use std::collections::HashMap;

/// What a stash needs to know about the current request.
pub trait RequestContext {
    /// HTTP method, e.g. `"GET"`.
    fn method(&self) -> &str;

    /// A query or form parameter by name.
    fn param(&self, name: &str) -> Option<&str>;

    /// The `Referer` header, if sent.
    fn referer(&self) -> Option<&str>;

    /// Only GET requests may fall back to the referer.
    fn is_get(&self) -> bool {
        self.method().eq_ignore_ascii_case("GET")
    }
}

/// Owned request snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    method: String,
    params: HashMap<String, String>,
    referer: Option<String>,
}

impl Request {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new("GET")
    }

    pub fn post() -> Self {
        Self::new("POST")
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }
}

impl RequestContext for Request {
    fn method(&self) -> &str {
        &self.method
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn referer(&self) -> Option<&str> {
        self.referer.as_deref()
    }
}
