//! Where a stashed URL comes from.
//!
//! `UrlSource` is what `stash` is called with for one request. `UrlSpec<H>`
//! is the registration-time form kept in a handler's hook table; its dynamic
//! variant receives the handler and is bound to it per request with
//! [`UrlSpec::bind`].

mod resolve;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use resolve::{resolve, DEFAULT_REDIRECT_PARAM};

/// Source of the URL to stash for a single request.
pub enum UrlSource<'a> {
    /// The redirect parameter, then the referer on GET requests.
    Default,
    /// Only the redirect parameter.
    Param,
    /// Only the referer, and only on GET requests.
    Referer,
    /// An explicit URL; wins over any parameter or referer.
    Literal(String),
    /// Computed when the stash runs.
    Dynamic(Box<dyn Fn() -> Option<String> + 'a>),
}

impl<'a> UrlSource<'a> {
    pub fn literal(url: impl Into<String>) -> Self {
        UrlSource::Literal(url.into())
    }

    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn() -> Option<String> + 'a,
    {
        UrlSource::Dynamic(Box::new(f))
    }
}

impl Default for UrlSource<'_> {
    fn default() -> Self {
        UrlSource::Default
    }
}

impl fmt::Debug for UrlSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSource::Default => f.write_str("Default"),
            UrlSource::Param => f.write_str("Param"),
            UrlSource::Referer => f.write_str("Referer"),
            UrlSource::Literal(url) => f.debug_tuple("Literal").field(url).finish(),
            UrlSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// `"default"`, `"param"` and `"referer"` select those sources; anything
/// else is a literal URL.
impl FromStr for UrlSource<'_> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "default" => UrlSource::Default,
            "param" => UrlSource::Param,
            "referer" => UrlSource::Referer,
            other => UrlSource::Literal(other.to_string()),
        })
    }
}

type HandlerUrlFn<H> = Arc<dyn Fn(&H) -> Option<String> + Send + Sync>;

/// Registration-time URL source for handlers of type `H`.
pub enum UrlSpec<H> {
    Default,
    Param,
    Referer,
    Literal(String),
    /// Evaluated lazily against the live handler.
    Dynamic(HandlerUrlFn<H>),
}

impl<H> UrlSpec<H> {
    pub fn literal(url: impl Into<String>) -> Self {
        UrlSpec::Literal(url.into())
    }

    /// A URL computed from the handler, e.g. `UrlSpec::dynamic(PostsController::edit_post_path)`.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&H) -> Option<String> + Send + Sync + 'static,
    {
        UrlSpec::Dynamic(Arc::new(f))
    }

    /// The per-request source, with a dynamic spec bound to `handler`.
    pub fn bind<'a>(&'a self, handler: &'a H) -> UrlSource<'a> {
        match self {
            UrlSpec::Default => UrlSource::Default,
            UrlSpec::Param => UrlSource::Param,
            UrlSpec::Referer => UrlSource::Referer,
            UrlSpec::Literal(url) => UrlSource::Literal(url.clone()),
            UrlSpec::Dynamic(f) => UrlSource::dynamic(move || f(handler)),
        }
    }
}

impl<H> Default for UrlSpec<H> {
    fn default() -> Self {
        UrlSpec::Default
    }
}

impl<H> Clone for UrlSpec<H> {
    fn clone(&self) -> Self {
        match self {
            UrlSpec::Default => UrlSpec::Default,
            UrlSpec::Param => UrlSpec::Param,
            UrlSpec::Referer => UrlSpec::Referer,
            UrlSpec::Literal(url) => UrlSpec::Literal(url.clone()),
            UrlSpec::Dynamic(f) => UrlSpec::Dynamic(Arc::clone(f)),
        }
    }
}

impl<H> fmt::Debug for UrlSpec<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSpec::Default => f.write_str("Default"),
            UrlSpec::Param => f.write_str("Param"),
            UrlSpec::Referer => f.write_str("Referer"),
            UrlSpec::Literal(url) => f.debug_tuple("Literal").field(url).finish(),
            UrlSpec::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
