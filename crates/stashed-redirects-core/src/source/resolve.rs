//! Candidate URL resolution from a source and the current request.

use crate::request::RequestContext;

use super::UrlSource;

/// Conventional name of the redirect query/form parameter.
pub const DEFAULT_REDIRECT_PARAM: &str = "redirect_url";

/// Compute the candidate URL for `source`, or `None` when it yields nothing.
///
/// The result is unvalidated. Empty strings count as absent, so the default
/// chain moves on to the referer when the parameter is present but blank.
pub fn resolve(
    source: &UrlSource<'_>,
    request: &dyn RequestContext,
    redirect_param: &str,
) -> Option<String> {
    match source {
        UrlSource::Default => {
            from_param(request, redirect_param).or_else(|| from_referer(request))
        }
        UrlSource::Param => from_param(request, redirect_param),
        UrlSource::Referer => from_referer(request),
        UrlSource::Literal(url) => non_empty(Some(url.as_str())),
        UrlSource::Dynamic(f) => f().filter(|url| !url.is_empty()),
    }
}

fn from_param(request: &dyn RequestContext, name: &str) -> Option<String> {
    non_empty(request.param(name))
}

fn from_referer(request: &dyn RequestContext) -> Option<String> {
    if request.is_get() {
        non_empty(request.referer())
    } else {
        None
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
