//! Stash manager: park a redirect URL under a purpose and return to it later.
//!
//! A `StashedRedirects` is built per request from the request's session,
//! the request itself and a URL validator. Per (session, purpose) there is
//! at most one entry: `stash` writes or overwrites it and `consume` always
//! removes it.

mod redirect;

#[cfg(test)]
mod tests;

use crate::error::{ConfigurationError, MissingCandidate, MissingRedirectError};
use crate::key::KeyNamespacer;
use crate::request::RequestContext;
use crate::session::SessionStore;
use crate::source::{resolve, UrlSource, DEFAULT_REDIRECT_PARAM};
use crate::validator::UrlValidator;

/// Stash and consume redirects for one request.
pub struct StashedRedirects<'r> {
    session: &'r mut dyn SessionStore,
    request: &'r dyn RequestContext,
    validator: &'r dyn UrlValidator,
    keys: KeyNamespacer,
    redirect_param: String,
}

impl<'r> StashedRedirects<'r> {
    /// Uses the default key namespace and `redirect_url` parameter.
    pub fn new(
        session: &'r mut dyn SessionStore,
        request: &'r dyn RequestContext,
        validator: &'r dyn UrlValidator,
    ) -> Self {
        Self {
            session,
            request,
            validator,
            keys: KeyNamespacer::default(),
            redirect_param: DEFAULT_REDIRECT_PARAM.to_string(),
        }
    }

    pub fn with_keys(mut self, keys: KeyNamespacer) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_redirect_param(mut self, name: impl Into<String>) -> Self {
        self.redirect_param = name.into();
        self
    }

    pub fn keys(&self) -> &KeyNamespacer {
        &self.keys
    }

    /// Session key the entry for `purpose` is stored under.
    pub fn key_for(&self, purpose: &str) -> String {
        self.keys.derive_key(purpose)
    }

    /// Resolve, validate and store a redirect URL for `purpose`.
    ///
    /// Returns the stored URL. A candidate rejected by the validator fails
    /// exactly like a missing one and leaves the session untouched.
    pub fn stash(
        &mut self,
        purpose: &str,
        source: &UrlSource<'_>,
    ) -> Result<String, ConfigurationError> {
        let candidate = resolve(source, self.request, &self.redirect_param)
            .ok_or_else(|| ConfigurationError::new(purpose, MissingCandidate::NoCandidate))?;

        let Some(url) = self.validator.validate(&candidate) else {
            tracing::debug!(purpose, candidate = %candidate, "rejected redirect candidate");
            return Err(ConfigurationError::new(
                purpose,
                MissingCandidate::Rejected { candidate },
            ));
        };

        let key = self.key_for(purpose);
        tracing::debug!(purpose, key = %key, url = %url, "stashed redirect");
        self.session.set(&key, url.clone());
        Ok(url)
    }

    /// Remove and return the validated URL stashed for `purpose`.
    ///
    /// The entry is deleted whether or not it exists or validates.
    pub fn consume(&mut self, purpose: &str) -> Result<String, MissingRedirectError> {
        let Some(raw) = self.discard(purpose) else {
            return Err(MissingRedirectError::new(purpose));
        };
        match self.validator.validate(&raw) {
            Some(url) => Ok(url),
            None => {
                tracing::warn!(purpose, stashed = %raw, "stashed redirect failed validation");
                Err(MissingRedirectError::new(purpose))
            }
        }
    }

    /// Remove and return the raw stashed value for `purpose`, if any. Never fails.
    pub fn discard(&mut self, purpose: &str) -> Option<String> {
        let key = self.key_for(purpose);
        let raw = self.session.delete(&key);
        tracing::debug!(purpose, key = %key, found = raw.is_some(), "discarded stashed redirect");
        raw
    }

    /// The consumed URL for `purpose`, or `fallback` when there is none.
    pub fn forward_or(&mut self, purpose: &str, fallback: &str) -> String {
        self.consume(purpose)
            .unwrap_or_else(|_| fallback.to_string())
    }

    /// The raw value currently stashed for `purpose`, without removing it.
    pub fn stashed(&self, purpose: &str) -> Option<String> {
        self.session.get(&self.key_for(purpose))
    }
}
