//! Declarative stash registration for handler types.
//!
//! A handler type keeps one `StashHooks<Self>` table, built once at setup:
//!
//! ```
//! use stashed_redirects_core::hooks::StashHooks;
//! use stashed_redirects_core::source::UrlSpec;
//!
//! struct SessionsController;
//!
//! impl SessionsController {
//!     fn users_url(&self) -> Option<String> {
//!         Some("/users".to_string())
//!     }
//! }
//!
//! let hooks = StashHooks::new()
//!     .stash_redirect_for("sign_in", ["new"], UrlSpec::Default)
//!     .stash_redirect_for("sign_out", ["destroy"], UrlSpec::dynamic(SessionsController::users_url));
//! assert_eq!(hooks.matching("new").count(), 1);
//! ```
//!
//! The dispatch layer calls [`StashHooks::run_before`] (or [`StashHooks::dispatch`])
//! with the action name before running the action body.

use std::fmt;

use crate::error::ConfigurationError;
use crate::source::UrlSpec;
use crate::stash::StashedRedirects;

/// One `stash_redirect_for` registration.
pub struct StashRegistration<H> {
    purpose: String,
    actions: Vec<String>,
    spec: UrlSpec<H>,
}

impl<H> StashRegistration<H> {
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn applies_to(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}

impl<H> Clone for StashRegistration<H> {
    fn clone(&self) -> Self {
        Self {
            purpose: self.purpose.clone(),
            actions: self.actions.clone(),
            spec: self.spec.clone(),
        }
    }
}

impl<H> fmt::Debug for StashRegistration<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StashRegistration")
            .field("purpose", &self.purpose)
            .field("actions", &self.actions)
            .field("spec", &self.spec)
            .finish()
    }
}

/// Ordered pre-action stash hooks for handlers of type `H`.
pub struct StashHooks<H> {
    registrations: Vec<StashRegistration<H>>,
}

impl<H> Default for StashHooks<H> {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }
}

impl<H> Clone for StashHooks<H> {
    fn clone(&self) -> Self {
        Self {
            registrations: self.registrations.clone(),
        }
    }
}

impl<H> fmt::Debug for StashHooks<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StashHooks")
            .field("registrations", &self.registrations)
            .finish()
    }
}

impl<H> StashHooks<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stash a redirect for `purpose` before each of the `on` actions.
    pub fn stash_redirect_for<I, S>(mut self, purpose: impl Into<String>, on: I, spec: UrlSpec<H>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(purpose, on, spec);
        self
    }

    /// In-place form of [`StashHooks::stash_redirect_for`].
    pub fn register<I, S>(&mut self, purpose: impl Into<String>, on: I, spec: UrlSpec<H>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registrations.push(StashRegistration {
            purpose: purpose.into(),
            actions: on.into_iter().map(Into::into).collect(),
            spec,
        });
    }

    pub fn registrations(&self) -> &[StashRegistration<H>] {
        &self.registrations
    }

    /// Registrations that apply to `action`, in registration order.
    pub fn matching<'a>(&'a self, action: &'a str) -> impl Iterator<Item = &'a StashRegistration<H>> + 'a {
        self.registrations.iter().filter(move |r| r.applies_to(action))
    }

    /// Run every stash registered for `action` against `handler`.
    ///
    /// Returns how many stashes ran. Stops at the first failure.
    pub fn run_before(
        &self,
        action: &str,
        handler: &H,
        redirects: &mut StashedRedirects<'_>,
    ) -> Result<usize, ConfigurationError> {
        let mut ran = 0;
        for registration in self.matching(action) {
            let source = registration.spec.bind(handler);
            redirects.stash(&registration.purpose, &source)?;
            ran += 1;
        }
        if ran > 0 {
            tracing::trace!(action, ran, "ran stash hooks");
        }
        Ok(ran)
    }

    /// Run the hooks for `action`, then `body` if they all succeed.
    pub fn dispatch<R>(
        &self,
        action: &str,
        handler: &mut H,
        redirects: &mut StashedRedirects<'_>,
        body: impl FnOnce(&mut H, &mut StashedRedirects<'_>) -> R,
    ) -> Result<R, ConfigurationError> {
        self.run_before(action, handler, redirects)?;
        Ok(body(handler, redirects))
    }
}
