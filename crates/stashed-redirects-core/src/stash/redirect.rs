//! Redirecting forms of consume, and the redirect parameter helper.

use crate::error::MissingRedirectError;
use crate::redirect::Redirector;

use super::StashedRedirects;

impl StashedRedirects<'_> {
    /// Consume the URL stashed for `purpose` and redirect to it.
    ///
    /// Nothing is redirected on error.
    pub fn redirect_from_stashed(
        &mut self,
        purpose: &str,
        redirector: &mut dyn Redirector,
    ) -> Result<(), MissingRedirectError> {
        let url = self.consume(purpose)?;
        redirector.redirect_to(&url);
        Ok(())
    }

    /// Redirect to the URL stashed for `purpose`, or to `fallback`.
    pub fn redirect_forward_or_to(
        &mut self,
        purpose: &str,
        fallback: &str,
        redirector: &mut dyn Redirector,
    ) {
        let url = self.forward_or(purpose, fallback);
        redirector.redirect_to(&url);
    }

    /// The validated redirect parameter of the current request, if any.
    ///
    /// Handy with a fallback: `redirects.redirect_url().unwrap_or(root)`.
    pub fn redirect_url(&self) -> Option<String> {
        self.request
            .param(&self.redirect_param)
            .and_then(|candidate| self.validator.validate(candidate))
    }
}
