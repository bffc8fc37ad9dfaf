//! Redirect target validation (open-redirect protection).
//!
//! The stash manager never decides on its own whether a URL is safe; it asks
//! a `UrlValidator`. `SameOriginValidator` is the stock policy: local paths
//! plus absolute URLs on an allowlisted origin.

mod origin;

pub use origin::Origin;

/// Returns the candidate when it is a safe redirect target, `None` otherwise.
pub trait UrlValidator {
    fn validate(&self, candidate: &str) -> Option<String>;
}

impl<F> UrlValidator for F
where
    F: Fn(&str) -> Option<String>,
{
    fn validate(&self, candidate: &str) -> Option<String> {
        self(candidate)
    }
}

/// Accepts path-absolute references and URLs on one of the allowed origins.
#[derive(Debug, Clone, Default)]
pub struct SameOriginValidator {
    allowed: Vec<Origin>,
}

impl SameOriginValidator {
    /// Validator that only accepts local paths.
    pub fn local_only() -> Self {
        Self::default()
    }

    pub fn new(allowed: Vec<Origin>) -> Self {
        Self { allowed }
    }

    /// Build from origin strings such as `https://example.com`.
    pub fn from_origins<I, S>(origins: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = origins
            .into_iter()
            .map(|s| Origin::parse(s.as_ref()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { allowed })
    }

    pub fn allowed(&self) -> &[Origin] {
        &self.allowed
    }

    fn is_local_path(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        // "//host" and "/\host" are protocol-relative in browsers.
        chars.next() == Some('/') && !matches!(chars.next(), Some('/') | Some('\\'))
    }

    fn is_allowed_absolute(&self, candidate: &str) -> bool {
        url::Url::parse(candidate)
            .ok()
            .and_then(|u| Origin::from_url(&u))
            .is_some_and(|origin| self.allowed.contains(&origin))
    }
}

impl UrlValidator for SameOriginValidator {
    fn validate(&self, candidate: &str) -> Option<String> {
        // The url parser trims surrounding whitespace; the stored value would not be.
        if candidate.trim().is_empty()
            || candidate != candidate.trim()
            || candidate.chars().any(|c| c.is_ascii_control())
        {
            return None;
        }
        if Self::is_local_path(candidate) || self.is_allowed_absolute(candidate) {
            Some(candidate.to_string())
        } else {
            None
        }
    }
}
