//! Error types for stashing and consuming redirects.
//!
//! `ConfigurationError` is a caller bug: a stash was requested but nothing
//! usable could be derived. `MissingRedirectError` is the expected failure
//! when a flow is resumed without a valid stashed URL. `StashError` lets a
//! caller handle both at once.

use thiserror::Error;

/// Why a stash attempt produced no URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingCandidate {
    /// No source yielded a non-empty candidate.
    NoCandidate,
    /// A candidate was found but the URL validator rejected it.
    Rejected { candidate: String },
}

/// Raised by `stash` when neither the configured source nor validation yields a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "missing a redirect URL to stash for {purpose:?}, pass one explicitly or via the redirect parameter"
)]
pub struct ConfigurationError {
    pub purpose: String,
    pub reason: MissingCandidate,
}

impl ConfigurationError {
    pub fn new(purpose: impl Into<String>, reason: MissingCandidate) -> Self {
        Self {
            purpose: purpose.into(),
            reason,
        }
    }

    /// True when a candidate existed but failed validation.
    pub fn was_rejected(&self) -> bool {
        matches!(self.reason, MissingCandidate::Rejected { .. })
    }
}

/// Raised by `consume` when no valid stashed URL exists for the purpose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("can't extract a stashed redirect URL for {purpose:?} to redirect to")]
pub struct MissingRedirectError {
    pub purpose: String,
}

impl MissingRedirectError {
    pub fn new(purpose: impl Into<String>) -> Self {
        Self {
            purpose: purpose.into(),
        }
    }
}

/// Any error produced by this crate's stash operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StashError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    MissingRedirect(#[from] MissingRedirectError),
}

impl StashError {
    /// The purpose the failing operation was called with.
    pub fn purpose(&self) -> &str {
        match self {
            StashError::Configuration(e) => &e.purpose,
            StashError::MissingRedirect(e) => &e.purpose,
        }
    }
}
