//! `stashctl consume <purpose>` – remove and print the stashed URL.

use anyhow::Result;
use stashed_redirects_core::config::StashConfig;
use stashed_redirects_core::request::Request;
use std::path::Path;

use super::with_redirects;

/// Fails with the missing-redirect error when nothing valid is stashed.
pub fn run_consume(cfg: &StashConfig, session_path: &Path, purpose: &str) -> Result<String> {
    with_redirects(cfg, session_path, &Request::post(), |redirects| {
        Ok(redirects.consume(purpose)?)
    })
}
