//! `stashctl discard <purpose>` – remove the stashed value without validating it.

use anyhow::Result;
use stashed_redirects_core::config::StashConfig;
use stashed_redirects_core::request::Request;
use std::path::Path;

use super::with_redirects;

pub fn run_discard(
    cfg: &StashConfig,
    session_path: &Path,
    purpose: &str,
) -> Result<Option<String>> {
    with_redirects(cfg, session_path, &Request::post(), |redirects| {
        Ok(redirects.discard(purpose))
    })
}
