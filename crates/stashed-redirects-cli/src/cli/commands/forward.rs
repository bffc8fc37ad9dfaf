//! `stashctl forward <purpose> --fallback <url>` – stashed URL or fallback.

use anyhow::Result;
use stashed_redirects_core::config::StashConfig;
use stashed_redirects_core::request::Request;
use std::path::Path;

use super::with_redirects;

pub fn run_forward(
    cfg: &StashConfig,
    session_path: &Path,
    purpose: &str,
    fallback: &str,
) -> Result<String> {
    with_redirects(cfg, session_path, &Request::get(), |redirects| {
        Ok(redirects.forward_or(purpose, fallback))
    })
}
