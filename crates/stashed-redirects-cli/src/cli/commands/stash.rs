//! `stashctl stash <purpose>` – stash a redirect from a simulated request.

use anyhow::Result;
use stashed_redirects_core::config::StashConfig;
use stashed_redirects_core::request::Request;
use stashed_redirects_core::source::UrlSource;
use std::path::Path;

use super::with_redirects;
use crate::cli::RequestOpts;

/// Stash for `purpose` using `from` ("default", "param", "referer" or a URL)
/// and print the stored URL.
pub fn run_stash(
    cfg: &StashConfig,
    session_path: &Path,
    purpose: &str,
    from: &str,
    opts: &RequestOpts,
) -> Result<String> {
    let mut request = Request::new(opts.method.as_str());
    if let Some(param) = &opts.param {
        request = request.with_param(cfg.redirect_param.as_str(), param.as_str());
    }
    if let Some(referer) = &opts.referer {
        request = request.with_referer(referer.as_str());
    }
    let source: UrlSource<'_> = from.parse()?;

    with_redirects(cfg, session_path, &request, |redirects| {
        let url = redirects.stash(purpose, &source)?;
        tracing::info!(purpose, url = %url, "stashed");
        Ok(url)
    })
}
