//! CLI command handlers. Each returns the text to print.

mod consume;
mod discard;
mod forward;
mod key;
mod stash;

pub use consume::run_consume;
pub use discard::run_discard;
pub use forward::run_forward;
pub use key::run_key;
pub use stash::run_stash;

use anyhow::Result;
use stashed_redirects_core::config::StashConfig;
use stashed_redirects_core::request::Request;
use stashed_redirects_core::session::MemorySession;
use stashed_redirects_core::stash::StashedRedirects;
use std::path::Path;

/// Load the session file, run `f` against it, and write the session back.
///
/// The session is saved even when `f` fails: consuming clears the entry on
/// the failure path too.
fn with_redirects<T>(
    cfg: &StashConfig,
    session_path: &Path,
    request: &Request,
    f: impl FnOnce(&mut StashedRedirects<'_>) -> Result<T>,
) -> Result<T> {
    let mut session = MemorySession::load_from_path(session_path)?;
    let validator = cfg.validator()?;
    let result = {
        let mut redirects = StashedRedirects::new(&mut session, request, &validator)
            .with_keys(cfg.namespacer())
            .with_redirect_param(cfg.redirect_param.clone());
        f(&mut redirects)
    };
    session.save_to_path(session_path)?;
    result
}
