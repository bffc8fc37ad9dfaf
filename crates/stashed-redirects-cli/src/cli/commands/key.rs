//! `stashctl key <purpose>` – show the derived session key.

use stashed_redirects_core::config::StashConfig;

pub fn run_key(cfg: &StashConfig, purpose: &str) -> String {
    cfg.namespacer().derive_key(purpose)
}
