//! Stash a redirect URL under a purpose so another flow (sign in, confirmation,
//! re-authentication) can run first, then return to it.
//!
//! ```
//! use stashed_redirects_core::request::Request;
//! use stashed_redirects_core::session::MemorySession;
//! use stashed_redirects_core::source::UrlSource;
//! use stashed_redirects_core::stash::StashedRedirects;
//! use stashed_redirects_core::validator::SameOriginValidator;
//!
//! let mut session = MemorySession::new();
//! let validator = SameOriginValidator::local_only();
//!
//! // GET /sessions/new?redirect_url=/users
//! let request = Request::get().with_param("redirect_url", "/users");
//! StashedRedirects::new(&mut session, &request, &validator)
//!     .stash("sign_in", &UrlSource::Default)
//!     .unwrap();
//!
//! // POST /sessions
//! let request = Request::post();
//! let mut redirects = StashedRedirects::new(&mut session, &request, &validator);
//! assert_eq!(redirects.consume("sign_in").unwrap(), "/users");
//! assert!(redirects.consume("sign_in").is_err());
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod key;
pub mod logging;
pub mod redirect;
pub mod request;
pub mod session;
pub mod source;
pub mod stash;
pub mod validator;

pub use error::{ConfigurationError, MissingCandidate, MissingRedirectError, StashError};
pub use hooks::StashHooks;
pub use key::{KeyNamespacer, KeyScheme};
pub use source::{UrlSource, UrlSpec};
pub use stash::StashedRedirects;
