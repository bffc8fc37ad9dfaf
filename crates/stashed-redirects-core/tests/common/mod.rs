//! Minimal request dispatch used by the flow tests: one session per client,
//! hook tables per controller type, and a response that records redirects.

use stashed_redirects_core::hooks::StashHooks;
use stashed_redirects_core::redirect::Redirector;
use stashed_redirects_core::request::Request;
use stashed_redirects_core::session::MemorySession;
use stashed_redirects_core::stash::StashedRedirects;
use stashed_redirects_core::validator::SameOriginValidator;
use stashed_redirects_core::StashError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub location: Option<String>,
}

impl Response {
    pub fn no_content() -> Self {
        Self {
            status: 204,
            location: None,
        }
    }
}

impl Redirector for Response {
    fn redirect_to(&mut self, location: &str) {
        self.status = 302;
        self.location = Some(location.to_string());
    }
}

pub trait Controller: Sized {
    fn hooks() -> StashHooks<Self>;

    fn handle(
        &mut self,
        action: &str,
        redirects: &mut StashedRedirects<'_>,
    ) -> Result<Response, StashError>;
}

/// One client talking to the app; the session survives across requests.
pub struct Client {
    pub session: MemorySession,
    validator: SameOriginValidator,
}

impl Client {
    pub fn new() -> Self {
        Self {
            session: MemorySession::new(),
            validator: SameOriginValidator::from_origins(["http://www.example.com"]).unwrap(),
        }
    }

    pub fn call<C: Controller>(&mut self, controller: &mut C, action: &str, request: &Request) -> Response {
        let hooks = C::hooks();
        let mut redirects = StashedRedirects::new(&mut self.session, request, &self.validator);
        let result = hooks
            .dispatch(action, controller, &mut redirects, |c, r| c.handle(action, r))
            .map_err(StashError::from)
            .and_then(|r| r);
        match result {
            Ok(response) => response,
            Err(StashError::MissingRedirect(_)) => Response {
                status: 422,
                location: None,
            },
            Err(StashError::Configuration(_)) => Response {
                status: 500,
                location: None,
            },
        }
    }
}
