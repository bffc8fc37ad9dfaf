//! Outbound redirect primitive.
//!
//! Frameworks implement `Redirector` for their response type; that
//! implementation is expected to apply its own open-redirect protection.

/// Something that can be told to redirect.
pub trait Redirector {
    fn redirect_to(&mut self, location: &str);
}

/// A recorded redirect decision, for callers that build the response later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirect {
    pub location: Option<String>,
}

impl Redirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_redirected(&self) -> bool {
        self.location.is_some()
    }
}

impl Redirector for Redirect {
    fn redirect_to(&mut self, location: &str) {
        self.location = Some(location.to_string());
    }
}
