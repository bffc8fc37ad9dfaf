use super::*;
use crate::error::MissingCandidate;
use crate::key::KeyScheme;
use crate::redirect::Redirect;
use crate::request::Request;
use crate::session::MemorySession;
use crate::validator::SameOriginValidator;

fn example_validator() -> SameOriginValidator {
    SameOriginValidator::from_origins(["https://example.com"]).unwrap()
}

#[test]
fn stash_then_consume_is_read_once() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    let stored = redirects
        .stash("sign_in", &UrlSource::literal("/users"))
        .unwrap();
    assert_eq!(stored, "/users");
    assert_eq!(redirects.consume("sign_in").unwrap(), "/users");

    let err = redirects.consume("sign_in").unwrap_err();
    assert_eq!(err.purpose, "sign_in");
}

#[test]
fn consume_on_empty_session_carries_purpose() {
    let mut session = MemorySession::new();
    let request = Request::post();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    let err = redirects.consume("confirm_email").unwrap_err();
    assert_eq!(err, MissingRedirectError::new("confirm_email"));
}

#[test]
fn stash_writes_under_derived_key() {
    let mut session = MemorySession::new();
    let request = Request::get().with_param("redirect_url", "/posts");
    let validator = example_validator();
    {
        let mut redirects = StashedRedirects::new(&mut session, &request, &validator);
        redirects.stash("sign_in", &UrlSource::Default).unwrap();
        assert_eq!(redirects.stashed("sign_in"), Some("/posts".to_string()));
    }
    assert_eq!(session.get("__url_stash_sign_in"), Some("/posts".to_string()));
    assert_eq!(session.len(), 1);
}

#[test]
fn restash_overwrites() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    redirects.stash("sign_in", &UrlSource::literal("/a")).unwrap();
    redirects.stash("sign_in", &UrlSource::literal("/b")).unwrap();
    assert_eq!(redirects.consume("sign_in").unwrap(), "/b");
    assert!(redirects.consume("sign_in").is_err());
}

#[test]
fn rejected_candidate_is_a_configuration_error_and_stores_nothing() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    {
        let mut redirects = StashedRedirects::new(&mut session, &request, &validator);
        let err = redirects
            .stash("sign_in", &UrlSource::literal("http://evil.example/x"))
            .unwrap_err();
        assert_eq!(err.purpose, "sign_in");
        assert_eq!(
            err.reason,
            MissingCandidate::Rejected {
                candidate: "http://evil.example/x".to_string()
            }
        );
    }
    assert!(session.is_empty());
}

#[test]
fn rejected_candidate_keeps_previous_entry() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    redirects.stash("sign_in", &UrlSource::literal("/a")).unwrap();
    assert!(redirects
        .stash("sign_in", &UrlSource::literal("//evil.example"))
        .is_err());
    assert_eq!(redirects.consume("sign_in").unwrap(), "/a");
}

#[test]
fn no_candidate_is_a_configuration_error() {
    let mut session = MemorySession::new();
    let request = Request::post().with_referer("/ignored-on-post");
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    let err = redirects.stash("sign_in", &UrlSource::Default).unwrap_err();
    assert_eq!(err.reason, MissingCandidate::NoCandidate);
    assert!(!err.was_rejected());
}

#[test]
fn purposes_are_isolated() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    redirects.stash("sign_in", &UrlSource::literal("/a")).unwrap();
    redirects.stash("sign_out", &UrlSource::literal("/b")).unwrap();
    assert_eq!(redirects.consume("sign_in").unwrap(), "/a");
    assert_eq!(redirects.consume("sign_out").unwrap(), "/b");
}

#[test]
fn tampered_entry_fails_revalidation_and_is_cleared() {
    let mut session = MemorySession::new();
    session.set("__url_stash_sign_in", "https://evil.example/steal".to_string());
    let request = Request::post();
    let validator = example_validator();
    {
        let mut redirects = StashedRedirects::new(&mut session, &request, &validator);
        let err = redirects.consume("sign_in").unwrap_err();
        assert_eq!(err.purpose, "sign_in");
    }
    assert!(session.is_empty());
}

#[test]
fn discard_returns_raw_value_without_failing() {
    let mut session = MemorySession::new();
    session.set("__url_stash_sign_in", "https://evil.example/raw".to_string());
    let request = Request::post();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    assert_eq!(
        redirects.discard("sign_in"),
        Some("https://evil.example/raw".to_string())
    );
    assert_eq!(redirects.discard("sign_in"), None);
}

#[test]
fn forward_or_uses_fallback_then_stashed() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    assert_eq!(redirects.forward_or("sign_in", "/root"), "/root");

    redirects.stash("sign_in", &UrlSource::literal("/users")).unwrap();
    assert_eq!(redirects.forward_or("sign_in", "/root"), "/users");
    assert_eq!(redirects.stashed("sign_in"), None);
    assert_eq!(redirects.forward_or("sign_in", "/root"), "/root");
}

#[test]
fn redirect_from_stashed_redirects_only_on_success() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);
    let mut response = Redirect::new();

    assert!(redirects
        .redirect_from_stashed("sign_in", &mut response)
        .is_err());
    assert!(!response.is_redirected());

    redirects
        .stash("sign_in", &UrlSource::literal("https://example.com/users"))
        .unwrap();
    redirects
        .redirect_from_stashed("sign_in", &mut response)
        .unwrap();
    assert_eq!(response.location.as_deref(), Some("https://example.com/users"));
}

#[test]
fn redirect_forward_or_to_always_redirects() {
    let mut session = MemorySession::new();
    let request = Request::get();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);
    let mut response = Redirect::new();

    redirects.redirect_forward_or_to("sign_in", "/", &mut response);
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[test]
fn redirect_url_is_validated_param() {
    let mut session = MemorySession::new();
    let validator = example_validator();

    let request = Request::get().with_param("redirect_url", "/users");
    let redirects = StashedRedirects::new(&mut session, &request, &validator);
    assert_eq!(redirects.redirect_url(), Some("/users".to_string()));

    let mut session = MemorySession::new();
    let request = Request::get().with_param("redirect_url", "http://evil.example/x");
    let redirects = StashedRedirects::new(&mut session, &request, &validator);
    assert_eq!(redirects.redirect_url(), None);
}

#[test]
fn hashed_keys_and_custom_param() {
    let mut session = MemorySession::new();
    let request = Request::get().with_param("return_to", "/settings");
    let validator = example_validator();
    {
        let mut redirects = StashedRedirects::new(&mut session, &request, &validator)
            .with_keys(KeyNamespacer::new("r:", KeyScheme::Hashed))
            .with_redirect_param("return_to");
        redirects.stash("sign_in", &UrlSource::Param).unwrap();
        assert!(redirects.key_for("sign_in").starts_with("r:"));
        assert_eq!(redirects.keys().prefix(), "r:");
        assert_eq!(redirects.keys().scheme(), KeyScheme::Hashed);
    }
    assert!(session.iter().all(|(k, _)| !k.contains("sign_in")));
    assert_eq!(session.iter().next().map(|(_, v)| v), Some("/settings"));
}

#[test]
fn dynamic_source_result_is_validated() {
    let mut session = MemorySession::new();
    let request = Request::post();
    let validator = example_validator();
    let mut redirects = StashedRedirects::new(&mut session, &request, &validator);

    let err = redirects
        .stash(
            "sign_out",
            &UrlSource::dynamic(|| Some("https://evil.example/".to_string())),
        )
        .unwrap_err();
    assert!(err.was_rejected());

    redirects
        .stash("sign_out", &UrlSource::dynamic(|| Some("/users".to_string())))
        .unwrap();
    assert_eq!(redirects.consume("sign_out").unwrap(), "/users");
}
