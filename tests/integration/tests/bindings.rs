//! Binding integration tests.

use saml_sp::bindings::{HttpPostBinding, HttpRedirectBinding};
use saml_sp::{AuthnRequest, AuthnRequestParams};
use saml_sp_integration_tests::{decode_redirect, settings};

/// Tests that a redirect URL carries the exact request XML.
#[test]
fn test_redirect_login_url() -> anyhow::Result<()> {
    let settings = settings()?;
    let request = AuthnRequest::build(
        &settings,
        &AuthnRequestParams::with_name_id_subject(false, false, true, "jdoe"),
    );

    let url = HttpRedirectBinding::encode_authn_request(&request, Some("/dashboard?tab=1"))?;
    assert!(url.starts_with("https://idp.example.com/sso?SAMLRequest="));

    let (xml, relay_state) = decode_redirect(&url)?;
    assert_eq!(xml, request.to_xml());
    assert_eq!(relay_state.as_deref(), Some("/dashboard?tab=1"));

    Ok(())
}

/// Tests that a POST form targets the IdP.
#[test]
fn test_post_login_form() -> anyhow::Result<()> {
    let settings = settings()?;
    let request = AuthnRequest::build(&settings, &AuthnRequestParams::new(true, false, false));

    let html = HttpPostBinding::encode_authn_request(&request, None);

    assert!(html.contains(r#"action="https://idp.example.com/sso""#));
    assert!(html.contains(r#"name="SAMLRequest""#));
    assert!(!html.contains("RelayState"));

    Ok(())
}
