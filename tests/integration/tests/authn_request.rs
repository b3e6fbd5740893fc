//! AuthnRequest construction tests.

use saml_sp::{AuthnRequest, AuthnRequestInput, AuthnRequestParams, SamlBinding};
use saml_sp_integration_tests::settings;
use url::Url;

/// Descriptor that pins the subject and consumer URL of whatever it wraps.
struct TenantLogin {
    params: AuthnRequestParams,
    subject: String,
    acs: Url,
}

impl AuthnRequestInput for TenantLogin {
    fn base(&self) -> &AuthnRequestParams {
        &self.params
    }

    fn name_id_value_req(&self) -> Option<&str> {
        Some(&self.subject)
    }

    fn sp_consumer_url(&self) -> Option<&Url> {
        Some(&self.acs)
    }
}

/// Tests the request emitted for the plainest possible parameters.
#[test]
fn test_default_request() -> anyhow::Result<()> {
    let settings = settings()?;
    let request = AuthnRequest::build(&settings, &AuthnRequestParams::new(false, false, false));
    let xml = request.to_xml();

    assert!(request.validate().is_ok());
    assert!(xml.contains(r#"ProviderName="Example SP""#));
    assert!(xml.contains(r#"AssertionConsumerServiceURL="https://sp.example.com/acs""#));
    assert_eq!(request.parsed_binding(), Some(SamlBinding::HttpPost));
    assert!(!xml.contains("NameIDPolicy"));
    assert!(!xml.contains("<saml:Subject>"));
    assert!(xml.contains("RequestedAuthnContext"));

    Ok(())
}

/// Tests that every caller choice reaches the XML.
#[test]
fn test_full_parameters() -> anyhow::Result<()> {
    let settings = settings()?;
    let params = AuthnRequestParams::full(
        true,
        true,
        true,
        true,
        Some("jdoe".to_string()),
        Some(SamlBinding::HttpPost.uri().to_string()),
        false,
        Some(Url::parse("https://sp.example.org/acs")?),
    );
    let xml = AuthnRequest::build(&settings, &params).to_xml();

    assert!(xml.contains(r#"ForceAuthn="true""#));
    assert!(xml.contains(r#"IsPassive="true""#));
    assert!(!xml.contains("ProtocolBinding"));
    assert!(xml.contains(r#"AssertionConsumerServiceURL="https://sp.example.org/acs""#));
    assert!(xml.contains(
        r#"<saml:NameID Format="urn:oasis:names:tc:SAML:2.0:nameid-format:persistent">jdoe</saml:NameID>"#
    ));
    assert!(xml.contains(
        r#"<samlp:NameIDPolicy Format="urn:oasis:names:tc:SAML:2.0:nameid-format:persistent" AllowCreate="true"/>"#
    ));

    Ok(())
}

/// Tests that overridden accessors are honoured by the serialiser and by copies.
#[test]
fn test_wrapping_descriptor() -> anyhow::Result<()> {
    let settings = settings()?;
    let login = TenantLogin {
        params: AuthnRequestParams::with_name_id_subject(false, true, true, "user@example.com"),
        subject: "override".to_string(),
        acs: Url::parse("https://tenant.example.com/acs")?,
    };

    let direct = AuthnRequest::build(&settings, &login);
    let copied = AuthnRequest::build(&settings, &AuthnRequestParams::from_input(&login));

    for request in [&direct, &copied] {
        assert_eq!(
            request.subject.as_ref().map(|s| s.value.as_str()),
            Some("override")
        );
        assert_eq!(
            request.assertion_consumer_service_url,
            "https://tenant.example.com/acs"
        );
        assert!(request.is_passive);
    }

    Ok(())
}

/// Tests that two builds of the same parameters differ only in identity.
#[test]
fn test_request_ids_are_unique() -> anyhow::Result<()> {
    let settings = settings()?;
    let params = AuthnRequestParams::new(false, false, true);

    let first = AuthnRequest::build(&settings, &params);
    let second = AuthnRequest::build(&settings, &params);

    assert_ne!(first.id, second.id);
    assert_eq!(first.name_id_policy, second.name_id_policy);

    Ok(())
}
