//! HTTP-POST Binding implementation.
//!
//! Sends a SAML request via an auto-submitting HTML form.

use base64::Engine;

use crate::types::{xml_escape, AuthnRequest};

use super::{RELAY_STATE_PARAM, SAML_REQUEST_PARAM};

/// HTTP-POST binding encoder.
#[derive(Debug, Clone, Copy)]
pub struct HttpPostBinding;

impl HttpPostBinding {
    /// Encodes an AuthnRequest as a form posting to its destination.
    #[must_use]
    pub fn encode_authn_request(request: &AuthnRequest, relay_state: Option<&str>) -> String {
        Self::encode_request(&request.to_xml(), &request.destination, relay_state)
    }

    /// Encodes a SAML request for HTTP-POST binding.
    ///
    /// Returns an HTML page whose form submits itself on load. The destination
    /// and relay state are escaped the same way as AuthnRequest attributes.
    #[must_use]
    pub fn encode_request(xml: &str, destination: &str, relay_state: Option<&str>) -> String {
        let mut fields = hidden_input(
            SAML_REQUEST_PARAM,
            &base64::engine::general_purpose::STANDARD.encode(xml),
        );
        if let Some(rs) = relay_state {
            fields.push_str(&hidden_input(RELAY_STATE_PARAM, rs));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"><title>Signing in</title></head>
<body onload="document.forms[0].submit()">
<form method="post" action="{}">
{}<noscript><button type="submit">Continue to identity provider</button></noscript>
</form>
</body>
</html>"#,
            xml_escape(destination),
            fields
        )
    }
}

fn hidden_input(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\"/>\n",
        name,
        xml_escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SSO_URL: &str = "https://idp.example.com/sso";

    #[test]
    fn form_carries_encoded_request() {
        let xml = r#"<samlp:AuthnRequest>test</samlp:AuthnRequest>"#;
        let html = HttpPostBinding::encode_request(xml, SSO_URL, Some("state123"));

        assert!(html.contains(r#"action="https://idp.example.com/sso""#));
        assert!(html.contains(r#"name="RelayState" value="state123""#));

        let marker = r#"name="SAMLRequest" value=""#;
        let start = html.find(marker).unwrap() + marker.len();
        let end = html[start..].find('"').unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&html[start..start + end])
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), xml);
    }

    #[test]
    fn values_share_request_escaping() {
        let relay_state = r#"it's "a" <b>&c"#;
        let html = HttpPostBinding::encode_request(
            "<x/>",
            "https://idp.example.com/sso?a=1&b=2",
            Some(relay_state),
        );

        assert!(html.contains("a=1&amp;b=2"));
        assert!(html.contains(&format!(r#"value="{}""#, xml_escape(relay_state))));
        assert!(html.contains("it&apos;s &quot;a&quot; &lt;b&gt;&amp;c"));
        assert!(!html.contains("<b>"));
    }
}
