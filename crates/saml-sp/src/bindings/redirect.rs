//! HTTP-Redirect Binding implementation.
//!
//! Sends a SAML request via URL query parameters with DEFLATE compression.

use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

use crate::error::{SamlError, SamlResult};
use crate::types::AuthnRequest;

use super::{RELAY_STATE_PARAM, SAML_REQUEST_PARAM};

/// HTTP-Redirect binding encoder.
#[derive(Debug, Clone, Copy)]
pub struct HttpRedirectBinding;

impl HttpRedirectBinding {
    /// Encodes an AuthnRequest as a redirect URL to its destination.
    pub fn encode_authn_request(
        request: &AuthnRequest,
        relay_state: Option<&str>,
    ) -> SamlResult<String> {
        Self::encode_request(&request.to_xml(), &request.destination, relay_state)
    }

    /// Encodes a SAML request for HTTP-Redirect binding.
    ///
    /// Returns a URL with the encoded message in query parameters.
    pub fn encode_request(
        xml: &str,
        destination: &str,
        relay_state: Option<&str>,
    ) -> SamlResult<String> {
        let compressed = deflate_compress(xml.as_bytes())?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&compressed);

        let separator = if destination.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}{}={}",
            destination,
            separator,
            SAML_REQUEST_PARAM,
            urlencoding::encode(&encoded)
        );

        if let Some(rs) = relay_state {
            url.push_str(&format!(
                "&{}={}",
                RELAY_STATE_PARAM,
                urlencoding::encode(rs)
            ));
        }

        tracing::debug!(
            "Encoded redirect request ({} bytes deflated to {})",
            xml.len(),
            compressed.len()
        );

        Ok(url)
    }
}

/// Compresses data using DEFLATE (raw, no zlib header).
fn deflate_compress(data: &[u8]) -> SamlResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| SamlError::Deflate(format!("Compression error: {e}")))?;
    encoder
        .finish()
        .map_err(|e| SamlError::Deflate(format!("Compression finish error: {e}")))
}
