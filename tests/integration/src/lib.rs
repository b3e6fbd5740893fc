//! Common test utilities and fixtures.

use std::io::Read;

use base64::Engine;
use flate2::read::DeflateDecoder;
use saml_sp::SpSettings;

/// Settings shared by the end-to-end tests.
pub const SETTINGS_TOML: &str = r#"
provider_name = "Example SP"

[sp]
entity_id = "https://sp.example.com/metadata"
assertion_consumer_service_url = "https://sp.example.com/acs"
name_id_format = "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent"

[idp]
entity_id = "https://idp.example.com"
single_sign_on_service_url = "https://idp.example.com/sso"

[security]
requested_authn_context = ["urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport"]
"#;

/// Installs a test log subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("saml_sp=debug")
        .with_test_writer()
        .try_init();
}

/// Parses the shared test settings.
pub fn settings() -> anyhow::Result<SpSettings> {
    init_tracing();
    Ok(SpSettings::from_toml_str(SETTINGS_TOML)?)
}

/// Recovers the request XML and relay state from a Redirect binding URL.
pub fn decode_redirect(url: &str) -> anyhow::Result<(String, Option<String>)> {
    let parsed = url::Url::parse(url)?;
    let mut request = None;
    let mut relay_state = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "SAMLRequest" => request = Some(value.into_owned()),
            "RelayState" => relay_state = Some(value.into_owned()),
            _ => {}
        }
    }
    let request = request.ok_or_else(|| anyhow::anyhow!("no SAMLRequest in {url}"))?;

    let compressed = base64::engine::general_purpose::STANDARD.decode(request)?;
    let mut xml = String::new();
    DeflateDecoder::new(compressed.as_slice()).read_to_string(&mut xml)?;
    Ok((xml, relay_state))
}
