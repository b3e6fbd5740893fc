//! Service provider settings.
//!
//! Supplies the values an AuthnRequest falls back to when the caller's
//! parameters leave them unset. Settings are read from TOML:
//!
//! ```toml
//! provider_name = "Example SP"
//!
//! [sp]
//! entity_id = "https://sp.example.com/metadata"
//! assertion_consumer_service_url = "https://sp.example.com/acs"
//!
//! [idp]
//! entity_id = "https://idp.example.com"
//! single_sign_on_service_url = "https://idp.example.com/sso"
//!
//! [security]
//! requested_authn_context = ["urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{SamlError, SamlResult};
use crate::types::{AuthnContextComparison, NameIdFormat, SamlBinding};

/// Settings for one service provider talking to one identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpSettings {
    /// Service provider settings.
    pub sp: ServiceProviderSettings,
    /// Identity provider settings.
    pub idp: IdentityProviderSettings,
    /// Request security options.
    #[serde(default)]
    pub security: SecuritySettings,
    /// Emitted as `ProviderName` when set.
    #[serde(default)]
    pub provider_name: Option<String>,
}

/// Service provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProviderSettings {
    /// Entity ID, used as the request Issuer.
    pub entity_id: String,
    /// Default assertion consumer service URL.
    ///
    /// Stored in parsed form, so the emitted value is the normalised URL: an
    /// empty path becomes `/` (`https://sp.example.com` is sent as
    /// `https://sp.example.com/`). Configure the exact string registered in
    /// the IdP metadata.
    pub assertion_consumer_service_url: Url,
    /// Default protocol binding URI.
    #[serde(default = "default_protocol_binding")]
    pub protocol_binding: String,
    /// Name ID format URI for the policy and requested subject.
    #[serde(default = "default_name_id_format")]
    pub name_id_format: String,
}

/// Identity provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityProviderSettings {
    /// Entity ID of the identity provider.
    pub entity_id: String,
    /// Single sign-on endpoint the request is sent to, normalised like
    /// [`ServiceProviderSettings::assertion_consumer_service_url`].
    pub single_sign_on_service_url: Url,
}

/// Request security options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// AuthnContext class references to request; empty means none.
    #[serde(default)]
    pub requested_authn_context: Vec<String>,
    /// Comparison applied to the requested classes.
    #[serde(default)]
    pub requested_authn_context_comparison: AuthnContextComparison,
}

fn default_protocol_binding() -> String {
    SamlBinding::HttpPost.uri().to_string()
}

fn default_name_id_format() -> String {
    NameIdFormat::Unspecified.uri().to_string()
}

impl SpSettings {
    /// Parses and validates settings from a TOML document.
    pub fn from_toml_str(content: &str) -> SamlResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SamlResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading SAML settings from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks the values every AuthnRequest depends on.
    pub fn validate(&self) -> SamlResult<()> {
        if self.sp.entity_id.is_empty() {
            return Err(SamlError::InvalidSettings("sp.entity_id is empty".to_string()));
        }
        if self.idp.entity_id.is_empty() {
            return Err(SamlError::InvalidSettings("idp.entity_id is empty".to_string()));
        }
        if self.sp.protocol_binding.is_empty() {
            return Err(SamlError::InvalidSettings("sp.protocol_binding is empty".to_string()));
        }
        if SamlBinding::from_uri(&self.sp.protocol_binding).is_none() {
            tracing::warn!(
                "Unrecognised default protocol binding '{}'",
                self.sp.protocol_binding
            );
        }
        Ok(())
    }
}
