//! SAML AuthnRequest types.
//!
//! Authentication request message sent by a service provider to an identity
//! provider, resolved from caller parameters and SP settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    xml_escape, AuthnContextClass, AuthnRequestInput, NameId, NameIdPolicy, SamlBinding, SAMLP_NS,
    SAML_NS,
};
use crate::settings::SpSettings;

/// SAML Authentication Request.
///
/// Every optional attribute and element is already decided: `None` or
/// `false` means it is left out of the emitted XML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthnRequest {
    /// Unique identifier for this request.
    pub id: String,

    /// Version of the SAML protocol (always "2.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Timestamp when this request was issued.
    pub issue_instant: DateTime<Utc>,

    /// The entity ID of the service provider issuing the request.
    pub issuer: String,

    /// The IdP single sign-on URL the request is sent to.
    pub destination: String,

    /// The URL where the response should be sent, as serialised by
    /// [`url::Url`] (an empty path becomes `/`).
    pub assertion_consumer_service_url: String,

    /// Binding the IdP should use for the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_binding: Option<String>,

    /// Subject the IdP is asked to authenticate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<NameId>,

    /// Name ID policy constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_id_policy: Option<NameIdPolicy>,

    /// Requested authentication context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_authn_context: Option<RequestedAuthnContext>,

    /// Whether the IdP must authenticate the user directly.
    #[serde(default)]
    pub force_authn: bool,

    /// Whether the IdP must not interact with the user.
    #[serde(default)]
    pub is_passive: bool,

    /// A human-readable name for the requester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

fn default_version() -> String {
    "2.0".to_string()
}

impl AuthnRequest {
    /// Builds a request with a fresh ID issued now.
    #[must_use]
    pub fn build<P: AuthnRequestInput + ?Sized>(settings: &SpSettings, params: &P) -> Self {
        Self::build_at(
            settings,
            params,
            format!("_id{}", uuid::Uuid::new_v4()),
            Utc::now(),
        )
    }

    /// Builds a request with a caller-chosen ID and issue instant.
    ///
    /// Parameters are read through [`AuthnRequestInput`] only; anything the
    /// caller left unset falls back to `settings`.
    #[must_use]
    pub fn build_at<P: AuthnRequestInput + ?Sized>(
        settings: &SpSettings,
        params: &P,
        id: impl Into<String>,
        issue_instant: DateTime<Utc>,
    ) -> Self {
        let id = id.into();

        let protocol_binding = if params.include_protocol_binding() {
            Some(
                params
                    .protocol_binding()
                    .unwrap_or(settings.sp.protocol_binding.as_str())
                    .to_string(),
            )
        } else {
            if let Some(discarded) = params.protocol_binding() {
                tracing::debug!(
                    "AuthnRequest {}: ProtocolBinding '{}' suppressed by caller",
                    id,
                    discarded
                );
            }
            None
        };

        let assertion_consumer_service_url = params
            .sp_consumer_url()
            .unwrap_or(&settings.sp.assertion_consumer_service_url)
            .to_string();

        let name_id_policy = params.sets_name_id_policy().then(|| {
            NameIdPolicy::for_format(&settings.sp.name_id_format)
                .allow_create(params.allow_create())
        });

        let name_id_format = settings.sp.name_id_format.as_str();
        let subject = params
            .name_id_value_req()
            .map(|value| NameId::new(value).with_format(name_id_format));

        let security = &settings.security;
        let requested_authn_context = if security.requested_authn_context.is_empty() {
            None
        } else {
            Some(RequestedAuthnContext {
                comparison: security.requested_authn_context_comparison,
                authn_context_class_refs: security.requested_authn_context.clone(),
            })
        };

        tracing::debug!(
            "Built AuthnRequest {} for {} (force_authn={}, is_passive={})",
            id,
            settings.idp.single_sign_on_service_url,
            params.force_authn(),
            params.is_passive()
        );

        Self {
            id,
            version: default_version(),
            issue_instant,
            issuer: settings.sp.entity_id.clone(),
            destination: settings.idp.single_sign_on_service_url.to_string(),
            assertion_consumer_service_url,
            protocol_binding,
            subject,
            name_id_policy,
            requested_authn_context,
            force_authn: params.force_authn(),
            is_passive: params.is_passive(),
            provider_name: settings.provider_name.clone(),
        }
    }

    /// Returns the parsed protocol binding.
    #[must_use]
    pub fn parsed_binding(&self) -> Option<SamlBinding> {
        self.protocol_binding
            .as_deref()
            .and_then(SamlBinding::from_uri)
    }

    /// Renders the `<samlp:AuthnRequest>` document.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut attrs = format!(
            r#"ID="{}" Version="{}" IssueInstant="{}" Destination="{}""#,
            xml_escape(&self.id),
            xml_escape(&self.version),
            self.issue_instant.format("%Y-%m-%dT%H:%M:%SZ"),
            xml_escape(&self.destination)
        );
        if let Some(name) = &self.provider_name {
            attrs.push_str(&format!(r#" ProviderName="{}""#, xml_escape(name)));
        }
        if self.force_authn {
            attrs.push_str(r#" ForceAuthn="true""#);
        }
        if self.is_passive {
            attrs.push_str(r#" IsPassive="true""#);
        }
        if let Some(binding) = &self.protocol_binding {
            attrs.push_str(&format!(r#" ProtocolBinding="{}""#, xml_escape(binding)));
        }
        attrs.push_str(&format!(
            r#" AssertionConsumerServiceURL="{}""#,
            xml_escape(&self.assertion_consumer_service_url)
        ));

        let subject = self
            .subject
            .as_ref()
            .map(NameId::to_subject_xml)
            .unwrap_or_default();
        let policy = self
            .name_id_policy
            .as_ref()
            .map(NameIdPolicy::to_xml)
            .unwrap_or_default();
        let context = self
            .requested_authn_context
            .as_ref()
            .map(RequestedAuthnContext::to_xml)
            .unwrap_or_default();

        format!(
            r#"<samlp:AuthnRequest xmlns:samlp="{}" xmlns:saml="{}" {}><saml:Issuer>{}</saml:Issuer>{}{}{}</samlp:AuthnRequest>"#,
            SAMLP_NS,
            SAML_NS,
            attrs,
            xml_escape(&self.issuer),
            subject,
            policy,
            context
        )
    }

    /// Validates the basic structure of this request.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("ID is required".to_string());
        }
        if self.version != "2.0" {
            return Err(format!("Unsupported SAML version: {}", self.version));
        }
        if self.issuer.is_empty() {
            return Err("Issuer is required".to_string());
        }
        Ok(())
    }
}

/// Requested authentication context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedAuthnContext {
    /// Comparison method for the authentication context.
    #[serde(default)]
    pub comparison: AuthnContextComparison,

    /// List of acceptable authentication context class references.
    #[serde(default)]
    pub authn_context_class_refs: Vec<String>,
}

impl RequestedAuthnContext {
    /// Creates a context requiring exact match of a class reference.
    #[must_use]
    pub fn exact(class: AuthnContextClass) -> Self {
        Self {
            comparison: AuthnContextComparison::Exact,
            authn_context_class_refs: vec![class.uri().to_string()],
        }
    }

    /// Renders the `<samlp:RequestedAuthnContext>` element.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let refs: String = self
            .authn_context_class_refs
            .iter()
            .map(|r| {
                format!(
                    "<saml:AuthnContextClassRef>{}</saml:AuthnContextClassRef>",
                    xml_escape(r)
                )
            })
            .collect();
        format!(
            r#"<samlp:RequestedAuthnContext Comparison="{}">{}</samlp:RequestedAuthnContext>"#,
            self.comparison.as_str(),
            refs
        )
    }
}

/// Authentication context comparison methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthnContextComparison {
    /// Exact match required.
    #[default]
    Exact,
    /// Match must be at least as strong.
    Minimum,
    /// Match must be at most as strong.
    Maximum,
    /// Match must be stronger than any listed context.
    Better,
}

impl AuthnContextComparison {
    /// Returns the string value for this comparison.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Better => "better",
        }
    }
}
