//! SAML Name ID types.
//!
//! The subject identifier and name ID policy carried by an AuthnRequest.

use serde::{Deserialize, Serialize};

use super::{xml_escape, NameIdFormat, CM_BEARER};

/// SAML Name ID identifying the subject the IdP should authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameId {
    /// The actual identifier value.
    pub value: String,

    /// The format of the name identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl NameId {
    /// Creates a new name ID with the given value and no format.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: None,
        }
    }

    /// Sets the format URI for this name ID.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Returns the parsed name ID format.
    #[must_use]
    pub fn parsed_format(&self) -> NameIdFormat {
        self.format
            .as_deref()
            .and_then(NameIdFormat::from_uri)
            .unwrap_or_default()
    }

    /// Renders the `<saml:Subject>` element requesting this subject.
    #[must_use]
    pub fn to_subject_xml(&self) -> String {
        let format = self
            .format
            .as_deref()
            .map(|f| format!(r#" Format="{}""#, xml_escape(f)))
            .unwrap_or_default();

        format!(
            r#"<saml:Subject><saml:NameID{}>{}</saml:NameID><saml:SubjectConfirmation Method="{}"/></saml:Subject>"#,
            format,
            xml_escape(&self.value),
            CM_BEARER
        )
    }
}

/// Name ID policy for authentication requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameIdPolicy {
    /// The requested name ID format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Whether the IdP may create a new identifier for the subject.
    #[serde(default)]
    pub allow_create: bool,
}

impl NameIdPolicy {
    /// Creates a policy requesting the given format URI.
    ///
    /// The encrypted format is requested as unspecified.
    #[must_use]
    pub fn for_format(format: &str) -> Self {
        let format = match NameIdFormat::from_uri(format) {
            Some(known) => known.policy_format().uri().to_string(),
            None => format.to_string(),
        };
        Self {
            format: Some(format),
            allow_create: false,
        }
    }

    /// Sets whether new identifiers can be created.
    #[must_use]
    pub const fn allow_create(mut self, allow: bool) -> Self {
        self.allow_create = allow;
        self
    }

    /// Returns the parsed name ID format.
    #[must_use]
    pub fn parsed_format(&self) -> Option<NameIdFormat> {
        self.format.as_deref().and_then(NameIdFormat::from_uri)
    }

    /// Renders the `<samlp:NameIDPolicy>` element.
    ///
    /// `AllowCreate` is emitted only when it is `true`.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<samlp:NameIDPolicy");
        if let Some(format) = &self.format {
            xml.push_str(&format!(r#" Format="{}""#, xml_escape(format)));
        }
        if self.allow_create {
            xml.push_str(r#" AllowCreate="true""#);
        }
        xml.push_str("/>");
        xml
    }
}
