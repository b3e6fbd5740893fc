//! SAML 2.0 types and data structures.
//!
//! The caller-facing AuthnRequest parameters, the resolved AuthnRequest
//! message, and the name ID and constant types they are built from.

use std::borrow::Cow;

mod authn_params;
mod authn_request;
mod constants;
mod name_id;

pub use authn_params::*;
pub use authn_request::*;
pub use constants::*;
pub use name_id::*;

/// Escapes text for use in XML content and double-quoted attributes.
pub(crate) fn xml_escape(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}
