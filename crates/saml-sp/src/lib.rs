//! SAML 2.0 Service Provider AuthnRequest construction.
//!
//! This crate builds the `<samlp:AuthnRequest>` a service provider sends to
//! start single sign-on:
//!
//! - **AuthnRequest parameters** - Immutable caller choices for one request
//! - **AuthnRequest serialisation** - Resolve parameters against SP settings and emit XML
//! - **POST and Redirect bindings** - Encode the request for transport
//!
//! # Architecture
//!
//! - [`types`] - Request parameters, the AuthnRequest message, and SAML constants
//! - [`settings`] - SP and IdP settings supplying fallback values
//! - [`bindings`] - POST and Redirect binding encoders
//! - [`error`] - Error types for SAML operations
//!
//! # Example
//!
//! ```rust,ignore
//! use saml_sp::{AuthnRequest, AuthnRequestParams, SpSettings};
//! use saml_sp::bindings::HttpRedirectBinding;
//!
//! let settings = SpSettings::load("saml.toml")?;
//! let params = AuthnRequestParams::new(false, false, true);
//! let request = AuthnRequest::build(&settings, &params);
//! let url = HttpRedirectBinding::encode_authn_request(&request, None)?;
//! ```
//!
//! # SAML Specifications
//!
//! - [SAML 2.0 Core](https://docs.oasis-open.org/security/saml/v2.0/saml-core-2.0-os.pdf)
//! - [SAML 2.0 Bindings](https://docs.oasis-open.org/security/saml/v2.0/saml-bindings-2.0-os.pdf)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bindings;
pub mod error;
pub mod settings;
pub mod types;

pub use error::{SamlError, SamlResult};
pub use settings::SpSettings;
pub use types::*;
