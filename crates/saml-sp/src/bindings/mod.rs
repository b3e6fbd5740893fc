//! SAML bindings for sending an AuthnRequest to the IdP.
//!
//! - **HTTP-Redirect Binding** - The request is deflated, base64-encoded and
//!   carried in the `SAMLRequest` query parameter
//! - **HTTP-POST Binding** - The request is base64-encoded into an
//!   auto-submitting HTML form
//!
//! # Usage
//!
//! ```rust,ignore
//! use saml_sp::bindings::{HttpPostBinding, HttpRedirectBinding};
//!
//! let request = AuthnRequest::build(&settings, &params);
//! let url = HttpRedirectBinding::encode_authn_request(&request, Some("relay_state"))?;
//! let html = HttpPostBinding::encode_authn_request(&request, Some("relay_state"));
//! ```

mod post;
mod redirect;

pub use post::*;
pub use redirect::*;

/// Form and query parameter carrying the request.
pub const SAML_REQUEST_PARAM: &str = "SAMLRequest";

/// Form and query parameter carrying the relay state.
pub const RELAY_STATE_PARAM: &str = "RelayState";
