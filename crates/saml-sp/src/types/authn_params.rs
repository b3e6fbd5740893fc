//! AuthnRequest input parameters.
//!
//! The caller's choices for one outbound authentication request. A bundle is
//! built once, never changes, and is read by [`AuthnRequest`](super::AuthnRequest)
//! when the request XML is emitted.

use serde::{Deserialize, Serialize};
use url::Url;

/// Read access to a set of AuthnRequest input parameters.
///
/// Only [`base`](Self::base) is required. Every other accessor reads the
/// embedded [`AuthnRequestParams`] by default, so a wrapping descriptor can
/// override individual accessors to inject request-time values. Both
/// [`AuthnRequestParams::from_input`] and the request serialiser read through
/// this trait, which keeps such overrides intact across copies.
pub trait AuthnRequestInput {
    /// Returns the underlying parameter bundle.
    fn base(&self) -> &AuthnRequestParams;

    /// Whether `ForceAuthn="true"` should be set on the request.
    fn force_authn(&self) -> bool {
        self.base().force_authn
    }

    /// Whether `IsPassive="true"` should be set on the request.
    fn is_passive(&self) -> bool {
        self.base().is_passive
    }

    /// Whether a `NameIDPolicy` element should be included.
    fn sets_name_id_policy(&self) -> bool {
        self.base().set_name_id_policy
    }

    /// Whether `AllowCreate="true"` should be set on the `NameIDPolicy`
    /// element. Only meaningful when [`sets_name_id_policy`](Self::sets_name_id_policy)
    /// is also `true`.
    fn allow_create(&self) -> bool {
        self.base().allow_create
    }

    /// The subject the IdP should authenticate, if any.
    fn name_id_value_req(&self) -> Option<&str> {
        self.base().name_id_value_req.as_deref()
    }

    /// Explicit `ProtocolBinding` value; `None` means use the configured one.
    fn protocol_binding(&self) -> Option<&str> {
        self.base().protocol_binding.as_deref()
    }

    /// Whether the `ProtocolBinding` attribute should be emitted at all.
    fn include_protocol_binding(&self) -> bool {
        self.base().include_protocol_binding
    }

    /// Override for the `AssertionConsumerServiceURL`; `None` means use the
    /// configured one.
    ///
    /// The URL is emitted in its normalised form, so an empty path is sent
    /// as `/`.
    fn sp_consumer_url(&self) -> Option<&Url> {
        self.base().sp_consumer_url.as_ref()
    }
}

/// Input parameters for a SAML 2.0 authentication request.
///
/// Fields are private and there are no setters. No combination of inputs is
/// rejected: `is_passive` together with `force_authn`, a `protocol_binding`
/// that is not a URI, or an empty `name_id_value_req` are all recorded
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthnRequestParams {
    force_authn: bool,
    is_passive: bool,
    set_name_id_policy: bool,
    allow_create: bool,
    name_id_value_req: Option<String>,
    protocol_binding: Option<String>,
    include_protocol_binding: bool,
    sp_consumer_url: Option<Url>,
}

impl AuthnRequestParams {
    /// Creates parameters with every optional field at its default.
    ///
    /// `allow_create` and `include_protocol_binding` are `true`; the subject,
    /// protocol binding and consumer URL are absent.
    #[must_use]
    pub fn new(force_authn: bool, is_passive: bool, set_name_id_policy: bool) -> Self {
        Self::with_allow_create(force_authn, is_passive, set_name_id_policy, true)
    }

    /// Creates parameters with an explicit `allow_create` flag.
    #[must_use]
    pub fn with_allow_create(
        force_authn: bool,
        is_passive: bool,
        set_name_id_policy: bool,
        allow_create: bool,
    ) -> Self {
        Self::full(
            force_authn,
            is_passive,
            set_name_id_policy,
            allow_create,
            None,
            None,
            true,
            None,
        )
    }

    /// Creates parameters requesting authentication of a specific subject.
    #[must_use]
    pub fn with_name_id_subject(
        force_authn: bool,
        is_passive: bool,
        set_name_id_policy: bool,
        name_id_value_req: impl Into<String>,
    ) -> Self {
        Self::full(
            force_authn,
            is_passive,
            set_name_id_policy,
            true,
            Some(name_id_value_req.into()),
            None,
            true,
            None,
        )
    }

    /// Creates parameters from every field.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub const fn full(
        force_authn: bool,
        is_passive: bool,
        set_name_id_policy: bool,
        allow_create: bool,
        name_id_value_req: Option<String>,
        protocol_binding: Option<String>,
        include_protocol_binding: bool,
        sp_consumer_url: Option<Url>,
    ) -> Self {
        Self {
            force_authn,
            is_passive,
            set_name_id_policy,
            allow_create,
            name_id_value_req,
            protocol_binding,
            include_protocol_binding,
            sp_consumer_url,
        }
    }

    /// Starts a builder seeded with the same defaults as [`new`](Self::new).
    #[must_use]
    pub fn builder(
        force_authn: bool,
        is_passive: bool,
        set_name_id_policy: bool,
    ) -> AuthnRequestParamsBuilder {
        AuthnRequestParamsBuilder {
            params: Self::new(force_authn, is_passive, set_name_id_policy),
        }
    }

    /// Creates parameters by copying them from another set.
    ///
    /// Every value is read through the source's [`AuthnRequestInput`]
    /// accessors, so a wrapper that overrides an accessor has its override
    /// recorded in the copy.
    #[must_use]
    pub fn from_input<I: AuthnRequestInput + ?Sized>(source: &I) -> Self {
        Self {
            force_authn: source.force_authn(),
            is_passive: source.is_passive(),
            set_name_id_policy: source.sets_name_id_policy(),
            allow_create: source.allow_create(),
            name_id_value_req: source.name_id_value_req().map(str::to_owned),
            protocol_binding: source.protocol_binding().map(str::to_owned),
            include_protocol_binding: source.include_protocol_binding(),
            sp_consumer_url: source.sp_consumer_url().cloned(),
        }
    }
}

impl AuthnRequestInput for AuthnRequestParams {
    fn base(&self) -> &AuthnRequestParams {
        self
    }
}

/// Builder for [`AuthnRequestParams`].
#[derive(Debug, Clone)]
pub struct AuthnRequestParamsBuilder {
    params: AuthnRequestParams,
}

impl AuthnRequestParamsBuilder {
    /// Sets the `allow_create` flag.
    #[must_use]
    pub const fn allow_create(mut self, allow_create: bool) -> Self {
        self.params.allow_create = allow_create;
        self
    }

    /// Sets the subject that should be authenticated.
    #[must_use]
    pub fn name_id_value_req(mut self, value: impl Into<String>) -> Self {
        self.params.name_id_value_req = Some(value.into());
        self
    }

    /// Sets an explicit protocol binding URI.
    #[must_use]
    pub fn protocol_binding(mut self, binding: impl Into<String>) -> Self {
        self.params.protocol_binding = Some(binding.into());
        self
    }

    /// Sets whether the `ProtocolBinding` attribute is emitted.
    #[must_use]
    pub const fn include_protocol_binding(mut self, include: bool) -> Self {
        self.params.include_protocol_binding = include;
        self
    }

    /// Overrides the assertion consumer service URL.
    #[must_use]
    pub fn sp_consumer_url(mut self, url: Url) -> Self {
        self.params.sp_consumer_url = Some(url);
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> AuthnRequestParams {
        self.params
    }
}
