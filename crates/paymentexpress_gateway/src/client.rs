//! Downstream client selection and configuration.
//!
//! The Payment Express processor exposes two client modes: PxPay, the
//! offsite redirect gateway used for ordinary payments, and PxPost, the
//! direct-post gateway this plugin uses for refunds. Which one a request
//! goes through is decided from the host's resolved action name; each mode
//! carries its own credential pair.

use masking::Secret;

use crate::{
    consts,
    errors::{CustomResult, GatewayError},
    types::{PaymentRequest, PaymentResponse},
};

/// The two client modes offered by the processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ClientKind {
    /// Offsite redirect gateway (hosted payment page).
    PxPay,
    /// Direct-post gateway, used for refunds.
    PxPost,
}

impl ClientKind {
    /// Pick the client mode for the host's resolved action name.
    ///
    /// Matching is substring-based: any action containing
    /// `transaction-refund` selects PxPost, so an action such as
    /// `view-transaction-refund-log` would too. This mirrors the host's
    /// historical routing behaviour and is kept on purpose.
    pub fn for_action(action: &str) -> Self {
        if action.contains(consts::REFUND_ACTION_FRAGMENT) {
            Self::PxPost
        } else {
            Self::PxPay
        }
    }
}

/// Configuration handed to the downstream payment client.
///
/// Built per request from the gateway settings, with credentials already
/// resolved; discarded after the call.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Which client mode to instantiate.
    pub kind: ClientKind,
    /// Resolved user id for `kind`'s credential pair.
    pub username: Secret<String>,
    /// Resolved password for `kind`'s credential pair.
    pub password: Secret<String>,
    /// Route to the processor's test environment.
    pub test_mode: bool,
}

/// Interceptor applied to a freshly built [`ClientConfig`] before use.
///
/// Stands in for the host's before-create-gateway event without depending on
/// its event bus: external code receives the config and returns the one the
/// gateway will actually use.
pub type CreateClientHook = Box<dyn Fn(ClientConfig) -> ClientConfig + Send + Sync>;

/// Send primitive of the external Payment Express client library.
///
/// The implementation owns HTTP transport, request signing and response
/// parsing; this shim only supplies the configuration and the finalized
/// payload, and passes failures through unchanged.
pub trait PaymentClient {
    /// Send `request` through the client mode named by `config`.
    fn send(
        &self,
        config: &ClientConfig,
        request: &PaymentRequest,
    ) -> CustomResult<Box<dyn PaymentResponse>, GatewayError>;
}
