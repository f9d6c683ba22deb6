//! Gateway settings and credential resolution.

use masking::Secret;
use serde::{Deserialize, Serialize};

/// Resolves environment-variable indirections in stored settings values.
///
/// The resolution syntax belongs to the hosting environment, not to this
/// crate; any `Fn(&str) -> String` qualifies, so hosts pass a closure over
/// their own configuration layer. Resolution must be silent on failure: a
/// value that carries no indirection, or one that cannot be resolved, comes
/// back unchanged.
pub trait EnvResolver {
    /// Resolve `raw` to its literal value.
    fn resolve(&self, raw: &str) -> String;
}

impl<F> EnvResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Persisted plugin settings, loaded by the host at request time and
/// immutable for the duration of a request.
///
/// The credential fields may hold environment-variable references rather
/// than literal secrets; they go through the gateway's [`EnvResolver`] right
/// before the downstream client is configured.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatewaySettings {
    /// PxPay user id for redirect payments.
    pub username: Secret<String>,
    /// PxPay key for redirect payments.
    pub password: Secret<String>,
    /// PxPost user id, used only for refunds.
    pub px_post_username: Secret<String>,
    /// PxPost password, used only for refunds.
    pub px_post_password: Secret<String>,
    /// Merchant vendor identifier at the processor.
    pub vendor: String,
    /// Route requests to the processor's test environment.
    pub test_mode: bool,
    /// Whether the merchant has switched refunds on. Absent means refunds
    /// are unsupported, not an error.
    pub enable_refunds: Option<bool>,
}
