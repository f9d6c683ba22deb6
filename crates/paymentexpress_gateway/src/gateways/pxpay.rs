//! The Payment Express gateway.
//!
//! Ordinary payments run through PxPay: the customer is redirected to the
//! processor's hosted page, so no card data touches the host. Refunds run
//! server-to-server through PxPost with its own credential pair. This module
//! decides which of the two a request uses, resolves credentials, finalizes
//! the payload and forwards the call; everything on the wire belongs to the
//! downstream client behind [`PaymentClient`].

pub mod transformers;

use std::fmt;

use error_stack::ResultExt;
use masking::{PeekInterface, Secret};

use crate::{
    client::{ClientConfig, ClientKind, CreateClientHook, PaymentClient},
    configs::{EnvResolver, GatewaySettings},
    consts,
    errors::{CustomResult, GatewayError},
    types::{LineItem, PaymentCard, PaymentRequest, PaymentResponse, TemplateRenderer, Transaction},
};

use self::transformers as pxpay;
pub use self::transformers::RequestResponse;

/// Payment Express gateway instance.
///
/// One is built per inbound request from the persisted [`GatewaySettings`];
/// it holds no mutable state and is discarded once the response is wrapped.
pub struct PaymentExpress {
    settings: GatewaySettings,
    resolver: Box<dyn EnvResolver + Send + Sync>,
    before_create_client: Option<CreateClientHook>,
}

impl fmt::Debug for PaymentExpress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentExpress")
            .field("settings", &self.settings)
            .field(
                "before_create_client",
                &self.before_create_client.as_ref().map(|_| "..."),
            )
            .finish_non_exhaustive()
    }
}

impl PaymentExpress {
    /// Build a gateway from persisted settings, without environment
    /// indirection or interceptors.
    pub fn new(settings: GatewaySettings) -> Self {
        Self {
            settings,
            // Hosts without environment indirection keep values as stored.
            resolver: Box::new(|raw: &str| raw.to_owned()),
            before_create_client: None,
        }
    }

    /// Attach the hosting environment's variable resolver.
    pub fn with_env_resolver(
        mut self,
        resolver: impl EnvResolver + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Attach an interceptor that may adjust the client configuration right
    /// before the downstream client is created.
    pub fn with_before_create_client(
        mut self,
        hook: impl Fn(ClientConfig) -> ClientConfig + Send + Sync + 'static,
    ) -> Self {
        self.before_create_client = Some(Box::new(hook));
        self
    }

    /// Settings this gateway was built from.
    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Name shown in the host's control panel.
    pub fn display_name() -> &'static str {
        consts::DISPLAY_NAME
    }

    /// Stored payment sources are never offered through this gateway.
    pub fn supports_payment_sources(&self) -> bool {
        false
    }

    /// Refunds stay off unless the merchant has explicitly switched them on.
    pub fn supports_refund(&self) -> bool {
        self.settings.enable_refunds.unwrap_or(false)
    }

    /// Render the settings form through the host's templating system.
    pub fn settings_html(&self, view: &dyn TemplateRenderer) -> CustomResult<String, GatewayError> {
        let context = serde_json::to_value(&self.settings)
            .change_context(GatewayError::RequestEncodingFailed)?;
        view.render(consts::SETTINGS_TEMPLATE, &context)
    }

    /// Build the downstream client configuration for the host's resolved
    /// action name, applying credential resolution and the before-create
    /// interceptor.
    pub fn client_config(&self, action: &str) -> ClientConfig {
        let kind = ClientKind::for_action(action);
        let (username, password) = match kind {
            ClientKind::PxPay => (&self.settings.username, &self.settings.password),
            ClientKind::PxPost => {
                tracing::debug!(%action, "swapping to the PxPost client for refund handling");
                (
                    &self.settings.px_post_username,
                    &self.settings.px_post_password,
                )
            }
        };
        let config = ClientConfig {
            kind,
            username: self.resolve(username),
            password: self.resolve(password),
            test_mode: self.settings.test_mode,
        };
        match &self.before_create_client {
            Some(hook) => hook(config),
            None => config,
        }
    }

    fn resolve(&self, value: &Secret<String>) -> Secret<String> {
        Secret::new(self.resolver.resolve(value.peek()))
    }

    /// Finalize the host-produced base payload for `transaction`.
    ///
    /// Card and item details take no part in the PxPay payload (the
    /// processor collects card data on its hosted page); they are accepted
    /// to satisfy the host's mapper signature.
    pub fn create_payment_request(
        &self,
        transaction: &Transaction,
        card: Option<&PaymentCard>,
        items: Option<&[LineItem]>,
        base: PaymentRequest,
    ) -> PaymentRequest {
        pxpay::finalize_payment_request(transaction, card, items, base)
    }

    /// Pair a downstream response with the transaction it answers.
    pub fn prepare_response(
        &self,
        response: Box<dyn PaymentResponse>,
        transaction: Transaction,
    ) -> RequestResponse {
        RequestResponse::new(response, transaction)
    }

    /// End-to-end payment dispatch: pick the client mode for `action`,
    /// finalize the payload, send it downstream and wrap the result.
    ///
    /// Downstream failures come back unchanged; this shim neither catches
    /// nor transforms them.
    pub fn process_payment(
        &self,
        client: &dyn PaymentClient,
        action: &str,
        transaction: &Transaction,
        card: Option<&PaymentCard>,
        items: Option<&[LineItem]>,
        base: PaymentRequest,
    ) -> CustomResult<RequestResponse, GatewayError> {
        let config = self.client_config(action);
        let request = self.create_payment_request(transaction, card, items, base);
        tracing::info!(
            client = %config.kind,
            transaction_id = %request.transaction_id,
            "forwarding payment request"
        );
        let response = client.send(&config, &request)?;
        Ok(self.prepare_response(response, transaction.clone()))
    }

    /// Refund dispatch. Fails fast when refunds are disabled or the
    /// transaction carries no processor reference to refund against.
    pub fn process_refund(
        &self,
        client: &dyn PaymentClient,
        action: &str,
        transaction: &Transaction,
        base: PaymentRequest,
    ) -> CustomResult<RequestResponse, GatewayError> {
        if !self.supports_refund() {
            return Err(GatewayError::NotSupported {
                message: "refunds",
                gateway: consts::GATEWAY_ID,
            }
            .into());
        }
        let request = self.create_payment_request(transaction, None, None, base);
        if request.transaction_reference.is_none() {
            return Err(GatewayError::MissingRequiredField {
                field_name: "transactionReference",
            }
            .into());
        }
        let config = self.client_config(action);
        tracing::info!(
            client = %config.kind,
            transaction_id = %request.transaction_id,
            "forwarding refund request"
        );
        let response = client.send(&config, &request)?;
        Ok(self.prepare_response(response, transaction.clone()))
    }
}

#[cfg(test)]
mod tests {
    use masking::{PeekInterface, Secret};

    use super::PaymentExpress;
    use crate::{client::ClientKind, configs::GatewaySettings};

    fn settings() -> GatewaySettings {
        GatewaySettings {
            username: Secret::new("pxpay-user".to_string()),
            password: Secret::new("pxpay-key".to_string()),
            px_post_username: Secret::new("pxpost-user".to_string()),
            px_post_password: Secret::new("pxpost-key".to_string()),
            vendor: "acme".to_string(),
            test_mode: true,
            enable_refunds: None,
        }
    }

    #[test]
    fn payment_sources_are_never_supported() {
        let mut s = settings();
        s.enable_refunds = Some(true);
        assert!(!PaymentExpress::new(s).supports_payment_sources());
        assert!(!PaymentExpress::new(settings()).supports_payment_sources());
    }

    #[test]
    fn refund_support_requires_explicit_opt_in() {
        assert!(!PaymentExpress::new(settings()).supports_refund());

        let mut off = settings();
        off.enable_refunds = Some(false);
        assert!(!PaymentExpress::new(off).supports_refund());

        let mut on = settings();
        on.enable_refunds = Some(true);
        assert!(PaymentExpress::new(on).supports_refund());
    }

    #[test]
    fn refund_actions_get_the_pxpost_credential_pair() {
        let gateway = PaymentExpress::new(settings());

        let config = gateway.client_config("commerce/payments/transaction-refund");
        assert_eq!(config.kind, ClientKind::PxPost);
        assert_eq!(config.username.peek(), "pxpost-user");
        assert_eq!(config.password.peek(), "pxpost-key");

        let config = gateway.client_config("commerce/payments/complete-payment");
        assert_eq!(config.kind, ClientKind::PxPay);
        assert_eq!(config.username.peek(), "pxpay-user");
        assert_eq!(config.password.peek(), "pxpay-key");
    }

    #[test]
    fn env_references_resolve_before_the_client_sees_them() {
        let mut s = settings();
        s.username = Secret::new("$PXPAY_USER".to_string());
        let gateway = PaymentExpress::new(s).with_env_resolver(|raw: &str| {
            if raw == "$PXPAY_USER" {
                "resolved-user".to_string()
            } else {
                raw.to_string()
            }
        });

        let config = gateway.client_config("commerce/payments/complete-payment");
        assert_eq!(config.username.peek(), "resolved-user");
        // Values without an indirection come back unchanged.
        assert_eq!(config.password.peek(), "pxpay-key");
    }

    #[test]
    fn before_create_hook_sees_the_final_config() {
        let gateway = PaymentExpress::new(settings()).with_before_create_client(|mut config| {
            config.test_mode = false;
            config
        });

        let config = gateway.client_config("commerce/payments/complete-payment");
        assert!(!config.test_mode);
    }
}
