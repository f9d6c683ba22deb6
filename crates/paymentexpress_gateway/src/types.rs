//! Domain types shared between the host commerce system, this shim and the
//! downstream payment client.
//!
//! The host owns the transaction record and the default payload mapping;
//! this module carries the narrow versions of those shapes the gateway needs
//! to read, plus the contracts the downstream client library fulfils.

use std::{collections::HashMap, fmt::Debug};

use masking::Secret;
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, GatewayError};

/// Amount in the minor unit of its currency (cents for NZD).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// Forms a new minor unit from amount.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Gets amount as i64 value.
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

/// Currencies accepted by the Payment Express processor.
#[allow(missing_docs)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Currency {
    AUD,
    CAD,
    CHF,
    EUR,
    FJD,
    GBP,
    HKD,
    JPY,
    #[default]
    NZD,
    PGK,
    SBD,
    SGD,
    THB,
    TOP,
    USD,
    VUV,
    WST,
    ZAR,
}

/// Lifecycle states of a host transaction record, as far as this shim needs
/// to distinguish them.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionStatus {
    /// Created but not yet sent to the processor.
    #[default]
    Pending,
    /// Waiting on the customer at the processor's hosted page.
    Redirect,
    /// Accepted by the processor, settlement outstanding.
    Processing,
    /// Settled.
    Success,
    /// Declined or errored.
    Failed,
}

/// The host's transaction record, read-only from this shim's point of view.
///
/// Only the fields the request mapper consumes are carried; everything else
/// about the record stays with the commerce system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique per-transaction hash generated by the host. Used, truncated,
    /// as the downstream transaction id.
    pub hash: String,
    /// Processor-side reference of the parent transaction, when one exists.
    /// Refunds require it.
    pub reference: Option<String>,
    /// Transaction amount.
    pub amount: MinorUnit,
    /// Transaction currency.
    pub currency: Currency,
    /// Current lifecycle state.
    pub status: TransactionStatus,
    /// Where the processor sends the customer after a completed payment.
    /// May contain HTML entities from the host's storage layer.
    pub return_url: Option<String>,
    /// Where the processor sends the customer after a cancelled payment.
    pub cancel_url: Option<String>,
}

/// Card details as the host hands them over.
///
/// PxPay never sees these (the processor collects card data on its hosted
/// page); the type exists so the mapper signature matches the host's generic
/// gateway contract.
#[derive(Clone, Debug)]
pub struct PaymentCard {
    /// Primary account number.
    pub number: Secret<String>,
    /// Two-digit expiry month.
    pub expiry_month: Secret<String>,
    /// Four-digit expiry year.
    pub expiry_year: Secret<String>,
    /// Card verification code.
    pub cvc: Secret<String>,
    /// Name on the card.
    pub holder_name: Option<Secret<String>>,
}

/// A purchased line item, passed through to the host's default mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item label.
    pub name: String,
    /// Number of units.
    pub quantity: u32,
    /// Unit price.
    pub price: MinorUnit,
}

/// The outbound payload handed to the downstream client.
///
/// Field names follow the host's generic payment-request mapping; the
/// downstream library translates them into the processor's wire format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount to charge or refund.
    pub amount: MinorUnit,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Downstream transaction id, at most 16 characters after finalization.
    pub transaction_id: String,
    /// Free-text description shown on the processor side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Success-callback URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Cancel-callback URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    /// Processor reference of the transaction being refunded. Only set on
    /// refund payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
}

/// HTTP method of an offsite redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RedirectMethod {
    /// Redirect via GET.
    Get,
    /// Redirect via self-submitting POST form.
    Post,
}

/// Response contract of the downstream payment client.
///
/// Implemented by the external library's response objects; this shim never
/// inspects the raw wire payload behind it.
pub trait PaymentResponse: Debug {
    /// Whether the processor accepted the request.
    fn is_successful(&self) -> bool;
    /// Whether the customer must be redirected to the processor.
    fn is_redirect(&self) -> bool;
    /// Redirect method, meaningful when [`Self::is_redirect`] is true.
    fn redirect_method(&self) -> RedirectMethod {
        RedirectMethod::Get
    }
    /// Hosted-page URL to redirect the customer to.
    fn redirect_url(&self) -> Option<String>;
    /// Form fields to submit alongside a POST redirect.
    fn redirect_data(&self) -> HashMap<String, String> {
        HashMap::new()
    }
    /// Processor-side reference for this transaction.
    fn transaction_reference(&self) -> Option<String>;
    /// Processor response code.
    fn code(&self) -> Option<String>;
    /// Human-readable processor message.
    fn message(&self) -> Option<String>;
}

/// Host templating seam: "render named template with gateway context".
pub trait TemplateRenderer {
    /// Render `template` with the serialized gateway `context`.
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> CustomResult<String, GatewayError>;
}
