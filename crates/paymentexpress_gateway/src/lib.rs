//! Payment Express gateway adapter.
//!
//! Adapts a commerce platform's payment-gateway abstraction to the Payment
//! Express (DPS/Windcave) processor. The crate is a thin shim over an
//! external payment-client library: it selects between the PxPay redirect
//! client and the PxPost direct-post client (used for refunds), resolves
//! environment-scoped credentials, and fixes up the outbound payload
//! (transaction-id truncation, callback-URL entity decoding). Transport,
//! request signing and response parsing stay with the downstream client,
//! reached through the narrow traits in [`client`] and [`types`].
#![warn(missing_docs, missing_debug_implementations)]

pub mod client;
pub mod configs;
pub mod consts;
pub mod errors;
pub mod gateways;
pub mod types;
pub mod utils;

pub use gateways::pxpay::PaymentExpress;
