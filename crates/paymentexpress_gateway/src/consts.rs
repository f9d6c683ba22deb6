//! Constants used throughout the gateway.

/// PxPay rejects `TxnId` values longer than 16 characters, so transaction
/// hashes are shortened to this length before they reach the wire.
pub const MAX_TRANSACTION_ID_LENGTH: usize = 16;

/// Action names containing this fragment are treated as refund operations
/// and routed through the PxPost client.
pub const REFUND_ACTION_FRAGMENT: &str = "transaction-refund";

/// Identifier used in logs and error reports.
pub const GATEWAY_ID: &str = "paymentexpress";

/// Human-readable gateway name shown in the host's control panel.
pub const DISPLAY_NAME: &str = "Payment Express";

/// Template the host renders for the gateway settings form.
pub const SETTINGS_TEMPLATE: &str = "paymentexpress/gatewaySettings";
