//! Request and response mapping for the Payment Express gateway.

use std::collections::HashMap;

use crate::{
    consts,
    types::{
        LineItem, PaymentCard, PaymentRequest, PaymentResponse, RedirectMethod, Transaction,
    },
    utils,
};

impl PaymentRequest {
    /// The host's default payment-request mapping, before gateway-specific
    /// fixups. Hosts with their own mapping step hand their payload to
    /// [`finalize_payment_request`] instead.
    pub fn base(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount,
            currency: transaction.currency,
            transaction_id: transaction.hash.clone(),
            description: None,
            return_url: transaction.return_url.clone(),
            cancel_url: transaction.cancel_url.clone(),
            transaction_reference: transaction.reference.clone(),
        }
    }
}

/// Finalize a base payload for the Payment Express processor.
///
/// PxPay caps `TxnId` at 16 characters, so the transaction hash is
/// shortened, and the stored callback URLs are entity-decoded before they
/// reach the wire. No other field is touched. Card and item details are not
/// part of the offsite payload; the parameters exist for signature parity
/// with the host's generic mapper.
pub fn finalize_payment_request(
    transaction: &Transaction,
    _card: Option<&PaymentCard>,
    _items: Option<&[LineItem]>,
    mut base: PaymentRequest,
) -> PaymentRequest {
    base.transaction_id =
        utils::truncate_string(&transaction.hash, consts::MAX_TRANSACTION_ID_LENGTH);
    base.return_url = base.return_url.map(|url| utils::html_entity_decode(&url));
    base.cancel_url = base.cancel_url.map(|url| utils::html_entity_decode(&url));
    base
}

/// Pairs a downstream response with the transaction it answers.
///
/// The host consumes it through the same accessors the raw response
/// exposes; every call delegates straight through, and the transaction is
/// kept only for association.
#[derive(Debug)]
pub struct RequestResponse {
    response: Box<dyn PaymentResponse>,
    transaction: Transaction,
}

impl RequestResponse {
    /// Wrap a raw downstream response.
    pub fn new(response: Box<dyn PaymentResponse>, transaction: Transaction) -> Self {
        Self {
            response,
            transaction,
        }
    }

    /// The transaction this response answers.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }
}

impl PaymentResponse for RequestResponse {
    fn is_successful(&self) -> bool {
        self.response.is_successful()
    }

    fn is_redirect(&self) -> bool {
        self.response.is_redirect()
    }

    fn redirect_method(&self) -> RedirectMethod {
        self.response.redirect_method()
    }

    fn redirect_url(&self) -> Option<String> {
        self.response.redirect_url()
    }

    fn redirect_data(&self) -> HashMap<String, String> {
        self.response.redirect_data()
    }

    fn transaction_reference(&self) -> Option<String> {
        self.response.transaction_reference()
    }

    fn code(&self) -> Option<String> {
        self.response.code()
    }

    fn message(&self) -> Option<String> {
        self.response.message()
    }
}

#[cfg(test)]
mod tests {
    use super::{finalize_payment_request, RequestResponse};
    use crate::types::{
        Currency, MinorUnit, PaymentRequest, PaymentResponse, RedirectMethod, Transaction,
        TransactionStatus,
    };

    fn transaction(hash: &str) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            reference: None,
            amount: MinorUnit::new(1050),
            currency: Currency::NZD,
            status: TransactionStatus::Pending,
            return_url: None,
            cancel_url: None,
        }
    }

    #[test]
    fn long_hashes_are_shortened_to_sixteen_characters() {
        let txn = transaction("abcdef0123456789fedcba");
        let request = finalize_payment_request(&txn, None, None, PaymentRequest::base(&txn));
        assert_eq!(request.transaction_id, "abcdef0123456789");
    }

    #[test]
    fn short_hashes_pass_through() {
        let txn = transaction("abc123");
        let request = finalize_payment_request(&txn, None, None, PaymentRequest::base(&txn));
        assert_eq!(request.transaction_id, "abc123");
    }

    #[test]
    fn callback_urls_are_entity_decoded() {
        let mut txn = transaction("1234567890123456789");
        txn.return_url = Some("http://x/r?a=1&amp;b=2".to_string());
        txn.cancel_url = Some("http://x/c?a=1&amp;b=2&amp;c=3".to_string());

        let request = finalize_payment_request(&txn, None, None, PaymentRequest::base(&txn));

        assert_eq!(request.transaction_id, "1234567890123456");
        assert_eq!(request.return_url.as_deref(), Some("http://x/r?a=1&b=2"));
        assert_eq!(
            request.cancel_url.as_deref(),
            Some("http://x/c?a=1&b=2&c=3")
        );
    }

    #[test]
    fn other_fields_stay_untouched() {
        let mut txn = transaction("1234567890123456789");
        txn.reference = Some("dps-000042".to_string());
        let mut base = PaymentRequest::base(&txn);
        base.description = Some("Order #42".to_string());

        let request = finalize_payment_request(&txn, None, None, base);

        assert_eq!(request.amount.get_amount_as_i64(), 1050);
        assert_eq!(request.currency, Currency::NZD);
        assert_eq!(request.description.as_deref(), Some("Order #42"));
        assert_eq!(request.transaction_reference.as_deref(), Some("dps-000042"));
    }

    #[derive(Debug)]
    struct HostedPageResponse;

    impl PaymentResponse for HostedPageResponse {
        fn is_successful(&self) -> bool {
            false
        }
        fn is_redirect(&self) -> bool {
            true
        }
        fn redirect_url(&self) -> Option<String> {
            Some("https://sec.paymentexpress.com/pxmi3/deadbeef".to_string())
        }
        fn transaction_reference(&self) -> Option<String> {
            Some("dps-000042".to_string())
        }
        fn code(&self) -> Option<String> {
            None
        }
        fn message(&self) -> Option<String> {
            Some("Redirect to hosted page".to_string())
        }
    }

    #[test]
    fn wrapper_delegates_to_the_raw_response() {
        let txn = transaction("abc123");
        let wrapped = RequestResponse::new(Box::new(HostedPageResponse), txn.clone());

        assert!(!wrapped.is_successful());
        assert!(wrapped.is_redirect());
        assert_eq!(wrapped.redirect_method(), RedirectMethod::Get);
        assert_eq!(
            wrapped.redirect_url().as_deref(),
            Some("https://sec.paymentexpress.com/pxmi3/deadbeef")
        );
        assert_eq!(wrapped.transaction_reference().as_deref(), Some("dps-000042"));
        assert_eq!(wrapped.message().as_deref(), Some("Redirect to hosted page"));
        assert_eq!(wrapped.transaction(), &txn);
    }
}
