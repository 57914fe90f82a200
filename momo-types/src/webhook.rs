//! Webhook callback payload.
//!
//! The gateway reports the final status of a collection or withdrawal
//! through an HTTP callback carrying these fields as query parameters,
//! plus a signature token the embedder passes to the client's webhook
//! verifier. The SDK verifies the signature; the payload itself is
//! consumed by the embedding application as-is.

use serde::{Deserialize, Serialize};

/// Final transaction status delivered by the gateway callback.
///
/// All fields arrive as strings on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookNotification {
    /// Final status of the transaction, e.g. "SUCCESSFUL" or "FAILED".
    pub status: String,
    /// Gateway transaction reference.
    pub reference: String,
    pub amount: String,
    pub currency: String,
    /// Gateway status code for the transaction.
    pub code: String,
    /// Mobile network operator, MTN or ORANGE.
    pub operator: String,
    /// Transaction reference on the operator's side.
    pub operator_reference: String,
    /// Idempotency key supplied when the transaction was initiated.
    pub external_reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_parses_callback_parameters() {
        let body = r#"{
            "status": "SUCCESSFUL",
            "reference": "R1",
            "amount": "5",
            "currency": "XAF",
            "code": "CP201",
            "operator": "MTN",
            "operator_reference": "OP-9",
            "external_reference": "payment_12345"
        }"#;

        let n: WebhookNotification = serde_json::from_str(body).unwrap();
        assert_eq!(n.status, "SUCCESSFUL");
        assert_eq!(n.operator_reference, "OP-9");
        assert_eq!(n.external_reference, "payment_12345");
    }
}
