//! Request and response bodies for the gateway endpoints.
//!
//! Field names match the gateway's JSON keys directly, so no serde
//! renames are needed. Amounts travel as decimal strings, exactly as
//! the gateway expects them.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Token endpoint
// ─────────────────────────────────────────────────────────────────────────────

/// Credentials exchanged for a bearer token at `POST {base_url}/token/`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Short-lived bearer token returned by the token endpoint.
///
/// Acquired fresh for every gateway operation; never cached, and the
/// expiry is not tracked client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    /// Lifetime reported by the gateway, in seconds.
    pub expires_in: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Collection (payment)
// ─────────────────────────────────────────────────────────────────────────────

/// Request to charge a payer's mobile money account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Amount to collect, as a decimal string (e.g. "5").
    pub amount: String,
    /// Payer phone number in international format, e.g. "+237...".
    pub from: String,
    /// Free-text description shown to the payer.
    pub description: String,
    /// Caller-supplied idempotency key, echoed back in the webhook.
    pub external_reference: String,
}

/// Response after a collection was initiated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Gateway transaction reference.
    pub reference: String,
    /// USSD code the payer dials to confirm the charge.
    pub ussd_code: String,
    /// Mobile network operator handling the charge (MTN or ORANGE).
    pub operator: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Withdrawal (disbursement)
// ─────────────────────────────────────────────────────────────────────────────

/// Request to pay out to a payee's mobile money account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    /// Amount to pay out, as a decimal string.
    pub amount: String,
    /// Payee phone number in international format, e.g. "+237...".
    pub to: String,
    /// Free-text description of the payout.
    pub description: String,
    /// Caller-supplied idempotency key, echoed back in the webhook.
    pub external_reference: String,
}

/// Response after a withdrawal was initiated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalResponse {
    /// Gateway transaction reference.
    pub reference: String,
}
