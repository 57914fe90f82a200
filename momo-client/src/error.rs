//! Error types for client operations.

use jsonwebtoken::Algorithm;

/// Error type for gateway client operations.
///
/// Each variant names the operation that produced it ("token",
/// "collect" or "withdraw") so a failure can be traced without an
/// ambient context. Underlying causes are kept in the chain and never
/// recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network-level failure: DNS, connection refused, timeout, or a
    /// canceled request.
    #[error("{operation}: request failed")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The token endpoint rejected the credentials with HTTP 400.
    #[error("token request rejected: {body}")]
    Authentication { body: String },

    /// The gateway rejected a collect/withdraw request with HTTP 400.
    #[error("{operation} rejected by gateway: HTTP {status}: {body}")]
    GatewayRejected {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// Request body serialization failed before anything was sent.
    #[error("{operation}: failed to encode request body")]
    Encoding {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Response body did not parse as the expected JSON shape.
    ///
    /// Non-400 error statuses (401, 403, 500, ...) are not classified
    /// separately: their bodies go through the success decode path and
    /// land here.
    #[error("{operation}: failed to decode response body")]
    Decoding {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// The operation this error originated from.
    pub fn operation(&self) -> &'static str {
        match self {
            ClientError::Transport { operation, .. }
            | ClientError::GatewayRejected { operation, .. }
            | ClientError::Encoding { operation, .. }
            | ClientError::Decoding { operation, .. } => operation,
            ClientError::Authentication { .. } => "token",
        }
    }
}

/// Error type for webhook signature verification.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The signature token declares a non-HMAC signing algorithm.
    #[error("unexpected signing algorithm {0:?}, expected an HMAC variant")]
    UnexpectedAlgorithm(Algorithm),

    /// The token is malformed, expired, or fails signature
    /// verification with the shared secret.
    #[error("signature verification failed")]
    Verification(#[from] jsonwebtoken::errors::Error),
}
