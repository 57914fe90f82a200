//! Gateway client for collect and withdraw operations.

use async_trait::async_trait;
use momo_types::{PaymentRequest, PaymentResponse, WithdrawalRequest, WithdrawalResponse};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, instrument};

use crate::error::{ClientError, WebhookError};
use crate::token::TokenProvider;
use crate::webhook;

/// Application credentials for the gateway API.
///
/// Immutable once the client is constructed. A trailing slash on
/// `base_url` is trimmed at construction.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_username: String,
    pub app_password: String,
    pub base_url: String,
}

/// Capability interface for the gateway operations.
///
/// Implemented by [`MomoClient`]; callers that want a test double
/// implement this trait instead.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Initiates a mobile money collection against the payer's phone.
    async fn initiate_payment(
        &self,
        req: PaymentRequest,
    ) -> Result<PaymentResponse, ClientError>;

    /// Initiates a mobile money payout to the payee's phone.
    async fn withdraw(&self, req: WithdrawalRequest) -> Result<WithdrawalResponse, ClientError>;

    /// Verifies the signature token attached to a webhook callback.
    fn verify_webhook_signature(&self, token: &str, secret: &str) -> Result<(), WebhookError>;
}

/// Mobile money gateway client.
///
/// Holds only immutable credentials and a connection pool, so calls
/// from concurrent tasks are safe without locking. Each operation
/// acquires a fresh token and builds a fresh request; canceling is
/// just dropping the returned future.
pub struct MomoClient {
    base_url: String,
    http: Client,
    tokens: TokenProvider,
}

impl MomoClient {
    /// Creates a new client from gateway credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_http(credentials, Client::new())
    }

    /// Creates a client that reuses a caller-configured HTTP client,
    /// e.g. one built with timeouts or a proxy.
    pub fn with_http(credentials: Credentials, http: Client) -> Self {
        let base_url = credentials.base_url.trim_end_matches('/').to_string();
        let tokens = TokenProvider::new(
            http.clone(),
            base_url.clone(),
            credentials.app_username,
            credentials.app_password,
        );
        Self {
            base_url,
            http,
            tokens,
        }
    }

    /// The token provider backing this client, for callers that need a
    /// raw access token.
    pub fn tokens(&self) -> &TokenProvider {
        &self.tokens
    }

    /// Shared request lifecycle for collect and withdraw: fresh token,
    /// encode, POST, classify, decode.
    async fn execute<B, T>(
        &self,
        operation: &'static str,
        path: &str,
        req: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let token = self.tokens.acquire().await?;

        let body = serde_json::to_vec(req).map_err(|source| ClientError::Encoding {
            operation,
            source,
        })?;

        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Token {}", token.token))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        let status = resp.status();
        if status == StatusCode::BAD_REQUEST {
            let body = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "gateway rejected request");
            return Err(ClientError::GatewayRejected {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        // Anything other than 400 goes through the success decode path,
        // including unexpected 401/403/500 responses; those surface as
        // Decoding errors rather than a distinct gateway error kind.
        let body = resp
            .text()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        serde_json::from_str(&body).map_err(|source| ClientError::Decoding { operation, source })
    }
}

#[async_trait]
impl PaymentService for MomoClient {
    #[instrument(skip(self, req), fields(external_reference = %req.external_reference))]
    async fn initiate_payment(
        &self,
        req: PaymentRequest,
    ) -> Result<PaymentResponse, ClientError> {
        self.execute("collect", "/collect/", &req).await
    }

    #[instrument(skip(self, req), fields(external_reference = %req.external_reference))]
    async fn withdraw(&self, req: WithdrawalRequest) -> Result<WithdrawalResponse, ClientError> {
        self.execute("withdraw", "/withdraw/", &req).await
    }

    fn verify_webhook_signature(&self, token: &str, secret: &str) -> Result<(), WebhookError> {
        webhook::verify_signature(token, secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(base_url: &str) -> Credentials {
        Credentials {
            app_username: "app".to_string(),
            app_password: "secret".to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = MomoClient::new(credentials("https://gateway.example.com/api/v1"));
        assert_eq!(client.base_url, "https://gateway.example.com/api/v1");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = MomoClient::new(credentials("https://gateway.example.com/api/v1/"));
        assert_eq!(client.base_url, "https://gateway.example.com/api/v1");
    }
}
