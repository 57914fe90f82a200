//! Access token acquisition against the gateway token endpoint.

use momo_types::{AccessToken, TokenRequest};
use reqwest::{Client, StatusCode};
use tracing::{error, instrument};

use crate::error::ClientError;

const OPERATION: &str = "token";

/// Exchanges application credentials for a short-lived bearer token.
///
/// Every gateway operation acquires a fresh token through this
/// provider; tokens are never cached, so sequential calls issue fully
/// independent HTTP requests.
pub struct TokenProvider {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl TokenProvider {
    pub(crate) fn new(http: Client, base_url: String, username: String, password: String) -> Self {
        Self {
            http,
            base_url,
            username,
            password,
        }
    }

    /// Requests a fresh access token from `POST {base_url}/token/`.
    ///
    /// HTTP 400 means the credentials were rejected and maps to
    /// [`ClientError::Authentication`] with the raw response body. Any
    /// other status is parsed as an [`AccessToken`].
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn acquire(&self) -> Result<AccessToken, ClientError> {
        let body = serde_json::to_vec(&TokenRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
        .map_err(|source| ClientError::Encoding {
            operation: OPERATION,
            source,
        })?;

        let resp = self
            .http
            .post(format!("{}/token/", self.base_url))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: OPERATION,
                source,
            })?;

        if resp.status() == StatusCode::BAD_REQUEST {
            let body = resp.text().await.unwrap_or_default();
            error!(%body, "token endpoint rejected credentials");
            return Err(ClientError::Authentication { body });
        }

        let body = resp
            .text()
            .await
            .map_err(|source| ClientError::Transport {
                operation: OPERATION,
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| ClientError::Decoding {
            operation: OPERATION,
            source,
        })
    }
}
