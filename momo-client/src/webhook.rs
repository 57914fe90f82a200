//! Webhook signature verification.
//!
//! The gateway attaches a JWT-style signature token to each webhook
//! callback, signed with the shared webhook key using an HMAC
//! algorithm. Verification is pure: no IO, no side effects.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};

use crate::error::WebhookError;

/// Verifies a webhook signature token against the shared secret.
///
/// The token must declare an HMAC signing algorithm. RSA and ECDSA
/// declarations are rejected before any cryptographic work, so a
/// forged token cannot substitute a public-key algorithm for the
/// shared-secret check.
///
/// Expired, tampered and malformed tokens all surface as
/// [`WebhookError::Verification`] carrying the underlying cause.
pub fn verify_signature(token: &str, secret: &str) -> Result<(), WebhookError> {
    let header = decode_header(token)?;

    match header.alg {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
        other => return Err(WebhookError::UnexpectedAlgorithm(other)),
    }

    let mut validation = Validation::new(header.alg);
    // The gateway does not promise an `exp` claim; validate it only
    // when present.
    validation.required_spec_claims.clear();

    decode::<serde_json::Value>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)?;

    Ok(())
}
