//! # Mobile Money Types
//!
//! Wire types for the mobile money gateway API. This crate has ZERO IO
//! dependencies - only the data structures exchanged with the gateway,
//! so embedding applications can share them without pulling in the
//! HTTP client.

pub mod dto;
pub mod webhook;

// Re-export commonly used types
pub use dto::{
    AccessToken, PaymentRequest, PaymentResponse, TokenRequest, WithdrawalRequest,
    WithdrawalResponse,
};
pub use webhook::WebhookNotification;
