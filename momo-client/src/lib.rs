//! # Mobile Money Client SDK
//!
//! A typed Rust client for the mobile money gateway API: initiate
//! collections (payments), initiate withdrawals (disbursements), and
//! verify webhook signature tokens.
//!
//! Every operation acquires a fresh bearer token from the gateway's
//! token endpoint; nothing is cached and nothing is retried - retry
//! policy, deadlines and cancellation belong to the caller. Dropping a
//! returned future aborts the in-flight request.
//!
//! ```no_run
//! use momo_client::{Credentials, MomoClient, PaymentService};
//! use momo_types::PaymentRequest;
//!
//! # async fn run() -> Result<(), momo_client::ClientError> {
//! let client = MomoClient::new(Credentials {
//!     app_username: "user".into(),
//!     app_password: "pass".into(),
//!     base_url: "https://gateway.example.com/api/v1".into(),
//! });
//!
//! let resp = client
//!     .initiate_payment(PaymentRequest {
//!         amount: "5".into(),
//!         from: "+237671738755".into(),
//!         description: "Payment for subscription".into(),
//!         external_reference: "payment_12345".into(),
//!     })
//!     .await?;
//! println!("initiated: {}", resp.reference);
//! # Ok(())
//! # }
//! ```

mod error;
mod gateway;
mod token;
pub mod webhook;

pub use error::{ClientError, WebhookError};
pub use gateway::{Credentials, MomoClient, PaymentService};
pub use token::TokenProvider;
