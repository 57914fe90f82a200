//! Initiates a small collection against a live gateway.
//!
//! Reads credentials from the environment (or a .env file):
//! MOMO_BASE_URL, MOMO_APP_USERNAME, MOMO_APP_PASSWORD.
//!
//! Run with: cargo run -p momo-client --example initiate_payment

use momo_client::{Credentials, MomoClient, PaymentService};
use momo_types::PaymentRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let client = MomoClient::new(Credentials {
        app_username: std::env::var("MOMO_APP_USERNAME")?,
        app_password: std::env::var("MOMO_APP_PASSWORD")?,
        base_url: std::env::var("MOMO_BASE_URL")?,
    });

    let resp = client
        .initiate_payment(PaymentRequest {
            amount: "5".to_string(),
            from: "+237671738755".to_string(),
            description: "Payment for subscription".to_string(),
            external_reference: "payment_12345".to_string(),
        })
        .await?;

    println!("✅ Payment initiated");
    println!("   Reference: {}", resp.reference);
    println!("   USSD code: {}", resp.ussd_code);
    println!("   Operator:  {}", resp.operator);

    Ok(())
}
