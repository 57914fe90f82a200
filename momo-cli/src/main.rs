//! Mobile Money CLI
//!
//! Command-line interface for the mobile money gateway: initiate
//! collections and withdrawals, fetch a raw access token, and verify
//! webhook signature tokens. Credentials come from flags or the
//! environment (a .env file is honored).

use anyhow::Result;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use momo_client::{Credentials, MomoClient, PaymentService};
use momo_types::{PaymentRequest, WithdrawalRequest};

#[derive(Parser)]
#[command(name = "momo")]
#[command(author, version, about = "Mobile money gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the gateway API
    #[arg(long, env = "MOMO_BASE_URL")]
    base_url: String,

    /// Application username for the token endpoint
    #[arg(long, env = "MOMO_APP_USERNAME")]
    app_username: String,

    /// Application password for the token endpoint
    #[arg(long, env = "MOMO_APP_PASSWORD", hide_env_values = true)]
    app_password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initiate a collection against a payer's phone
    Collect {
        /// Amount as a decimal string, e.g. "5"
        #[arg(long)]
        amount: String,
        /// Payer phone number in international format, e.g. "+237..."
        #[arg(long)]
        from: String,
        /// Description shown to the payer
        #[arg(long, default_value = "")]
        description: String,
        /// Idempotency key forwarded to the gateway; generated when omitted
        #[arg(long)]
        external_reference: Option<String>,
    },
    /// Initiate a payout to a payee's phone
    Withdraw {
        /// Amount as a decimal string, e.g. "10"
        #[arg(long)]
        amount: String,
        /// Payee phone number in international format
        #[arg(long)]
        to: String,
        /// Description of the payout
        #[arg(long, default_value = "")]
        description: String,
        /// Idempotency key forwarded to the gateway; generated when omitted
        #[arg(long)]
        external_reference: Option<String>,
    },
    /// Acquire an access token and print it
    Token,
    /// Verify a webhook signature token
    VerifyWebhook {
        /// Signature token from the webhook callback
        token: String,
        /// Shared webhook key
        #[arg(long, env = "MOMO_WEBHOOK_KEY", hide_env_values = true)]
        secret: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let client = MomoClient::new(Credentials {
        app_username: cli.app_username,
        app_password: cli.app_password,
        base_url: cli.base_url,
    });

    match cli.command {
        Commands::Collect {
            amount,
            from,
            description,
            external_reference,
        } => {
            let resp = client
                .initiate_payment(PaymentRequest {
                    amount,
                    from,
                    description,
                    external_reference: external_reference
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }

        Commands::Withdraw {
            amount,
            to,
            description,
            external_reference,
        } => {
            let resp = client
                .withdraw(WithdrawalRequest {
                    amount,
                    to,
                    description,
                    external_reference: external_reference
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }

        Commands::Token => {
            let token = client.tokens().acquire().await?;
            println!("{}", serde_json::to_string_pretty(&token)?);
        }

        Commands::VerifyWebhook { token, secret } => {
            client.verify_webhook_signature(&token, &secret)?;
            println!("✓ signature valid");
        }
    }

    Ok(())
}
