use anyhow::Context;
use clap::{Parser, Subcommand};
use paygate::config::Config;
use paygate::core::error::payload_message;
use paygate::gateway::AuthToken;
use paygate::{FromPayload, GatewayClient, Payload, PaymentGateway, PaymentOptions};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line access to the payment gateway
#[derive(Debug, Parser)]
#[command(name = "paygate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Request a bearer token with the configured credentials
    Authenticate,

    /// Register an IPN URL
    RegisterIpn { url: String },

    /// List registered IPN URLs
    ListIpns,

    /// Submit a payment order
    SubmitOrder {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        email: String,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        ipn_id: String,
        #[arg(long)]
        callback_url: String,
        #[arg(long)]
        description: Option<String>,
    },

    /// Show the status of an order
    Status { order_tracking_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Logs go to stderr, stdout carries the gateway's JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("paygate={}", config.app.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(base_url = %config.gateway.api_base_url, "Using payment gateway");

    let client = GatewayClient::from_config(&config.gateway)?;

    let payload = match cli.command {
        Command::Authenticate => client.authenticate().await?,
        Command::RegisterIpn { url } => {
            let token = bearer_token(&client).await?;
            client.register_webhook(&url, &token).await?
        }
        Command::ListIpns => {
            let token = bearer_token(&client).await?;
            client.list_webhooks(&token).await?
        }
        Command::SubmitOrder {
            amount,
            email,
            currency,
            ipn_id,
            callback_url,
            description,
        } => {
            let token = bearer_token(&client).await?;
            let options = PaymentOptions {
                description,
                ..Default::default()
            };
            client
                .initiate_payment(
                    amount,
                    &email,
                    &currency,
                    &ipn_id,
                    &callback_url,
                    &token,
                    options,
                )
                .await?
        }
        Command::Status { order_tracking_id } => {
            let token = bearer_token(&client).await?;
            client
                .check_transaction_status(&order_tracking_id, &token)
                .await?
        }
    };

    print_payload(&payload)
}

async fn bearer_token(client: &GatewayClient) -> anyhow::Result<String> {
    let payload = client.authenticate().await?;
    let auth = token_from_payload(&payload)?;

    tracing::debug!(expiry_date = ?auth.expiry_date, "Obtained bearer token");
    Ok(auth.token)
}

/// Decode the token, surfacing the gateway's `error` or `message` when absent
fn token_from_payload(payload: &Payload) -> anyhow::Result<AuthToken> {
    AuthToken::from_payload(payload).map_err(|e| match payload_message(payload) {
        Some(detail) => anyhow::anyhow!("Gateway did not return a token: {}", detail),
        None => anyhow::anyhow!("Gateway did not return a token: {}", e),
    })
}

fn print_payload(payload: &Payload) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
