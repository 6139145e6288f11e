//! vibot CLI: serve the webhook endpoint, register the webhook, send a test
//! message. Config from env and optional CLI args.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use vibot_core::{init_tracing, SendTextRequest, ViberClient};
use vibot_gateway::{GatewayConfig, ViberService};

mod server;

#[derive(Parser)]
#[command(name = "vibot")]
#[command(about = "Viber bot gateway CLI: serve, set-webhook, send-text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the webhook endpoint (config from env; token can override VIBER_AUTH_TOKEN).
    Serve {
        #[arg(short, long)]
        token: Option<String>,
        /// Address to listen on.
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Register the configured webhook url for all recognized event kinds.
    SetWebhook {
        #[arg(short, long)]
        token: Option<String>,
        /// Register this url instead of VIBER_WEBHOOK_URL.
        #[arg(long)]
        url: Option<String>,
    },
    /// Send a text message to one user (smoke test for the dispatch path).
    SendText {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        receiver: String,
        #[arg(long)]
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { token, bind } => {
            let service = build_service(token, None)?;
            server::serve(service, &bind).await
        }
        Commands::SetWebhook { token, url } => handle_set_webhook(token, url).await,
        Commands::SendText {
            token,
            receiver,
            text,
        } => handle_send_text(token, receiver, text).await,
    }
}

/// Loads and validates config, initializes tracing, and wires the client into
/// the service. Every subcommand starts here.
fn build_service(token: Option<String>, webhook_url: Option<String>) -> Result<Arc<ViberService>> {
    let mut config = GatewayConfig::load(token)
        .context("Load gateway config from env (VIBER_AUTH_TOKEN, VIBER_WEBHOOK_URL)")?;
    if let Some(url) = webhook_url {
        config.webhook_url = url;
    }
    config.validate()?;
    init_tracing(&config.log_file)?;

    let client = match &config.api_url {
        Some(url) => ViberClient::with_api_url(url.clone()),
        None => ViberClient::new(),
    };
    Ok(Arc::new(ViberService::new(Arc::new(client), config)))
}

/// Handle the set-webhook command.
///
/// Prints the recognized event set on success or Viber's rejection; a
/// rejection is not an error exit, missing config is.
async fn handle_set_webhook(token: Option<String>, url: Option<String>) -> Result<()> {
    let service = build_service(token, url)?;
    let response = service
        .set_webhook()
        .await
        .context("Register webhook with Viber")?;

    if response.status.is_ok() {
        println!(
            "Webhook registered for {} event kind(s): {:?}",
            response.event_types.len(),
            response.event_types
        );
    } else {
        println!(
            "Webhook registration rejected with code {}: {}",
            response.status.code(),
            response.status_message
        );
    }
    Ok(())
}

/// Handle the send-text command. Sender identity comes from config.
async fn handle_send_text(token: Option<String>, receiver: String, text: String) -> Result<()> {
    let service = build_service(token, None)?;
    let request = SendTextRequest::new(receiver, service.config().sender.clone(), text);
    service
        .send_text_message(&request)
        .await
        .context("Send text message")?;
    Ok(())
}
