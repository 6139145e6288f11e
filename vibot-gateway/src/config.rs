//! Gateway config: Viber access, webhook registration, bot identity, logging.
//! Loaded from env.

use anyhow::Result;
use std::env;

use vibot_core::Sender;

/// Gateway config; everything the service and CLI need to talk to Viber.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// VIBER_AUTH_TOKEN
    pub auth_token: String,
    /// VIBER_WEBHOOK_URL; public https url Viber delivers callbacks to
    pub webhook_url: String,
    /// VIBER_API_URL; production endpoint when unset
    pub api_url: Option<String>,
    /// VIBER_SENDER_NAME and VIBER_SENDER_AVATAR; identity on outbound messages
    pub sender: Sender,
    /// Log file path
    pub log_file: String,
}

impl GatewayConfig {
    /// Load from environment variables. `token` overrides VIBER_AUTH_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let auth_token = match token {
            Some(token) => token,
            None => env::var("VIBER_AUTH_TOKEN")
                .map_err(|_| anyhow::anyhow!("VIBER_AUTH_TOKEN not set"))?,
        };
        let webhook_url = env::var("VIBER_WEBHOOK_URL")
            .map_err(|_| anyhow::anyhow!("VIBER_WEBHOOK_URL not set"))?;
        let api_url = env::var("VIBER_API_URL").ok();
        let sender = Sender {
            name: env::var("VIBER_SENDER_NAME").unwrap_or_else(|_| "bot".to_string()),
            avatar: env::var("VIBER_SENDER_AVATAR").ok(),
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/vibot.log".to_string());

        Ok(Self {
            auth_token,
            webhook_url,
            api_url,
            sender,
            log_file,
        })
    }

    /// Validate config: token and sender name non-blank, urls must parse.
    pub fn validate(&self) -> Result<()> {
        if self.auth_token.trim().is_empty() {
            anyhow::bail!("VIBER_AUTH_TOKEN is blank");
        }
        if reqwest::Url::parse(&self.webhook_url).is_err() {
            anyhow::bail!(
                "VIBER_WEBHOOK_URL is not a valid URL: {}",
                self.webhook_url
            );
        }
        if let Some(ref url_str) = self.api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("VIBER_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        if self.sender.name.trim().is_empty() {
            anyhow::bail!("VIBER_SENDER_NAME is blank");
        }
        Ok(())
    }
}
