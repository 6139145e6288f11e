//! # vibot-gateway
//!
//! Gateway service over [`vibot_core`]: environment configuration, the
//! outbound message dispatcher, the inbound callback router, and the bot
//! state machine. The transport is injected as `Arc<dyn ViberApi>`, so the
//! whole layer runs against a mock in tests.

pub mod bot;
pub mod config;
pub mod service;

pub use bot::{BotContext, BotState};
pub use config::GatewayConfig;
pub use service::ViberService;
