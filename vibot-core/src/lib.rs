//! # vibot-core
//!
//! Core types and transport for the Viber bot gateway: [`ViberApi`] with its
//! reqwest-backed [`ViberClient`], outbound message requests, inbound webhook
//! updates, error types, and tracing initialization. Used by vibot-gateway
//! and vibot-cli.

pub mod api;
pub mod error;
pub mod logger;
pub mod message;
pub mod types;
pub mod update;
pub mod webhook;

pub use api::{ViberApi, ViberClient, DEFAULT_API_URL};
pub use error::{Result, VibotError};
pub use logger::init_tracing;
pub use message::{
    SendContactRequest, SendFileRequest, SendLocationRequest, SendMessageResponse,
    SendPictureRequest, SendStickerRequest, SendTextRequest, SendUrlRequest, SendVideoRequest,
};
pub use types::{Contact, EventType, Location, MessageKind, Sender, Status, UserProfile};
pub use update::{
    Callback, ConversationStartedCallback, DeliveredCallback, FailedCallback, IncomingMessage,
    MessageCallback, SeenCallback, SubscribedCallback, UnsubscribedCallback, ViberUpdate,
    WebhookCallback,
};
pub use webhook::{SetWebhookRequest, SetWebhookResponse};
