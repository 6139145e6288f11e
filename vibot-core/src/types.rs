//! Shared wire types: status codes, event kinds, sender identity, user profile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric status code carried in every Viber API response.
///
/// `0` means accepted; everything else is a rejection explained by the
/// response's `status_message`. Codes this enum does not know yet land in
/// [`Status::Other`] so a new code can never break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Status {
    Ok,
    InvalidUrl,
    InvalidAuthToken,
    BadData,
    MissingData,
    ReceiverNotRegistered,
    ReceiverNotSubscribed,
    PublicAccountBlocked,
    PublicAccountNotFound,
    PublicAccountSuspended,
    WebhookNotSet,
    ReceiverNoSuitableDevice,
    TooManyRequests,
    ApiVersionNotSupported,
    IncompatibleWithVersion,
    PublicAccountNotAuthorized,
    Other(i32),
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Raw numeric code, for logs and assertions.
    pub fn code(self) -> i32 {
        i32::from(self)
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        match code {
            0 => Status::Ok,
            1 => Status::InvalidUrl,
            2 => Status::InvalidAuthToken,
            3 => Status::BadData,
            4 => Status::MissingData,
            5 => Status::ReceiverNotRegistered,
            6 => Status::ReceiverNotSubscribed,
            7 => Status::PublicAccountBlocked,
            8 => Status::PublicAccountNotFound,
            9 => Status::PublicAccountSuspended,
            10 => Status::WebhookNotSet,
            11 => Status::ReceiverNoSuitableDevice,
            12 => Status::TooManyRequests,
            13 => Status::ApiVersionNotSupported,
            14 => Status::IncompatibleWithVersion,
            15 => Status::PublicAccountNotAuthorized,
            other => Status::Other(other),
        }
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => 0,
            Status::InvalidUrl => 1,
            Status::InvalidAuthToken => 2,
            Status::BadData => 3,
            Status::MissingData => 4,
            Status::ReceiverNotRegistered => 5,
            Status::ReceiverNotSubscribed => 6,
            Status::PublicAccountBlocked => 7,
            Status::PublicAccountNotFound => 8,
            Status::PublicAccountSuspended => 9,
            Status::WebhookNotSet => 10,
            Status::ReceiverNoSuitableDevice => 11,
            Status::TooManyRequests => 12,
            Status::ApiVersionNotSupported => 13,
            Status::IncompatibleWithVersion => 14,
            Status::PublicAccountNotAuthorized => 15,
            Status::Other(code) => code,
        }
    }
}

/// Callback kinds Viber can deliver to the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Delivered,
    Seen,
    Failed,
    Subscribed,
    Unsubscribed,
    ConversationStarted,
    Webhook,
    Message,
}

impl EventType {
    /// Every kind the gateway understands; requested at webhook registration.
    pub fn all() -> Vec<EventType> {
        vec![
            EventType::Delivered,
            EventType::Seen,
            EventType::Failed,
            EventType::Subscribed,
            EventType::Unsubscribed,
            EventType::ConversationStarted,
            EventType::Webhook,
            EventType::Message,
        ]
    }
}

/// Outbound message kinds; serialized as the `type` tag of a send request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Picture,
    Video,
    File,
    Contact,
    Location,
    Url,
    Sticker,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Picture => "picture",
            MessageKind::Video => "video",
            MessageKind::File => "file",
            MessageKind::Contact => "contact",
            MessageKind::Location => "location",
            MessageKind::Url => "url",
            MessageKind::Sticker => "sticker",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bot identity shown next to outbound messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Sender {
    pub fn new(name: String) -> Self {
        Self { name, avatar: None }
    }
}

/// Contact card payload of a contact message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
}

/// Geographic point of a location message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Viber user as delivered in callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u16>,
}
