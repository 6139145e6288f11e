//! Webhook registration payloads for `/pa/set_webhook`.

use serde::{Deserialize, Serialize};

use crate::types::{EventType, Status};

/// Registration request: callback url plus the event kinds to subscribe to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetWebhookRequest {
    pub url: String,
    pub event_types: Vec<EventType>,
    /// Ask Viber to include the user's name in callbacks.
    pub send_name: bool,
    /// Ask Viber to include the user's photo in callbacks.
    pub send_photo: bool,
}

impl SetWebhookRequest {
    /// Subscribes `url` to every recognized event kind, with name and photo on.
    pub fn all_events(url: String) -> Self {
        Self {
            url,
            event_types: EventType::all(),
            send_name: true,
            send_photo: true,
        }
    }
}

/// Registration response; `event_types` echoes what Viber actually subscribed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetWebhookResponse {
    pub status: Status,
    pub status_message: String,
    #[serde(default)]
    pub event_types: Vec<EventType>,
}
