//! Inbound webhook updates: per-event callback payloads, the [`ViberUpdate`]
//! envelope, and classification into a single [`Callback`].
//!
//! Viber tags each callback with an `event` field. The envelope keeps one
//! `Option` per kind so a malformed or doubled-up update can still be
//! represented, and [`ViberUpdate::into_callback`] resolves it to at most one
//! callback with a fixed priority.

use serde::{Deserialize, Serialize};

use crate::types::UserProfile;

/// Delivery receipt for a previously sent message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveredCallback {
    pub timestamp: i64,
    pub message_token: i64,
    pub user_id: String,
}

/// Read receipt; sent at most once per user and message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeenCallback {
    pub timestamp: i64,
    pub message_token: i64,
    pub user_id: String,
}

/// Delivery failure with Viber's failure description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedCallback {
    pub timestamp: i64,
    pub message_token: i64,
    pub user_id: String,
    pub desc: String,
}

/// A user subscribed to the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribedCallback {
    pub timestamp: i64,
    pub user: UserProfile,
}

/// A user unsubscribed; only the id is delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsubscribedCallback {
    pub timestamp: i64,
    pub user_id: String,
}

/// A user opened the conversation. The only callback that may be answered
/// without the user being subscribed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationStartedCallback {
    pub timestamp: i64,
    pub message_token: i64,
    /// Always `"open"` in the current API.
    #[serde(rename = "type")]
    pub conversation_type: String,
    /// Deep-link context the conversation was opened with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub user: UserProfile,
    #[serde(default)]
    pub subscribed: bool,
}

/// Confirmation ping Viber sends right after webhook registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookCallback {
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_token: Option<i64>,
}

/// A user message delivered to the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCallback {
    pub timestamp: i64,
    pub message_token: i64,
    pub sender: UserProfile,
    pub message: IncomingMessage,
}

/// Payload of an inbound message; only the kind tag is guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
}

/// One webhook delivery, with a slot per callback kind.
///
/// Deserializing an update Viber tags with an unknown `event` yields an empty
/// envelope instead of an error, so new event kinds cannot break the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "WireEvent")]
pub struct ViberUpdate {
    pub delivered: Option<DeliveredCallback>,
    pub seen: Option<SeenCallback>,
    pub failed: Option<FailedCallback>,
    pub subscribed: Option<SubscribedCallback>,
    pub unsubscribed: Option<UnsubscribedCallback>,
    pub conversation_started: Option<ConversationStartedCallback>,
    pub webhook: Option<WebhookCallback>,
    pub message: Option<MessageCallback>,
}

impl ViberUpdate {
    /// Resolves the envelope to at most one callback.
    ///
    /// Priority is fixed: delivered, seen, failed, subscribed, unsubscribed,
    /// conversation started, webhook, message. When several slots are
    /// populated only the highest one is returned; an empty envelope yields
    /// `None`.
    pub fn into_callback(self) -> Option<Callback> {
        if let Some(callback) = self.delivered {
            return Some(Callback::Delivered(callback));
        }
        if let Some(callback) = self.seen {
            return Some(Callback::Seen(callback));
        }
        if let Some(callback) = self.failed {
            return Some(Callback::Failed(callback));
        }
        if let Some(callback) = self.subscribed {
            return Some(Callback::Subscribed(callback));
        }
        if let Some(callback) = self.unsubscribed {
            return Some(Callback::Unsubscribed(callback));
        }
        if let Some(callback) = self.conversation_started {
            return Some(Callback::ConversationStarted(callback));
        }
        if let Some(callback) = self.webhook {
            return Some(Callback::Webhook(callback));
        }
        if let Some(callback) = self.message {
            return Some(Callback::Message(callback));
        }
        None
    }
}

/// A classified update: exactly one callback, ready for routing.
#[derive(Debug, Clone)]
pub enum Callback {
    Delivered(DeliveredCallback),
    Seen(SeenCallback),
    Failed(FailedCallback),
    Subscribed(SubscribedCallback),
    Unsubscribed(UnsubscribedCallback),
    ConversationStarted(ConversationStartedCallback),
    Webhook(WebhookCallback),
    Message(MessageCallback),
}

/// Wire-level envelope, tagged by the `event` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum WireEvent {
    Delivered(DeliveredCallback),
    Seen(SeenCallback),
    Failed(FailedCallback),
    Subscribed(SubscribedCallback),
    Unsubscribed(UnsubscribedCallback),
    ConversationStarted(ConversationStartedCallback),
    Webhook(WebhookCallback),
    Message(MessageCallback),
    /// Event kinds this gateway does not know; decoded to an empty envelope.
    #[serde(other)]
    Unknown,
}

impl From<WireEvent> for ViberUpdate {
    fn from(event: WireEvent) -> Self {
        let mut update = ViberUpdate::default();
        match event {
            WireEvent::Delivered(callback) => update.delivered = Some(callback),
            WireEvent::Seen(callback) => update.seen = Some(callback),
            WireEvent::Failed(callback) => update.failed = Some(callback),
            WireEvent::Subscribed(callback) => update.subscribed = Some(callback),
            WireEvent::Unsubscribed(callback) => update.unsubscribed = Some(callback),
            WireEvent::ConversationStarted(callback) => {
                update.conversation_started = Some(callback)
            }
            WireEvent::Webhook(callback) => update.webhook = Some(callback),
            WireEvent::Message(callback) => update.message = Some(callback),
            WireEvent::Unknown => {}
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: "01234567890A=".to_string(),
            name: "John McClane".to_string(),
            avatar: None,
            country: Some("UK".to_string()),
            language: Some("en".to_string()),
            api_version: Some(1),
        }
    }

    #[test]
    fn test_conversation_started_sample_deserializes() {
        let json = r#"{
            "event": "conversation_started",
            "timestamp": 1457764197627,
            "message_token": 4912661846655238145,
            "type": "open",
            "context": "deep-link",
            "user": {
                "id": "01234567890A=",
                "name": "John McClane",
                "avatar": "http://avatar.example.org/j.jpg",
                "country": "UK",
                "language": "en",
                "api_version": 1
            },
            "subscribed": false
        }"#;
        let update: ViberUpdate = serde_json::from_str(json).unwrap();
        let callback = update.conversation_started.as_ref().unwrap();
        assert_eq!(callback.conversation_type, "open");
        assert_eq!(callback.context.as_deref(), Some("deep-link"));
        assert_eq!(callback.user.name, "John McClane");
        assert!(!callback.subscribed);
        assert!(update.message.is_none());
    }

    #[test]
    fn test_delivered_sample_deserializes() {
        let json = r#"{
            "event": "delivered",
            "timestamp": 1457764197627,
            "message_token": 4912661846655238145,
            "user_id": "01234567890A="
        }"#;
        let update: ViberUpdate = serde_json::from_str(json).unwrap();
        let callback = update.delivered.unwrap();
        assert_eq!(callback.message_token, 4912661846655238145);
        assert_eq!(callback.user_id, "01234567890A=");
    }

    #[test]
    fn test_message_sample_deserializes() {
        let json = r#"{
            "event": "message",
            "timestamp": 1457764197627,
            "message_token": 4912661846655238145,
            "sender": { "id": "01234567890A=", "name": "John McClane" },
            "message": { "type": "text", "text": "hello", "tracking_data": "t1" }
        }"#;
        let update: ViberUpdate = serde_json::from_str(json).unwrap();
        let callback = update.message.unwrap();
        assert_eq!(callback.message.kind, "text");
        assert_eq!(callback.message.text.as_deref(), Some("hello"));
        assert_eq!(callback.message.media, None);
    }

    #[test]
    fn test_unknown_event_yields_empty_envelope() {
        let json = r#"{ "event": "client_status", "timestamp": 1457764197627 }"#;
        let update: ViberUpdate = serde_json::from_str(json).unwrap();
        assert!(update.clone().into_callback().is_none());
        assert!(update.delivered.is_none());
        assert!(update.message.is_none());
    }

    #[test]
    fn test_classification_picks_highest_priority_slot() {
        let delivered = DeliveredCallback {
            timestamp: 1,
            message_token: 10,
            user_id: "u1".to_string(),
        };
        let message = MessageCallback {
            timestamp: 1,
            message_token: 11,
            sender: user(),
            message: IncomingMessage {
                kind: "text".to_string(),
                text: Some("hi".to_string()),
                media: None,
                tracking_data: None,
            },
        };

        let update = ViberUpdate {
            delivered: Some(delivered),
            message: Some(message.clone()),
            ..Default::default()
        };
        match update.into_callback() {
            Some(Callback::Delivered(callback)) => assert_eq!(callback.message_token, 10),
            other => panic!("expected Delivered, got {other:?}"),
        }

        let started = ConversationStartedCallback {
            timestamp: 1,
            message_token: 12,
            conversation_type: "open".to_string(),
            context: None,
            user: user(),
            subscribed: false,
        };
        let update = ViberUpdate {
            conversation_started: Some(started),
            message: Some(message),
            ..Default::default()
        };
        assert!(matches!(
            update.into_callback(),
            Some(Callback::ConversationStarted(_))
        ));
    }

    #[test]
    fn test_empty_envelope_classifies_to_none() {
        assert!(ViberUpdate::default().into_callback().is_none());
    }
}
