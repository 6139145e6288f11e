//! Viber API abstraction for outbound calls.
//!
//! [`ViberApi`] trait is transport-agnostic; [`ViberClient`] implements it
//! over HTTPS against the Viber REST endpoints.

use crate::error::Result;
use crate::message::{
    SendContactRequest, SendFileRequest, SendLocationRequest, SendMessageResponse,
    SendPictureRequest, SendStickerRequest, SendTextRequest, SendUrlRequest, SendVideoRequest,
};
use crate::types::MessageKind;
use crate::webhook::{SetWebhookRequest, SetWebhookResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Production Viber REST endpoint.
pub const DEFAULT_API_URL: &str = "https://chatapi.viber.com";

/// The account's authentication token travels in this header, never in the body.
const AUTH_HEADER: &str = "X-Viber-Auth-Token";

const SEND_MESSAGE_PATH: &str = "/pa/send_message";
const SET_WEBHOOK_PATH: &str = "/pa/set_webhook";

/// Abstraction over the Viber REST API. One method per outbound message kind
/// plus webhook registration; the auth token is passed per call so the
/// transport itself stays credential-free.
#[async_trait]
pub trait ViberApi: Send + Sync {
    /// Registers the callback url and event subscriptions.
    async fn set_webhook(
        &self,
        token: &str,
        request: &SetWebhookRequest,
    ) -> Result<SetWebhookResponse>;
    /// Sends a plain text message.
    async fn send_text_message(
        &self,
        token: &str,
        request: &SendTextRequest,
    ) -> Result<SendMessageResponse>;
    /// Sends a picture with its caption.
    async fn send_picture_message(
        &self,
        token: &str,
        request: &SendPictureRequest,
    ) -> Result<SendMessageResponse>;
    /// Sends a video by url and size.
    async fn send_video_message(
        &self,
        token: &str,
        request: &SendVideoRequest,
    ) -> Result<SendMessageResponse>;
    /// Sends a downloadable file.
    async fn send_file_message(
        &self,
        token: &str,
        request: &SendFileRequest,
    ) -> Result<SendMessageResponse>;
    /// Sends a contact card.
    async fn send_contact_message(
        &self,
        token: &str,
        request: &SendContactRequest,
    ) -> Result<SendMessageResponse>;
    /// Sends a location pin.
    async fn send_location_message(
        &self,
        token: &str,
        request: &SendLocationRequest,
    ) -> Result<SendMessageResponse>;
    /// Sends a url message.
    async fn send_url_message(
        &self,
        token: &str,
        request: &SendUrlRequest,
    ) -> Result<SendMessageResponse>;
    /// Sends a sticker from the Viber catalog.
    async fn send_sticker_message(
        &self,
        token: &str,
        request: &SendStickerRequest,
    ) -> Result<SendMessageResponse>;
}

/// Reqwest-based implementation of [`ViberApi`].
pub struct ViberClient {
    http: reqwest::Client,
    api_url: String,
}

impl ViberClient {
    /// Creates a client against the production endpoint.
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL.to_string())
    }

    /// Creates a client against a custom endpoint (tests, proxies).
    pub fn with_api_url(api_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// POSTs `body` to `path` with the auth header and decodes the JSON reply.
    /// Non-2xx replies surface as transport errors; Viber reports business
    /// rejections inside a 200 body, not via HTTP status.
    async fn post<B, R>(&self, token: &str, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_url, path);
        let response = self
            .http
            .post(&url)
            .header(AUTH_HEADER, token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn send_message<B: Serialize + Sync>(
        &self,
        token: &str,
        kind: MessageKind,
        request: &B,
    ) -> Result<SendMessageResponse> {
        let body = tag_message(kind, request)?;
        self.post(token, SEND_MESSAGE_PATH, &body).await
    }
}

impl Default for ViberClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Injects the `type` tag into a serialized request body. The send endpoint is
/// shared by all kinds and dispatches on this tag.
fn tag_message<B: Serialize>(kind: MessageKind, request: &B) -> Result<serde_json::Value> {
    let mut body = serde_json::to_value(request)?;
    if let Some(fields) = body.as_object_mut() {
        fields.insert(
            "type".to_string(),
            serde_json::Value::String(kind.as_str().to_string()),
        );
    }
    Ok(body)
}

#[async_trait]
impl ViberApi for ViberClient {
    async fn set_webhook(
        &self,
        token: &str,
        request: &SetWebhookRequest,
    ) -> Result<SetWebhookResponse> {
        self.post(token, SET_WEBHOOK_PATH, request).await
    }

    async fn send_text_message(
        &self,
        token: &str,
        request: &SendTextRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::Text, request).await
    }

    async fn send_picture_message(
        &self,
        token: &str,
        request: &SendPictureRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::Picture, request).await
    }

    async fn send_video_message(
        &self,
        token: &str,
        request: &SendVideoRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::Video, request).await
    }

    async fn send_file_message(
        &self,
        token: &str,
        request: &SendFileRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::File, request).await
    }

    async fn send_contact_message(
        &self,
        token: &str,
        request: &SendContactRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::Contact, request).await
    }

    async fn send_location_message(
        &self,
        token: &str,
        request: &SendLocationRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::Location, request).await
    }

    async fn send_url_message(
        &self,
        token: &str,
        request: &SendUrlRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::Url, request).await
    }

    async fn send_sticker_message(
        &self,
        token: &str,
        request: &SendStickerRequest,
    ) -> Result<SendMessageResponse> {
        self.send_message(token, MessageKind::Sticker, request).await
    }
}
