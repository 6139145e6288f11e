//! The gateway service: outbound dispatch with validation and outcome
//! reporting, webhook registration, and inbound callback routing.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use vibot_core::{
    Callback, MessageKind, Result, SendContactRequest, SendFileRequest, SendLocationRequest,
    SendMessageResponse, SendPictureRequest, SendStickerRequest, SendTextRequest, SendUrlRequest,
    SendVideoRequest, SetWebhookRequest, SetWebhookResponse, ViberApi, ViberUpdate, VibotError,
};

use crate::bot::{BotContext, BotState};
use crate::config::GatewayConfig;

/// Viber gateway: validates and sends outbound messages, registers the
/// webhook, and routes inbound updates to bot reactions.
///
/// The transport is injected as [`ViberApi`] so tests can script it.
pub struct ViberService {
    api: Arc<dyn ViberApi>,
    config: GatewayConfig,
}

impl ViberService {
    pub fn new(api: Arc<dyn ViberApi>, config: GatewayConfig) -> Self {
        Self { api, config }
    }

    /// Config the service was built with; reactions read the sender identity
    /// from here.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Sends a text message.
    ///
    /// The shared dispatch contract: a request that fails validation never
    /// reaches the transport and comes back as
    /// [`VibotError::InvalidArgument`]; a rejection by Viber is logged and
    /// swallowed (the call still returns `Ok`); transport faults propagate
    /// unchanged.
    pub async fn send_text_message(&self, request: &SendTextRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_text_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::Text, &request.receiver, &response);
        Ok(())
    }

    /// Sends a picture message; same contract as [`Self::send_text_message`].
    pub async fn send_picture_message(&self, request: &SendPictureRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_picture_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::Picture, &request.receiver, &response);
        Ok(())
    }

    /// Sends a video message; same contract as [`Self::send_text_message`].
    pub async fn send_video_message(&self, request: &SendVideoRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_video_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::Video, &request.receiver, &response);
        Ok(())
    }

    /// Sends a file message; same contract as [`Self::send_text_message`].
    pub async fn send_file_message(&self, request: &SendFileRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_file_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::File, &request.receiver, &response);
        Ok(())
    }

    /// Sends a contact card; same contract as [`Self::send_text_message`].
    pub async fn send_contact_message(&self, request: &SendContactRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_contact_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::Contact, &request.receiver, &response);
        Ok(())
    }

    /// Sends a location pin; same contract as [`Self::send_text_message`].
    pub async fn send_location_message(&self, request: &SendLocationRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_location_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::Location, &request.receiver, &response);
        Ok(())
    }

    /// Sends a url message; same contract as [`Self::send_text_message`].
    pub async fn send_url_message(&self, request: &SendUrlRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_url_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::Url, &request.receiver, &response);
        Ok(())
    }

    /// Sends a sticker; same contract as [`Self::send_text_message`].
    pub async fn send_sticker_message(&self, request: &SendStickerRequest) -> Result<()> {
        request.validate()?;
        let response = self
            .api
            .send_sticker_message(&self.config.auth_token, request)
            .await?;
        self.report(MessageKind::Sticker, &request.receiver, &response);
        Ok(())
    }

    /// One log line per completed send: info on accept, warn with Viber's
    /// code and explanation on reject.
    fn report(&self, kind: MessageKind, receiver: &str, response: &SendMessageResponse) {
        if response.status.is_ok() {
            info!(kind = %kind, receiver = %receiver, "Message sent");
        } else {
            warn!(
                kind = %kind,
                receiver = %receiver,
                status = response.status.code(),
                status_message = %response.status_message,
                "Message rejected by Viber"
            );
        }
    }

    /// Registers the configured webhook url for every recognized event kind.
    ///
    /// A blank token or url is refused before any network activity. Viber's
    /// answer is returned either way so callers can inspect which events were
    /// actually subscribed.
    #[instrument(skip(self))]
    pub async fn set_webhook(&self) -> Result<SetWebhookResponse> {
        if self.config.auth_token.trim().is_empty() {
            error!("Webhook registration skipped: auth token is blank");
            return Err(VibotError::Config("auth token is blank".to_string()));
        }
        if self.config.webhook_url.trim().is_empty() {
            error!("Webhook registration skipped: webhook url is blank");
            return Err(VibotError::Config("webhook url is blank".to_string()));
        }

        let request = SetWebhookRequest::all_events(self.config.webhook_url.clone());
        let response = self
            .api
            .set_webhook(&self.config.auth_token, &request)
            .await?;
        if response.status.is_ok() {
            info!(
                url = %self.config.webhook_url,
                event_types = ?response.event_types,
                "Webhook registered"
            );
        } else {
            error!(
                status = response.status.code(),
                status_message = %response.status_message,
                "Webhook registration rejected"
            );
        }
        Ok(response)
    }

    /// Routes one inbound update to its reaction.
    ///
    /// Classification follows [`ViberUpdate::into_callback`]'s fixed
    /// priority, so at most one reaction runs per delivery. Receipt and
    /// subscription kinds are traced and otherwise ignored; an update with no
    /// recognized callback is a no-op.
    #[instrument(skip(self, update))]
    pub async fn handle_update(&self, update: ViberUpdate) -> Result<()> {
        let Some(callback) = update.into_callback() else {
            return Ok(());
        };

        match callback {
            Callback::Delivered(callback) => {
                debug!(
                    user_id = %callback.user_id,
                    message_token = callback.message_token,
                    "Delivery receipt"
                );
            }
            Callback::Seen(callback) => {
                debug!(
                    user_id = %callback.user_id,
                    message_token = callback.message_token,
                    "Seen receipt"
                );
            }
            Callback::Failed(callback) => {
                warn!(
                    user_id = %callback.user_id,
                    message_token = callback.message_token,
                    desc = %callback.desc,
                    "Delivery failed"
                );
            }
            Callback::Subscribed(callback) => {
                info!(user_id = %callback.user.id, "User subscribed");
            }
            Callback::Unsubscribed(callback) => {
                info!(user_id = %callback.user_id, "User unsubscribed");
            }
            Callback::ConversationStarted(callback) => {
                let context = BotContext::new(self, callback);
                BotState::ConversationStarted.enter(context).await?;
            }
            Callback::Webhook(callback) => {
                debug!(timestamp = callback.timestamp, "Webhook confirmation received");
            }
            Callback::Message(callback) => {
                debug!(
                    user_id = %callback.sender.id,
                    kind = %callback.message.kind,
                    "User message received"
                );
            }
        }

        Ok(())
    }
}
