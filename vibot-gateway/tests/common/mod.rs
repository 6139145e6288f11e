//! Shared test utilities for the gateway integration tests.
//!
//! Provides MockViberApi (ViberApi) with scripted replies, call counters, and
//! recorded sends, used by the dispatch, router, and registration test files
//! under tests/.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vibot_core::{
    Result, SendContactRequest, SendFileRequest, SendLocationRequest, SendMessageResponse,
    SendPictureRequest, SendStickerRequest, SendTextRequest, SendUrlRequest, SendVideoRequest,
    Sender, SetWebhookRequest, SetWebhookResponse, Status, ViberApi,
};
use vibot_gateway::{GatewayConfig, ViberService};

pub const TEST_TOKEN: &str = "445da6az1s345z78-dazcczb2542zccea-fc25a2312791Zc1e";

/// One recorded outbound send.
#[derive(Debug, Clone)]
#[allow(dead_code)] // not every test binary reads every field
pub struct SentRecord {
    pub kind: &'static str,
    pub receiver: String,
    pub text: Option<String>,
    pub token: String,
}

/// Mock transport: answers from a scripted reply queue (accepted when the
/// queue is empty), counts calls, and records every send so tests can assert
/// what would have gone to Viber.
pub struct MockViberApi {
    send_replies: Mutex<VecDeque<Result<SendMessageResponse>>>,
    webhook_replies: Mutex<VecDeque<Result<SetWebhookResponse>>>,
    send_calls: AtomicUsize,
    webhook_calls: AtomicUsize,
    sent: Mutex<Vec<SentRecord>>,
    webhook_requests: Mutex<Vec<SetWebhookRequest>>,
}

#[allow(dead_code)] // each test binary uses its own subset of helpers
impl MockViberApi {
    pub fn new() -> Self {
        Self {
            send_replies: Mutex::new(VecDeque::new()),
            webhook_replies: Mutex::new(VecDeque::new()),
            send_calls: AtomicUsize::new(0),
            webhook_calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            webhook_requests: Mutex::new(Vec::new()),
        }
    }

    /// Scripts the outcome of the next send; replies are consumed in call
    /// order, and an empty queue answers accepted.
    pub fn push_send_reply(&self, reply: Result<SendMessageResponse>) {
        self.send_replies.lock().unwrap().push_back(reply);
    }

    /// Queues the outcome of the next webhook registration.
    pub fn push_webhook_reply(&self, reply: Result<SetWebhookResponse>) {
        self.webhook_replies.lock().unwrap().push_back(reply);
    }

    pub fn send_count(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst)
    }

    pub fn webhook_count(&self) -> usize {
        self.webhook_calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn webhook_requests(&self) -> Vec<SetWebhookRequest> {
        self.webhook_requests.lock().unwrap().clone()
    }

    fn record(
        &self,
        kind: &'static str,
        token: &str,
        receiver: &str,
        text: Option<&str>,
    ) -> Result<SendMessageResponse> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(SentRecord {
            kind,
            receiver: receiver.to_string(),
            text: text.map(str::to_string),
            token: token.to_string(),
        });
        self.send_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(accepted()))
    }
}

#[async_trait]
impl ViberApi for MockViberApi {
    async fn set_webhook(
        &self,
        _token: &str,
        request: &SetWebhookRequest,
    ) -> Result<SetWebhookResponse> {
        self.webhook_calls.fetch_add(1, Ordering::SeqCst);
        self.webhook_requests.lock().unwrap().push(request.clone());
        self.webhook_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(SetWebhookResponse {
                    status: Status::Ok,
                    status_message: "ok".to_string(),
                    event_types: request.event_types.clone(),
                })
            })
    }

    async fn send_text_message(
        &self,
        token: &str,
        request: &SendTextRequest,
    ) -> Result<SendMessageResponse> {
        self.record("text", token, &request.receiver, Some(&request.text))
    }

    async fn send_picture_message(
        &self,
        token: &str,
        request: &SendPictureRequest,
    ) -> Result<SendMessageResponse> {
        self.record("picture", token, &request.receiver, Some(&request.text))
    }

    async fn send_video_message(
        &self,
        token: &str,
        request: &SendVideoRequest,
    ) -> Result<SendMessageResponse> {
        self.record("video", token, &request.receiver, None)
    }

    async fn send_file_message(
        &self,
        token: &str,
        request: &SendFileRequest,
    ) -> Result<SendMessageResponse> {
        self.record("file", token, &request.receiver, None)
    }

    async fn send_contact_message(
        &self,
        token: &str,
        request: &SendContactRequest,
    ) -> Result<SendMessageResponse> {
        self.record("contact", token, &request.receiver, None)
    }

    async fn send_location_message(
        &self,
        token: &str,
        request: &SendLocationRequest,
    ) -> Result<SendMessageResponse> {
        self.record("location", token, &request.receiver, None)
    }

    async fn send_url_message(
        &self,
        token: &str,
        request: &SendUrlRequest,
    ) -> Result<SendMessageResponse> {
        self.record("url", token, &request.receiver, None)
    }

    async fn send_sticker_message(
        &self,
        token: &str,
        request: &SendStickerRequest,
    ) -> Result<SendMessageResponse> {
        self.record("sticker", token, &request.receiver, None)
    }
}

/// An accepted send, the mock's default answer.
pub fn accepted() -> SendMessageResponse {
    SendMessageResponse {
        status: Status::Ok,
        status_message: "ok".to_string(),
        message_token: Some(5_741_311_803_571_721_087),
    }
}

/// A rejected send with the given platform status.
#[allow(dead_code)]
pub fn rejected(status: Status, status_message: &str) -> SendMessageResponse {
    SendMessageResponse {
        status,
        status_message: status_message.to_string(),
        message_token: None,
    }
}

/// Config for tests; no env access, api_url unset so nothing can dial out.
pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        auth_token: TEST_TOKEN.to_string(),
        webhook_url: "https://bot.example.org/viber/webhook".to_string(),
        api_url: None,
        sender: Sender::new("TestBot".to_string()),
        log_file: "logs/test.log".to_string(),
    }
}

/// A service wired to a fresh mock; the mock handle is returned for
/// assertions.
pub fn service_with(config: GatewayConfig) -> (Arc<MockViberApi>, ViberService) {
    let api = Arc::new(MockViberApi::new());
    let service = ViberService::new(api.clone(), config);
    (api, service)
}

#[allow(dead_code)]
pub fn service() -> (Arc<MockViberApi>, ViberService) {
    service_with(test_config())
}
