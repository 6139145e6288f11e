//! Per-event bot context: the service to act through plus the callback that
//! triggered the reaction.

use vibot_core::ConversationStartedCallback;

use crate::service::ViberService;

/// Everything a reaction needs: dispatch via the service, event data via the
/// callback. Built fresh per event and dropped when the reaction finishes;
/// nothing here survives between callbacks.
pub struct BotContext<'a> {
    service: &'a ViberService,
    callback: ConversationStartedCallback,
}

impl<'a> BotContext<'a> {
    pub fn new(service: &'a ViberService, callback: ConversationStartedCallback) -> Self {
        Self { service, callback }
    }

    pub fn service(&self) -> &ViberService {
        self.service
    }

    pub fn callback(&self) -> &ConversationStartedCallback {
        &self.callback
    }
}
