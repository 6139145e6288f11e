//! Bot states and their reactions.
//!
//! A state is a behavior selector, not data: entering it runs the reaction for
//! the triggering event with the given context and nothing else. There is no
//! prior-state tracking and nothing survives the call; stateful multi-turn
//! conversations would need a store keyed by user id on top of this.

use tracing::info;

use vibot_core::{Result, SendTextRequest};

use super::context::BotContext;

/// Closed set of bot states. New reactions (subscribed, message received, ...)
/// are added as variants with their own entry behavior, not as branches
/// elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotState {
    /// A user opened the conversation; the bot greets them.
    ConversationStarted,
}

impl BotState {
    /// Runs this state's reaction, consuming the context.
    pub async fn enter(self, context: BotContext<'_>) -> Result<()> {
        match self {
            BotState::ConversationStarted => greet_user(context).await,
        }
    }
}

/// Greets the user who opened the conversation, addressed by the id and name
/// the callback delivered. Sent through the regular text dispatch, so the
/// usual validation and outcome reporting apply.
async fn greet_user(context: BotContext<'_>) -> Result<()> {
    let user = &context.callback().user;
    info!(user_id = %user.id, user_name = %user.name, "Conversation started");

    let request = SendTextRequest::new(
        user.id.clone(),
        context.service().config().sender.clone(),
        format!("Hello, {}! How can I help you?", user.name),
    );
    context.service().send_text_message(&request).await
}
