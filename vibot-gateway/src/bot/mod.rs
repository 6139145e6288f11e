//! Bot state machine: states and their per-event context.

mod context;
mod state;

pub use context::BotContext;
pub use state::BotState;
