//! EcoHome advisor: matches free-text questions against an ordered rule table
//! and answers with canned, profile-interpolated replies.

pub mod advisor;
pub mod chat;
pub mod delay;
pub mod intents;
pub mod responder;
pub mod responses;
pub mod template;

pub use advisor::Advisor;
pub use chat::{ChatMessage, ChatSession, PendingReply, Role};
pub use delay::ThinkingDelay;
pub use intents::{match_intent, Intent, IntentRule, Matcher, INTENT_RULES};
pub use responder::{profile_vars, respond, respond_with_intent, Reply};

#[cfg(test)]
mod tests;
