use crate::chat::{ChatSession, PendingReply};
use crate::delay::ThinkingDelay;
use crate::responder::{respond_with_intent, Reply};
use eh_core::config::AdvisorConfig;
use eh_core::{EhError, Profile, Result};
use std::sync::{Mutex, PoisonError};

/// Chat front of the responder: waits out the thinking delay, then answers.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    delay: ThinkingDelay,
}

impl Advisor {
    pub fn new(delay: ThinkingDelay) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(ThinkingDelay::from_config(config))
    }

    /// No delay.
    pub fn instant() -> Self {
        Self::new(ThinkingDelay::none())
    }

    pub fn delay(&self) -> ThinkingDelay {
        self.delay
    }

    /// Answer `pending` after the delay. The content does not depend on it.
    pub async fn reply(&self, pending: &PendingReply, profile: &Profile) -> Reply {
        let wait = {
            let mut rng = rand::thread_rng();
            self.delay.sample(&mut rng)
        };
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
        respond_with_intent(&pending.text, profile)
    }

    /// One full turn against a shared transcript: append the user message,
    /// wait, then append the reply unless the session was restarted meanwhile.
    pub async fn converse(&self, session: &Mutex<ChatSession>, profile: &Profile, text: &str) -> Result<Reply> {
        let pending = session.lock().unwrap_or_else(PoisonError::into_inner).submit(text)?;
        let reply = self.reply(&pending, profile).await;
        let appended = session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .complete(&pending, reply.content.clone());
        if !appended {
            tracing::debug!(generation = pending.generation, "dropping reply for restarted session");
            return Err(EhError::SessionRestarted { id: format!("generation {}", pending.generation) });
        }
        Ok(reply)
    }
}
