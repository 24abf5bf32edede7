use crate::responses::WELCOME;
use chrono::{DateTime, Utc};
use eh_core::{EhError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), created_at: Utc::now() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A user turn waiting for its assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub generation: u64,
    pub text: String,
}

/// Append-only transcript.
///
/// `restart` resets it to the welcome message and bumps the generation, so
/// replies issued before the restart are dropped by [`ChatSession::complete`].
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    generation: u64,
    /// Replies still outstanding for the current generation.
    #[serde(skip)]
    pending: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self { messages: vec![ChatMessage::assistant(WELCOME)], generation: 0, pending: 0 }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drives the "typing" indicator.
    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Record a user turn. Whitespace-only input is rejected and nothing is appended.
    pub fn submit(&mut self, text: &str) -> Result<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EhError::EmptyMessage);
        }
        self.messages.push(ChatMessage::user(text));
        self.pending += 1;
        Ok(PendingReply { generation: self.generation, text: text.to_string() })
    }

    /// Append the reply for `pending`. Returns false for a reply issued
    /// before the last restart.
    pub fn complete(&mut self, pending: &PendingReply, content: impl Into<String>) -> bool {
        if pending.generation != self.generation {
            return false;
        }
        self.messages.push(ChatMessage::assistant(content));
        self.pending = self.pending.saturating_sub(1);
        true
    }

    pub fn restart(&mut self) {
        self.messages = vec![ChatMessage::assistant(WELCOME)];
        self.generation += 1;
        self.pending = 0;
    }
}
