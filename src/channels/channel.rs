//! Channel trait and the messages that flow through it.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use uuid::Uuid;

use crate::error::ChannelError;

/// A line of user input.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel the message arrived on.
    pub channel: String,
    pub content: String,
}

impl IncomingMessage {
    pub fn new(channel: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: channel.into(),
            content: content.into(),
        }
    }
}

/// A rendered screen or notice sent back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingResponse {
    pub content: String,
}

impl OutgoingResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Stream of incoming messages from a channel.
pub type MessageStream = Pin<Box<dyn Stream<Item = IncomingMessage> + Send>>;

/// A source of user input and sink for rendered screens.
#[async_trait]
pub trait Channel: Send + Sync {
    fn name(&self) -> &str;

    /// Begin reading input. The session ends when the stream ends.
    async fn start(&self) -> Result<MessageStream, ChannelError>;

    /// Show a response. `msg` is the input being answered, if any; the
    /// initial screen is sent with `None`.
    async fn respond(
        &self,
        msg: Option<&IncomingMessage>,
        response: OutgoingResponse,
    ) -> Result<(), ChannelError>;

    async fn shutdown(&self) -> Result<(), ChannelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_message_gets_fresh_id() {
        let a = IncomingMessage::new("cli", "next");
        let b = IncomingMessage::new("cli", "next");
        assert_ne!(a.id, b.id);
        assert_eq!(a.content, "next");
        assert_eq!(a.channel, "cli");
    }
}
