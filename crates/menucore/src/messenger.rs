//! Messaging capability consumed by the executor
//!
//! The engine never talks to a chat platform directly. Implementations wrap
//! a concrete client (teloxide in `menubot`, a recorder in tests).

use async_trait::async_trait;

use crate::markup::ButtonLayout;

/// Chat identifier as the messenger understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatRef(pub i64);

/// A message that exists in some chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat: ChatRef,
    pub id: i32,
}

impl MessageRef {
    pub fn new(chat: ChatRef, id: i32) -> Self {
        Self { chat, id }
    }
}

#[async_trait]
pub trait Messenger: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn send_text(&self, chat: ChatRef, text: &str, buttons: &ButtonLayout) -> Result<MessageRef, Self::Error>;

    /// Replaces the text of `message`. `None` removes the keyboard.
    async fn edit_text(
        &self,
        message: MessageRef,
        text: &str,
        buttons: Option<&ButtonLayout>,
    ) -> Result<(), Self::Error>;

    async fn send_image(&self, chat: ChatRef, image: &str) -> Result<MessageRef, Self::Error>;

    async fn delete_message(&self, message: MessageRef) -> Result<(), Self::Error>;

    /// Acknowledges a button press without a visible effect.
    async fn answer_interaction(&self, interaction_id: &str) -> Result<(), Self::Error>;
}
