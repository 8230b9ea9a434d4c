//! `Messenger` over the Telegram Bot API

use std::path::Path;

use async_trait::async_trait;
use menucore::{ButtonLayout, ChatRef, MessageRef, Messenger};
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, FileId, InputFile, MessageId};
use teloxide::{ApiError, RequestError};

use super::keyboard::inline_keyboard;

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Where an image reference from the info document points
#[derive(Debug, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Url(url::Url),
    Path(&'a Path),
    FileId(&'a str),
}

impl<'a> ImageSource<'a> {
    pub fn classify(image: &'a str) -> Self {
        if let Ok(url) = url::Url::parse(image) {
            if matches!(url.scheme(), "http" | "https") {
                return Self::Url(url);
            }
        }
        let path = Path::new(image);
        if path.is_file() {
            return Self::Path(path);
        }
        Self::FileId(image)
    }

    pub fn into_input_file(self) -> InputFile {
        match self {
            Self::Url(url) => InputFile::url(url),
            Self::Path(path) => InputFile::file(path),
            Self::FileId(id) => InputFile::file_id(FileId(id.to_string())),
        }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    type Error = RequestError;

    async fn send_text(&self, chat: ChatRef, text: &str, buttons: &ButtonLayout) -> Result<MessageRef, RequestError> {
        let msg = self
            .bot
            .send_message(ChatId(chat.0), text)
            .reply_markup(inline_keyboard(buttons))
            .await?;
        Ok(MessageRef::new(chat, msg.id.0))
    }

    async fn edit_text(
        &self,
        message: MessageRef,
        text: &str,
        buttons: Option<&ButtonLayout>,
    ) -> Result<(), RequestError> {
        let request = self
            .bot
            .edit_message_text(ChatId(message.chat.0), MessageId(message.id), text);
        let request = match buttons {
            Some(buttons) => request.reply_markup(inline_keyboard(buttons)),
            None => request,
        };
        match request.await {
            Ok(_) => Ok(()),
            // Pressing the button of the node already on screen
            Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn send_image(&self, chat: ChatRef, image: &str) -> Result<MessageRef, RequestError> {
        let msg = self
            .bot
            .send_photo(ChatId(chat.0), ImageSource::classify(image).into_input_file())
            .await?;
        Ok(MessageRef::new(chat, msg.id.0))
    }

    async fn delete_message(&self, message: MessageRef) -> Result<(), RequestError> {
        self.bot
            .delete_message(ChatId(message.chat.0), MessageId(message.id))
            .await?;
        Ok(())
    }

    async fn answer_interaction(&self, interaction_id: &str) -> Result<(), RequestError> {
        self.bot
            .answer_callback_query(CallbackQueryId(interaction_id.to_string()))
            .await?;
        Ok(())
    }
}
