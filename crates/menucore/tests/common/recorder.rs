//! Messenger that records every call instead of talking to a chat platform
//!
//! Failures can be injected for deletes and for individual images.

#![allow(dead_code)]

use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use menucore::{ButtonLayout, ChatRef, MessageRef, Messenger};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SendText { chat: i64, text: String, callbacks: Vec<String> },
    EditText { message: i32, text: String, callbacks: Option<Vec<String>> },
    SendImage { chat: i64, image: String, id: i32 },
    Delete { message: i32 },
    Answer { id: String },
}

#[derive(Debug, Default)]
pub struct RecordingMessenger {
    calls: Mutex<Vec<Call>>,
    next_id: AtomicI32,
    fail_deletes: bool,
    fail_images: HashSet<String>,
    fail_edits: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1000),
            ..Self::default()
        }
    }

    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn failing_image(mut self, image: &str) -> Self {
        self.fail_images.insert(image.to_owned());
        self
    }

    pub fn failing_edits(mut self) -> Self {
        self.fail_edits = true;
        self
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().await.push(call);
    }

    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

fn callbacks(layout: &ButtonLayout) -> Vec<String> {
    layout.buttons().map(|b| b.callback.clone()).collect()
}

#[async_trait]
impl Messenger for RecordingMessenger {
    type Error = io::Error;

    async fn send_text(&self, chat: ChatRef, text: &str, buttons: &ButtonLayout) -> Result<MessageRef, io::Error> {
        self.record(Call::SendText {
            chat: chat.0,
            text: text.to_owned(),
            callbacks: callbacks(buttons),
        })
        .await;
        Ok(MessageRef::new(chat, self.next_id()))
    }

    async fn edit_text(&self, message: MessageRef, text: &str, buttons: Option<&ButtonLayout>) -> Result<(), io::Error> {
        self.record(Call::EditText {
            message: message.id,
            text: text.to_owned(),
            callbacks: buttons.map(callbacks),
        })
        .await;
        if self.fail_edits {
            return Err(io::Error::new(io::ErrorKind::Other, "edit rejected"));
        }
        Ok(())
    }

    async fn send_image(&self, chat: ChatRef, image: &str) -> Result<MessageRef, io::Error> {
        if self.fail_images.contains(image) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "image unavailable"));
        }
        let id = self.next_id();
        self.record(Call::SendImage {
            chat: chat.0,
            image: image.to_owned(),
            id,
        })
        .await;
        Ok(MessageRef::new(chat, id))
    }

    async fn delete_message(&self, message: MessageRef) -> Result<(), io::Error> {
        self.record(Call::Delete { message: message.id }).await;
        if self.fail_deletes {
            return Err(io::Error::new(io::ErrorKind::NotFound, "message to delete not found"));
        }
        Ok(())
    }

    async fn answer_interaction(&self, interaction_id: &str) -> Result<(), io::Error> {
        self.record(Call::Answer {
            id: interaction_id.to_owned(),
        })
        .await;
        Ok(())
    }
}
