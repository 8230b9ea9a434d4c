//! Carries out an [`Outcome`] through a [`Messenger`]

use crate::engine::Outcome;
use crate::messenger::{ChatRef, MessageRef, Messenger};
use crate::render::RenderPlan;
use crate::session::SessionState;

/// Applies a callback outcome to the menu message `target`.
///
/// Unknown or unresolved tokens only replace the text: the keyboard is
/// dropped and the session is left alone. Only the final text edit can
/// fail the call.
pub async fn execute_outcome<M: Messenger + ?Sized>(
    messenger: &M,
    session: &mut SessionState,
    target: MessageRef,
    outcome: &Outcome,
) -> Result<(), M::Error> {
    match outcome {
        Outcome::Render(plan) => {
            send_images(messenger, session, target.chat, plan).await;
            messenger.edit_text(target, &plan.text, Some(&plan.markup)).await
        }
        Outcome::UnknownAction | Outcome::NotFound => messenger.edit_text(target, outcome.text(), None).await,
    }
}

/// Sends `plan` as a new message (the start command path).
pub async fn send_plan<M: Messenger + ?Sized>(
    messenger: &M,
    session: &mut SessionState,
    chat: ChatRef,
    plan: &RenderPlan,
) -> Result<MessageRef, M::Error> {
    send_images(messenger, session, chat, plan).await;
    messenger.send_text(chat, &plan.text, &plan.markup).await
}

/// Best-effort removal of the images sent by the previous render.
pub async fn clear_images<M: Messenger + ?Sized>(messenger: &M, session: &mut SessionState) {
    for message in session.take_images() {
        if let Err(e) = messenger.delete_message(message).await {
            log::debug!(
                "Stale image {} in chat {} not deleted: {}",
                message.id,
                message.chat.0,
                e
            );
        }
    }
}

async fn send_images<M: Messenger + ?Sized>(
    messenger: &M,
    session: &mut SessionState,
    chat: ChatRef,
    plan: &RenderPlan,
) {
    clear_images(messenger, session).await;
    for image in &plan.images {
        match messenger.send_image(chat, image).await {
            Ok(sent) => session.record_image(sent),
            Err(e) => log::warn!("Failed to send image {} to chat {}: {}", image, chat.0, e),
        }
    }
}
