//! Dispatcher schema and handler endpoints
//!
//! The same handler tree is used in production and can be driven from
//! integration tests.

use std::sync::Arc;

use menucore::{execute_outcome, send_plan, ChatRef, MessageRef, Messenger, NavigationEngine, SessionStore};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::bot::{Command, HELP_TEXT};
use super::messenger::TelegramMessenger;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub engine: NavigationEngine,
    pub sessions: Arc<SessionStore<UserId>>,
    pub welcome_text: Option<String>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(engine: NavigationEngine, welcome_text: Option<String>) -> Self {
        Self {
            engine,
            sessions: Arc::new(SessionStore::new()),
            welcome_text,
        }
    }
}

/// Creates the main dispatcher schema for the Telegram bot.
///
/// # Arguments
/// * `deps` - Handler dependencies (navigation engine, session store, welcome text)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(callback_handler(deps_callback))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => handle_start_command(bot, &msg, &deps).await?,
                    Command::Help => {
                        bot.send_message(msg.chat.id, HELP_TEXT).await?;
                    }
                    Command::About => {
                        bot.send_message(msg.chat.id, deps.engine.about_text()).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            handle_menu_callback(bot, q, &deps).await?;
            Ok(())
        }
    })
}

/// Sends the root menu as a new message.
async fn handle_start_command(bot: Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), teloxide::RequestError> {
    let messenger = TelegramMessenger::new(bot);
    let plan = deps.engine.start_plan(deps.welcome_text.as_deref());
    let chat = ChatRef(msg.chat.id.0);

    let Some(user) = msg.from.as_ref().map(|u| u.id) else {
        send_plan(&messenger, &mut Default::default(), chat, &plan).await?;
        return Ok(());
    };

    let mut session = deps.sessions.take(&user);
    let result = send_plan(&messenger, &mut session, chat, &plan).await;
    deps.sessions.put(user, session);
    result.map(|_| ())
}

/// Handles a button press: decode the token, render the node, and edit the
/// menu message in place.
pub async fn handle_menu_callback(
    bot: Bot,
    q: CallbackQuery,
    deps: &HandlerDeps,
) -> Result<(), teloxide::RequestError> {
    let messenger = TelegramMessenger::new(bot);
    if let Err(e) = messenger.answer_interaction(&q.id.0).await {
        log::warn!("Failed to answer callback {}: {}", q.id.0, e);
    }

    let Some(target) = q
        .message
        .as_ref()
        .map(|m| MessageRef::new(ChatRef(m.chat().id.0), m.id().0))
    else {
        log::debug!("Callback {} carries no message, nothing to edit", q.id.0);
        return Ok(());
    };

    let token = q.data.as_deref().unwrap_or_default();
    let outcome = deps.engine.handle(token);

    let user = q.from.id;
    let mut session = deps.sessions.take(&user);
    let result = execute_outcome(&messenger, &mut session, target, &outcome).await;
    deps.sessions.put(user, session);

    if let Err(ref e) = result {
        log::error!("Failed to render '{}' for user {}: {}", token, user.0, e);
    }
    result
}
