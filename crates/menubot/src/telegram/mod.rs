//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod keyboard;
pub mod messenger;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use keyboard::inline_keyboard;
pub use messenger::TelegramMessenger;
pub use teloxide::Bot;
