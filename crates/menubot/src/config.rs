//! Configuration read once from the environment (after `.env` is loaded)

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Path to the menu tree document
/// Read from MENU_FILE environment variable
/// Default: menu.json
pub static MENU_FILE: Lazy<String> = Lazy::new(|| env::var("MENU_FILE").unwrap_or_else(|_| "menu.json".to_string()));

/// Path to the info (content) document
/// Read from INFO_FILE environment variable
/// Default: info.json
pub static INFO_FILE: Lazy<String> = Lazy::new(|| env::var("INFO_FILE").unwrap_or_else(|_| "info.json".to_string()));

/// Greeting shown above the root menu on /start
/// Read from WELCOME_TEXT environment variable; unset falls back to the menu prompt
pub static WELCOME_TEXT: Lazy<Option<String>> =
    Lazy::new(|| env::var("WELCOME_TEXT").ok().filter(|s| !s.trim().is_empty()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Unset: log to the terminal only
pub static LOG_FILE_PATH: Lazy<Option<String>> = Lazy::new(|| env::var("LOG_FILE_PATH").ok());

/// Webhook URL for Telegram updates
/// Read from WEBHOOK_URL environment variable
pub static WEBHOOK_URL: Lazy<Option<String>> = Lazy::new(|| env::var("WEBHOOK_URL").ok());

/// Local port the webhook listener binds to
/// Read from PORT environment variable
/// Default: 8443
pub static PORT: Lazy<u16> = Lazy::new(|| {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8443)
});

/// Custom Bot API server (local telegram-bot-api)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Dispatcher restart configuration
pub mod retry {
    use super::Duration;

    /// Maximum number of retries for dispatcher reconnection
    pub const MAX_DISPATCHER_RETRIES: u32 = 5;

    /// Delay between dispatcher retry attempts (in seconds)
    pub const DISPATCHER_RETRY_DELAY_SECS: u64 = 5;

    /// Dispatcher retry delay duration
    pub fn dispatcher_delay() -> Duration {
        Duration::from_secs(DISPATCHER_RETRY_DELAY_SECS)
    }
}
