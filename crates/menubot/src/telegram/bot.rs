//! Bot initialization and command definitions

use indoc::indoc;
use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "main menu")]
    Start,
    #[command(description = "this help")]
    Help,
    #[command(description = "about us")]
    About,
}

pub const HELP_TEXT: &str = indoc! {"
    /start — main menu
    /help — this help
    /about — about us
"};

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Missing token, invalid BOT_API_URL, or client build failure
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        return Err(anyhow::anyhow!("BOT_TOKEN environment variable not set"));
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token, client);

    let bot = match config::BOT_API_URL.as_deref() {
        Some(bot_api_url) => {
            log::info!("Using custom Bot API URL: {}", bot_api_url);
            let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
            bot.set_api_url(url)
        }
        None => bot,
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_descriptions() {
        let command_list = Command::descriptions().to_string();
        assert!(command_list.contains("Available commands"));
        assert!(command_list.contains("start"));
        assert!(command_list.contains("help"));
        assert!(command_list.contains("about"));
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(Command::parse("/start", "menubot"), Ok(Command::Start)));
        assert!(matches!(Command::parse("/about", "menubot"), Ok(Command::About)));
        assert!(Command::parse("/reload", "menubot").is_err());
    }

    #[test]
    fn test_help_lists_every_command() {
        for cmd in Command::bot_commands() {
            assert!(HELP_TEXT.contains(&format!("/{}", cmd.command)), "missing {}", cmd.command);
        }
    }
}
