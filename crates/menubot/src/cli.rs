use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "menubot")]
#[command(author, version, about = "Telegram bot that navigates a configurable menu tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot
    Run {
        /// Use webhook mode instead of long polling
        #[arg(long)]
        webhook: bool,
    },

    /// Load and validate the menu and info documents, then exit
    Check {
        /// Menu tree document (defaults to MENU_FILE)
        #[arg(long)]
        menu: Option<String>,

        /// Info document (defaults to INFO_FILE)
        #[arg(long)]
        info: Option<String>,
    },

    /// Print what a callback token renders to, without Telegram
    Preview {
        /// Callback token, e.g. "menu:admission/docs"
        token: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
