use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tokio::time::sleep;

use menubot::cli::{Cli, Commands};
use menubot::config;
use menubot::init_logger;
use menubot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use menucore::{MenuStore, NavigationEngine, Outcome};

/// Main entry point for the menu bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration documents, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    // Load environment variables from .env if present
    let _ = dotenv();

    init_logger(config::LOG_FILE_PATH.as_deref())?;

    match cli.command {
        Some(Commands::Run { webhook }) => {
            log::info!("Running bot (webhook: {})", webhook);
            run_bot(webhook).await
        }
        Some(Commands::Check { menu, info }) => run_check(menu, info),
        Some(Commands::Preview { token }) => run_preview(&token),
        None => {
            log::info!("No command specified, running bot in long polling mode");
            run_bot(false).await
        }
    }
}

fn load_store(menu: &str, info: &str) -> Result<MenuStore> {
    let store = MenuStore::load(menu, info)?;
    let summary = store.summary();
    log::info!(
        "Loaded menu from {} ({} nodes, {} leaves, depth {}) and {} info entries from {}",
        menu,
        summary.nodes,
        summary.leaves,
        summary.depth,
        store.info().len(),
        info
    );
    Ok(store)
}

/// Validate both documents and print the tree shape
fn run_check(menu: Option<String>, info: Option<String>) -> Result<()> {
    let menu = menu.unwrap_or_else(|| config::MENU_FILE.clone());
    let info = info.unwrap_or_else(|| config::INFO_FILE.clone());
    let store = load_store(&menu, &info)?;
    let summary = store.summary();
    println!("✅ {} and {} are valid", menu, info);
    println!("   nodes: {}, leaves: {}, depth: {}", summary.nodes, summary.leaves, summary.depth);
    Ok(())
}

/// Render one token to stdout
fn run_preview(token: &str) -> Result<()> {
    let store = load_store(&config::MENU_FILE, &config::INFO_FILE)?;
    let engine = NavigationEngine::new(Arc::new(store));
    let outcome = engine.handle(token);

    println!("{}", outcome.text());
    if let Outcome::Render(plan) = &outcome {
        for image in &plan.images {
            println!("[image] {}", image);
        }
        for button in plan.markup.buttons() {
            println!("[{}] → {}", button.label, button.callback);
        }
    }
    Ok(())
}

async fn run_bot(use_webhook: bool) -> Result<()> {
    let bot_init_start = std::time::Instant::now();
    log::info!("Starting bot...");

    let store = load_store(&config::MENU_FILE, &config::INFO_FILE)?;
    let engine = NavigationEngine::new(Arc::new(store));

    let bot = create_bot()?;
    let me = bot.get_me().await?;
    log::info!("Bot username: {:?}, Bot ID: {}", me.username.as_deref(), me.id.0);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let handler = schema(HandlerDeps::new(engine, config::WELCOME_TEXT.clone()));

    let webhook_url = if use_webhook { config::WEBHOOK_URL.clone() } else { None };
    if use_webhook && webhook_url.is_none() {
        log::warn!("--webhook given but WEBHOOK_URL is not set, falling back to long polling");
    }

    if let Some(url) = webhook_url {
        let url = url::Url::parse(&url)?;
        let addr = SocketAddr::from(([0, 0, 0, 0], *config::PORT));
        log::info!("Starting bot in webhook mode at {} (listening on {})", url, addr);

        let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url)).await?;
        log::info!("🎉 Bot initialization complete in {:.2}s", bot_init_start.elapsed().as_secs_f64());

        Dispatcher::builder(bot, handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(listener, LoggingErrorHandler::with_custom_text("An error from the webhook listener"))
            .await;
        return Ok(());
    }

    log::info!("Starting bot in long polling mode");
    log::info!("🎉 Bot initialization complete in {:.2}s", bot_init_start.elapsed().as_secs_f64());

    let mut retry_count = 0;
    let max_retries = config::retry::MAX_DISPATCHER_RETRIES;

    // Run the dispatcher with retry logic
    loop {
        let bot_clone = bot.clone();
        let handler_clone = handler.clone();

        // A separate task isolates dispatcher panics; they surface via the JoinHandle
        let handle = tokio::spawn(async move {
            use teloxide::update_listeners::Polling;

            let listener = Polling::builder(bot_clone.clone()).drop_pending_updates().build();

            Dispatcher::builder(bot_clone, handler_clone)
                .enable_ctrlc_handler()
                .build()
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await
        });

        match handle.await {
            Ok(()) => {
                log::info!("Dispatcher shutdown gracefully");
                break;
            }
            Err(join_err) if join_err.is_panic() => {
                log::error!("Dispatcher panicked: {}", join_err);
                if retry_count >= max_retries {
                    log::error!("Max retries reached after panic. Exiting...");
                    break;
                }
                retry_count += 1;
                log::info!(
                    "Retrying dispatcher connection after panic (attempt {}/{})...",
                    retry_count,
                    max_retries
                );
                exponential_backoff(retry_count).await;
            }
            Err(join_err) => {
                log::warn!("Dispatcher task was cancelled: {}", join_err);
                break;
            }
        }
    }

    Ok(())
}

async fn exponential_backoff(attempt: u32) {
    let delay = config::retry::dispatcher_delay() * 2u32.saturating_pow(attempt.saturating_sub(1));
    sleep(delay.min(Duration::from_secs(120))).await;
}
