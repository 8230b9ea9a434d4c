//! Menubot - Telegram front end for the menucore navigation engine
//!
//! # Module Structure
//!
//! - `config`: environment configuration
//! - `cli`: command line interface
//! - `logging`: logger setup
//! - `telegram`: dispatcher schema, handlers and the Bot API messenger

pub mod cli;
pub mod config;
pub mod logging;
pub mod telegram;

pub use logging::init_logger;
pub use telegram::{schema, HandlerDeps};
