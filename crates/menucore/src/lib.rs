//! Menucore - menu tree navigation for chat bots
//!
//! Renders a hierarchical menu as buttons, carries the user's position in
//! stateless callback tokens and swaps in text/image content per node.
//!
//! # Module Structure
//!
//! - `store`: loading and validating the menu tree and info table
//! - `path`: navigation paths and their callback token encoding
//! - `markup`, `render`: button layout and content resolution for a node
//! - `engine`: token → render plan pipeline
//! - `messenger`, `session`, `executor`: carrying a plan out through a chat client

pub mod engine;
pub mod error;
pub mod executor;
pub mod markup;
pub mod messenger;
pub mod model;
pub mod path;
pub mod render;
pub mod session;
pub mod store;
pub mod texts;

// Re-export commonly used types for convenience
pub use engine::{NavigationEngine, Outcome};
pub use error::{ConfigError, ConfigResult, DecodeError, NotFound};
pub use executor::{clear_images, execute_outcome, send_plan};
pub use markup::{build_markup, Button, ButtonLayout};
pub use messenger::{ChatRef, MessageRef, Messenger};
pub use model::{ContentEntry, InfoTable, MenuNode};
pub use path::{NavPath, CALLBACK_PREFIX};
pub use render::RenderPlan;
pub use session::{SessionState, SessionStore};
pub use store::MenuStore;
