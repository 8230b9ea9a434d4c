//! Menu tree and info table storage
//!
//! Both documents are loaded once, validated, and then shared read-only
//! (usually behind an `Arc`) by every navigation request.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult, NotFound};
use crate::model::{InfoTable, MenuNode};
use crate::path::{NavPath, DELIMITER};

/// Telegram rejects `callback_data` longer than this many bytes
pub const MAX_CALLBACK_BYTES: usize = 64;

const MENU_DOCUMENT: &str = "menu";
const INFO_DOCUMENT: &str = "info";

/// Validated menu tree plus its info table
#[derive(Debug, Clone)]
pub struct MenuStore {
    tree: MenuNode,
    info: InfoTable,
}

/// Shape of the loaded tree, reported by `menubot check`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
}

impl MenuStore {
    /// Reads and validates both documents from disk.
    pub fn load(menu_path: impl AsRef<Path>, info_path: impl AsRef<Path>) -> ConfigResult<Self> {
        let menu = fs_err::read_to_string(menu_path.as_ref()).map_err(|source| ConfigError::Io {
            document: MENU_DOCUMENT,
            source,
        })?;
        let info = fs_err::read_to_string(info_path.as_ref()).map_err(|source| ConfigError::Io {
            document: INFO_DOCUMENT,
            source,
        })?;
        Self::from_json(&menu, &info)
    }

    /// Parses and validates both documents from JSON text.
    pub fn from_json(menu: &str, info: &str) -> ConfigResult<Self> {
        let tree: MenuNode = serde_json::from_str(menu).map_err(|source| ConfigError::Parse {
            document: MENU_DOCUMENT,
            source,
        })?;
        let info: Value = serde_json::from_str(info).map_err(|source| ConfigError::Parse {
            document: INFO_DOCUMENT,
            source,
        })?;
        let Value::Object(entries) = info else {
            return Err(ConfigError::InfoNotObject);
        };
        Self::new(tree, InfoTable::new(entries))
    }

    /// Validates an already parsed tree.
    pub fn new(tree: MenuNode, info: InfoTable) -> ConfigResult<Self> {
        validate_children(&tree, &NavPath::root())?;
        log::debug!("Menu tree validated: {:?}, {} info entries", summarize(&tree), info.len());
        Ok(Self { tree, info })
    }

    pub fn root(&self) -> &MenuNode {
        &self.tree
    }

    pub fn info(&self) -> &InfoTable {
        &self.info
    }

    /// Walks from the root following each key of `path`.
    pub fn resolve(&self, path: &NavPath) -> Result<&MenuNode, NotFound> {
        path.segments().iter().try_fold(&self.tree, |node, key| {
            node.child(key).ok_or_else(|| NotFound { path: path.to_string() })
        })
    }

    pub fn about(&self) -> Option<&str> {
        self.info.about()
    }

    pub fn summary(&self) -> TreeSummary {
        summarize(&self.tree)
    }
}

fn validate_children(node: &MenuNode, path: &NavPath) -> ConfigResult<()> {
    let mut seen = HashSet::with_capacity(node.children.len());
    for child in &node.children {
        let key = match child.key() {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(ConfigError::MissingKey {
                    parent: path.to_string(),
                })
            }
        };
        if key.contains(DELIMITER) {
            return Err(ConfigError::InvalidKey {
                key: key.to_owned(),
                reason: "contains the path delimiter '/'",
            });
        }
        if !seen.insert(key) {
            return Err(ConfigError::DuplicateKey {
                parent: path.to_string(),
                key: key.to_owned(),
            });
        }

        let child_path = path.child(key);
        let token = child_path.encode();
        if token.len() > MAX_CALLBACK_BYTES {
            return Err(ConfigError::CallbackTooLong {
                token,
                limit: MAX_CALLBACK_BYTES,
            });
        }
        validate_children(child, &child_path)?;
    }
    Ok(())
}

fn summarize(node: &MenuNode) -> TreeSummary {
    node.children.iter().map(summarize).fold(
        TreeSummary {
            nodes: 1,
            leaves: usize::from(node.is_leaf()),
            depth: 0,
        },
        |acc, child| TreeSummary {
            nodes: acc.nodes + child.nodes,
            leaves: acc.leaves + child.leaves,
            depth: acc.depth.max(child.depth + 1),
        },
    )
}
