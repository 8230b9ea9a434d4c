use thiserror::Error;

/// Load-time errors for the menu tree and info documents.
///
/// Every variant is fatal to startup: the store never holds a partially
/// validated tree.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be read (missing file, permissions)
    #[error("cannot read {document} document: {source}")]
    Io {
        document: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the node shape
    #[error("malformed {document} document: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two children of the same node share a key
    #[error("duplicate key '{key}' under '{parent}'")]
    DuplicateKey { parent: String, key: String },

    /// A non-root node has no key (or an empty one)
    #[error("node under '{parent}' has no key")]
    MissingKey { parent: String },

    /// A key that cannot round-trip through a callback token
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// The encoded token for a node exceeds the messenger's callback payload limit
    #[error("callback token '{token}' is longer than {limit} bytes")]
    CallbackTooLong { token: String, limit: usize },

    /// The info document's top level is not an object
    #[error("info document must be a JSON object at the top level")]
    InfoNotObject,
}

/// A callback token that does not belong to the menu namespace
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("token '{token}' is not a menu token")]
pub struct DecodeError {
    pub token: String,
}

/// A decoded path with a segment that has no matching child
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no menu node at '{path}'")]
pub struct NotFound {
    pub path: String,
}

/// Type alias for load results
pub type ConfigResult<T> = Result<T, ConfigError>;
