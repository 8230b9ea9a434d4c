//! Menu tree and info table data model
//!
//! The tree is strongly typed and validated at load time. The info table is
//! kept as raw JSON and interpreted per lookup, so that one malformed entry
//! degrades to fallback text instead of failing the whole document.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Reserved info keys for the aggregate views
pub const CONTACTS_KEY: &str = "contacts";
pub const FAQ_KEY: &str = "faq";
pub const NEWS_KEY: &str = "news";
pub const ABOUT_KEY: &str = "about";

/// A node of the menu tree. The root carries no key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuNode {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Legacy documents spell this `items`; both are accepted, never together.
    #[serde(default, alias = "items")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        non_empty(self.text.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, key: &str) -> Option<&MenuNode> {
        self.children.iter().find(|c| c.key() == Some(key))
    }

    /// Button label: the display text, falling back to the key.
    pub fn label(&self) -> &str {
        self.text().or(self.key()).unwrap_or_default()
    }
}

/// Per-key content, as interpreted from the info document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEntry {
    Plain(String),
    Record(ContentRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRecord {
    pub text: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
}

impl ContentEntry {
    /// Interprets a raw info value. Anything that is neither a string nor an
    /// object yields `None`; mistyped fields inside a record are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Plain(s.clone())),
            Value::Object(obj) => Some(Self::Record(ContentRecord {
                text: str_field(obj, "text"),
                image: str_field(obj, "image"),
                images: obj
                    .get("images")
                    .and_then(Value::as_array)
                    .map(|arr| arr.iter().filter_map(Value::as_str).map(str::to_owned).collect())
                    .unwrap_or_default(),
            })),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    pub consultant_username: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsEntry {
    pub date: String,
    pub title: String,
    pub text: String,
}

/// Mapping from node key to content, plus the reserved aggregate keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoTable {
    entries: Map<String, Value>,
}

impl InfoTable {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, key: &str) -> Option<ContentEntry> {
        self.entries.get(key).and_then(ContentEntry::from_value)
    }

    pub fn contacts(&self) -> Contacts {
        let Some(obj) = self.entries.get(CONTACTS_KEY).and_then(Value::as_object) else {
            return Contacts::default();
        };
        Contacts {
            consultant_username: str_field(obj, "consultant_username"),
            phone: str_field(obj, "phone"),
            email: str_field(obj, "email"),
        }
    }

    pub fn faq(&self) -> Vec<FaqEntry> {
        self.objects(FAQ_KEY)
            .map(|obj| FaqEntry {
                q: str_field(obj, "q").unwrap_or_default(),
                a: str_field(obj, "a").unwrap_or_default(),
            })
            .collect()
    }

    /// News in document order (the source keeps it newest-first).
    pub fn news(&self) -> Vec<NewsEntry> {
        self.objects(NEWS_KEY)
            .map(|obj| NewsEntry {
                date: str_field(obj, "date").unwrap_or_default(),
                title: str_field(obj, "title").unwrap_or_default(),
                text: str_field(obj, "text").unwrap_or_default(),
            })
            .collect()
    }

    pub fn about(&self) -> Option<&str> {
        self.entries.get(ABOUT_KEY).and_then(Value::as_str)
    }

    fn objects<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Map<String, Value>> + 'a {
        self.entries
            .get(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }
}

/// Reads a string field, accepting numbers (phone numbers are often typed as such).
fn str_field(obj: &Map<String, Value>, name: &str) -> Option<String> {
    match obj.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
