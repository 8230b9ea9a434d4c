//! Content resolution for a menu node
//!
//! Cases are tried in order and the first match wins:
//! 1. `consult` — consultant username, or the contact list
//! 2. `faq` — every question/answer pair
//! 3. `news` — the first [`NEWS_LIMIT`] entries
//! 4. a structured info record (text + images), even when the node has children
//! 5. a node with children — its own text as a listing header
//! 6. a plain info string
//! 7. the node text, or a fallback

use itertools::Itertools;

use crate::markup::{build_markup, ButtonLayout};
use crate::model::{non_empty, ContentEntry, ContentRecord, InfoTable, MenuNode, FAQ_KEY, NEWS_KEY};
use crate::path::NavPath;
use crate::texts;

/// How many news entries are shown
pub const NEWS_LIMIT: usize = 3;

const CONSULT_KEY: &str = "consult";

/// Everything the messenger needs to show one node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub text: String,
    /// Sent as separate messages, in order, before the text is updated
    pub images: Vec<String>,
    /// Attached to the text message only
    pub markup: ButtonLayout,
}

impl RenderPlan {
    pub fn text(text: impl Into<String>, markup: ButtonLayout) -> Self {
        Self {
            text: text.into(),
            images: Vec::new(),
            markup,
        }
    }
}

pub fn resolve(node: &MenuNode, path: &NavPath, info: &InfoTable) -> RenderPlan {
    let markup = build_markup(node, path);
    let entry = node.key().and_then(|key| info.entry(key));

    match node.key() {
        Some(CONSULT_KEY) => return RenderPlan::text(consult_text(info), markup),
        Some(FAQ_KEY) => return RenderPlan::text(faq_text(info), markup),
        Some(NEWS_KEY) => return RenderPlan::text(news_text(info), markup),
        _ => {}
    }

    match entry {
        Some(ContentEntry::Record(record)) => record_plan(record, node, markup),
        _ if !node.is_leaf() => {
            let text = node.text().or(node.title()).unwrap_or(texts::SELECT_ITEM);
            RenderPlan::text(text, markup)
        }
        Some(ContentEntry::Plain(text)) => RenderPlan::text(text, markup),
        None => RenderPlan::text(node.text().unwrap_or(texts::INFORMATION_UNAVAILABLE), markup),
    }
}

fn record_plan(record: ContentRecord, node: &MenuNode, markup: ButtonLayout) -> RenderPlan {
    let text = non_empty(record.text.as_deref())
        .or(node.text())
        .unwrap_or(texts::NO_INFORMATION)
        .to_owned();
    // `image` wins when a record carries both
    let images = match record.image {
        Some(image) => vec![image],
        None => record.images,
    };
    RenderPlan { text, images, markup }
}

fn consult_text(info: &InfoTable) -> String {
    let contacts = info.contacts();
    if let Some(username) = contacts.consultant_username {
        return format!("{} {}", texts::CONTACT_CONSULTANT, username);
    }
    let mut text = format!("{}\n", texts::CONTACTS_HEADER);
    if let Some(phone) = contacts.phone {
        text.push_str(&format!("{} {}\n", texts::PHONE, phone));
    }
    if let Some(email) = contacts.email {
        text.push_str(&format!("{} {}\n", texts::EMAIL, email));
    }
    text
}

fn faq_text(info: &InfoTable) -> String {
    let faq = info.faq();
    if faq.is_empty() {
        return texts::FAQ_EMPTY.to_owned();
    }
    faq.iter().map(|f| format!("Q: {}\nA: {}", f.q, f.a)).join("\n\n")
}

fn news_text(info: &InfoTable) -> String {
    let news = info.news();
    if news.is_empty() {
        return texts::NO_NEWS.to_owned();
    }
    news.iter()
        .take(NEWS_LIMIT)
        .map(|n| format!("{} — {}\n{}", n.date, n.title, n.text))
        .join("\n\n")
}
