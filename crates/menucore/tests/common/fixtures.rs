//! Menu and info documents shaped like a real deployment

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use indoc::indoc;
use menucore::{MenuStore, NavigationEngine};
use tempfile::NamedTempFile;

pub const MENU_JSON: &str = indoc! {r#"
    {
        "text": "Main menu",
        "items": [
            {"key": "admission", "text": "🎓 Admission", "children": [
                {"key": "docs", "text": "Documents"},
                {"key": "dates", "text": "Key dates"},
                {"key": "campus", "text": "Campus tour", "children": [
                    {"key": "dorms", "text": "Dormitories"}
                ]}
            ]},
            {"key": "faq", "text": "❓ FAQ"},
            {"key": "news", "text": "📰 News"},
            {"key": "consult", "text": "💬 Consultant"},
            {"key": "gallery", "text": "📷 Gallery"},
            {"key": "empty", "text": "Nothing here"}
        ]
    }
"#};

pub const INFO_JSON: &str = indoc! {r#"
    {
        "about": "A university chat bot.",
        "docs": "Passport, diploma, 4 photos.",
        "dates": {"text": "Applications open on July 1.", "image": "dates.png"},
        "campus": {"text": "Welcome to the campus.", "images": ["north.jpg", "south.jpg"]},
        "gallery": {"images": ["g1.jpg", "g2.jpg", "g3.jpg"]},
        "contacts": {"phone": "+380 44 123 45 67"},
        "faq": [],
        "news": [
            {"date": "2024-05-05", "title": "Five", "text": "Newest"},
            {"date": "2024-05-04", "title": "Four", "text": "Newer"},
            {"date": "2024-05-03", "title": "Three", "text": "New"},
            {"date": "2024-05-02", "title": "Two", "text": "Old"},
            {"date": "2024-05-01", "title": "One", "text": "Oldest"}
        ]
    }
"#};

pub fn fixture_store() -> MenuStore {
    MenuStore::from_json(MENU_JSON, INFO_JSON).expect("fixture documents are valid")
}

pub fn fixture_engine() -> NavigationEngine {
    NavigationEngine::new(Arc::new(fixture_store()))
}

/// Both documents written to temporary files
pub struct FixtureFiles {
    pub menu: NamedTempFile,
    pub info: NamedTempFile,
}

impl FixtureFiles {
    pub fn new(menu: &str, info: &str) -> std::io::Result<Self> {
        Ok(Self {
            menu: write_temp(menu)?,
            info: write_temp(info)?,
        })
    }
}

fn write_temp(contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
