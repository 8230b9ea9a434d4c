//! End-to-end navigation over the fixture documents

mod common;

use common::{fixture_engine, FixtureFiles, INFO_JSON, MENU_JSON};
use menucore::{ConfigError, MenuStore, NavPath, Outcome};
use pretty_assertions::assert_eq;

fn callbacks(outcome: &Outcome) -> Vec<String> {
    outcome
        .plan()
        .map(|plan| plan.markup.buttons().map(|b| b.callback.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_load_from_files() {
    let files = FixtureFiles::new(MENU_JSON, INFO_JSON).unwrap();
    let store = MenuStore::load(files.menu.path(), files.info.path()).unwrap();
    assert_eq!(store.root().children.len(), 6);
    assert_eq!(store.about(), Some("A university chat bot."));
}

#[test]
fn test_load_missing_file_is_config_error() {
    let files = FixtureFiles::new(MENU_JSON, INFO_JSON).unwrap();
    let missing = files.menu.path().with_extension("missing");
    let err = MenuStore::load(files.menu.path(), &missing).unwrap_err();
    assert!(matches!(err, ConfigError::Io { document: "info", .. }));
}

#[test]
fn test_load_rejects_duplicate_siblings() {
    let menu = r#"{"children": [{"key": "faq"}, {"key": "faq", "text": "again"}]}"#;
    let files = FixtureFiles::new(menu, "{}").unwrap();
    let err = MenuStore::load(files.menu.path(), files.info.path()).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateKey { .. }));
    assert_eq!(err.to_string(), "duplicate key 'faq' under '/'");
}

#[test]
fn test_every_button_token_resolves() {
    let engine = fixture_engine();
    let mut pending = vec![NavPath::root().encode()];
    let mut visited = 0;
    while let Some(token) = pending.pop() {
        let outcome = engine.handle(&token);
        assert!(outcome.plan().is_some(), "token {token} did not render");
        visited += 1;
        let path = NavPath::decode(&token).unwrap();
        for callback in callbacks(&outcome) {
            // skip back buttons to avoid revisiting
            if NavPath::decode(&callback).unwrap().len() > path.len() {
                pending.push(callback);
            }
        }
    }
    assert_eq!(visited, engine.store().summary().nodes);
}

#[test]
fn test_drill_down_and_back() {
    let engine = fixture_engine();

    let admission = engine.handle("menu:admission");
    assert_eq!(admission.text(), "🎓 Admission");
    assert_eq!(
        callbacks(&admission),
        vec!["menu:admission/docs", "menu:admission/dates", "menu:admission/campus", "menu:"]
    );

    let docs = engine.handle("menu:admission/docs");
    assert_eq!(docs.text(), "Passport, diploma, 4 photos.");
    assert_eq!(callbacks(&docs), vec!["menu:admission"]);
}

#[test]
fn test_record_with_children_renders_content() {
    let outcome = fixture_engine().handle("menu:admission/campus");
    let plan = outcome.plan().unwrap();
    assert_eq!(plan.text, "Welcome to the campus.");
    assert_eq!(plan.images, vec!["north.jpg", "south.jpg"]);
    assert_eq!(
        callbacks(&outcome),
        vec!["menu:admission/campus/dorms", "menu:admission"]
    );
}

#[test]
fn test_gallery_without_text_uses_node_text() {
    let outcome = fixture_engine().handle("menu:gallery");
    let plan = outcome.plan().unwrap();
    assert_eq!(plan.text, "📷 Gallery");
    assert_eq!(plan.images.len(), 3);
}

#[test]
fn test_aggregate_views() {
    let engine = fixture_engine();
    assert_eq!(engine.handle("menu:faq").text(), "FAQ is empty.");
    assert_eq!(engine.handle("menu:consult").text(), "Contacts:\nPhone: +380 44 123 45 67\n");

    let news = engine.handle("menu:news");
    assert_eq!(
        news.text(),
        "2024-05-05 — Five\nNewest\n\n2024-05-04 — Four\nNewer\n\n2024-05-03 — Three\nNew"
    );
}

#[test]
fn test_leaf_without_info_falls_back_to_node_text() {
    assert_eq!(fixture_engine().handle("menu:empty").text(), "Nothing here");
}

#[test]
fn test_invalid_and_unresolved_tokens() {
    let engine = fixture_engine();
    assert_eq!(engine.handle("xyz:notmine"), Outcome::UnknownAction);
    assert_eq!(engine.handle("pv:set:1"), Outcome::UnknownAction);
    assert_eq!(engine.handle("menu:nonexistent"), Outcome::NotFound);
    assert_eq!(engine.handle("menu:admission/docs/extra"), Outcome::NotFound);
    assert_eq!(engine.handle("menu:admission//docs"), Outcome::NotFound);
}

#[test]
fn test_leading_delimiter_is_tolerated() {
    let engine = fixture_engine();
    assert_eq!(engine.handle("menu:/admission"), engine.handle("menu:admission"));
}
