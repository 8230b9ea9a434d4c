//! Navigation engine: token → path → node → render plan

use std::sync::Arc;

use crate::markup::{build_markup, ButtonLayout};
use crate::model::MenuNode;
use crate::path::NavPath;
use crate::render::{self, RenderPlan};
use crate::store::MenuStore;
use crate::texts;

/// Result of handling one callback token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(RenderPlan),
    /// The token is not a menu token
    UnknownAction,
    /// The token decoded but names no node
    NotFound,
}

impl Outcome {
    pub fn plan(&self) -> Option<&RenderPlan> {
        match self {
            Self::Render(plan) => Some(plan),
            _ => None,
        }
    }

    /// Text shown to the user for this outcome
    pub fn text(&self) -> &str {
        match self {
            Self::Render(plan) => &plan.text,
            Self::UnknownAction => texts::UNKNOWN_ACTION,
            Self::NotFound => texts::ITEM_NOT_FOUND,
        }
    }
}

/// Stateless over a shared, read-only [`MenuStore`]; clone freely.
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    store: Arc<MenuStore>,
}

impl NavigationEngine {
    pub fn new(store: Arc<MenuStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn build_markup(&self, node: &MenuNode, path: &NavPath) -> ButtonLayout {
        build_markup(node, path)
    }

    pub fn render(&self, node: &MenuNode, path: &NavPath) -> RenderPlan {
        render::resolve(node, path, self.store.info())
    }

    pub fn handle(&self, token: &str) -> Outcome {
        let path = match NavPath::decode(token) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("Ignoring callback: {}", e);
                return Outcome::UnknownAction;
            }
        };
        match self.store.resolve(&path) {
            Ok(node) => {
                log::debug!("Navigating to {}", path);
                Outcome::Render(self.render(node, &path))
            }
            Err(e) => {
                log::debug!("Callback {} unresolved: {}", token, e);
                Outcome::NotFound
            }
        }
    }

    /// Root menu shown for the start command.
    pub fn start_plan(&self, welcome: Option<&str>) -> RenderPlan {
        let text = welcome.filter(|w| !w.is_empty()).unwrap_or(texts::SELECT_ITEM);
        RenderPlan::text(text, build_markup(self.store.root(), &NavPath::root()))
    }

    pub fn about_text(&self) -> &str {
        self.store.about().unwrap_or(texts::ABOUT_UNAVAILABLE)
    }
}
