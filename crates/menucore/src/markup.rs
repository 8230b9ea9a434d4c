//! Button layout for a menu node
//!
//! Transport-neutral: the Telegram layer maps a [`ButtonLayout`] onto an
//! inline keyboard one row per button.

use crate::model::MenuNode;
use crate::path::NavPath;
use crate::texts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub callback: String,
}

impl Button {
    pub fn new(label: impl Into<String>, target: &NavPath) -> Self {
        Self {
            label: label.into(),
            callback: target.encode(),
        }
    }
}

/// Rows of buttons, one button per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonLayout {
    pub rows: Vec<Vec<Button>>,
}

impl ButtonLayout {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    fn push(&mut self, button: Button) {
        self.rows.push(vec![button]);
    }
}

/// One button per child in document order, then a back button unless at the root.
pub fn build_markup(node: &MenuNode, path: &NavPath) -> ButtonLayout {
    let mut layout = ButtonLayout::default();
    for child in &node.children {
        let Some(key) = child.key() else { continue };
        layout.push(Button::new(child.label(), &path.child(key)));
    }
    if let Some(parent) = path.parent() {
        layout.push(Button::new(texts::BACK, &parent));
    }
    layout
}
