use menucore::ButtonLayout;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Maps a layout onto an inline keyboard, keeping rows as they are.
pub fn inline_keyboard(layout: &ButtonLayout) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(layout.rows.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.callback.clone()))
            .collect::<Vec<_>>()
    }))
}

pub fn keyboard_stats(keyboard: &InlineKeyboardMarkup) -> (usize, usize) {
    let rows = keyboard.inline_keyboard.len();
    let buttons = keyboard.inline_keyboard.iter().map(|row| row.len()).sum();
    (rows, buttons)
}
