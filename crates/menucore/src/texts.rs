//! User-facing strings produced by the engine

pub const BACK: &str = "⬅️ Back";

pub const SELECT_ITEM: &str = "Select a menu item:";
pub const NO_INFORMATION: &str = "No information available.";
pub const INFORMATION_UNAVAILABLE: &str = "Information unavailable.";

pub const UNKNOWN_ACTION: &str = "Unknown action.";
pub const ITEM_NOT_FOUND: &str = "Item not found.";

pub const CONTACT_CONSULTANT: &str = "Contact the consultant:";
pub const CONTACTS_HEADER: &str = "Contacts:";
pub const PHONE: &str = "Phone:";
pub const EMAIL: &str = "Email:";

pub const FAQ_EMPTY: &str = "FAQ is empty.";
pub const NO_NEWS: &str = "No news.";

pub const ABOUT_UNAVAILABLE: &str = "About information is unavailable.";
